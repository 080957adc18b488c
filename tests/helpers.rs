// Shared test helpers for file-based conversion tests.
//
// Each helper works inside a caller-owned TempDir so tests never touch the
// working directory.

use std::path::{Path, PathBuf};

use dns2tf::{Config, LogFormat, LogLevel};

/// Input with two zones and three records, zone1.com. appearing twice.
#[allow(dead_code)] // Used by other test files
pub const TWO_ZONE_CSV: &str = "host,ttl,type,value\n\
a.zone1.com,300,A,10.0.0.1\n\
b.zone2.com,,CNAME,target.zone1.com.\n\
c.zone1.com,60,TXT,hello\n";

/// Writes `content` to `name` inside `dir` and returns the path.
#[allow(dead_code)] // Used by other test files
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}

/// Config reading `input` and writing `output.tf` inside `dir`.
#[allow(dead_code)] // Used by other test files
pub fn test_config(dir: &Path, input: &Path) -> Config {
    Config {
        input: input.to_path_buf(),
        output: dir.join("output.tf"),
        zone_template: None,
        record_template: None,
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
    }
}
