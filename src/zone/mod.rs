//! Zone derivation and tracking.
//!
//! Records are grouped into managed zones named after the last two labels of
//! their host. The rule is purely positional: no Public Suffix List lookup, no
//! case folding, no IDNA.
//!
//! Key items:
//! - `derive_zone()` - maps a host to its zone (`"api.example.com"` -> `"example.com."`)
//! - `ZoneRegistry` - remembers which zones have already been declared

mod registry;

pub use registry::ZoneRegistry;

use crate::error_handling::ZoneError;

/// Minimum number of labels a relative host needs before a zone can be taken
/// from it.
const MIN_HOST_LABELS: usize = 3;

/// Derives the owning zone of a host.
///
/// The host is split on `.` and the zone is the third-to-last and
/// second-to-last parts of that split, joined by a dot, with a trailing dot
/// appended. An absolute host (`"example.com."`) splits with a final empty
/// part, so it only needs two real labels. A relative host
/// (`"api.example.com"`) is read as if it were absolute and needs three, so
/// both forms yield the last two real labels.
///
/// # Errors
///
/// Returns `ZoneError::TooFewLabels` when the host has too few labels
/// (`"example.com"`, `"com."`, `"localhost"`, `""`). Callers treat this as fatal.
///
/// ```
/// assert_eq!(dns2tf::derive_zone("www.api.example.com").unwrap(), "example.com.");
/// assert_eq!(dns2tf::derive_zone("example.com.").unwrap(), "example.com.");
/// assert!(dns2tf::derive_zone("example.com").is_err());
/// ```
pub fn derive_zone(host: &str) -> Result<String, ZoneError> {
    let labels: Vec<&str> = host.split('.').collect();
    let absolute = labels.len() > 1 && labels.last() == Some(&"");

    // Positional rule on the raw split: a relative host gets an implicit root
    let (parts, required) = if absolute {
        (labels.len(), 2)
    } else {
        (labels.len() + 1, MIN_HOST_LABELS)
    };
    let real_labels = if absolute { labels.len() - 1 } else { labels.len() };
    if real_labels < required {
        return Err(ZoneError::TooFewLabels {
            host: host.to_string(),
            labels: real_labels,
        });
    }

    let second_level = labels[parts - 3];
    let top_level = labels[parts - 2];
    Ok(format!("{}.{}.", second_level, top_level))
}
