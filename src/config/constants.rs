//! Configuration constants.
//!
//! Default paths and the fixed text written at the top of every generated file.

/// Input file read when no path is given on the command line.
pub const DEFAULT_INPUT_PATH: &str = "dns.csv";

/// Output file written when `--output` is not given.
pub const DEFAULT_OUTPUT_PATH: &str = "12-dns.tf";

/// TTL stored for rows whose TTL column is empty.
pub const DEFAULT_TTL: &str = "300";

/// Number of positional columns in an input row: host, ttl, type, value.
pub const RECORD_FIELD_COUNT: usize = 4;

/// Hex digits of the record fingerprint used in resource labels.
pub const SHORT_FINGERPRINT_LEN: usize = 8;

/// Provider documentation linked from the generated file header.
pub const DOCUMENTATION_URL: &str =
    "https://registry.terraform.io/providers/hashicorp/google/latest/docs/resources/dns_managed_zone";

/// Header block written once, before any zone or record declaration.
///
/// Kept as a literal so the generated file is byte-identical across runs.
pub const OUTPUT_HEADER: &str = concat!(
    "# DON'T CHANGE THIS FILE MANUALLY. IT IS GENERATED BY THE DNS2TF TOOL.\n",
    "\n",
    "# https://registry.terraform.io/providers/hashicorp/google/latest/docs/resources/dns_managed_zone\n",
);
