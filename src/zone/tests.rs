// Zone module tests.

use super::*;

#[test]
fn test_derive_zone_three_labels() {
    assert_eq!(derive_zone("api.example.com").unwrap(), "example.com.");
}

#[test]
fn test_derive_zone_four_labels() {
    assert_eq!(derive_zone("www.api.example.com").unwrap(), "example.com.");
}

#[test]
fn test_derive_zone_deep_subdomain() {
    assert_eq!(derive_zone("a.b.c.d.example.org").unwrap(), "example.org.");
}

#[test]
fn test_derive_zone_absolute_name() {
    // A trailing dot marks an absolute name and does not count as a label
    assert_eq!(derive_zone("api.example.com.").unwrap(), "example.com.");
}

#[test]
fn test_derive_zone_two_labels_fails() {
    let err = derive_zone("example.com").unwrap_err();
    assert_eq!(
        err,
        ZoneError::TooFewLabels {
            host: "example.com".to_string(),
            labels: 2,
        }
    );
}

#[test]
fn test_derive_zone_absolute_apex() {
    // "example.com." splits into ["example", "com", ""]
    assert_eq!(derive_zone("example.com.").unwrap(), "example.com.");
}

#[test]
fn test_derive_zone_absolute_single_label_fails() {
    assert_eq!(
        derive_zone("com.").unwrap_err(),
        ZoneError::TooFewLabels {
            host: "com.".to_string(),
            labels: 1,
        }
    );
    assert!(derive_zone(".").is_err());
}

#[test]
fn test_derive_zone_single_label_fails() {
    assert!(derive_zone("localhost").is_err());
}

#[test]
fn test_derive_zone_empty_host_fails() {
    assert!(derive_zone("").is_err());
}

#[test]
fn test_derive_zone_preserves_case() {
    // No normalization: the zone keeps the input's case
    assert_eq!(derive_zone("WWW.Example.COM").unwrap(), "Example.COM.");
}

#[test]
fn test_derive_zone_multi_part_suffix_is_positional() {
    // co.uk is not recognised as a public suffix; only the last two labels count
    assert_eq!(derive_zone("www.example.co.uk").unwrap(), "co.uk.");
}

#[test]
fn test_derive_zone_empty_inner_label() {
    // Empty labels in the middle are kept as-is
    assert_eq!(derive_zone("a..com").unwrap(), ".com.");
}

#[test]
fn test_registry_tracks_membership() {
    let mut zones = ZoneRegistry::new();
    assert!(zones.is_empty());
    assert!(!zones.contains("zone1.com."));

    zones.add("zone1.com.");
    assert!(zones.contains("zone1.com."));
    assert!(!zones.contains("zone2.com."));
    assert_eq!(zones.len(), 1);
}

#[test]
fn test_registry_add_is_idempotent() {
    let mut zones = ZoneRegistry::new();
    assert!(zones.add("zone1.com."));
    assert!(!zones.add("zone1.com."));
    assert_eq!(zones.len(), 1);
}

#[test]
fn test_registry_is_case_sensitive() {
    let mut zones = ZoneRegistry::new();
    zones.add("example.com.");
    assert!(!zones.contains("Example.com."));
}
