//! Record fingerprints.
//!
//! Each rendered record carries a SHA-256 digest of its input fields so a
//! generated block can be traced back to the row it came from. The digest is
//! never read back or used as a key.
//!
//! The hashed text is built from the four input fields only, in a fixed order,
//! each written as `name:<byte length>:<value>;`. The length prefix keeps
//! distinct field tuples from producing the same text even when a value
//! contains the separators.

use std::fmt::Write;

use ring::digest;

use crate::models::DnsRecord;

/// Computes the fingerprint of a record as 64 lowercase hex digits.
///
/// Depends only on host, TTL, record type and value (after TTL defaulting),
/// never on derived fields such as the zone or slugs.
pub fn fingerprint(record: &DnsRecord) -> String {
    let mut ctx = digest::Context::new(&digest::SHA256);
    for (name, value) in canonical_fields(record) {
        ctx.update(name.as_bytes());
        ctx.update(b":");
        ctx.update(value.len().to_string().as_bytes());
        ctx.update(b":");
        ctx.update(value.as_bytes());
        ctx.update(b";");
    }
    to_hex(ctx.finish().as_ref())
}

fn canonical_fields(record: &DnsRecord) -> [(&'static str, &str); 4] {
    [
        ("host", record.host.as_str()),
        ("ttl", record.ttl.as_str()),
        ("type", record.record_type.as_str()),
        ("value", record.value.as_str()),
    ]
}

fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        // Writing into a String cannot fail
        let _ = write!(out, "{:02x}", byte);
    }
    out
}
