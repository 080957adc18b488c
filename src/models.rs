//! Record and entry types.
//!
//! A `DnsRecord` is one input row. An `Entry` is that row plus everything
//! derived from it, in the shape the templates see.

use csv::StringRecord;
use serde::Serialize;

use crate::config::{DEFAULT_TTL, RECORD_FIELD_COUNT, SHORT_FINGERPRINT_LEN};
use crate::error_handling::ZoneError;
use crate::fingerprint::fingerprint;
use crate::slug::slugify;
use crate::zone::derive_zone;

/// One DNS record as read from an input row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsRecord {
    /// Host name, e.g. `api.example.com`
    pub host: String,
    /// TTL as written in the input, `"300"` if the column was empty
    pub ttl: String,
    /// Record type, e.g. `A` or `CNAME`; not validated
    pub record_type: String,
    /// Record data, passed through unchanged
    pub value: String,
}

impl DnsRecord {
    /// Builds a record from the positional columns host, ttl, type, value.
    ///
    /// An empty TTL becomes `DEFAULT_TTL`; any other TTL, numeric or not, is
    /// kept verbatim. Columns past the fourth are ignored.
    ///
    /// Returns `None` when the row has fewer than four columns.
    pub fn from_row(row: &StringRecord) -> Option<Self> {
        if row.len() < RECORD_FIELD_COUNT {
            return None;
        }

        let ttl = match &row[1] {
            "" => DEFAULT_TTL.to_string(),
            ttl => ttl.to_string(),
        };

        Some(Self {
            host: row[0].to_string(),
            ttl,
            record_type: row[2].to_string(),
            value: row[3].to_string(),
        })
    }
}

/// A render-ready record with its derived zone metadata.
///
/// Serialises flat: the record's fields sit next to the derived ones, which
/// is how templates address them (`{{ host }}`, `{{ zone_slug }}`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// The input record
    #[serde(flatten)]
    pub record: DnsRecord,
    /// Host with a trailing dot
    pub fqdn: String,
    /// Value escaped for use inside an HCL string literal
    pub hcl_value: String,
    /// Host as a resource-name-safe slug
    pub host_slug: String,
    /// Owning zone, e.g. `example.com.`
    pub zone: String,
    /// Zone as a resource-name-safe slug
    pub zone_slug: String,
    /// SHA-256 of the record's fields, hex encoded
    pub fingerprint: String,
    /// First `SHORT_FINGERPRINT_LEN` hex digits of `fingerprint`
    pub short_fingerprint: String,
}

impl Entry {
    /// Field names a template may reference.
    pub const FIELDS: &'static [&'static str] = &[
        "host",
        "ttl",
        "record_type",
        "value",
        "fqdn",
        "hcl_value",
        "host_slug",
        "zone",
        "zone_slug",
        "fingerprint",
        "short_fingerprint",
    ];

    /// Derives slugs, zone and fingerprint for a record.
    ///
    /// # Errors
    ///
    /// Fails when the host has too few labels to derive a zone.
    pub fn new(record: DnsRecord) -> Result<Self, ZoneError> {
        let zone = derive_zone(&record.host)?;
        let fingerprint = fingerprint(&record);
        Ok(Self {
            fqdn: absolute_name(&record.host),
            hcl_value: hcl_escape(&record.value),
            host_slug: slugify(&record.host),
            zone_slug: slugify(&zone),
            short_fingerprint: fingerprint[..SHORT_FINGERPRINT_LEN].to_string(),
            fingerprint,
            zone,
            record,
        })
    }
}

/// Escapes text for a double-quoted HCL string.
///
/// Backslashes, quotes and control whitespace get backslash escapes; `${` and
/// `%{` are doubled so Terraform does not read them as interpolation or
/// template directives.
fn hcl_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '$' | '%' if chars.peek() == Some(&'{') => {
                out.push(c);
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}

/// The host with a trailing dot added if it has none.
fn absolute_name(host: &str) -> String {
    if host.ends_with('.') {
        host.to_string()
    } else {
        format!("{}.", host)
    }
}
