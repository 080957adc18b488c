//! dns2tf library: converts a CSV list of DNS records into Terraform
//! declarations for Google Cloud DNS.
//!
//! Each input row (`host,ttl,type,value`) becomes a `google_dns_record_set`.
//! Rows are grouped into `google_dns_managed_zone`s named after the last two
//! labels of their host; each zone is declared once, just before its first
//! record.
//!
//! # Example
//!
//! ```
//! use dns2tf::{convert, TemplateRenderer};
//!
//! let csv = "host,ttl,type,value\napi.example.com,,A,10.0.0.1\n";
//! let renderer = TemplateRenderer::builtin().unwrap();
//! let mut out = Vec::new();
//!
//! let counts = convert(csv.as_bytes(), &mut out, &renderer).unwrap();
//! assert_eq!((counts.zones, counts.entries), (1, 1));
//! ```
//!
//! For file-to-file conversion with the binary's defaults, see
//! [`run_conversion`].

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
mod fingerprint;
pub mod initialization;
pub mod models;
pub mod render;
mod run;
mod slug;
mod zone;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use fingerprint::fingerprint;
pub use models::{DnsRecord, Entry};
pub use render::{Render, Template, TemplateRenderer};
pub use run::{convert, run_conversion, ConversionCounts, ConversionReport};
pub use slug::slugify;
pub use zone::{derive_zone, ZoneRegistry};
