//! Rendering of zone and record declarations.
//!
//! The pipeline only talks to the `Render` trait. `TemplateRenderer` is the
//! stock implementation: two placeholder templates, either the ones compiled
//! into the binary or replacements loaded from disk.

mod template;

pub use template::Template;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::error_handling::{RenderError, TemplateError};
use crate::models::Entry;

/// Built-in managed zone template.
pub const ZONE_TEMPLATE: &str = include_str!("../../templates/zone.tf.tmpl");

/// Built-in record set template.
pub const RECORD_TEMPLATE: &str = include_str!("../../templates/record.tf.tmpl");

/// Produces the text for zone and record declarations.
pub trait Render {
    /// Writes the declaration of `entry.zone`. Called once per distinct zone,
    /// with the first entry that belongs to it.
    fn render_zone(&self, entry: &Entry, out: &mut dyn Write) -> Result<(), RenderError>;

    /// Writes the declaration of one record.
    fn render_record(&self, entry: &Entry, out: &mut dyn Write) -> Result<(), RenderError>;
}

/// Template-backed renderer.
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    zone: Template,
    record: Template,
}

impl TemplateRenderer {
    /// Renderer using the templates compiled into the binary.
    pub fn builtin() -> Result<Self, TemplateError> {
        Self::from_sources(ZONE_TEMPLATE, RECORD_TEMPLATE)
    }

    /// Parses both templates and checks every placeholder against
    /// `Entry::FIELDS`, so a bad template fails before any output is written.
    pub fn from_sources(zone: &str, record: &str) -> Result<Self, TemplateError> {
        let zone = Template::parse("zone", zone)?;
        let record = Template::parse("record", record)?;
        zone.check_fields(Entry::FIELDS)?;
        record.check_fields(Entry::FIELDS)?;
        Ok(Self { zone, record })
    }

    /// Loads templates from disk, falling back to the built-in one for any
    /// path that is `None`.
    pub fn from_files(zone: Option<&Path>, record: Option<&Path>) -> Result<Self> {
        let zone_source = read_template(zone, ZONE_TEMPLATE)?;
        let record_source = read_template(record, RECORD_TEMPLATE)?;
        Self::from_sources(&zone_source, &record_source).context("Invalid template")
    }
}

fn read_template(path: Option<&Path>, builtin: &str) -> Result<String> {
    match path {
        Some(path) => {
            log::debug!("Loading template from {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read template file: {}", path.display()))
        }
        None => Ok(builtin.to_string()),
    }
}

impl Render for TemplateRenderer {
    fn render_zone(&self, entry: &Entry, out: &mut dyn Write) -> Result<(), RenderError> {
        self.zone.render(entry, out)
    }

    fn render_record(&self, entry: &Entry, out: &mut dyn Write) -> Result<(), RenderError> {
        self.record.render(entry, out)
    }
}
