//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Zone derivation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZoneError {
    /// The host has fewer than three dot-separated labels, so no
    /// second-level and top-level pair can be taken from it.
    #[error("cannot derive a zone from '{host}': expected at least 3 labels, found {labels}")]
    TooFewLabels {
        /// Host as read from the input row
        host: String,
        /// Number of labels found
        labels: usize,
    },
}

/// Template source problems, detected when a template is loaded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A `{{` with no matching `}}`.
    #[error("template '{template}': unterminated placeholder at byte {offset}")]
    Unterminated {
        /// Template name
        template: String,
        /// Byte offset of the opening braces
        offset: usize,
    },

    /// A placeholder whose content is not a field name.
    #[error("template '{template}': invalid placeholder '{{{{{placeholder}}}}}' at byte {offset}")]
    InvalidPlaceholder {
        /// Template name
        template: String,
        /// Raw placeholder content
        placeholder: String,
        /// Byte offset of the opening braces
        offset: usize,
    },

    /// A placeholder naming a field entries do not have.
    #[error("template '{template}': unknown field '{field}'")]
    UnknownField {
        /// Template name
        template: String,
        /// Field name referenced by the template
        field: String,
    },
}

/// Failures while rendering a template against an entry.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The data passed to the template has no field with this name.
    #[error("template '{template}': field '{field}' is missing from the data")]
    MissingField {
        /// Template name
        template: String,
        /// Missing field
        field: String,
    },

    /// The field exists but is not a scalar that can be written as text.
    #[error("template '{template}': field '{field}' is not a scalar value")]
    UnsupportedValue {
        /// Template name
        template: String,
        /// Offending field
        field: String,
    },

    /// The data could not be serialised for lookup.
    #[error("template data serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing the rendered text failed.
    #[error("template output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of the conversion pipeline. All of them abort the run.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Writing the header or flushing the output failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    /// A row's host could not be mapped to a zone.
    #[error("row {row}: {source}")]
    Zone {
        /// 1-based data row number (header excluded)
        row: usize,
        /// Underlying derivation failure
        #[source]
        source: ZoneError,
    },

    /// Rendering a zone or record block failed.
    #[error("row {row}: {source}")]
    Render {
        /// 1-based data row number (header excluded)
        row: usize,
        /// Underlying render failure
        #[source]
        source: RenderError,
    },
}
