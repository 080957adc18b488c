//! Error handling.
//!
//! Errors are split by the stage that raises them:
//! - **Initialization**: logger setup
//! - **Zone**: host with too few labels to derive a zone
//! - **Template**: malformed template source or unknown field, caught at load time
//! - **Render**: field lookup or write failure while rendering
//! - **Convert**: any of the above surfaced by the pipeline, tagged with the row
//!
//! Every one of them is fatal. Row read failures are not errors: the pipeline
//! treats them as end of input.

mod types;

pub use types::{ConvertError, InitializationError, RenderError, TemplateError, ZoneError};
