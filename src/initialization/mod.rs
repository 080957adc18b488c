//! Application initialization.
//!
//! Sets up process-wide facilities before a run starts. The conversion itself
//! needs no shared resources, so this is only the logger.

mod logger;

pub use logger::init_logger_with;
