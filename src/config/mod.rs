//! Application configuration and constants.
//!
//! This module provides:
//! - Default paths and fixed output text
//! - CLI option types and parsing

mod constants;
mod types;

pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
