//! hotel-forms CLI library

#![forbid(unsafe_code)]

pub mod commands;

pub use commands::{ArrivalWindowCommand, FormsCommand, ValidateCommand};

use anyhow::Result;
use hotel_forms::config::SiteConfig;

/// Load the configuration from `path`, or from the standard locations
///
/// # Errors
///
/// Returns an error if the configuration cannot be read or fails validation.
pub fn load_config(path: Option<&str>) -> Result<SiteConfig> {
    match path {
        Some(path) => SiteConfig::load_from(path),
        None => SiteConfig::load_for_service("cli"),
    }
}
