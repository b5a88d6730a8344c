//! Error types and error handling
//!
//! Field-level problems are [`FieldError`](crate::forms::FieldError)s and are
//! shown to the visitor. This type covers setup problems: configuration,
//! malformed schemas, unreadable inputs.

use thiserror::Error;

use crate::forms::{FieldValuesError, SchemaError};
use crate::site::fragments::FragmentError;

/// Crate-level error type
#[derive(Debug, Error)]
pub enum HotelFormsError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration values out of bounds
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] validator::ValidationErrors),

    /// Malformed form table
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// No form with this id is configured
    #[error("Unknown form: {0}")]
    UnknownForm(String),

    /// Field values could not be read
    #[error("Field values error: {0}")]
    FieldValues(#[from] FieldValuesError),

    /// HTML partial could not be loaded
    #[error("Fragment error: {0}")]
    Fragment(#[from] FragmentError),
}
