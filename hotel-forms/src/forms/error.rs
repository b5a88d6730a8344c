//! Validation error types
//!
//! Every failure is a user-input problem that is shown inline next to the
//! field. None of them are system faults.

use thiserror::Error;

/// Why a single field was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Required field left empty or checkbox left unchecked
    #[error("{0}")]
    MissingValue(String),

    /// E-mail or name pattern mismatch
    #[error("{0}")]
    InvalidFormat(String),

    /// Non-numeric content where a numeric bound applies
    #[error("{0}")]
    InvalidNumber(String),

    /// Numeric value below `min` or above `max`
    #[error("{0}")]
    OutOfRange(String),
}

impl FieldError {
    /// The message shown to the user
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::MissingValue(message)
            | Self::InvalidFormat(message)
            | Self::InvalidNumber(message)
            | Self::OutOfRange(message) => message,
        }
    }

    /// Stable code for programmatic handling
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingValue(_) => "required",
            Self::InvalidFormat(_) => "format",
            Self::InvalidNumber(_) => "number",
            Self::OutOfRange(_) => "range",
        }
    }
}

/// Result of one validation pass over a form
///
/// Holds one entry per evaluated field, in descriptor order. Fields whose
/// elements are missing from the page are not evaluated and have no entry.
///
/// # Examples
///
/// ```rust
/// use hotel_forms::forms::{FieldError, ValidationOutcome};
///
/// let mut outcome = ValidationOutcome::new();
/// outcome.record("name", Some(FieldError::MissingValue("Моля въведете вашето име.".into())));
/// outcome.record("email", None);
///
/// assert!(outcome.has_errors());
/// assert_eq!(outcome.error_count(), 1);
/// assert!(outcome.error_for("email").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    fields: Vec<(String, Option<FieldError>)>,
}

impl ValidationOutcome {
    /// Create an empty outcome
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the result for a field
    pub fn record(&mut self, field: impl Into<String>, error: Option<FieldError>) {
        self.fields.push((field.into(), error));
    }

    /// Check if any field failed
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|(_, error)| error.is_some())
    }

    /// Get the error for a field, if it failed
    #[must_use]
    pub fn error_for(&self, field: &str) -> Option<&FieldError> {
        self.fields
            .iter()
            .find(|(id, _)| id == field)
            .and_then(|(_, error)| error.as_ref())
    }

    /// Iterate over failing fields in evaluation order
    pub fn errors(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.fields
            .iter()
            .filter_map(|(id, error)| error.as_ref().map(|error| (id.as_str(), error)))
    }

    /// Number of failing fields
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Ids of every evaluated field, in evaluation order
    pub fn evaluated_fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(id, _)| id.as_str())
    }
}
