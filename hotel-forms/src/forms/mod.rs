//! Declarative form validation
//!
//! A form is described by an ordered table of [`FieldDescriptor`]s. Each
//! descriptor compiles into a short list of [`Rule`]s; on submit every field
//! is checked independently and the first failing rule of a field wins.
//!
//! # Examples
//!
//! ```rust
//! use hotel_forms::forms::{presets, FieldValue, FieldValues};
//!
//! let values = FieldValues::new()
//!     .with("nights", FieldValue::text("0"))
//!     .with("children", FieldValue::text(""));
//!
//! let outcome = presets::reservation_form().evaluate(&values);
//!
//! assert_eq!(
//!     outcome.error_for("nights").map(|e| e.message()),
//!     Some("Броят нощувки трябва да е поне 1."),
//! );
//! assert!(outcome.error_for("children").is_none());
//! ```

pub mod error;
pub mod field;
pub mod handler;
pub mod predicates;
pub mod presets;
pub mod rules;
pub mod schema;

pub use error::{FieldError, ValidationOutcome};
pub use field::{FieldDescriptor, FieldType, FieldValue, NAME_FIELD_IDS};
pub use handler::FormValidator;
pub use predicates::{is_valid_email, is_valid_name};
pub use rules::{
    evaluate_field, evaluate_rules, Rule, EMAIL_FORMAT_MESSAGE, INVALID_NUMBER_MESSAGE,
    NAME_FORMAT_MESSAGE,
};
pub use schema::{FieldSource, FieldValues, FieldValuesError, FormSchema, SchemaError};
