//! Form schemas and value sources
//!
//! A [`FormSchema`] is an ordered descriptor table plus the message shown on
//! success. Evaluation against a [`FieldSource`] is pure: it reads values and
//! returns a [`ValidationOutcome`] without touching the page.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error::ValidationOutcome;
use super::field::{FieldDescriptor, FieldValue};
use super::rules::evaluate_field;

/// Problems found while building a schema
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// The form id is blank
    #[error("form id must not be empty")]
    EmptyFormId,

    /// Two descriptors target the same element
    #[error("form '{form}' declares field '{field}' more than once")]
    DuplicateField {
        /// Form id
        form: String,
        /// Repeated field id
        field: String,
    },

    /// A descriptor has a blank id
    #[error("form '{form}' has a field with an empty id")]
    EmptyFieldId {
        /// Form id
        form: String,
    },

    /// `min` is greater than `max`
    #[error("field '{field}' has min {min} greater than max {max}")]
    InvertedRange {
        /// Field id
        field: String,
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },
}

/// Ordered validation table for one form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFormSchema", into = "RawFormSchema")]
pub struct FormSchema {
    id: String,
    fields: Vec<FieldDescriptor>,
    success_message: String,
}

#[derive(Serialize, Deserialize)]
struct RawFormSchema {
    id: String,
    success_message: String,
    #[serde(default)]
    fields: Vec<FieldDescriptor>,
}

impl TryFrom<RawFormSchema> for FormSchema {
    type Error = SchemaError;

    fn try_from(raw: RawFormSchema) -> Result<Self, Self::Error> {
        Self::new(raw.id, raw.fields, raw.success_message)
    }
}

impl From<FormSchema> for RawFormSchema {
    fn from(schema: FormSchema) -> Self {
        Self {
            id: schema.id,
            success_message: schema.success_message,
            fields: schema.fields,
        }
    }
}

impl FormSchema {
    /// Build a schema, rejecting tables that declare a field twice
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] if the form id or a field id is empty, a field
    /// id repeats, or a field's `min` exceeds its `max`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hotel_forms::forms::{FieldDescriptor, FormSchema, SchemaError};
    ///
    /// let result = FormSchema::new(
    ///     "booking",
    ///     vec![
    ///         FieldDescriptor::text("nights", "required").range(1.0, 30.0),
    ///         FieldDescriptor::text("nights", "required").min(1.0),
    ///     ],
    ///     "done",
    /// );
    /// assert!(matches!(result, Err(SchemaError::DuplicateField { .. })));
    /// ```
    pub fn new(
        id: impl Into<String>,
        fields: Vec<FieldDescriptor>,
        success_message: impl Into<String>,
    ) -> Result<Self, SchemaError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(SchemaError::EmptyFormId);
        }

        let mut seen = HashSet::with_capacity(fields.len());
        for field in &fields {
            if field.id.trim().is_empty() {
                return Err(SchemaError::EmptyFieldId { form: id });
            }
            if !seen.insert(field.id.as_str()) {
                return Err(SchemaError::DuplicateField {
                    form: id.clone(),
                    field: field.id.clone(),
                });
            }
            if let (Some(min), Some(max)) = (field.min, field.max) {
                if min > max {
                    return Err(SchemaError::InvertedRange {
                        field: field.id.clone(),
                        min,
                        max,
                    });
                }
            }
        }

        Ok(Self {
            id,
            fields,
            success_message: success_message.into(),
        })
    }

    /// Form element id
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Descriptors in evaluation order
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Look up a descriptor by field id
    #[must_use]
    pub fn field(&self, id: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.id == id)
    }

    /// Confirmation shown after a successful submit
    #[must_use]
    pub fn success_message(&self) -> &str {
        &self.success_message
    }

    /// Evaluate every field independently, in descriptor order
    ///
    /// Fields the source has no value for are skipped. Values are read
    /// according to each field's type, see [`FieldValue::for_type`].
    #[must_use]
    pub fn evaluate(&self, source: &impl FieldSource) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::new();
        for field in &self.fields {
            match source.value(&field.id) {
                Some(value) => {
                    let value = value.for_type(field.field_type);
                    outcome.record(field.id.clone(), evaluate_field(field, &value));
                }
                None => tracing::debug!(form = %self.id, field = %field.id, "no value, skipping"),
            }
        }
        outcome
    }
}

/// Anything that can supply current field values by id
pub trait FieldSource {
    /// Current value of a field, or `None` if the field is absent
    fn value(&self, id: &str) -> Option<FieldValue>;
}

/// Field values gathered outside a page, e.g. from a JSON document
///
/// # Examples
///
/// ```rust
/// use hotel_forms::forms::{FieldSource, FieldValue, FieldValues};
///
/// let values = FieldValues::new()
///     .with("name", FieldValue::text("Ivan Ivanov"))
///     .with("privacy", FieldValue::Checked(true));
///
/// assert_eq!(values.value("privacy"), Some(FieldValue::Checked(true)));
/// assert_eq!(values.value("email"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: HashMap<String, FieldValue>,
}

/// Reasons a JSON document cannot be read as field values
#[derive(Debug, Error)]
pub enum FieldValuesError {
    /// Not valid JSON
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Top level is not an object
    #[error("expected a JSON object of field values")]
    NotAnObject,

    /// A value is neither text, number, boolean nor null
    #[error("field '{0}' must be a string, number, boolean or null")]
    UnsupportedValue(String),
}

impl FieldValues {
    /// Create an empty set of values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value
    #[must_use]
    pub fn with(mut self, id: impl Into<String>, value: FieldValue) -> Self {
        self.insert(id, value);
        self
    }

    /// Insert or replace a value
    pub fn insert(&mut self, id: impl Into<String>, value: FieldValue) {
        self.values.insert(id.into(), value);
    }

    /// Parse a JSON object
    ///
    /// Strings and numbers become text values, booleans become checkbox
    /// states and `null` becomes empty text.
    ///
    /// # Errors
    ///
    /// Returns [`FieldValuesError`] if the input is not a JSON object of
    /// scalar values.
    pub fn from_json(json: &str) -> Result<Self, FieldValuesError> {
        let document: serde_json::Value = serde_json::from_str(json)?;
        let serde_json::Value::Object(map) = document else {
            return Err(FieldValuesError::NotAnObject);
        };

        let mut values = Self::new();
        for (id, value) in map {
            let value = match value {
                serde_json::Value::String(text) => FieldValue::text(text),
                serde_json::Value::Number(number) => FieldValue::text(number.to_string()),
                serde_json::Value::Bool(checked) => FieldValue::Checked(checked),
                serde_json::Value::Null => FieldValue::text(""),
                serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                    return Err(FieldValuesError::UnsupportedValue(id));
                }
            };
            values.insert(id, value);
        }
        Ok(values)
    }
}

impl FieldSource for FieldValues {
    fn value(&self, id: &str) -> Option<FieldValue> {
        self.values.get(id).cloned()
    }
}
