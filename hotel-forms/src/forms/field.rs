//! Field descriptors and value types
//!
//! A [`FieldDescriptor`] is one row of a form's rule table. Descriptors are
//! built once at page load and never mutated afterwards.

use serde::{Deserialize, Serialize};

use super::rules::Rule;

/// Field ids that additionally get the name-format check
pub const NAME_FIELD_IDS: [&str; 4] = ["name", "first-name", "middle-name", "last-name"];

/// How a field's value is read and which extra format check applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Free text input (default)
    #[default]
    Text,
    /// Text input checked against the e-mail format
    Email,
    /// Checkbox, read as its checked state
    Checkbox,
}

impl FieldType {
    /// Get the tag used in configuration tables
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Checkbox => "checkbox",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current value of a form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Raw, untrimmed text content of an input
    Text {
        /// The value exactly as typed
        raw: String,
    },
    /// Checked state of a checkbox
    Checked(bool),
}

impl FieldValue {
    /// Create a text value
    #[must_use]
    pub fn text(raw: impl Into<String>) -> Self {
        Self::Text { raw: raw.into() }
    }

    /// The trimmed text, or `None` for checkboxes
    #[must_use]
    pub fn trimmed(&self) -> Option<&str> {
        match self {
            Self::Text { raw } => Some(raw.trim()),
            Self::Checked(_) => None,
        }
    }

    /// Empty string after trimming, or an unchecked checkbox
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text { raw } => raw.trim().is_empty(),
            Self::Checked(checked) => !checked,
        }
    }

    /// Read this value the way a field of `field_type` reads its element
    ///
    /// Checkboxes see text as checked unless it is blank or `false`; text
    /// and e-mail fields see a checked state as the text `true` or `false`.
    #[must_use]
    pub fn for_type(self, field_type: FieldType) -> Self {
        match (field_type, self) {
            (FieldType::Checkbox, Self::Text { raw }) => {
                let text = raw.trim();
                Self::Checked(!text.is_empty() && !text.eq_ignore_ascii_case("false"))
            }
            (FieldType::Text | FieldType::Email, Self::Checked(checked)) => {
                Self::text(checked.to_string())
            }
            (_, value) => value,
        }
    }
}

/// One field's validation configuration
///
/// # Examples
///
/// ```rust
/// use hotel_forms::forms::FieldDescriptor;
///
/// let nights = FieldDescriptor::text("nights", "Моля въведете брой нощувки.")
///     .range(1.0, 30.0)
///     .min_message("Броят нощувки трябва да е поне 1.");
///
/// assert!(nights.required);
/// assert_eq!(nights.min, Some(1.0));
/// assert_eq!(nights.rules().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Element id of the input, unique within a form
    pub id: String,
    /// Whether an empty value is an error
    #[serde(default)]
    pub required: bool,
    /// Value extraction and format check selector
    #[serde(default, rename = "type")]
    pub field_type: FieldType,
    /// Inclusive lower bound for numeric values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Inclusive upper bound for numeric values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Message shown when a required field is empty
    #[serde(default)]
    pub message: String,
    /// Message shown when the value is below `min`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_message: Option<String>,
    /// Message shown when the value is above `max`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_message: Option<String>,
}

impl FieldDescriptor {
    /// Create a required text field
    #[must_use]
    pub fn text(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(id, FieldType::Text, message)
    }

    /// Create a required e-mail field
    #[must_use]
    pub fn email(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(id, FieldType::Email, message)
    }

    /// Create a required checkbox
    #[must_use]
    pub fn checkbox(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(id, FieldType::Checkbox, message)
    }

    fn new(id: impl Into<String>, field_type: FieldType, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            required: true,
            field_type,
            min: None,
            max: None,
            message: message.into(),
            min_message: None,
            max_message: None,
        }
    }

    /// Allow the field to be left empty
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Set the inclusive lower bound
    #[must_use]
    pub const fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the inclusive upper bound
    #[must_use]
    pub const fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Set both bounds
    #[must_use]
    pub const fn range(self, min: f64, max: f64) -> Self {
        self.min(min).max(max)
    }

    /// Override the generated below-minimum message
    #[must_use]
    pub fn min_message(mut self, message: impl Into<String>) -> Self {
        self.min_message = Some(message.into());
        self
    }

    /// Override the generated above-maximum message
    #[must_use]
    pub fn max_message(mut self, message: impl Into<String>) -> Self {
        self.max_message = Some(message.into());
        self
    }

    /// Whether the id is one of [`NAME_FIELD_IDS`]
    #[must_use]
    pub fn is_name_like(&self) -> bool {
        NAME_FIELD_IDS.contains(&self.id.as_str())
    }

    /// Whether a numeric bound applies
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    /// Compile this descriptor into its rules, in evaluation order
    #[must_use]
    pub fn rules(&self) -> Vec<Rule> {
        let mut rules = Vec::with_capacity(2);

        if self.required {
            rules.push(Rule::Required {
                message: self.message.clone(),
            });
        }

        // Checkboxes only ever carry the required rule
        if self.field_type == FieldType::Checkbox {
            return rules;
        }

        if self.field_type == FieldType::Email {
            rules.push(Rule::EmailFormat);
        }
        if self.is_name_like() {
            rules.push(Rule::NameFormat);
        }
        if self.is_numeric() {
            rules.push(Rule::NumericRange {
                min: self.min,
                max: self.max,
                min_message: self.min_message.clone(),
                max_message: self.max_message.clone(),
            });
        }

        rules.sort_by_key(Rule::priority);
        rules
    }
}
