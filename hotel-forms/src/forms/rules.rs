//! Per-field rules and their evaluation
//!
//! A field's rules run in a fixed priority order and the first failing rule
//! wins. Only that one message is reported for the field.

use super::error::FieldError;
use super::field::{FieldDescriptor, FieldValue};
use super::predicates::{is_valid_email, is_valid_name};

/// Message for an e-mail that does not match the format
pub const EMAIL_FORMAT_MESSAGE: &str = "Моля въведете валиден e-mail.";

/// Message for a name holding digits or symbols
pub const NAME_FORMAT_MESSAGE: &str =
    "Моля въведете валидно име (само букви, интервали и тирета).";

/// Message for non-numeric content in a numeric field
pub const INVALID_NUMBER_MESSAGE: &str = "Моля въведете валидна числова стойност.";

/// A single check applied to a field value
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Value must be non-empty (or checked)
    Required {
        /// Shown when the value is empty
        message: String,
    },
    /// Non-empty value must look like an e-mail address
    EmailFormat,
    /// Non-empty value must look like a personal name
    NameFormat,
    /// Non-empty value must parse as a number within the bounds
    NumericRange {
        /// Inclusive lower bound
        min: Option<f64>,
        /// Inclusive upper bound
        max: Option<f64>,
        /// Overrides the generated below-minimum message
        min_message: Option<String>,
        /// Overrides the generated above-maximum message
        max_message: Option<String>,
    },
}

impl Rule {
    /// Evaluation rank; lower runs first
    #[must_use]
    pub const fn priority(&self) -> u8 {
        match self {
            Self::Required { .. } => 0,
            Self::EmailFormat => 1,
            Self::NameFormat => 2,
            Self::NumericRange { .. } => 3,
        }
    }

    /// Short name used in listings
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Required { .. } => "required",
            Self::EmailFormat => "email",
            Self::NameFormat => "name",
            Self::NumericRange { .. } => "range",
        }
    }

    /// Apply the rule to a value
    ///
    /// # Errors
    ///
    /// Returns the [`FieldError`] describing the first problem found.
    pub fn check(&self, value: &FieldValue) -> Result<(), FieldError> {
        match self {
            Self::Required { message } => {
                if value.is_empty() {
                    return Err(FieldError::MissingValue(message.clone()));
                }
            }
            Self::EmailFormat => {
                if let Some(text) = non_empty_text(value) {
                    if !is_valid_email(text) {
                        return Err(FieldError::InvalidFormat(EMAIL_FORMAT_MESSAGE.to_string()));
                    }
                }
            }
            Self::NameFormat => {
                if let Some(text) = non_empty_text(value) {
                    if !is_valid_name(text) {
                        return Err(FieldError::InvalidFormat(NAME_FORMAT_MESSAGE.to_string()));
                    }
                }
            }
            Self::NumericRange {
                min,
                max,
                min_message,
                max_message,
            } => {
                let FieldValue::Text { raw } = value else {
                    return Ok(());
                };
                if raw.trim().is_empty() {
                    return Ok(());
                }
                let number = parse_number(raw)
                    .ok_or_else(|| FieldError::InvalidNumber(INVALID_NUMBER_MESSAGE.to_string()))?;

                if let Some(min) = *min {
                    if number < min {
                        return Err(FieldError::OutOfRange(
                            min_message
                                .clone()
                                .unwrap_or_else(|| format!("Минималната стойност е {min}.")),
                        ));
                    }
                }
                if let Some(max) = *max {
                    if number > max {
                        return Err(FieldError::OutOfRange(
                            max_message
                                .clone()
                                .unwrap_or_else(|| format!("Максималната стойност е {max}.")),
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NumericRange { min, max, .. } => {
                let bound = |b: &Option<f64>| b.map_or_else(|| "-".to_string(), |v| v.to_string());
                write!(f, "range[{}..{}]", bound(min), bound(max))
            }
            other => write!(f, "{}", other.name()),
        }
    }
}

/// Run a descriptor's rules against a value, stopping at the first failure
///
/// # Examples
///
/// ```rust
/// use hotel_forms::forms::{evaluate_field, FieldDescriptor, FieldValue};
///
/// let nights = FieldDescriptor::text("nights", "Моля въведете брой нощувки.").range(1.0, 30.0);
///
/// assert!(evaluate_field(&nights, &FieldValue::text("30")).is_none());
/// assert!(evaluate_field(&nights, &FieldValue::text("31")).is_some());
/// ```
#[must_use]
pub fn evaluate_field(descriptor: &FieldDescriptor, value: &FieldValue) -> Option<FieldError> {
    evaluate_rules(&descriptor.rules(), value)
}

/// Run compiled rules against a value, stopping at the first failure
#[must_use]
pub fn evaluate_rules(rules: &[Rule], value: &FieldValue) -> Option<FieldError> {
    rules.iter().find_map(|rule| rule.check(value).err())
}

fn non_empty_text(value: &FieldValue) -> Option<&str> {
    value.trimmed().filter(|text| !text.is_empty())
}

/// Parse like the browser's `Number()`: surrounding whitespace is ignored
///
/// Only the exact spellings `Infinity`, `+Infinity` and `-Infinity` name an
/// infinite value; `f64`'s own `inf`, `infinity` and `NaN` are rejected.
/// Decimal literals too large for `f64` still overflow to infinity.
fn parse_number(raw: &str) -> Option<f64> {
    let text = raw.trim();
    match text {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    if text
        .bytes()
        .any(|b| b.is_ascii_alphabetic() && !matches!(b, b'e' | b'E'))
    {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| !n.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nights() -> FieldDescriptor {
        FieldDescriptor::text("nights", "Моля въведете брой нощувки.")
            .range(1.0, 30.0)
            .min_message("Броят нощувки трябва да е поне 1.")
            .max_message("Броят нощувки не може да надвишава 30.")
    }

    #[test]
    fn test_priority_order() {
        let mut rules = vec![
            Rule::NumericRange {
                min: None,
                max: None,
                min_message: None,
                max_message: None,
            },
            Rule::NameFormat,
            Rule::EmailFormat,
            Rule::Required {
                message: String::new(),
            },
        ];
        rules.sort_by_key(Rule::priority);
        let names: Vec<_> = rules.iter().map(Rule::name).collect();
        assert_eq!(names, vec!["required", "email", "name", "range"]);
    }

    #[test]
    fn test_required_text() {
        let field = FieldDescriptor::text("message", "Моля въведете съобщение.");
        let error = evaluate_field(&field, &FieldValue::text("  ")).unwrap();
        assert_eq!(
            error,
            FieldError::MissingValue("Моля въведете съобщение.".into())
        );
        assert!(evaluate_field(&field, &FieldValue::text("Здравейте")).is_none());
    }

    #[test]
    fn test_required_checkbox() {
        let field = FieldDescriptor::checkbox("privacy", "consent");
        assert_eq!(
            evaluate_field(&field, &FieldValue::Checked(false)),
            Some(FieldError::MissingValue("consent".into()))
        );
        assert!(evaluate_field(&field, &FieldValue::Checked(true)).is_none());
    }

    #[test]
    fn test_required_wins_over_format() {
        let field = FieldDescriptor::email("email", "Моля въведете e-mail.");
        let error = evaluate_field(&field, &FieldValue::text("")).unwrap();
        assert_eq!(error.code(), "required");
    }

    #[test]
    fn test_email_format_uses_trimmed_value() {
        let field = FieldDescriptor::email("email", "required");
        assert!(evaluate_field(&field, &FieldValue::text("  guest@hotel.bg  ")).is_none());
        assert_eq!(
            evaluate_field(&field, &FieldValue::text("abc")),
            Some(FieldError::InvalidFormat(EMAIL_FORMAT_MESSAGE.into()))
        );
    }

    #[test]
    fn test_optional_email_skips_empty() {
        let field = FieldDescriptor::email("email", "").optional();
        assert!(evaluate_field(&field, &FieldValue::text("")).is_none());
    }

    #[test]
    fn test_name_format() {
        let field = FieldDescriptor::text("first-name", "required");
        assert_eq!(
            evaluate_field(&field, &FieldValue::text("John3")),
            Some(FieldError::InvalidFormat(NAME_FORMAT_MESSAGE.into()))
        );
        assert!(evaluate_field(&field, &FieldValue::text("Mary-Jane O'Neil")).is_none());
    }

    #[test]
    fn test_range_boundaries_are_inclusive() {
        let field = nights();
        assert!(evaluate_field(&field, &FieldValue::text("1")).is_none());
        assert!(evaluate_field(&field, &FieldValue::text("30")).is_none());
        assert_eq!(
            evaluate_field(&field, &FieldValue::text("0")),
            Some(FieldError::OutOfRange("Броят нощувки трябва да е поне 1.".into()))
        );
        assert_eq!(
            evaluate_field(&field, &FieldValue::text("31")),
            Some(FieldError::OutOfRange(
                "Броят нощувки не може да надвишава 30.".into()
            ))
        );
    }

    #[test]
    fn test_range_default_messages() {
        let field = FieldDescriptor::text("guests", "required").range(2.0, 4.5);
        assert_eq!(
            evaluate_field(&field, &FieldValue::text("1")).unwrap().message(),
            "Минималната стойност е 2."
        );
        assert_eq!(
            evaluate_field(&field, &FieldValue::text("5")).unwrap().message(),
            "Максималната стойност е 4.5."
        );
    }

    #[test]
    fn test_invalid_number() {
        let field = nights();
        for raw in ["abc", "1,5", "NaN", "5 nights"] {
            assert_eq!(
                evaluate_field(&field, &FieldValue::text(raw)),
                Some(FieldError::InvalidNumber(INVALID_NUMBER_MESSAGE.into())),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_float_keywords_are_invalid_numbers() {
        let min_only = FieldDescriptor::text("children", "").optional().min(0.0);
        for raw in ["inf", "INF", "+inf", "infinity", "-infinity", "nan", "NaN", "0x10"] {
            for field in [nights(), min_only.clone()] {
                assert_eq!(
                    evaluate_field(&field, &FieldValue::text(raw)),
                    Some(FieldError::InvalidNumber(INVALID_NUMBER_MESSAGE.into())),
                    "{} {raw}",
                    field.id
                );
            }
        }
    }

    #[test]
    fn test_infinite_numbers_hit_the_bounds() {
        let too_many = Some(FieldError::OutOfRange(
            "Броят нощувки не може да надвишава 30.".into(),
        ));
        assert_eq!(evaluate_field(&nights(), &FieldValue::text("Infinity")), too_many);
        assert_eq!(evaluate_field(&nights(), &FieldValue::text(" +Infinity ")), too_many);
        assert_eq!(evaluate_field(&nights(), &FieldValue::text("1e400")), too_many);
        assert_eq!(
            evaluate_field(&nights(), &FieldValue::text("-Infinity")),
            Some(FieldError::OutOfRange("Броят нощувки трябва да е поне 1.".into()))
        );
        assert!(evaluate_field(&nights(), &FieldValue::text("2.5e1")).is_none());
    }

    #[test]
    fn test_number_tolerates_surrounding_whitespace() {
        assert!(evaluate_field(&nights(), &FieldValue::text(" 7 ")).is_none());
        assert!(evaluate_field(&nights(), &FieldValue::text("2.5")).is_none());
    }

    #[test]
    fn test_optional_numeric_still_checks_min_once_present() {
        let children = FieldDescriptor::text("children", "")
            .optional()
            .range(0.0, 100.0)
            .min_message("Броят деца не може да бъде отрицателен.");
        assert!(evaluate_field(&children, &FieldValue::text("")).is_none());
        assert_eq!(
            evaluate_field(&children, &FieldValue::text("-1"))
                .unwrap()
                .message(),
            "Броят деца не може да бъде отрицателен."
        );
    }

    #[test]
    fn test_rule_display() {
        let rule = Rule::NumericRange {
            min: Some(1.0),
            max: None,
            min_message: None,
            max_message: None,
        };
        assert_eq!(rule.to_string(), "range[1..-]");
        assert_eq!(Rule::EmailFormat.to_string(), "email");
    }
}
