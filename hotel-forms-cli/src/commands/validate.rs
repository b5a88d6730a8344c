//! Validate a JSON file of field values against a form

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use hotel_forms::config::SiteConfig;
use hotel_forms::forms::{FieldValues, ValidationOutcome};

/// Evaluate field values the way a submit would
pub struct ValidateCommand<'a> {
    config: &'a SiteConfig,
    form_id: String,
}

impl<'a> ValidateCommand<'a> {
    /// Create a new command instance
    #[must_use]
    pub fn new(config: &'a SiteConfig, form_id: impl Into<String>) -> Self {
        Self {
            config,
            form_id: form_id.into(),
        }
    }

    /// Read values from a file and validate them
    ///
    /// # Errors
    ///
    /// Returns an error if the form is unknown or the file cannot be read or parsed.
    pub fn execute_file(&self, path: &Path, out: &mut impl Write) -> Result<ValidationOutcome> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        self.execute(&json, out)
    }

    /// Validate values given as a JSON object
    ///
    /// # Errors
    ///
    /// Returns an error if the form is unknown, the JSON is not an object of
    /// scalars, or writing fails. Failing fields are not an error here.
    pub fn execute(&self, json: &str, out: &mut impl Write) -> Result<ValidationOutcome> {
        let schema = self.config.form(&self.form_id)?;
        let values = FieldValues::from_json(json)?;
        let outcome = schema.evaluate(&values);

        for field in schema.fields() {
            if !outcome.evaluated_fields().any(|id| id == field.id) {
                writeln!(out, "{} {}", style("skip").yellow(), field.id)?;
            }
        }

        for (field, error) in outcome.errors() {
            writeln!(
                out,
                "{} {} [{}] {}",
                style("✗").red().bold(),
                field,
                error.code(),
                error.message()
            )?;
        }

        if !outcome.has_errors() {
            writeln!(out, "{} {}", style("✓").green().bold(), schema.success_message())?;
        }

        tracing::debug!(form = %self.form_id, errors = outcome.error_count(), "values validated");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn run(form_id: &str, json: &str) -> (ValidationOutcome, String) {
        let config = SiteConfig::default();
        let mut out = Vec::new();
        let outcome = ValidateCommand::new(&config, form_id)
            .execute(json, &mut out)
            .unwrap();
        let text = console::strip_ansi_codes(&String::from_utf8(out).unwrap()).to_string();
        (outcome, text)
    }

    #[test]
    fn test_valid_contact_values() {
        let (outcome, text) = run(
            "contact-form",
            r#"{"name": "Ivan Ivanov", "email": "ivan@example.com", "message": "Здравейте", "privacy": true}"#,
        );
        assert!(!outcome.has_errors());
        assert_eq!(text, "✓ Вашето съобщение е изпратено успешно!\n");
    }

    #[test]
    fn test_reports_each_failure() {
        let (outcome, text) = run(
            "contact-form",
            r#"{"name": "", "email": "abc", "message": "", "privacy": false}"#,
        );
        assert_eq!(outcome.error_count(), 4);
        assert!(text.contains("✗ email [format] Моля въведете валиден e-mail."));
        assert!(text.contains("✗ privacy [required]"));
        assert!(!text.contains("✓"));
    }

    #[test]
    fn test_numbers_and_missing_fields() {
        let (outcome, text) = run("reservation-form", r#"{"nights": 0, "children": null}"#);
        assert_eq!(outcome.error_count(), 1);
        assert!(text.contains("✗ nights [range] Броят нощувки трябва да е поне 1."));
        assert!(text.contains("skip first-name"));
        assert!(!text.contains("skip children"));
    }

    #[test]
    fn test_unknown_form() {
        let config = SiteConfig::default();
        let result = ValidateCommand::new(&config, "booking").execute("{}", &mut Vec::new());
        assert!(result.unwrap_err().to_string().contains("Unknown form: booking"));
    }

    #[test]
    fn test_execute_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"nights": "31"}"#).unwrap();

        let config = SiteConfig::default();
        let outcome = ValidateCommand::new(&config, "reservation-form")
            .execute_file(file.path(), &mut Vec::new())
            .unwrap();
        assert_eq!(
            outcome.error_for("nights").map(|e| e.message()),
            Some("Броят нощувки не може да надвишава 30.")
        );
    }

    #[test]
    fn test_rejects_non_object() {
        let config = SiteConfig::default();
        let result = ValidateCommand::new(&config, "contact-form").execute("[]", &mut Vec::new());
        assert!(result.is_err());
    }
}
