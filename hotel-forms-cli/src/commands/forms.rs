//! List configured forms

use std::io::Write;

use anyhow::Result;
use console::style;
use hotel_forms::config::SiteConfig;

/// Print every form with its fields and compiled rules
pub struct FormsCommand<'a> {
    config: &'a SiteConfig,
}

impl<'a> FormsCommand<'a> {
    /// Create a new command instance
    #[must_use]
    pub const fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn execute(&self, out: &mut impl Write) -> Result<()> {
        for form in &self.config.forms {
            writeln!(
                out,
                "{} {}",
                style(form.id()).green().bold(),
                style(format!("({} fields)", form.fields().len())).dim()
            )?;

            for field in form.fields() {
                let rules = field
                    .rules()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                writeln!(
                    out,
                    "  {:<14} {:<9} {}",
                    field.id,
                    field.field_type.as_str(),
                    if rules.is_empty() { "-".to_string() } else { rules }
                )?;
            }

            writeln!(out, "  {} {}", style("on success:").dim(), form.success_message())?;
            writeln!(out)?;
        }
        Ok(())
    }
}
