//! Show the bookable arrival dates

use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use console::style;
use hotel_forms::site::ArrivalWindow;

/// Print the arrival window starting at a given day
pub struct ArrivalWindowCommand {
    today: NaiveDate,
    years: u32,
}

impl ArrivalWindowCommand {
    /// Create a new command instance
    #[must_use]
    pub const fn new(today: NaiveDate, years: u32) -> Self {
        Self { today, years }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if the window leaves the calendar range or writing fails.
    pub fn execute(&self, out: &mut impl Write) -> Result<ArrivalWindow> {
        let window = ArrivalWindow::starting(self.today, self.years)
            .with_context(|| format!("{} years from {} is out of range", self.years, self.today))?;

        writeln!(out, "{} {}", style("min:").bold(), window.min_attribute())?;
        writeln!(out, "{} {}", style("max:").bold(), window.max_attribute())?;
        Ok(window)
    }
}
