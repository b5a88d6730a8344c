//! Bookable arrival dates

use chrono::{Local, Months, NaiveDate};

use crate::dom::InputElement;

/// Id of the arrival date input on the reservation page
pub const ARRIVAL_INPUT_ID: &str = "arrival-date";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Earliest and latest selectable arrival date, both inclusive
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use hotel_forms::site::ArrivalWindow;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let window = ArrivalWindow::starting(today, 1).unwrap();
///
/// assert_eq!(window.min_attribute(), "2026-10-19");
/// assert_eq!(window.max_attribute(), "2027-10-19");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrivalWindow {
    earliest: NaiveDate,
    latest: NaiveDate,
}

impl ArrivalWindow {
    /// Window from `today` to the same calendar day `years` later
    ///
    /// February 29 maps to February 28 in a non-leap target year. Returns
    /// `None` if the end date is out of chrono's range.
    #[must_use]
    pub fn starting(today: NaiveDate, years: u32) -> Option<Self> {
        let latest = today.checked_add_months(Months::new(years.checked_mul(12)?))?;
        Some(Self {
            earliest: today,
            latest,
        })
    }

    /// Window starting at today's local date
    #[must_use]
    pub fn from_today(years: u32) -> Option<Self> {
        Self::starting(Local::now().date_naive(), years)
    }

    /// First bookable day
    #[must_use]
    pub const fn earliest(&self) -> NaiveDate {
        self.earliest
    }

    /// Last bookable day
    #[must_use]
    pub const fn latest(&self) -> NaiveDate {
        self.latest
    }

    /// Whether `date` can be booked
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.earliest..=self.latest).contains(&date)
    }

    /// `min` attribute value (`YYYY-MM-DD`)
    #[must_use]
    pub fn min_attribute(&self) -> String {
        self.earliest.format(DATE_FORMAT).to_string()
    }

    /// `max` attribute value (`YYYY-MM-DD`)
    #[must_use]
    pub fn max_attribute(&self) -> String {
        self.latest.format(DATE_FORMAT).to_string()
    }

    /// Restrict a date input to this window
    pub fn apply<I: InputElement>(&self, input: &I) {
        input.set_attribute("min", &self.min_attribute());
        input.set_attribute("max", &self.max_attribute());
        tracing::debug!(min = %self.earliest, max = %self.latest, "arrival window applied");
    }
}
