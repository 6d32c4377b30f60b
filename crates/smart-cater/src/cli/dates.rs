//! Delivery-date input.

use chrono::{Days, NaiveDate};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DateError {
    #[error("Invalid input. Please enter a date (YYYY-MM-DD), 'today', or 'tomorrow'.")]
    Unrecognized,

    #[error("Invalid date format. Please use YYYY-MM-DD format.")]
    Invalid(String),
}

/// Turns `today`, `tomorrow` or a `YYYY-MM-DD` date into a normalized date string.
///
/// `today` is passed in rather than read from the clock so callers (and tests)
/// decide what "today" means.
pub fn parse_delivery_date(input: &str, today: NaiveDate) -> Result<String, DateError> {
    let input = input.trim().to_lowercase();
    let date = match input.as_str() {
        "today" => today,
        "tomorrow" => today
            .checked_add_days(Days::new(1))
            .ok_or_else(|| DateError::Invalid(input.clone()))?,
        s if s.len() == 10 => NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map_err(|_| DateError::Invalid(input.clone()))?,
        _ => return Err(DateError::Unrecognized),
    };
    Ok(date.format(DATE_FORMAT).to_string())
}
