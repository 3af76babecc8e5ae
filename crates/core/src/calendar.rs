//! Calendar arithmetic on plain dates.
//!
//! Month addition clamps to the last valid day of the target month:
//! Jan 31 + 1 month is Feb 29 in a leap year and Feb 28 otherwise.

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::billing::BillingError;

/// Adds whole calendar months to a date, clamping the day of month.
///
/// Returns `None` only when the result falls outside chrono's date range.
#[must_use]
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

/// Subtracts whole calendar months from a date, clamping the day of month.
#[must_use]
pub fn sub_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_sub_months(Months::new(months))
}

/// Parses a calendar date supplied by the data store.
///
/// Accepts `YYYY-MM-DD`. An ISO timestamp (`YYYY-MM-DDTHH:MM:SS...`) is
/// tolerated and truncated to its date part.
///
/// # Errors
///
/// Returns `BillingError::InvalidDateInput` if the value is not a valid date.
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, BillingError> {
    let trimmed = value.trim();
    let date_part = match trimmed.get(10..11) {
        Some("T" | " ") => &trimmed[..10],
        _ => trimmed,
    };

    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|_| BillingError::InvalidDateInput {
        field,
        value: value.to_string(),
    })
}

/// Parses an optional date, treating blank strings as absent.
///
/// # Errors
///
/// Returns `BillingError::InvalidDateInput` if a non-blank value is not a valid date.
pub fn parse_optional_date(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<NaiveDate>, BillingError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => parse_date(field, v).map(Some),
    }
}

/// Signed number of days from `from` to `to`.
#[must_use]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Age in whole years on `today`.
#[must_use]
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// First day of the month containing `date`.
#[must_use]
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// Returns true if both dates fall in the same calendar month.
#[must_use]
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}
