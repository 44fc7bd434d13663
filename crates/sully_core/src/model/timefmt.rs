//! Plain-string date format checks shared by diary, schedule and memory
//! validation.
//!
//! The application stores calendar dates as `YYYY-MM-DD` strings and refined
//! memory keys as `YYYY-MM` month keys. These helpers check the format only;
//! they do not consult a calendar (no leap-day logic at this layer).

use once_cell::sync::Lazy;
use regex::Regex;

static CALENDAR_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])$").expect("valid date regex")
});
static MONTH_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-(0[1-9]|1[0-2])$").expect("valid month key regex"));

/// Returns whether `value` is a `YYYY-MM-DD` calendar-date string.
pub fn is_calendar_date(value: &str) -> bool {
    CALENDAR_DATE_RE.is_match(value)
}

/// Returns whether `value` is a `YYYY-MM` month key.
pub fn is_month_key(value: &str) -> bool {
    MONTH_KEY_RE.is_match(value)
}
