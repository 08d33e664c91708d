//! Timestamp handling for the feed's fixed `yyyy-MM-dd HH:mm:ss` format.
//!
//! Parsing is always to `Option`: a malformed value is data to tolerate,
//! not an error to surface.

use time::macros::{format_description, time};
use time::{Date, PrimitiveDateTime};

/// Parses a feed timestamp. `None` on anything that is not exactly
/// `yyyy-MM-dd HH:mm:ss`.
pub fn parse_timestamp(value: &str) -> Option<PrimitiveDateTime> {
    PrimitiveDateTime::parse(
        value.trim(),
        &format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    )
    .ok()
}

/// Parses an ISO calendar date (`yyyy-MM-dd`) from a filter field or query
/// parameter.
pub fn parse_day(value: &str) -> Option<Date> {
    Date::parse(value.trim(), &format_description!("[year]-[month]-[day]")).ok()
}

/// Inclusive lower bound of a calendar day.
pub fn day_start(day: Date) -> PrimitiveDateTime {
    day.midnight()
}

/// Inclusive upper bound of a calendar day.
pub fn day_end(day: Date) -> PrimitiveDateTime {
    PrimitiveDateTime::new(day, time!(23:59:59))
}

/// Comparator key for a row timestamp. Unparseable values pin to the
/// minimum instant so the ordering stays total.
pub fn timestamp_key(value: &str) -> PrimitiveDateTime {
    parse_timestamp(value).unwrap_or(PrimitiveDateTime::MIN)
}

/// `yyyy-MM-dd` text for a calendar date (filter inputs, query string).
pub fn format_day(day: Date) -> String {
    day.format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| "—".to_string())
}

/// Display form of a feed timestamp (`yyyy.MM.dd HH:mm`); malformed values
/// render verbatim.
pub fn format_submission_time(value: &str) -> String {
    match parse_timestamp(value) {
        Some(parsed) => parsed
            .format(&format_description!("[year].[month].[day] [hour]:[minute]"))
            .unwrap_or_else(|_| value.to_string()),
        None => value.to_string(),
    }
}
