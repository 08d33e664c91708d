//! Predicate filtering over the row list. All bounds are optional, ANDed,
//! and total: a row is only ever kept or dropped, never an error.

use api::LeaderboardRow;
use time::Date;

use crate::core::dates::{day_end, day_start, parse_day, parse_timestamp};

/// The three optional bounds a user can apply. Construction parses raw
/// text once; anything unparseable becomes "no bound" rather than failing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterSelection {
    /// Inclusive lower score bound. Always finite when present.
    pub min_score: Option<f64>,
    /// Inclusive start of the date range (start of day).
    pub start_day: Option<Date>,
    /// Inclusive end of the date range (end of day, 23:59:59).
    pub end_day: Option<Date>,
}

impl FilterSelection {
    /// Builds a selection from raw form or query text.
    pub fn from_raw(min_score: &str, start_day: &str, end_day: &str) -> Self {
        Self {
            min_score: parse_min_score(min_score),
            start_day: parse_day(start_day),
            end_day: parse_day(end_day),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min_score.is_none() && self.start_day.is_none() && self.end_day.is_none()
    }

    fn passes(&self, row: &LeaderboardRow) -> bool {
        if let Some(min) = self.min_score {
            // NaN scores never satisfy `<`, so malformed scores pass.
            if row.score < min {
                return false;
            }
        }

        if self.start_day.is_none() && self.end_day.is_none() {
            return true;
        }

        let created = parse_timestamp(&row.c_time);

        if let Some(start) = self.start_day {
            match created {
                Some(when) if when >= day_start(start) => {}
                // Unparseable timestamps count as the minimum instant and
                // cannot clear an active start bound.
                _ => return false,
            }
        }

        if let Some(end) = self.end_day {
            if let Some(when) = created {
                if when > day_end(end) {
                    return false;
                }
            }
        }

        true
    }
}

/// Keeps every row that clears all active bounds, preserving relative
/// order. Returns a new list; the input is untouched.
pub fn apply_filters(rows: &[LeaderboardRow], filters: &FilterSelection) -> Vec<LeaderboardRow> {
    rows.iter()
        .filter(|row| filters.passes(row))
        .cloned()
        .collect()
}

fn parse_min_score(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}
