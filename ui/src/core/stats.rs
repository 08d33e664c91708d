//! Summary statistics over the derived view. Malformed values are skipped
//! by the aggregates, never propagated as errors.

use api::LeaderboardRow;
use time::macros::format_description;

use crate::core::dates::parse_timestamp;

/// Headline numbers for the stat cards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    /// Rows fetched from the feed, before filtering.
    pub total: usize,
    /// Rows matching the current bounds.
    pub filtered: usize,
    /// Maximum score among filtered rows; `None` when empty or when every
    /// score is malformed.
    pub best_score: Option<f64>,
    /// Most recent creation time among filtered rows, already formatted
    /// for display; `None` when no row carries a parseable timestamp.
    pub latest_submission: Option<String>,
}

pub fn summarize(total: usize, filtered: &[LeaderboardRow]) -> Summary {
    Summary {
        total,
        filtered: filtered.len(),
        best_score: best_score(filtered),
        latest_submission: latest_submission(filtered),
    }
}

fn best_score(rows: &[LeaderboardRow]) -> Option<f64> {
    rows.iter()
        .map(|row| row.score)
        .filter(|score| !score.is_nan())
        .reduce(f64::max)
}

fn latest_submission(rows: &[LeaderboardRow]) -> Option<String> {
    rows.iter()
        .filter_map(|row| parse_timestamp(&row.c_time))
        .max()
        .map(|when| {
            when.format(&format_description!("[year].[month].[day] [hour]:[minute]"))
                .unwrap_or_else(|_| "—".to_string())
        })
}
