//! The user's applied selection: filter bounds plus sort strategy, and the
//! view derived from it.

use api::LeaderboardRow;

use crate::core::filters::{apply_filters, FilterSelection};
use crate::core::sort::{sort_rows, SortBy};
use crate::core::stats::{summarize, Summary};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Selection {
    pub filters: FilterSelection,
    pub sort_by: SortBy,
}

impl Selection {
    /// True when every field sits at its default (no bounds, `recent`
    /// sort), i.e. the state that serializes to an empty query string.
    pub fn is_default(&self) -> bool {
        self.filters.is_empty() && self.sort_by == SortBy::default()
    }
}

/// Filtered, sorted rows plus their summary. A pure function of the source
/// list and the selection; recomputed wholesale on every change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedView {
    pub rows: Vec<LeaderboardRow>,
    pub summary: Summary,
}

pub fn derive_view(rows: &[LeaderboardRow], selection: &Selection) -> DerivedView {
    let filtered = apply_filters(rows, &selection.filters);
    let summary = summarize(rows.len(), &filtered);
    DerivedView {
        rows: sort_rows(&filtered, selection.sort_by),
        summary,
    }
}
