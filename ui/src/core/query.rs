//! Query-string codec for the selection, so a filtered view survives a
//! reload and travels in a shared link.
//!
//! Parsing is permissive: unknown keys are ignored and garbage values
//! degrade to defaults. Serialization emits only non-default fields.

use url::form_urlencoded;

use crate::core::dates::format_day;
use crate::core::filters::FilterSelection;
use crate::core::selection::Selection;
use crate::core::sort::SortBy;

/// Reads a selection out of a page query string. Tolerates a leading `?`
/// and never fails; on duplicate keys the last value wins.
pub fn parse_query(query: &str) -> Selection {
    let trimmed = query.trim_start_matches('?');

    let mut min_score = String::new();
    let mut start_date = String::new();
    let mut end_date = String::new();
    let mut sort_by = String::new();

    for (key, value) in form_urlencoded::parse(trimmed.as_bytes()) {
        match key.as_ref() {
            "min_score" => min_score = value.into_owned(),
            "start_date" => start_date = value.into_owned(),
            "end_date" => end_date = value.into_owned(),
            "sort_by" => sort_by = value.into_owned(),
            _ => {}
        }
    }

    Selection {
        filters: FilterSelection::from_raw(&min_score, &start_date, &end_date),
        sort_by: SortBy::parse_or_default(&sort_by),
    }
}

/// Serializes the non-default parts of a selection. Returns an empty
/// string for the default selection.
pub fn encode_query(selection: &Selection) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if let Some(min) = selection.filters.min_score {
        serializer.append_pair("min_score", &min.to_string());
    }
    if let Some(start) = selection.filters.start_day {
        serializer.append_pair("start_date", &format_day(start));
    }
    if let Some(end) = selection.filters.end_day {
        serializer.append_pair("end_date", &format_day(end));
    }
    if selection.sort_by != SortBy::default() {
        serializer.append_pair("sort_by", selection.sort_by.as_str());
    }

    serializer.finish()
}
