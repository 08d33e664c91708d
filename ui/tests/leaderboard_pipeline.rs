//! End-to-end checks of the fetch-free pipeline: feed rows through the
//! filter/sort engine, the summary stats, and the query-string codec.

use api::LeaderboardRow;
use serde_json::json;

use ui::core::query::{encode_query, parse_query};
use ui::core::{apply_filters, derive_view, sort_rows, summarize, Selection, SortBy};

fn feed_rows() -> Vec<LeaderboardRow> {
    serde_json::from_value(json!([
        {
            "sub_id": 101,
            "team_id": 11,
            "team_name": "gradient gang",
            "score": 0.91,
            "ranking": 2,
            "submission_cnt": 14,
            "c_time": "2024-01-02 10:00:00",
            "team_info": [{"name": "kim"}, {"name": "lee"}]
        },
        {
            "sub_id": 102,
            "team_id": 12,
            "team_name": "overfitters anonymous",
            "score": 0.95,
            "ranking": 1,
            "submission_cnt": 3,
            "c_time": "2024-01-01 09:00:00",
            "team_info": [{"name": "park"}]
        },
        {
            "sub_id": 103,
            "team_id": 13,
            "team_name": "latecomers",
            "score": "0.89",
            "ranking": 3,
            "submission_cnt": 7,
            "c_time": "2024-01-05 18:30:00",
            "team_info": []
        },
        {
            "sub_id": 104,
            "team_id": 14,
            "team_name": "clock skew",
            "score": 0.93,
            "ranking": 4,
            "submission_cnt": 2,
            "c_time": "sometime last week",
            "team_info": [{"name": "choi"}]
        }
    ]))
    .expect("fixture rows deserialize")
}

fn ids(rows: &[LeaderboardRow]) -> Vec<i64> {
    rows.iter().map(|row| row.sub_id).collect()
}

#[test]
fn spec_scenario_filter_then_rank() {
    let rows: Vec<LeaderboardRow> = serde_json::from_value(json!([
        {"sub_id": 1, "score": 0.91, "c_time": "2024-01-02 10:00:00", "ranking": 2},
        {"sub_id": 2, "score": 0.95, "c_time": "2024-01-01 09:00:00", "ranking": 1}
    ]))
    .unwrap();

    let selection = parse_query("min_score=0.92");
    let filtered = apply_filters(&rows, &selection.filters);
    assert_eq!(ids(&filtered), vec![2]);

    let ranked = sort_rows(&filtered, SortBy::Ranking);
    assert_eq!(ids(&ranked), vec![2]);

    let by_score = sort_rows(&rows, SortBy::ScoreDesc);
    assert_eq!(ids(&by_score), vec![2, 1]);
}

#[test]
fn empty_selection_is_identity_in_recency_order() {
    let rows = feed_rows();
    let view = derive_view(&rows, &Selection::default());
    assert_eq!(view.summary.total, 4);
    assert_eq!(view.summary.filtered, 4);
    // Newest parseable first; the malformed timestamp sinks to the bottom.
    assert_eq!(ids(&view.rows), vec![103, 101, 102, 104]);
}

#[test]
fn malformed_timestamp_counts_but_never_becomes_latest() {
    let rows = feed_rows();
    let selection = parse_query("min_score=0.92");
    let view = derive_view(&rows, &selection);

    // Row 104 has a garbage timestamp yet clears the score bound.
    assert_eq!(view.summary.filtered, 2);
    assert!(view.rows.iter().any(|row| row.sub_id == 104));
    // The latest-submission stat only considers parseable timestamps.
    assert_eq!(view.summary.latest_submission.as_deref(), Some("2024.01.01 09:00"));
    assert_eq!(view.summary.best_score, Some(0.95));
}

#[test]
fn lenient_string_score_participates_in_bounds() {
    let rows = feed_rows();
    let selection = parse_query("min_score=0.89&sort_by=score_asc");
    let view = derive_view(&rows, &selection);
    assert_eq!(ids(&view.rows), vec![103, 101, 104, 102]);
}

#[test]
fn date_window_keeps_only_rows_inside_it() {
    let rows = feed_rows();
    let selection = parse_query("start_date=2024-01-02&end_date=2024-01-05");
    let view = derive_view(&rows, &selection);
    // 102 is before the window, 104 is unparseable and fails the start bound.
    assert_eq!(view.summary.filtered, 2);
    assert_eq!(ids(&view.rows), vec![103, 101]);
}

#[test]
fn query_round_trip_reproduces_the_view() {
    let rows = feed_rows();
    let selection = parse_query("min_score=0.9&start_date=2024-01-01&sort_by=score_desc");
    let encoded = encode_query(&selection);
    let reparsed = parse_query(&encoded);

    assert_eq!(reparsed, selection);
    assert_eq!(derive_view(&rows, &reparsed), derive_view(&rows, &selection));
}

#[test]
fn garbage_query_falls_back_to_the_default_view() {
    let rows = feed_rows();
    let selection = parse_query("min_score=plenty&start_date=yesterday&sort_by=vibes");
    assert!(selection.is_default());
    assert_eq!(encode_query(&selection), "");

    let view = derive_view(&rows, &selection);
    assert_eq!(view.summary.filtered, rows.len());
}

#[test]
fn summary_sentinels_appear_when_nothing_matches() {
    let rows = feed_rows();
    let selection = parse_query("min_score=2.0");
    let view = derive_view(&rows, &selection);

    assert_eq!(view.summary.total, 4);
    assert_eq!(view.summary.filtered, 0);
    assert_eq!(view.summary.best_score, None);
    assert_eq!(view.summary.latest_submission, None);

    let summary = summarize(rows.len(), &view.rows);
    assert_eq!(summary, view.summary);
}
