//! The four named orderings of the leaderboard, dispatched through a
//! multi-key comparator per strategy.

use std::cmp::Ordering;

use api::LeaderboardRow;

use crate::core::dates::timestamp_key;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    /// Creation time, newest first. The default.
    #[default]
    Recent,
    /// Score descending, newest first among ties.
    ScoreDesc,
    /// Score ascending, oldest first among ties.
    ScoreAsc,
    /// Ranking ascending, newest first among ties.
    Ranking,
}

impl SortBy {
    pub const ALL: [SortBy; 4] = [
        SortBy::Recent,
        SortBy::ScoreDesc,
        SortBy::ScoreAsc,
        SortBy::Ranking,
    ];

    /// Wire name used in the query string and the sort select.
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Recent => "recent",
            SortBy::ScoreDesc => "score_desc",
            SortBy::ScoreAsc => "score_asc",
            SortBy::Ranking => "ranking",
        }
    }

    /// Permissive lookup: unknown names fall back to `Recent`.
    pub fn parse_or_default(value: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|option| option.as_str() == value)
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            SortBy::Recent => "Most recent",
            SortBy::ScoreDesc => "Highest score",
            SortBy::ScoreAsc => "Lowest score",
            SortBy::Ranking => "Ranking",
        }
    }

    fn compare(self, a: &LeaderboardRow, b: &LeaderboardRow) -> Ordering {
        let created = |row: &LeaderboardRow| timestamp_key(&row.c_time);
        match self {
            SortBy::Recent => created(b).cmp(&created(a)),
            SortBy::ScoreDesc => b
                .score
                .total_cmp(&a.score)
                .then_with(|| created(b).cmp(&created(a))),
            SortBy::ScoreAsc => a
                .score
                .total_cmp(&b.score)
                .then_with(|| created(a).cmp(&created(b))),
            SortBy::Ranking => a
                .ranking
                .cmp(&b.ranking)
                .then_with(|| created(b).cmp(&created(a))),
        }
    }
}

/// Returns a newly ordered copy of `rows`; the input is untouched.
pub fn sort_rows(rows: &[LeaderboardRow], sort_by: SortBy) -> Vec<LeaderboardRow> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| sort_by.compare(a, b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(sub_id: i64, score: f64, c_time: &str, ranking: i64) -> LeaderboardRow {
        LeaderboardRow {
            sub_id,
            score,
            c_time: c_time.to_string(),
            ranking,
            ..Default::default()
        }
    }

    fn ids(rows: &[LeaderboardRow]) -> Vec<i64> {
        rows.iter().map(|r| r.sub_id).collect()
    }

    fn fixture() -> Vec<LeaderboardRow> {
        vec![
            row(1, 0.91, "2024-01-02 10:00:00", 2),
            row(2, 0.95, "2024-01-01 09:00:00", 1),
            row(3, 0.91, "2024-01-03 12:00:00", 3),
        ]
    }

    #[test]
    fn recent_orders_newest_first() {
        assert_eq!(ids(&sort_rows(&fixture(), SortBy::Recent)), vec![3, 1, 2]);
    }

    #[test]
    fn score_desc_breaks_ties_by_recency() {
        let sorted = sort_rows(&fixture(), SortBy::ScoreDesc);
        assert_eq!(ids(&sorted), vec![2, 3, 1]);
        for pair in sorted.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn score_asc_breaks_ties_by_oldest() {
        let sorted = sort_rows(&fixture(), SortBy::ScoreAsc);
        assert_eq!(ids(&sorted), vec![1, 3, 2]);
        for pair in sorted.windows(2) {
            assert!(pair[0].score <= pair[1].score);
        }
    }

    #[test]
    fn ranking_orders_ascending() {
        let sorted = sort_rows(&fixture(), SortBy::Ranking);
        assert_eq!(ids(&sorted), vec![2, 1, 3]);
        for pair in sorted.windows(2) {
            assert!(pair[0].ranking <= pair[1].ranking);
        }
    }

    #[test]
    fn sorting_is_a_permutation() {
        let rows = fixture();
        for sort_by in SortBy::ALL {
            let mut sorted_ids = ids(&sort_rows(&rows, sort_by));
            sorted_ids.sort_unstable();
            assert_eq!(sorted_ids, vec![1, 2, 3], "{sort_by:?}");
        }
    }

    #[test]
    fn input_is_untouched() {
        let rows = fixture();
        let _ = sort_rows(&rows, SortBy::ScoreDesc);
        assert_eq!(ids(&rows), vec![1, 2, 3]);
    }

    #[test]
    fn unknown_names_fall_back_to_recent() {
        assert_eq!(SortBy::parse_or_default("score_desc"), SortBy::ScoreDesc);
        assert_eq!(SortBy::parse_or_default("by_magic"), SortBy::Recent);
        assert_eq!(SortBy::parse_or_default(""), SortBy::Recent);
    }

    #[test]
    fn unparseable_timestamps_sort_oldest() {
        let rows = vec![
            row(1, 0.5, "garbage", 1),
            row(2, 0.5, "2024-01-01 00:00:00", 2),
        ];
        assert_eq!(ids(&sort_rows(&rows, SortBy::Recent)), vec![2, 1]);
    }

    #[test]
    fn spec_scenario_score_desc() {
        let rows = vec![
            row(1, 0.91, "2024-01-02 10:00:00", 2),
            row(2, 0.95, "2024-01-01 09:00:00", 1),
        ];
        assert_eq!(ids(&sort_rows(&rows, SortBy::ScoreDesc)), vec![2, 1]);
    }
}
