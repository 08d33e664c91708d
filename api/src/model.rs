//! Row types for the leaderboard feed, plus payload normalization.
//!
//! The feed is third-party data: every field defaults when absent, and the
//! score tolerates being delivered as a number, a numeric string, or
//! garbage (which becomes NaN and is later skipped by the aggregates).

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One leaderboard submission record. Never mutated after parsing; the
/// dashboard only clones and re-orders these.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LeaderboardRow {
    #[serde(default)]
    pub sub_id: i64,
    #[serde(default)]
    pub team_id: i64,
    #[serde(default)]
    pub team_name: String,
    #[serde(default = "nan_score", deserialize_with = "lenient_score")]
    pub score: f64,
    #[serde(default)]
    pub ranking: i64,
    #[serde(default)]
    pub submission_cnt: u32,
    /// Fixed feed format `yyyy-MM-dd HH:mm:ss`; kept verbatim and parsed
    /// lazily so a malformed value never poisons the whole payload.
    #[serde(default)]
    pub c_time: String,
    #[serde(default)]
    pub team_info: Vec<TeamMember>,
}

/// Display-only member descriptor attached to a row.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TeamMember {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub picture: String,
    #[serde(default)]
    pub occup1: String,
    #[serde(default)]
    pub organ1: String,
}

/// `{status, data}` wrapper some feed deployments respond with.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeaderboardEnvelope {
    #[serde(default)]
    pub status: i64,
    #[serde(default)]
    pub data: Vec<LeaderboardRow>,
}

/// The two body shapes the feed is known to produce.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LeaderboardPayload {
    Rows(Vec<LeaderboardRow>),
    Envelope(LeaderboardEnvelope),
}

impl LeaderboardPayload {
    /// Normalizes either shape to a flat row list. A missing `data` field
    /// deserializes as an empty list.
    pub fn into_rows(self) -> Vec<LeaderboardRow> {
        match self {
            LeaderboardPayload::Rows(rows) => rows,
            LeaderboardPayload::Envelope(envelope) => envelope.data,
        }
    }
}

fn nan_score() -> f64 {
    f64::NAN
}

/// Coerces the score the way the feed's own web client does: numbers pass
/// through, numeric strings parse, anything else becomes NaN.
fn lenient_score<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        _ => f64::NAN,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse_payload(value: Value) -> Vec<LeaderboardRow> {
        serde_json::from_value::<LeaderboardPayload>(value)
            .expect("payload should always normalize")
            .into_rows()
    }

    #[test]
    fn bare_array_normalizes_to_rows() {
        let rows = parse_payload(json!([
            {"sub_id": 1, "team_name": "alpha", "score": 0.91, "ranking": 2,
             "c_time": "2024-01-02 10:00:00"},
        ]));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].team_name, "alpha");
        assert_eq!(rows[0].ranking, 2);
    }

    #[test]
    fn envelope_normalizes_to_data_list() {
        let rows = parse_payload(json!({
            "status": 200,
            "data": [
                {"sub_id": 7, "team_name": "beta", "score": 0.95},
                {"sub_id": 8, "team_name": "gamma", "score": 0.90},
            ]
        }));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].team_name, "gamma");
    }

    #[test]
    fn envelope_without_data_is_empty() {
        let rows = parse_payload(json!({"status": 200}));
        assert!(rows.is_empty());
    }

    #[test]
    fn score_accepts_numeric_strings() {
        let rows = parse_payload(json!([{"sub_id": 1, "score": "0.875"}]));
        assert_eq!(rows[0].score, 0.875);
    }

    #[test]
    fn garbage_score_becomes_nan_not_an_error() {
        let rows = parse_payload(json!([
            {"sub_id": 1, "score": "n/a"},
            {"sub_id": 2, "score": null},
            {"sub_id": 3},
        ]));
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.score.is_nan()));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let rows = parse_payload(json!([{
            "sub_id": 1,
            "score": 0.5,
            "score1": 0.4,
            "deleted": 0,
            "cs_id": null,
            "team_info": [{"name": "kim", "grade_code": "g1"}]
        }]));
        assert_eq!(rows[0].team_info[0].name, "kim");
    }
}
