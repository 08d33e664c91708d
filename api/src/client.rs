//! The one network call in the app: GET the feed, normalize the body.

use tracing::{debug, warn};

use crate::config::{FeedConfig, DEFAULT_REVALIDATE_SECS};
use crate::error::FetchError;
use crate::model::{LeaderboardPayload, LeaderboardRow};

/// Freshness knob for the fetch. Zero means "always fetch fresh"; any
/// other value allows caches to reuse a response up to that many seconds
/// old. Parsing is unaffected either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    pub revalidate_secs: u64,
}

impl FetchOptions {
    pub fn fresh() -> Self {
        Self { revalidate_secs: 0 }
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            revalidate_secs: DEFAULT_REVALIDATE_SECS,
        }
    }
}

pub(crate) fn cache_control_value(options: FetchOptions) -> String {
    if options.revalidate_secs == 0 {
        "no-cache".to_string()
    } else {
        format!("max-age={}", options.revalidate_secs)
    }
}

/// Fetches the leaderboard and returns the flat row list.
///
/// Fails with `FetchError::Status` on any non-2xx response; transport
/// failures surface as `FetchError::Transport`. Callers treat either as
/// terminal for the page load.
pub async fn fetch_leaderboard_rows(
    config: &FeedConfig,
    options: FetchOptions,
) -> Result<Vec<LeaderboardRow>, FetchError> {
    let client = reqwest::Client::new();

    let mut request = client.get(&config.url);
    for (name, value) in &config.headers {
        request = request.header(name.as_str(), value.as_str());
    }
    request = request.header("cache-control", cache_control_value(options));

    debug!(url = %config.url, revalidate = options.revalidate_secs, "fetching leaderboard");
    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        warn!(status = status.as_u16(), "leaderboard fetch rejected");
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }

    let payload: LeaderboardPayload = response.json().await?;
    let rows = payload.into_rows();
    debug!(rows = rows.len(), "leaderboard fetched");
    Ok(rows)
}
