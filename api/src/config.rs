//! Feed endpoint configuration. Everything the fetch needs travels in a
//! `FeedConfig` value so the rest of the app never reads ambient state.

/// Public leaderboard endpoint for the tracked competition.
pub const LEADERBOARD_URL: &str =
    "https://newapi.dacon.io/leaderboard/V2/public?cpt_id=236590";

/// Descriptive headers the feed provider expects from a browser-shaped
/// client. Sent verbatim on every request; browsers silently drop the
/// forbidden ones on the wasm build.
pub const REQUEST_HEADERS: &[(&str, &str)] = &[
    ("accept", "application/json, text/plain, */*"),
    ("accept-language", "ko-KR,ko;q=0.9"),
    ("origin", "https://dacon.io"),
    ("priority", "u=1, i"),
    ("referer", "https://dacon.io/"),
    ("retry", "3"),
    ("retrydelay", "3000"),
    (
        "sec-ch-ua",
        "\"Chromium\";v=\"142\", \"Google Chrome\";v=\"142\", \"Not_A Brand\";v=\"99\"",
    ),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-ch-ua-platform", "\"macOS\""),
    ("sec-fetch-dest", "empty"),
    ("sec-fetch-mode", "cors"),
    ("sec-fetch-site", "same-site"),
    (
        "user-agent",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/142.0.0.0 Safari/537.36",
    ),
];

/// Default revalidation window: cached responses younger than an hour may
/// be reused.
pub const DEFAULT_REVALIDATE_SECS: u64 = 3600;

/// Where the fetch goes and which headers ride along.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl FeedConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: REQUEST_HEADERS
                .iter()
                .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
                .collect(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::new(LEADERBOARD_URL)
    }
}
