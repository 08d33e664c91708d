use thiserror::Error;

/// Everything that can go wrong while loading the feed. There is no retry
/// and no partial data: a failed fetch is terminal for the page load.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("leaderboard request failed (status: {status})")]
    Status { status: u16 },

    #[error("leaderboard request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
