//! Leaderboard feed client for Podium. Owns the feed configuration, the row
//! types, and the single HTTP fetch every page load performs.

pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::{fetch_leaderboard_rows, FetchOptions};
pub use config::FeedConfig;
pub use error::FetchError;
pub use model::{LeaderboardRow, TeamMember};
