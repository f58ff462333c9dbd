//! Sports Stats Tracker Library
//!
//! A Rust client for a sports-stats backend: sports and team queries,
//! per-team stat reports, and management of the stats each user tracks.
//!
//! ## Features
//!
//! - **Sports & Teams**: List sports, the teams of a sport, and team details
//! - **Stat Reports**: Fetch a team's key stat values, optionally filtered
//! - **Tracked Stats**: Encode a user's tracked stats as opaque store tokens
//!   and decode both current and legacy token shapes back
//! - **Default Bootstrap**: First access to a user's selection populates it
//!   from the sport's declared default stats
//! - **UI-friendly Errors**: Read queries degrade to empty defaults instead
//!   of failing; mutations report partial success with counts
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stats_tracker::StatsTrackingClient;
//!
//! # async fn example() -> stats_tracker::Result<()> {
//! let client = StatsTrackingClient::new("https://stats.example.com/api")?;
//!
//! for sport in client.sports().await {
//!     println!("{}: {}", sport.id, sport.name);
//! }
//!
//! if let Some(selection) = client.user_stat_selection("alice", "nba").await {
//!     println!("tracking {} stats", selection.stats.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! The CLI resolves the backend base URL from the environment when the flag
//! is not given:
//! ```bash
//! export STATS_BACKEND_URL=https://stats.example.com/api
//! ```

pub mod backend;
pub mod cli;
pub mod client;
pub mod commands;
pub mod error;
pub mod token;

// Re-export commonly used types
pub use backend::http::BackendClient;
pub use backend::types::{Sport, Team, TeamDetails};
pub use client::{RemoveOutcome, StatSelection, StatsTrackingClient, TrackOutcome};
pub use error::{Result, StatsError};

pub const BACKEND_URL_ENV_VAR: &str = "STATS_BACKEND_URL";
