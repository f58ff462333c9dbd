//! Error types for the stats tracker client

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("backend returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("backend error: {message}")]
    Backend { message: String },

    #[error("you must keep at least one tracked stat for this sport")]
    LastStat,

    #[error("backend URL not provided and {env_var} environment variable not set")]
    MissingBackendUrl { env_var: String },
}

impl StatsError {
    /// True when a removal was refused because it would empty the selection.
    pub fn is_last_stat(&self) -> bool {
        matches!(self, StatsError::LastStat)
    }
}
