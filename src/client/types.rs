//! Result shapes returned by [`super::StatsTrackingClient`] operations.

use serde::Serialize;

/// A user's decoded stat selection for one sport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatSelection {
    /// Logical stat names, each carrying the `stat:` prefix, in store order.
    pub stats: Vec<String>,
    pub has_user_stats: bool,
    /// True when the selection was just populated from the sport's defaults.
    pub auto_created: bool,
}

/// Aggregate result of persisting a batch of stat tokens.
#[derive(Debug, Clone, Serialize)]
pub struct TrackOutcome {
    /// True when at least one token was persisted (or there was nothing to do).
    pub success: bool,
    pub success_count: usize,
    pub errors: Vec<String>,
}

/// Aggregate result of a bulk token removal.
#[derive(Debug, Clone, Serialize)]
pub struct RemoveOutcome {
    /// True when at least one token was removed (or there was nothing to do).
    pub success: bool,
    pub removed_count: usize,
    pub errors: Vec<String>,
}
