//! Tracked-stat selection: reconciliation against sport defaults and the
//! token-level mutations behind it.
//!
//! Multi-item operations issue their per-item requests strictly sequentially
//! and collect per-item failures instead of aborting; partial success is
//! reported with counts.

use tracing::{debug, warn};

use crate::client::types::{RemoveOutcome, StatSelection, TrackOutcome};
use crate::client::StatsTrackingClient;
use crate::error::{Result, StatsError};
use crate::token;


impl StatsTrackingClient {
    /// The stats a user tracks for one sport.
    ///
    /// On first access, when no stat token exists yet, the selection is
    /// bootstrapped from the sport's `defaultKeyStats` and persisted. Returns
    /// `None` when no selection exists and none could be created; failures
    /// are logged, never propagated.
    pub async fn user_stat_selection(
        &self,
        username: &str,
        sport_id: &str,
    ) -> Option<StatSelection> {
        let stored = match self.stored_stat_selection(username, sport_id).await {
            Ok(stored) => stored,
            Err(error) => {
                warn!(%error, username, sport_id, "fetching tracked stats failed");
                return None;
            }
        };
        if let Some(selection) = stored {
            return Some(selection);
        }

        // First access: populate from the sport's declared defaults.
        let sport = self.sport_details(sport_id).await?;
        if sport.default_key_stats.is_empty() {
            debug!(sport_id, "no default stats to bootstrap from");
            return None;
        }
        match self
            .create_stat_collection(username, sport_id, &sport.default_key_stats)
            .await
        {
            Ok(outcome) if outcome.success => Some(StatSelection {
                stats: sport
                    .default_key_stats
                    .iter()
                    .map(|s| token::normalize_stat_name(s))
                    .collect(),
                has_user_stats: true,
                auto_created: true,
            }),
            Ok(outcome) => {
                warn!(username, sport_id, errors = ?outcome.errors, "creating default stats failed");
                None
            }
            Err(error) => {
                warn!(%error, username, sport_id, "creating default stats failed");
                None
            }
        }
    }

    /// Decode whatever the store holds for this user/sport, without creating
    /// defaults. `None` when no token matches.
    async fn stored_stat_selection(
        &self,
        username: &str,
        sport_id: &str,
    ) -> Result<Option<StatSelection>> {
        let tokens = self.backend().items_tracked_by_user(username).await?;
        let matching: Vec<&str> = tokens
            .iter()
            .map(String::as_str)
            .filter(|t| token::matches(t, sport_id, username))
            .collect();
        if matching.is_empty() {
            return Ok(None);
        }
        let stats: Vec<String> = matching.into_iter().filter_map(token::decode).collect();
        debug!(username, sport_id, count = stats.len(), "decoded tracked stats");
        Ok(Some(StatSelection {
            stats,
            has_user_stats: true,
            auto_created: false,
        }))
    }

    /// Track one stat. Returns the normalized logical name on success.
    pub async fn add_stat(
        &self,
        username: &str,
        sport_id: &str,
        stat_name: &str,
    ) -> Result<String> {
        let item = token::encode(sport_id, username, stat_name);
        debug!(username, sport_id, %item, "tracking stat");
        self.backend().add_item(username, &item).await?;
        Ok(token::normalize_stat_name(stat_name))
    }

    /// Untrack one stat. A selection must keep at least one entry, so
    /// removing the last remaining stat fails without issuing a delete.
    pub async fn remove_stat(
        &self,
        username: &str,
        sport_id: &str,
        stat_name: &str,
    ) -> Result<String> {
        let current = self.stored_stat_selection(username, sport_id).await?;
        if current.is_none_or(|selection| selection.stats.len() <= 1) {
            return Err(StatsError::LastStat);
        }
        let item = token::encode(sport_id, username, stat_name);
        debug!(username, sport_id, %item, "untracking stat");
        self.backend().remove_item(username, &item).await?;
        Ok(token::normalize_stat_name(stat_name))
    }

    /// Persist a batch of stats as individual tokens. An empty batch is a
    /// success with nothing to do.
    pub async fn create_stat_collection(
        &self,
        username: &str,
        sport_id: &str,
        stats: &[String],
    ) -> Result<TrackOutcome> {
        if stats.is_empty() {
            debug!(username, sport_id, "no stats to track");
            return Ok(TrackOutcome {
                success: true,
                success_count: 0,
                errors: Vec::new(),
            });
        }

        let mut success_count = 0;
        let mut errors = Vec::new();
        for stat in stats {
            let item = token::encode(sport_id, username, stat);
            match self.backend().add_item(username, &item).await {
                Ok(_) => success_count += 1,
                Err(error) => {
                    warn!(%error, %item, "tracking stat failed");
                    errors.push(format!(
                        "failed to track {}: {error}",
                        token::normalize_stat_name(stat)
                    ));
                }
            }
        }
        debug!(username, sport_id, success_count, total = stats.len(), "stat collection created");
        Ok(TrackOutcome {
            success: success_count > 0,
            success_count,
            errors,
        })
    }

    /// Delete every stat token this user holds for one sport.
    pub async fn remove_stat_collection(
        &self,
        username: &str,
        sport_id: &str,
    ) -> Result<RemoveOutcome> {
        let tokens = self.backend().items_tracked_by_user(username).await?;
        let targets: Vec<String> = tokens
            .into_iter()
            .filter(|t| token::matches(t, sport_id, username))
            .collect();
        if targets.is_empty() {
            debug!(username, sport_id, "no stat tokens to remove");
            return Ok(RemoveOutcome {
                success: true,
                removed_count: 0,
                errors: Vec::new(),
            });
        }
        self.remove_items(username, targets).await
    }

    /// Delete every collection token belonging to this user, across sports.
    pub async fn remove_all_collections(&self, username: &str) -> Result<RemoveOutcome> {
        let tokens = self.backend().items_tracked_by_user(username).await?;
        let targets: Vec<String> = tokens
            .into_iter()
            .filter(|t| t.starts_with(token::COLLECTION_PREFIX) && t.contains(username))
            .collect();
        if targets.is_empty() {
            debug!(username, "no collections to remove");
            return Ok(RemoveOutcome {
                success: true,
                removed_count: 0,
                errors: Vec::new(),
            });
        }
        self.remove_items(username, targets).await
    }

    async fn remove_items(&self, username: &str, items: Vec<String>) -> Result<RemoveOutcome> {
        let total = items.len();
        let mut removed_count = 0;
        let mut errors = Vec::new();
        for item in items {
            match self.backend().remove_item(username, &item).await {
                Ok(_) => removed_count += 1,
                Err(error) => {
                    warn!(%error, %item, "removing tracked item failed");
                    errors.push(format!("failed to remove {item}: {error}"));
                }
            }
        }
        debug!(username, removed_count, total, "tracked items removed");
        Ok(RemoveOutcome {
            success: removed_count > 0,
            removed_count,
            errors,
        })
    }
}
