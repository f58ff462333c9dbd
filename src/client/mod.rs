//! High-level client for the sports-stats backend.
//!
//! Read queries reshape responses for UI consumption and never fail:
//! transport and shape errors degrade to empty defaults and are logged.
//! Mutating operations return their errors as values. There is no caching
//! and no retry policy anywhere in this layer.

mod selection;
mod types;


pub use types::{RemoveOutcome, StatSelection, TrackOutcome};

use serde_json::{Map, Value};
use tracing::warn;

use crate::backend::http::BackendClient;
use crate::backend::types::{Sport, Team, TeamDetails};
use crate::error::Result;

/// Client for sports, teams, and user-tracked statistics.
#[derive(Debug, Clone)]
pub struct StatsTrackingClient {
    backend: BackendClient,
}

impl StatsTrackingClient {
    /// Create a client against `base_url` (e.g. `https://host/api`).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            backend: BackendClient::new(base_url)?,
        })
    }

    /// Direct access to the strict transport layer.
    pub fn backend(&self) -> &BackendClient {
        &self.backend
    }

    /// All sports known to the backend; empty on any failure.
    pub async fn sports(&self) -> Vec<Sport> {
        match self.backend.sports_list().await {
            Ok(sports) => sports,
            Err(error) => {
                warn!(%error, "fetching sports list failed");
                Vec::new()
            }
        }
    }

    /// The teams of one sport; empty on any failure.
    pub async fn teams_by_sport(&self, sport_id: &str) -> Vec<Team> {
        match self.backend.teams_by_sport(sport_id).await {
            Ok(teams) => teams,
            Err(error) => {
                warn!(%error, sport_id, "fetching teams failed");
                Vec::new()
            }
        }
    }

    /// The stats the backend can report for one team; empty on any failure.
    pub async fn available_stats_for_team(&self, teamname: &str, sport_id: &str) -> Vec<String> {
        match self.backend.available_stats_for_team(teamname, sport_id).await {
            Ok(stats) => stats,
            Err(error) => {
                warn!(%error, teamname, sport_id, "fetching available stats failed");
                Vec::new()
            }
        }
    }

    /// One sport by ID. There is no dedicated endpoint; this filters the
    /// sports list.
    pub async fn sport_details(&self, sport_id: &str) -> Option<Sport> {
        self.sports().await.into_iter().find(|s| s.id == sport_id)
    }

    /// A team's key stat values, optionally restricted to `stats`; empty map
    /// on any failure.
    pub async fn team_stats(
        &self,
        teamname: &str,
        sport_id: &str,
        stats: Option<&[String]>,
    ) -> Map<String, Value> {
        match self.backend.team_stats(teamname, sport_id, stats).await {
            Ok(data) => data,
            Err(error) => {
                warn!(%error, teamname, sport_id, "fetching team stats failed");
                Map::new()
            }
        }
    }

    /// A team's name and sport. Falls back to a placeholder carrying the
    /// requested ID when the lookup fails.
    pub async fn team_details(&self, team_id: &str) -> TeamDetails {
        match self.backend.team_details(team_id).await {
            Ok(details) => details,
            Err(error) => {
                warn!(%error, team_id, "fetching team details failed");
                TeamDetails::unknown(team_id)
            }
        }
    }

    /// Add a stat to a sport's catalog; the backend result passes through.
    pub async fn add_key_stat(&self, sport_name: &str, stat: &str) -> Result<Value> {
        self.backend.add_key_stat(sport_name, stat).await
    }

    /// Remove a stat from a sport's catalog; the backend result passes through.
    pub async fn remove_key_stat(&self, sport_name: &str, stat: &str) -> Result<Value> {
        self.backend.remove_key_stat(sport_name, stat).await
    }
}
