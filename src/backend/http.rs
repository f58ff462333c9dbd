//! HTTP transport for the sports-stats backend.
//!
//! One method per endpoint, all HTTP POST with a JSON body. This layer is
//! strict: transport failures, non-success statuses, and backend-reported
//! `{error}` fields all surface as [`StatsError`]. UI-friendly normalization
//! (degrading to empty defaults) lives in [`crate::client`].

use reqwest::Client;
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::backend::types::{AvailableStats, Sport, Team, TeamDetails, TeamStatsData, TrackedItems};
use crate::error::{Result, StatsError};

#[cfg(test)]
mod tests;

const USER_AGENT: &str = "stats-tracker/0.1";

/// Client for the backend's `SportsStats` and `ItemTracking` endpoint groups.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client against `base_url` (e.g. `https://host/api`).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// The base URL this client was built with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST");
        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StatsError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json::<Value>().await?)
    }

    /// All sports known to the backend.
    pub async fn sports_list(&self) -> Result<Vec<Sport>> {
        let value = self.post("/SportsStats/_getSportsList", &json!({})).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// The teams registered under one sport.
    pub async fn teams_by_sport(&self, sport_id: &str) -> Result<Vec<Team>> {
        let value = self
            .post("/SportsStats/_getTeamsBySport", &json!({ "sportId": sport_id }))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// The stats the backend can report for one team.
    pub async fn available_stats_for_team(
        &self,
        teamname: &str,
        sport_id: &str,
    ) -> Result<Vec<String>> {
        let value = self
            .post(
                "/SportsStats/fetchAvailableStatsForTeam",
                &json!({ "teamname": teamname, "sport": sport_id }),
            )
            .await?;
        let envelope: AvailableStats = serde_json::from_value(value)?;
        Ok(envelope.stats)
    }

    /// Add a stat to a sport's catalog. The backend result passes through.
    pub async fn add_key_stat(&self, sport_name: &str, stat: &str) -> Result<Value> {
        self.post(
            "/SportsStats/addKeyStat",
            &json!({ "sportName": sport_name, "stat": stat }),
        )
        .await
    }

    /// Remove a stat from a sport's catalog. The backend result passes through.
    pub async fn remove_key_stat(&self, sport_name: &str, stat: &str) -> Result<Value> {
        self.post(
            "/SportsStats/removeKeyStat",
            &json!({ "sportName": sport_name, "stat": stat }),
        )
        .await
    }

    /// A team's key stat values, optionally restricted to `stats`. An empty
    /// filter is omitted from the request, which makes the backend report
    /// everything.
    pub async fn team_stats(
        &self,
        teamname: &str,
        sport_id: &str,
        stats: Option<&[String]>,
    ) -> Result<Map<String, Value>> {
        let mut body = json!({ "teamname": teamname, "sport": sport_id });
        if let Some(stats) = stats.filter(|s| !s.is_empty()) {
            body["stats"] = json!(stats);
        }
        let value = self.post("/SportsStats/fetchTeamStats", &body).await?;
        let envelope: TeamStatsData = serde_json::from_value(value)?;
        Ok(envelope.key_stats_data)
    }

    /// Name and sport of a team, looked up by ID.
    pub async fn team_details(&self, team_id: &str) -> Result<TeamDetails> {
        let value = self
            .post("/SportsStats/_getTeamDetails", &json!({ "teamStats": team_id }))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Every token the item-tracking store holds for one user. Non-string
    /// entries are skipped.
    pub async fn items_tracked_by_user(&self, user: &str) -> Result<Vec<String>> {
        let value = self
            .post("/ItemTracking/_getItemsTrackedByUser", &json!({ "user": user }))
            .await?;
        let envelope: TrackedItems = serde_json::from_value(value)?;
        Ok(envelope.into_tokens())
    }

    /// Track one item for a user.
    pub async fn add_item(&self, user: &str, item: &str) -> Result<Value> {
        let value = self
            .post("/ItemTracking/addItem", &json!({ "user": user, "item": item }))
            .await?;
        reject_on_backend_error(value)
    }

    /// Untrack one item for a user.
    pub async fn remove_item(&self, user: &str, item: &str) -> Result<Value> {
        let value = self
            .post("/ItemTracking/removeItem", &json!({ "user": user, "item": item }))
            .await?;
        reject_on_backend_error(value)
    }
}

/// A 2xx body carrying an `error` field is still a failure.
fn reject_on_backend_error(value: Value) -> Result<Value> {
    if let Some(error) = value.get("error").filter(|e| !e.is_null()) {
        let message = error
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        return Err(StatsError::Backend { message });
    }
    Ok(value)
}
