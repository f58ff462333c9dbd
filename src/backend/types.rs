//! Wire types for the sports-stats backend.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};


/// A sport as returned by `_getSportsList`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Sport {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Stats pre-selected for users who have not picked their own yet.
    #[serde(rename = "defaultKeyStats", default)]
    pub default_key_stats: Vec<String>,
}

/// A team as returned by `_getTeamsBySport`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Team {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "sport")]
    pub sport_id: String,
}

/// Team metadata from `_getTeamDetails`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TeamDetails {
    pub teamname: String,
    pub sport: String,
}

impl TeamDetails {
    /// Placeholder returned when the lookup fails.
    pub fn unknown(team_id: &str) -> Self {
        Self {
            teamname: team_id.to_string(),
            sport: "Unknown".to_string(),
        }
    }
}

/// Envelope for `fetchAvailableStatsForTeam`.
#[derive(Debug, Deserialize)]
pub struct AvailableStats {
    #[serde(default)]
    pub stats: Vec<String>,
}

/// Envelope for `fetchTeamStats`.
#[derive(Debug, Deserialize)]
pub struct TeamStatsData {
    #[serde(rename = "keyStatsData", default)]
    pub key_stats_data: Map<String, Value>,
}

/// Envelope for `_getItemsTrackedByUser`.
#[derive(Debug, Deserialize)]
pub struct TrackedItems {
    #[serde(default)]
    pub items: Vec<Value>,
}

impl TrackedItems {
    /// String tokens only; the store occasionally holds non-string entries.
    pub fn into_tokens(self) -> Vec<String> {
        self.items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(token) => Some(token),
                _ => None,
            })
            .collect()
    }
}
