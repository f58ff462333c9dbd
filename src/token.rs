//! Stat token codec.
//!
//! The backend's item-tracking store keys a user's tracked stat under an
//! opaque token of the shape `stat:<sportId>:<username>:<payload>`. Current
//! writers store the payload as `stat:<statName>`; older data stored the bare
//! `<statName>`. [`decode`] accepts both, so it is a superset parser rather
//! than the strict inverse of [`encode`].

/// Prefix carried by every logical stat name.
pub const STAT_PREFIX: &str = "stat:";

/// Prefix of every collection token. Collections are only enumerated and
/// deleted, never parsed.
pub const COLLECTION_PREFIX: &str = "collection:";

#[cfg(test)]
mod tests;

/// Ensure a stat name carries the `stat:` prefix.
pub fn normalize_stat_name(name: &str) -> String {
    if name.starts_with(STAT_PREFIX) {
        name.to_string()
    } else {
        format!("{STAT_PREFIX}{name}")
    }
}

/// Build the token under which `stat_name` is persisted for one user/sport.
pub fn encode(sport_id: &str, username: &str, stat_name: &str) -> String {
    format!(
        "stat:{sport_id}:{username}:{}",
        normalize_stat_name(stat_name)
    )
}

/// Extract the logical stat name out of a token, tolerating both persisted
/// payload shapes. Returns `None` for payloads that decode to nothing usable
/// (empty, or the bare literal `stat`).
pub fn decode(token: &str) -> Option<String> {
    let parts: Vec<&str> = token.split(':').collect();
    let decoded = if parts.len() >= 5 && parts[3] == "stat" {
        // Doubled-prefix shape: stat:<sport>:<user>:stat:<name>
        format!("{STAT_PREFIX}{}", parts[4])
    } else {
        (*parts.get(3)?).to_string()
    };
    if decoded.is_empty() || decoded == "stat" {
        return None;
    }
    Some(normalize_stat_name(&decoded))
}

/// The exact token prefix owned by one `(sport, user)` pair. The trailing
/// colon keeps sport `12` from matching tokens of sport `123`.
pub fn tracking_prefix(sport_id: &str, username: &str) -> String {
    format!("stat:{sport_id}:{username}:")
}

/// Whether `token` is a stat token belonging to this sport and user.
pub fn matches(token: &str, sport_id: &str, username: &str) -> bool {
    token.starts_with(&tracking_prefix(sport_id, username))
}
