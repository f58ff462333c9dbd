//! Unit tests for the stat token codec

use super::*;

#[test]
fn encode_normalizes_bare_names() {
    assert_eq!(encode("nba", "alice", "points"), "stat:nba:alice:stat:points");
}

#[test]
fn encode_keeps_already_prefixed_names() {
    assert_eq!(
        encode("nba", "alice", "stat:points"),
        "stat:nba:alice:stat:points"
    );
}

#[test]
fn decode_round_trips_encoded_tokens() {
    let token = encode("nba", "alice", "rebounds");
    assert_eq!(decode(&token), Some("stat:rebounds".to_string()));
}

#[test]
fn decode_accepts_both_persisted_shapes() {
    // Doubled-prefix shape written by current encoders.
    assert_eq!(
        decode("stat:nba:alice:stat:points"),
        Some("stat:points".to_string())
    );
    // Bare-payload shape left behind by older encoders.
    assert_eq!(
        decode("stat:nba:alice:points"),
        Some("stat:points".to_string())
    );
}

#[test]
fn decode_rejects_empty_and_bare_payloads() {
    assert_eq!(decode("stat:nba:alice:"), None);
    assert_eq!(decode("stat:nba:alice:stat"), None);
    assert_eq!(decode("stat:nba"), None);
    assert_eq!(decode(""), None);
}

#[test]
fn decode_keeps_only_the_payload_name() {
    // Segments past the payload name are dropped, matching stored data that
    // was written with colons in the stat name.
    assert_eq!(
        decode("stat:nba:alice:stat:points:extra"),
        Some("stat:points".to_string())
    );
}

#[test]
fn decode_keeps_a_stat_literally_named_stat() {
    // The payload "stat:stat" is a stat whose name is "stat"; only the bare
    // literal is rejected.
    assert_eq!(
        decode("stat:nba:alice:stat:stat"),
        Some("stat:stat".to_string())
    );
}

#[test]
fn matches_requires_the_exact_prefix() {
    assert!(matches("stat:nba:alice:stat:points", "nba", "alice"));
    assert!(!matches("stat:nba:alice:stat:points", "nba", "bob"));
    assert!(!matches("stat:nhl:alice:stat:points", "nba", "alice"));
    assert!(!matches("collection:nba:alice:favorites", "nba", "alice"));
}

#[test]
fn matches_never_collides_on_id_prefixes() {
    assert!(matches("stat:12:alice:stat:points", "12", "alice"));
    assert!(!matches("stat:123:alice:stat:points", "12", "alice"));
    assert!(!matches("stat:12:alice:stat:points", "123", "alice"));
    assert!(!matches("stat:12:alice:stat:points", "1", "alice"));
}

#[test]
fn normalize_is_idempotent() {
    assert_eq!(normalize_stat_name("points"), "stat:points");
    assert_eq!(normalize_stat_name("stat:points"), "stat:points");
}
