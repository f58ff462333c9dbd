//! Unit tests for the backend transport

use super::*;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> BackendClient {
    BackendClient::new(format!("{}/api", server.uri())).unwrap()
}

#[test]
fn new_strips_trailing_slashes() {
    let client = BackendClient::new("http://localhost:3000/api/").unwrap();
    assert_eq!(client.base_url(), "http://localhost:3000/api");
}

#[tokio::test]
async fn sports_list_parses_the_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/SportsStats/_getSportsList"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "nba", "name": "Basketball", "defaultKeyStats": ["points"]},
            {"_id": "nhl", "name": "Hockey"}
        ])))
        .mount(&server)
        .await;

    let sports = client_for(&server).sports_list().await.unwrap();

    assert_eq!(sports.len(), 2);
    assert_eq!(sports[0].id, "nba");
    assert_eq!(sports[0].default_key_stats, vec!["points"]);
    assert!(sports[1].default_key_stats.is_empty());
}

#[tokio::test]
async fn teams_by_sport_posts_the_sport_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/SportsStats/_getTeamsBySport"))
        .and(body_json(json!({"sportId": "nba"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "t1", "name": "Hawks", "sport": "nba"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let teams = client_for(&server).teams_by_sport("nba").await.unwrap();

    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].name, "Hawks");
}

#[tokio::test]
async fn non_success_status_carries_the_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ItemTracking/addItem"))
        .respond_with(ResponseTemplate::new(500).set_body_string("store unavailable"))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .add_item("alice", "stat:nba:alice:stat:points")
        .await
        .unwrap_err();

    match error {
        StatsError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "store unavailable");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn add_item_surfaces_the_backend_error_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ItemTracking/addItem"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": "item already tracked"})),
        )
        .mount(&server)
        .await;

    let error = client_for(&server)
        .add_item("alice", "stat:nba:alice:stat:points")
        .await
        .unwrap_err();

    match error {
        StatsError::Backend { message } => assert_eq!(message, "item already tracked"),
        other => panic!("expected Backend error, got {other:?}"),
    }
}

#[tokio::test]
async fn add_item_passes_through_a_clean_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ItemTracking/addItem"))
        .and(body_json(json!({"user": "alice", "item": "stat:nba:alice:stat:points"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "error": null})))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .add_item("alice", "stat:nba:alice:stat:points")
        .await
        .unwrap();

    assert_eq!(result.get("ok"), Some(&json!(true)));
}

#[tokio::test]
async fn team_stats_includes_the_filter_only_when_non_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/SportsStats/fetchTeamStats"))
        .and(body_json(json!({"teamname": "Hawks", "sport": "nba"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"keyStatsData": {"points": 31}})),
        )
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/SportsStats/fetchTeamStats"))
        .and(body_json(
            json!({"teamname": "Hawks", "sport": "nba", "stats": ["stat:points"]}),
        ))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"keyStatsData": {"points": 28}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let unfiltered = client.team_stats("Hawks", "nba", None).await.unwrap();
    assert_eq!(unfiltered.get("points"), Some(&json!(31)));

    let filter = vec!["stat:points".to_string()];
    let filtered = client.team_stats("Hawks", "nba", Some(&filter)).await.unwrap();
    assert_eq!(filtered.get("points"), Some(&json!(28)));

    // An empty filter is treated as no filter at all.
    let defaulted = client.team_stats("Hawks", "nba", Some(&[])).await.unwrap();
    assert_eq!(defaulted.get("points"), Some(&json!(31)));
}

#[tokio::test]
async fn items_tracked_by_user_returns_string_tokens() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ItemTracking/_getItemsTrackedByUser"))
        .and(body_json(json!({"user": "alice"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": ["stat:nba:alice:stat:points", 42, "collection:nba:alice:favorites"]
        })))
        .mount(&server)
        .await;

    let tokens = client_for(&server)
        .items_tracked_by_user("alice")
        .await
        .unwrap();

    assert_eq!(
        tokens,
        vec![
            "stat:nba:alice:stat:points".to_string(),
            "collection:nba:alice:favorites".to_string()
        ]
    );
}

#[tokio::test]
async fn team_details_deserializes_the_lookup() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/SportsStats/_getTeamDetails"))
        .and(body_json(json!({"teamStats": "t1"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"teamname": "Hawks", "sport": "nba"})),
        )
        .mount(&server)
        .await;

    let details = client_for(&server).team_details("t1").await.unwrap();

    assert_eq!(details.teamname, "Hawks");
    assert_eq!(details.sport, "nba");
}
