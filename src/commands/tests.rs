//! Handler tests for batch box-score fetching

use super::*;
use crate::{cli::types::GameId, core::Cell, nba::StatsClient, NbaError};
use serde_json::{json, Value};
use tempfile::tempdir;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

#[cfg(test)]
mod command_tests {
    use super::*;

    fn box_score(game_id: &str, points: i64) -> Value {
        json!({
            "boxScoreTraditional": {
                "gameId": game_id,
                "homeTeam": {
                    "teamId": 1610612747,
                    "teamTricode": "LAL",
                    "players": [{
                        "personId": 2544,
                        "firstName": "LeBron",
                        "familyName": "James",
                        "statistics": {"minutes": "34:00", "points": points}
                    }]
                },
                "awayTeam": {"teamId": 1610612744, "teamTricode": "GSW", "players": []}
            }
        })
    }

    async fn mount_game(server: &MockServer, game_id: &str, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/boxscoretraditionalv3"))
            .and(query_param("GameID", game_id))
            .respond_with(response)
            .expect(1)
            .mount(server)
            .await;
    }

    fn context(server: &MockServer) -> CommandContext {
        CommandContext::with_client(StatsClient::with_base_url(&server.uri()).unwrap())
    }

    fn ids(raw: &[&str]) -> Vec<GameId> {
        raw.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[tokio::test]
    async fn test_batch_skips_failed_game_and_continues() {
        let server = MockServer::start().await;
        mount_game(
            &server,
            "0022400001",
            ResponseTemplate::new(200).set_body_json(box_score("0022400001", 25)),
        )
        .await;
        mount_game(&server, "0022400002", ResponseTemplate::new(500)).await;
        mount_game(
            &server,
            "0022400003",
            ResponseTemplate::new(200).set_body_json(box_score("0022400003", 31)),
        )
        .await;

        let ctx = context(&server);
        let outcome = boxscores::fetch_player_boxscores_batch(
            &ctx,
            &ids(&["0022400001", "0022400002", "0022400003"]),
        )
        .await;

        assert!(!outcome.is_complete());
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].0.as_str(), "0022400002");
        assert!(matches!(outcome.failures[0].1, NbaError::Http(_)));

        assert_eq!(outcome.table.len(), 2);
        assert_eq!(outcome.table.get(0, "PTS"), Some(&Cell::Int(25)));
        assert_eq!(outcome.table.get(1, "PTS"), Some(&Cell::Int(31)));
        assert_eq!(
            outcome.table.get(1, "GAME_ID"),
            Some(&Cell::Text("0022400003".into()))
        );
    }

    #[tokio::test]
    async fn test_partial_batch_writes_successful_rows() {
        let server = MockServer::start().await;
        mount_game(
            &server,
            "0022400001",
            ResponseTemplate::new(200).set_body_json(box_score("0022400001", 25)),
        )
        .await;
        mount_game(&server, "0022400002", ResponseTemplate::new(404)).await;

        let dir = tempdir().unwrap();
        let output = dir.path().join("out/boxscores.csv");
        let table = handle_player_boxscores(
            &context(&server),
            &ids(&["0022400001", "0022400002"]),
            &output,
        )
        .await
        .unwrap()
        .unwrap();

        assert_eq!(table.len(), 1);
        assert!(output.exists());
    }

    #[tokio::test]
    async fn test_single_failing_game_is_an_error() {
        let server = MockServer::start().await;
        mount_game(&server, "0022400002", ResponseTemplate::new(503)).await;

        let dir = tempdir().unwrap();
        let output = dir.path().join("boxscores.csv");
        let result =
            handle_player_boxscores(&context(&server), &ids(&["0022400002"]), &output).await;

        assert!(matches!(result, Err(NbaError::Http(_))));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_empty_box_score_writes_nothing() {
        let server = MockServer::start().await;
        mount_game(
            &server,
            "0022400009",
            ResponseTemplate::new(200).set_body_json(json!({
                "boxScoreTraditional": {
                    "gameId": "0022400009",
                    "homeTeam": {"players": []},
                    "awayTeam": {"players": []}
                }
            })),
        )
        .await;

        let dir = tempdir().unwrap();
        let output = dir.path().join("boxscores.csv");
        let result = handle_player_boxscores(&context(&server), &ids(&["22400009"]), &output)
            .await
            .unwrap();

        assert!(result.is_none());
        assert!(!output.exists());
    }
}
