//! HTTP client tests against a mocked stats API

use super::*;
use crate::{
    cli::types::{SeasonType, TeamId},
    core::Cell,
    nba::endpoints::TeamGameLogRequest,
};
use serde_json::json;
use std::time::Duration;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

#[cfg(test)]
mod http_tests {
    use super::*;

    fn lakers_request() -> TeamGameLogRequest {
        TeamGameLogRequest {
            team_id: TeamId::new(1610612747),
            season: "2022-23".parse().unwrap(),
            season_type: SeasonType::RegularSeason,
        }
    }

    #[tokio::test]
    async fn test_fetch_table_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/teamgamelog"))
            .and(query_param("TeamID", "1610612747"))
            .and(query_param("Season", "2022-23"))
            .and(query_param("SeasonType", "Regular Season"))
            .and(header("x-nba-stats-origin", "stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "resultSets": [{
                    "name": "TeamGameLog",
                    "headers": ["Team_ID", "Game_ID", "PTS"],
                    "rowSet": [[1610612747, "0022201230", 128]]
                }]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = StatsClient::with_base_url(&mock_server.uri()).unwrap();
        let table = client.fetch_table(&lakers_request()).await.unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0, "PTS"), Some(&Cell::Int(128)));
    }

    #[tokio::test]
    async fn test_http_error_status_is_not_retried() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/teamgamelog"))
            .respond_with(ResponseTemplate::new(429))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = StatsClient::with_base_url(&mock_server.uri()).unwrap();
        let result = client.fetch_table(&lakers_request()).await;

        match result {
            Err(NbaError::Http(e)) => {
                assert_eq!(e.status().map(|s| s.as_u16()), Some(429));
            }
            other => panic!("expected Http error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/teamgamelog"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
            .mount(&mock_server)
            .await;

        let client = StatsClient::with_base_url(&mock_server.uri()).unwrap();
        let result = client.fetch_table(&lakers_request()).await;

        assert!(matches!(result, Err(NbaError::Json(_))));
    }

    #[tokio::test]
    async fn test_no_result_sets_is_upstream_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/teamgamelog"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"resultSets": []})))
            .mount(&mock_server)
            .await;

        let client = StatsClient::with_base_url(&mock_server.uri()).unwrap();
        let result = client.fetch_table(&lakers_request()).await;

        match result {
            Err(NbaError::Upstream { endpoint, .. }) => assert_eq!(endpoint, "teamgamelog"),
            other => panic!("expected Upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_timeout_surfaces_as_http_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/teamgamelog"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"resultSets": []}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&mock_server)
            .await;

        let client = StatsClient::new(&ClientConfig {
            base_url: mock_server.uri(),
            timeout: Duration::from_secs(1),
        })
        .unwrap();
        let result = client.fetch_table(&lakers_request()).await;

        match result {
            Err(NbaError::Http(e)) => assert!(e.is_timeout()),
            other => panic!("expected timeout, got {:?}", other),
        }
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = StatsClient::with_base_url("http://localhost:1234/stats/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:1234/stats");
    }
}
