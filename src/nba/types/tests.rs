//! Unit tests for stats API wire types

use super::*;
use serde_json::json;

#[cfg(test)]
mod types_tests {
    use super::*;

    fn team_game_log_response() -> Value {
        json!({
            "resource": "teamgamelog",
            "parameters": {"TeamID": 1610612747, "Season": "2022-23"},
            "resultSets": [
                {
                    "name": "TeamGameLog",
                    "headers": ["Team_ID", "Game_ID", "GAME_DATE", "MATCHUP", "WL", "PTS"],
                    "rowSet": [
                        [1610612747, "0022201230", "APR 09, 2023", "LAL vs. UTA", "W", 128],
                        [1610612747, "0022201215", "APR 07, 2023", "LAL vs. PHX", "W", 121]
                    ]
                }
            ]
        })
    }

    #[test]
    fn test_result_set_into_table() {
        let envelope: StatsEnvelope = serde_json::from_value(team_game_log_response()).unwrap();
        let table = envelope.into_table("TeamGameLog").unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.columns()[1], "Game_ID");
        assert_eq!(table.get(0, "PTS"), Some(&Cell::Int(128)));
        assert_eq!(
            table.get(1, "MATCHUP"),
            Some(&Cell::Text("LAL vs. PHX".to_string()))
        );
    }

    #[test]
    fn test_named_result_set_is_preferred() {
        let envelope: StatsEnvelope = serde_json::from_value(json!({
            "resultSets": [
                {"name": "CareerTotalsRegularSeason", "headers": ["PLAYER_ID", "GP"], "rowSet": [[2544, 1421]]},
                {"name": "SeasonTotalsRegularSeason", "headers": ["PLAYER_ID", "SEASON_ID"], "rowSet": [[2544, "2003-04"], [2544, "2004-05"]]}
            ]
        }))
        .unwrap();

        let table = envelope.into_table("SeasonTotalsRegularSeason").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.columns()[1], "SEASON_ID");
    }

    #[test]
    fn test_falls_back_to_first_result_set() {
        let envelope: StatsEnvelope = serde_json::from_value(team_game_log_response()).unwrap();
        let table = envelope.into_table("SomethingElse").unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_single_result_set_object() {
        let envelope: StatsEnvelope = serde_json::from_value(json!({
            "resultSet": {
                "name": "LeagueGameFinderResults",
                "headers": ["GAME_ID"],
                "rowSet": [["0022300500"]]
            }
        }))
        .unwrap();

        let sets = envelope.into_result_sets();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].name, "LeagueGameFinderResults");
    }

    #[test]
    fn test_empty_result_sets() {
        let envelope: StatsEnvelope = serde_json::from_value(json!({"resultSets": []})).unwrap();
        assert!(envelope.into_table("TeamGameLog").is_none());
    }

    #[test]
    fn test_missing_row_set_is_empty_table() {
        let set: ResultSet = serde_json::from_value(json!({
            "name": "PlayerGameLog",
            "headers": ["Game_ID", "PTS"]
        }))
        .unwrap();

        let table = set.into_table();
        assert!(table.is_empty());
        assert_eq!(table.columns().len(), 2);
    }

    #[test]
    fn test_api_breaking_change_detection() {
        // Missing envelope key must fail loudly rather than yield an empty table
        let result = serde_json::from_value::<StatsEnvelope>(json!({"data": []}));
        assert!(result.is_err());
    }
}
