//! Request builders for the stats API endpoints this tool queries.
//!
//! Each request type holds already-normalized values and knows the exact
//! wire parameter names its endpoint expects. Optional filters are left
//! out of the query entirely rather than sent empty.

use crate::cli::types::{DateRange, GameId, PlayerId, Season, SeasonType, TeamId};

/// League identifier for the NBA.
pub const NBA_LEAGUE_ID: &str = "00";

/// A single stats API query.
pub trait StatsRequest {
    /// Path segment under the API base URL.
    const ENDPOINT: &'static str;
    /// Name of the result set holding the rows of interest.
    const RESULT_SET: &'static str;

    /// Query string parameters, using the endpoint's own names.
    fn params(&self) -> Vec<(&'static str, String)>;
}

/// Every player who has appeared in the league (the player reference list).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonAllPlayersRequest {
    pub season: Season,
    pub only_current_season: bool,
}

impl StatsRequest for CommonAllPlayersRequest {
    const ENDPOINT: &'static str = "commonallplayers";
    const RESULT_SET: &'static str = "CommonAllPlayers";

    fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("LeagueID", NBA_LEAGUE_ID.to_string()),
            ("Season", self.season.to_string()),
            (
                "IsOnlyCurrentSeason",
                u8::from(self.only_current_season).to_string(),
            ),
        ]
    }
}

/// Season-by-season regular season totals for one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCareerStatsRequest {
    pub player_id: PlayerId,
}

impl StatsRequest for PlayerCareerStatsRequest {
    const ENDPOINT: &'static str = "playercareerstats";
    const RESULT_SET: &'static str = "SeasonTotalsRegularSeason";

    fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("PlayerID", self.player_id.to_string()),
            ("PerMode", "Totals".to_string()),
            ("LeagueID", NBA_LEAGUE_ID.to_string()),
        ]
    }
}

/// One row per game a player appeared in during a season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerGameLogRequest {
    pub player_id: PlayerId,
    pub season: Season,
    pub season_type: SeasonType,
}

impl StatsRequest for PlayerGameLogRequest {
    const ENDPOINT: &'static str = "playergamelog";
    const RESULT_SET: &'static str = "PlayerGameLog";

    fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("PlayerID", self.player_id.to_string()),
            ("Season", self.season.to_string()),
            ("SeasonType", self.season_type.to_string()),
        ]
    }
}

/// One row per game a team played during a season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamGameLogRequest {
    pub team_id: TeamId,
    pub season: Season,
    pub season_type: SeasonType,
}

impl StatsRequest for TeamGameLogRequest {
    const ENDPOINT: &'static str = "teamgamelog";
    const RESULT_SET: &'static str = "TeamGameLog";

    fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("TeamID", self.team_id.to_string()),
            ("Season", self.season.to_string()),
            ("SeasonType", self.season_type.to_string()),
        ]
    }
}

/// Team game logs with the season and season type both optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamGameLogsRequest {
    pub team_id: TeamId,
    pub season: Option<Season>,
    pub season_type: Option<SeasonType>,
}

impl StatsRequest for TeamGameLogsRequest {
    const ENDPOINT: &'static str = "teamgamelogs";
    const RESULT_SET: &'static str = "TeamGameLogs";

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("TeamID", self.team_id.to_string()),
            ("LeagueID", NBA_LEAGUE_ID.to_string()),
        ];
        if let Some(season) = &self.season {
            params.push(("Season", season.to_string()));
        }
        if let Some(season_type) = self.season_type {
            params.push(("SeasonType", season_type.to_string()));
        }
        params
    }
}

/// Team games inside a date window (the league game finder in team mode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueGameFinderRequest {
    pub team_id: TeamId,
    pub dates: DateRange,
    pub season: Option<Season>,
}

impl StatsRequest for LeagueGameFinderRequest {
    const ENDPOINT: &'static str = "leaguegamefinder";
    const RESULT_SET: &'static str = "LeagueGameFinderResults";

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("PlayerOrTeam", "T".to_string()),
            ("TeamID", self.team_id.to_string()),
            ("LeagueID", NBA_LEAGUE_ID.to_string()),
        ];
        if let Some(from) = self.dates.upstream_from() {
            params.push(("DateFrom", from));
        }
        if let Some(to) = self.dates.upstream_to() {
            params.push(("DateTo", to));
        }
        if let Some(season) = &self.season {
            params.push(("Season", season.to_string()));
        }
        params
    }
}

/// Full-game traditional box score for one game.
///
/// The v3 endpoint answers with nested JSON rather than result sets; see
/// [`crate::nba::boxscore`] for how rows are pulled out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxScoreTraditionalRequest {
    pub game_id: GameId,
}

impl StatsRequest for BoxScoreTraditionalRequest {
    const ENDPOINT: &'static str = "boxscoretraditionalv3";
    const RESULT_SET: &'static str = "PlayerStats";

    fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("GameID", self.game_id.to_string()),
            ("StartPeriod", "0".to_string()),
            ("EndPeriod", "0".to_string()),
            ("StartRange", "0".to_string()),
            ("EndRange", "0".to_string()),
            ("RangeType", "0".to_string()),
        ]
    }
}
