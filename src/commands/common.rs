//! Shared resources and helpers for command handlers.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::{
    cli::types::{PlayerId, Season, TeamId, TeamRef},
    core::{write_table, ClientConfig, Table},
    nba::{PlayerDirectory, StatsClient, TeamDirectory, TeamRecord},
    Result,
};

/// Directory default output paths live under.
pub const DATA_DIR: &str = "data";

/// Rows shown after a fetch.
pub const PREVIEW_ROWS: usize = 5;

/// Everything a command needs for one invocation: the API client and the
/// team reference list.
pub struct CommandContext {
    pub client: StatsClient,
    pub teams: TeamDirectory,
}

impl CommandContext {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_client(StatsClient::new(config)?))
    }

    /// Context around an existing client with the NBA team list.
    pub fn with_client(client: StatsClient) -> Self {
        Self {
            client,
            teams: TeamDirectory::nba(),
        }
    }

    /// Resolve a team reference, printing a diagnostic when it is unknown.
    ///
    /// `Ok(None)` means the reference matched no team; any other failure
    /// is returned as is.
    pub fn resolve_team(&self, team: &TeamRef) -> Result<Option<&TeamRecord>> {
        match self.teams.normalize_team_id(team) {
            Ok(id) => Ok(self.teams.find_by_id(id)),
            Err(e) if e.is_not_found() => {
                println!("Could not resolve team_id: {}", team);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Check `player_id` against the league's player list, printing
    /// `Player not found` when it is absent.
    pub async fn player_exists(&self, player_id: PlayerId) -> Result<bool> {
        let players = PlayerDirectory::fetch(&self.client).await?;
        if players.find_by_id(player_id).is_some() {
            Ok(true)
        } else {
            warn!(%player_id, "unknown player id");
            println!("Player not found");
            Ok(false)
        }
    }
}

pub fn career_path(player_id: PlayerId) -> PathBuf {
    Path::new(DATA_DIR).join(format!("{}_career.csv", player_id))
}

pub fn player_games_path(player_id: PlayerId, season: &Season) -> PathBuf {
    Path::new(DATA_DIR).join(format!("{}_games_{}.csv", player_id, season))
}

pub fn team_games_path(team_id: TeamId, season: &Season) -> PathBuf {
    Path::new(DATA_DIR).join(format!("team_{}_games_{}.csv", team_id, season))
}

/// `label` is the team abbreviation when known, else its numeric id.
pub fn team_game_logs_path(label: &str, season: Option<&Season>) -> PathBuf {
    let season = season.map_or("all", Season::as_str);
    Path::new(DATA_DIR).join(format!("team_{}_games_{}.csv", label, season))
}

/// Write `table` to `output` and print its first rows.
pub fn write_with_preview(table: &Table, output: &Path) -> Result<PathBuf> {
    let path = write_table(table, output)?;
    print!("{}", table.head(PREVIEW_ROWS));
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let season: Season = "2022-23".parse().unwrap();

        assert_eq!(
            team_games_path(TeamId::new(1610612747), &season),
            Path::new("data/team_1610612747_games_2022-23.csv")
        );
        assert_eq!(
            career_path(PlayerId::new(2544)),
            Path::new("data/2544_career.csv")
        );
        assert_eq!(
            player_games_path(PlayerId::new(2544), &"2005".parse().unwrap()),
            Path::new("data/2544_games_2005.csv")
        );
        assert_eq!(
            team_game_logs_path("LAL", Some(&season)),
            Path::new("data/team_LAL_games_2022-23.csv")
        );
        assert_eq!(
            team_game_logs_path("1610612747", None),
            Path::new("data/team_1610612747_games_all.csv")
        );
    }

    #[test]
    fn test_resolve_team_soft_fails() {
        let ctx = CommandContext::with_client(StatsClient::with_base_url("http://127.0.0.1:1").unwrap());

        let lakers = ctx.resolve_team(&"LAL".parse().unwrap()).unwrap();
        assert_eq!(lakers.map(|t| t.id), Some(TeamId::new(1610612747)));

        assert!(ctx.resolve_team(&"ZZZ".parse().unwrap()).unwrap().is_none());
    }
}
