//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::{GameId, PlayerId, Season, SeasonType, TeamRef};

#[derive(Debug, Parser)]
#[clap(
    name = "nba-data",
    about = "Fetch NBA statistics and save them as CSV files"
)]
pub struct NbaData {
    /// Per-request timeout in seconds (or set `NBA_STATS_TIMEOUT` env var).
    #[clap(long, global = true)]
    pub timeout: Option<u64>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch all NBA players and save to CSV
    Players {
        /// Output CSV file path.
        #[clap(long, default_value = "data/players.csv")]
        output: PathBuf,
    },

    /// Fetch all NBA teams and save to CSV
    Teams {
        /// Output CSV file path.
        #[clap(long, default_value = "data/teams.csv")]
        output: PathBuf,
    },

    /// Fetch a player's career statistics
    PlayerStats {
        /// NBA player ID (e.g. 2544).
        #[clap(long)]
        player_id: PlayerId,

        /// Output CSV file path (default: data/{player_id}_career.csv).
        #[clap(long)]
        output: Option<PathBuf>,
    },

    /// Fetch a player's game log for a specific season
    PlayerGames {
        /// NBA player ID (e.g. 2544).
        #[clap(long)]
        player_id: PlayerId,

        /// Season string (e.g. "2005", "2022-23").
        #[clap(long)]
        season: Season,

        /// Part of the season to fetch.
        #[clap(long, value_enum, default_value_t = SeasonType::default())]
        season_type: SeasonType,

        /// Output CSV file path (default: data/{player_id}_games_{season}.csv).
        #[clap(long)]
        output: Option<PathBuf>,
    },

    /// Fetch a team's game log for a specific season
    TeamGames {
        /// Team identifier: numeric id, abbreviation (e.g. "LAL"), or full team name.
        #[clap(long)]
        team_id: TeamRef,

        /// Season string (e.g. "2018", "2022-23").
        #[clap(long)]
        season: Season,

        /// Part of the season to fetch.
        #[clap(long, value_enum, default_value_t = SeasonType::default())]
        season_type: SeasonType,

        /// Output CSV file path (default: data/team_{team_id}_games_{season}.csv).
        #[clap(long)]
        output: Option<PathBuf>,
    },

    /// Fetch team game logs, optionally filtered by season and season type
    TeamGameLogs {
        /// Team identifier: numeric id, abbreviation (e.g. "LAL"), or full team name.
        #[clap(long)]
        team_id: TeamRef,

        /// Season string (e.g. "2022-23").
        #[clap(long)]
        season: Option<Season>,

        /// Part of the season to fetch.
        #[clap(long, value_enum)]
        season_type: Option<SeasonType>,

        /// Output CSV file path (default: data/team_{abbreviation}_games_{season}.csv).
        #[clap(long)]
        output: Option<PathBuf>,
    },

    /// Fetch team games within a date range and save to CSV
    TeamGameBoxscores {
        /// Team identifier: numeric id, abbreviation (e.g. "LAL"), or full team name.
        #[clap(long)]
        team_id: TeamRef,

        /// Specific date (YYYY-MM-DD). Sets both date-from and date-to.
        #[clap(long)]
        date: Option<String>,

        /// Start date for the range (YYYY-MM-DD).
        #[clap(long)]
        date_from: Option<String>,

        /// End date for the range (YYYY-MM-DD).
        #[clap(long)]
        date_to: Option<String>,

        /// Season filter (e.g. "2023-24").
        #[clap(long)]
        season: Option<Season>,

        /// Output CSV file path.
        #[clap(long, default_value = "data/demo_boxscores.csv")]
        output: PathBuf,
    },

    /// Fetch player box scores for one or more games
    PlayerBoxscores {
        /// NBA game ID (e.g. "0022400123"); repeatable.
        #[clap(long = "game-id", required = true)]
        game_ids: Vec<GameId>,

        /// Output CSV file path.
        #[clap(long, default_value = "data/player_boxscores.csv")]
        output: PathBuf,
    },

    /// Read and display a CSV file containing NBA statistics
    ReadStats {
        /// Name of the CSV file to read.
        filename: String,

        /// Directory where the file is located.
        #[clap(long, default_value = "data")]
        data_dir: PathBuf,
    },
}

impl Commands {
    /// Subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Players { .. } => "players",
            Commands::Teams { .. } => "teams",
            Commands::PlayerStats { .. } => "player-stats",
            Commands::PlayerGames { .. } => "player-games",
            Commands::TeamGames { .. } => "team-games",
            Commands::TeamGameLogs { .. } => "team-game-logs",
            Commands::TeamGameBoxscores { .. } => "team-game-boxscores",
            Commands::PlayerBoxscores { .. } => "player-boxscores",
            Commands::ReadStats { .. } => "read-stats",
        }
    }
}
