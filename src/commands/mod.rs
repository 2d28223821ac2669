//! Command implementations for the nba-data CLI
//!
//! Every handler returns `Result<Option<Table>>`: `Ok(None)` when the
//! requested entity was not found or there was nothing to write (a message
//! has already been printed), `Err` for everything else.

pub mod boxscores;
pub mod common;
pub mod players;
pub mod read_stats;
pub mod teams;

#[cfg(test)]
mod tests;

pub use boxscores::{handle_player_boxscores, BatchOutcome};
pub use common::CommandContext;
pub use players::{handle_player_games, handle_player_stats, handle_players};
pub use read_stats::handle_read_stats;
pub use teams::{
    handle_team_game_boxscores, handle_team_game_logs, handle_team_games, handle_teams,
    TeamGameBoxscoresParams,
};
