//! Player list, career and game log commands

use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    cli::types::{PlayerId, Season, SeasonType},
    core::Table,
    nba::{
        endpoints::{PlayerCareerStatsRequest, PlayerGameLogRequest},
        PlayerDirectory,
    },
    Result,
};

use super::common::{career_path, player_games_path, write_with_preview, CommandContext};

/// Handle the `players` command
pub async fn handle_players(ctx: &CommandContext, output: &Path) -> Result<Option<Table>> {
    let players = PlayerDirectory::fetch(&ctx.client).await?;
    if players.is_empty() {
        println!("No player data found");
        return Ok(None);
    }

    let table = players.to_table();
    write_with_preview(&table, output)?;
    Ok(Some(table))
}

/// Handle the `player-stats` command
pub async fn handle_player_stats(
    ctx: &CommandContext,
    player_id: PlayerId,
    output: Option<PathBuf>,
) -> Result<Option<Table>> {
    if !ctx.player_exists(player_id).await? {
        return Ok(None);
    }

    let table = ctx
        .client
        .fetch_table(&PlayerCareerStatsRequest { player_id })
        .await?;
    if table.is_empty() {
        println!("No career stats found for player {}", player_id);
        return Ok(None);
    }
    info!(%player_id, seasons = table.len(), "fetched career stats");

    let output = output.unwrap_or_else(|| career_path(player_id));
    write_with_preview(&table, &output)?;
    Ok(Some(table))
}

/// Handle the `player-games` command
pub async fn handle_player_games(
    ctx: &CommandContext,
    player_id: PlayerId,
    season: Season,
    season_type: SeasonType,
    output: Option<PathBuf>,
) -> Result<Option<Table>> {
    if !ctx.player_exists(player_id).await? {
        return Ok(None);
    }

    let output = output.unwrap_or_else(|| player_games_path(player_id, &season));
    let table = ctx
        .client
        .fetch_table(&PlayerGameLogRequest {
            player_id,
            season,
            season_type,
        })
        .await?;
    info!(%player_id, games = table.len(), "fetched player game log");

    write_with_preview(&table, &output)?;
    Ok(Some(table))
}
