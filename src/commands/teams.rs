//! Team list and team game commands

use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    cli::types::{DateRange, Season, SeasonType, TeamRef},
    core::{write_table, Table},
    nba::endpoints::{LeagueGameFinderRequest, TeamGameLogRequest, TeamGameLogsRequest},
    Result,
};

use super::common::{team_game_logs_path, team_games_path, write_with_preview, CommandContext};

/// Columns shown when listing games found by date.
pub const GAME_PREVIEW_COLUMNS: [&str; 5] = ["GAME_ID", "GAME_DATE", "MATCHUP", "WL", "PTS"];

/// Handle the `teams` command
pub fn handle_teams(ctx: &CommandContext, output: &Path) -> Result<Option<Table>> {
    let table = ctx.teams.to_table();
    write_with_preview(&table, output)?;
    Ok(Some(table))
}

/// Handle the `team-games` command
///
/// The CSV is written even when the season has no games.
pub async fn handle_team_games(
    ctx: &CommandContext,
    team: &TeamRef,
    season: Season,
    season_type: SeasonType,
    output: Option<PathBuf>,
) -> Result<Option<Table>> {
    let Some(record) = ctx.resolve_team(team)? else {
        return Ok(None);
    };
    let team_id = record.id;

    let output = output.unwrap_or_else(|| team_games_path(team_id, &season));
    let table = ctx
        .client
        .fetch_table(&TeamGameLogRequest {
            team_id,
            season: season.clone(),
            season_type,
        })
        .await?;

    if table.is_empty() {
        println!(
            "No game data found for team {} in season {}",
            record.abbreviation, season
        );
    }
    info!(%team_id, games = table.len(), "fetched team game log");

    write_with_preview(&table, &output)?;
    Ok(Some(table))
}

/// Handle the `team-game-logs` command
///
/// Season and season type are optional filters. The CSV is always written.
pub async fn handle_team_game_logs(
    ctx: &CommandContext,
    team: &TeamRef,
    season: Option<Season>,
    season_type: Option<SeasonType>,
    output: Option<PathBuf>,
) -> Result<Option<Table>> {
    let Some(record) = ctx.resolve_team(team)? else {
        return Ok(None);
    };
    let team_id = record.id;

    let output = output.unwrap_or_else(|| {
        let label = match record.abbreviation.as_str() {
            "" => team_id.to_string(),
            abbr => abbr.to_string(),
        };
        team_game_logs_path(&label, season.as_ref())
    });
    let table = ctx
        .client
        .fetch_table(&TeamGameLogsRequest {
            team_id,
            season,
            season_type,
        })
        .await?;
    info!(%team_id, games = table.len(), "fetched team game logs");

    write_with_preview(&table, &output)?;
    Ok(Some(table))
}

/// Arguments for [`handle_team_game_boxscores`]
#[derive(Debug, Clone)]
pub struct TeamGameBoxscoresParams {
    pub team: TeamRef,
    pub date: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub season: Option<Season>,
    pub output: PathBuf,
}

/// Handle the `team-game-boxscores` command
///
/// Finds the team's games in a date window (or a single `date`) and writes
/// them out. Nothing is written when no games match.
pub async fn handle_team_game_boxscores(
    ctx: &CommandContext,
    params: TeamGameBoxscoresParams,
) -> Result<Option<Table>> {
    let dates = DateRange::from_cli(
        params.date.as_deref(),
        params.date_from.as_deref(),
        params.date_to.as_deref(),
    )?;

    let Some(record) = ctx.resolve_team(&params.team)? else {
        return Ok(None);
    };

    let table = ctx
        .client
        .fetch_table(&LeagueGameFinderRequest {
            team_id: record.id,
            dates,
            season: params.season,
        })
        .await?;
    info!(team_id = %record.id, %dates, games = table.len(), "fetched team games");

    if table.is_empty() {
        println!("No games found for {}", params.team);
        return Ok(None);
    }

    println!("\nFound {} games:", table.len());
    print!("{}", table.select(&GAME_PREVIEW_COLUMNS));
    write_table(&table, &params.output)?;
    Ok(Some(table))
}
