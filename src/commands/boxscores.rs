//! Player box scores for one or more games

use std::path::Path;

use tracing::{info, warn};

use crate::{
    cli::types::GameId,
    core::{write_table, Table},
    nba::{
        boxscore::{normalize_player_rows, player_rows, CANONICAL_COLUMNS},
        endpoints::BoxScoreTraditionalRequest,
    },
    NbaError, Result,
};

use super::common::{CommandContext, PREVIEW_ROWS};

/// Result of fetching several games where some may fail.
#[derive(Debug)]
pub struct BatchOutcome {
    /// Rows of every game that succeeded, in request order.
    pub table: Table,
    /// Games fetched successfully but with no player rows.
    pub empty: Vec<GameId>,
    pub failures: Vec<(GameId, NbaError)>,
}

impl BatchOutcome {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Fetch and normalize the player box score of a single game.
pub async fn fetch_player_boxscores(ctx: &CommandContext, game_id: &GameId) -> Result<Table> {
    let body = ctx
        .client
        .fetch(&BoxScoreTraditionalRequest {
            game_id: game_id.clone(),
        })
        .await?;
    let rows = player_rows(&body)?;
    Ok(normalize_player_rows(&rows, game_id))
}

/// Fetch each game in turn. A failing game is recorded and skipped.
pub async fn fetch_player_boxscores_batch(
    ctx: &CommandContext,
    game_ids: &[GameId],
) -> BatchOutcome {
    let mut outcome = BatchOutcome {
        table: Table::new(CANONICAL_COLUMNS),
        empty: Vec::new(),
        failures: Vec::new(),
    };

    for game_id in game_ids {
        match fetch_player_boxscores(ctx, game_id).await {
            Ok(table) if table.is_empty() => outcome.empty.push(game_id.clone()),
            Ok(table) => {
                info!(%game_id, players = table.len(), "fetched box score");
                outcome.table.append(&table);
            }
            Err(e) => {
                warn!(%game_id, error = %e, "box score fetch failed, skipping");
                outcome.failures.push((game_id.clone(), e));
            }
        }
    }

    outcome
}

/// Handle the `player-boxscores` command
///
/// A single failing game fails the command only when no game succeeded;
/// otherwise the rows fetched are written and the failures listed.
pub async fn handle_player_boxscores(
    ctx: &CommandContext,
    game_ids: &[GameId],
    output: &Path,
) -> Result<Option<Table>> {
    let mut outcome = fetch_player_boxscores_batch(ctx, game_ids).await;

    for game_id in &outcome.empty {
        println!("No player box score data found for game {}", game_id);
    }

    if outcome.table.is_empty() {
        if !outcome.failures.is_empty() {
            let (_, first) = outcome.failures.remove(0);
            return Err(first);
        }
        return Ok(None);
    }

    write_table(&outcome.table, output)?;
    print!("{}", outcome.table.head(PREVIEW_ROWS));

    if !outcome.is_complete() {
        println!("Failed to fetch {} game(s):", outcome.failures.len());
        for (game_id, e) in &outcome.failures {
            println!("  {}: {}", game_id, e);
        }
    }

    Ok(Some(outcome.table))
}
