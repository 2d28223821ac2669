//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use nba_data::{
    cli::{Commands, NbaData},
    commands::{
        handle_player_boxscores, handle_player_games, handle_player_stats, handle_players,
        handle_read_stats, handle_team_game_boxscores, handle_team_game_logs, handle_team_games,
        handle_teams, CommandContext, TeamGameBoxscoresParams,
    },
    core::ClientConfig,
    Result,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = NbaData::parse();
    let name = app.command.name();

    run(app)
        .await
        .with_context(|| format!("{} failed", name))
}

async fn run(app: NbaData) -> Result<()> {
    // read-stats never talks to the API
    if let Commands::ReadStats { filename, data_dir } = &app.command {
        handle_read_stats(filename, data_dir)?;
        return Ok(());
    }

    let config = ClientConfig::resolve(app.timeout)?;
    let ctx = CommandContext::new(&config)?;

    match app.command {
        Commands::Players { output } => {
            handle_players(&ctx, &output).await?;
        }

        Commands::Teams { output } => {
            handle_teams(&ctx, &output)?;
        }

        Commands::PlayerStats { player_id, output } => {
            handle_player_stats(&ctx, player_id, output).await?;
        }

        Commands::PlayerGames {
            player_id,
            season,
            season_type,
            output,
        } => {
            handle_player_games(&ctx, player_id, season, season_type, output).await?;
        }

        Commands::TeamGames {
            team_id,
            season,
            season_type,
            output,
        } => {
            handle_team_games(&ctx, &team_id, season, season_type, output).await?;
        }

        Commands::TeamGameLogs {
            team_id,
            season,
            season_type,
            output,
        } => {
            handle_team_game_logs(&ctx, &team_id, season, season_type, output).await?;
        }

        Commands::TeamGameBoxscores {
            team_id,
            date,
            date_from,
            date_to,
            season,
            output,
        } => {
            handle_team_game_boxscores(
                &ctx,
                TeamGameBoxscoresParams {
                    team: team_id,
                    date,
                    date_from,
                    date_to,
                    season,
                    output,
                },
            )
            .await?;
        }

        Commands::PlayerBoxscores { game_ids, output } => {
            handle_player_boxscores(&ctx, &game_ids, &output).await?;
        }

        Commands::ReadStats { .. } => {}
    }

    Ok(())
}
