//! NBA Stats Data Library
//!
//! Fetches data from the NBA stats web API (`stats.nba.com/stats`),
//! flattens the responses into tables and writes them out as CSV.
//!
//! ## Features
//!
//! - **Identifier Normalization**: resolve team ids, abbreviations and names
//!   to canonical numeric team ids
//! - **Request Builders**: one typed request per stats endpoint, mapped onto
//!   the exact wire parameter names
//! - **Box Score Normalization**: legacy and camelCase player box-score
//!   columns mapped onto a single canonical column list
//! - **CSV Output**: deterministic default output paths under `data/`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_data::{commands::{handle_team_games, CommandContext}, core::ClientConfig, SeasonType};
//!
//! # async fn example() -> nba_data::Result<()> {
//! let ctx = CommandContext::new(&ClientConfig::resolve(None)?)?;
//! let team = "LAL".parse()?;
//! let season = "2022-23".parse()?;
//!
//! // Writes data/team_1610612747_games_2022-23.csv
//! handle_team_games(&ctx, &team, season, SeasonType::RegularSeason, None).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export NBA_STATS_BASE_URL=https://stats.nba.com/stats
//! export NBA_STATS_TIMEOUT=30
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod nba;

// Re-export commonly used types
pub use cli::types::{DateRange, GameId, PlayerId, Season, SeasonType, TeamId, TeamRef};
pub use crate::core::{Cell, Table};
pub use error::{EntityKind, NbaError, Result};

pub const BASE_URL_ENV_VAR: &str = "NBA_STATS_BASE_URL";
pub const TIMEOUT_ENV_VAR: &str = "NBA_STATS_TIMEOUT";
