//! Type-safe wrappers for NBA stats identifiers and time values.

pub mod ids;
pub mod time;

pub use ids::{GameId, PlayerId, TeamId, TeamRef};
pub use time::{DateRange, Season, SeasonType};
