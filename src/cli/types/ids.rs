//! ID types for NBA stats entities.

use crate::error::{NbaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for NBA team IDs (e.g. `1610612747` for the Lakers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u64);

impl TeamId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe wrapper for NBA player IDs.
///
/// # Examples
///
/// ```rust
/// use nba_data::PlayerId;
///
/// let id: PlayerId = "2544".parse().unwrap();
/// assert_eq!(id.as_u64(), 2544);
/// assert!("0".parse::<PlayerId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().parse::<u64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(NbaError::invalid_input(
                "player_id",
                s,
                "a positive integer player ID",
            )),
        }
    }
}

/// NBA game ID: always ten digits, e.g. `0022400123`.
///
/// Shorter all-digit input is left-padded with zeros, so `22400123`
/// parses to `0022400123`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(String);

impl GameId {
    pub const LEN: usize = 10;

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for GameId {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let all_digits = !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit());
        if !all_digits || trimmed.len() > Self::LEN || trimmed.chars().all(|c| c == '0') {
            return Err(NbaError::invalid_input(
                "game_id",
                s,
                "10-digit NBA game ID (e.g. '0022400123')",
            ));
        }
        Ok(Self(format!("{:0>width$}", trimmed, width = Self::LEN)))
    }
}

/// A loosely-typed team reference as typed by the user.
///
/// Parsing only classifies the input; resolution against the known teams
/// happens in [`crate::nba::reference::TeamDirectory::normalize_team_id`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamRef {
    /// All-digit input, e.g. `1610612747`
    Numeric(u64),
    /// Two or three letters, e.g. `LAL`
    Abbreviation(String),
    /// Anything else, e.g. `Los Angeles Lakers` or `lakers`
    FullName(String),
}

impl fmt::Display for TeamRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamRef::Numeric(id) => write!(f, "{}", id),
            TeamRef::Abbreviation(s) | TeamRef::FullName(s) => f.write_str(s),
        }
    }
}

impl FromStr for TeamRef {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(NbaError::invalid_input(
                "team_id",
                s,
                "team ID, abbreviation (e.g. 'LAL'), or team name",
            ));
        }

        if trimmed.chars().all(|c| c.is_ascii_digit()) {
            return trimmed.parse::<u64>().map(TeamRef::Numeric).map_err(|_| {
                NbaError::invalid_input("team_id", s, "a team ID that fits in 64 bits")
            });
        }

        let is_abbreviation =
            (2..=3).contains(&trimmed.len()) && trimmed.chars().all(|c| c.is_ascii_alphabetic());
        if is_abbreviation {
            Ok(TeamRef::Abbreviation(trimmed.to_string()))
        } else {
            Ok(TeamRef::FullName(trimmed.to_string()))
        }
    }
}
