//! Error types for the NBA data CLI

use std::fmt;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, NbaError>;

/// Kind of entity a lookup failed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Team,
    Player,
    Game,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::Team => "Team",
            EntityKind::Player => "Player",
            EntityKind::Game => "Game",
        };
        write!(f, "{}", s)
    }
}

#[derive(Error, Debug)]
pub enum NbaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response from {endpoint}: {message}")]
    Upstream { endpoint: String, message: String },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{entity} not found: {input}")]
    NotFound { entity: EntityKind, input: String },

    #[error("Invalid date '{input}': expected YYYY-MM-DD or MM/DD/YYYY")]
    InvalidDate { input: String },

    #[error("Invalid {parameter} '{value}': expected {expected}")]
    InvalidInput {
        parameter: String,
        value: String,
        expected: String,
    },
}

impl NbaError {
    pub fn not_found(entity: EntityKind, input: impl Into<String>) -> Self {
        NbaError::NotFound {
            entity,
            input: input.into(),
        }
    }

    pub fn invalid_input(
        parameter: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        NbaError::InvalidInput {
            parameter: parameter.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Whether this is an expected miss that commands recover from locally.
    pub fn is_not_found(&self) -> bool {
        matches!(self, NbaError::NotFound { .. })
    }
}
