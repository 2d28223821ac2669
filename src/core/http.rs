//! HTTP configuration for the NBA stats API

use crate::{NbaError, Result, BASE_URL_ENV_VAR, TIMEOUT_ENV_VAR};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ORIGIN, REFERER, USER_AGENT};
use std::time::Duration;

/// Base path for the NBA stats API.
pub const STATS_BASE_URL: &str = "https://stats.nba.com/stats";

/// Per-request timeout when neither `--timeout` nor the env var is set.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Headers stats.nba.com requires before it answers instead of hanging.
pub fn stats_header_map() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
    h.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    h.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    h.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    h.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
    h.insert("x-nba-stats-token", HeaderValue::from_static("true"));
    h
}

/// Where to send requests and how long to wait for each one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: STATS_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Resolve settings from the CLI, then `NBA_STATS_*` env vars, then defaults.
    pub fn resolve(cli_timeout: Option<u64>) -> Result<Self> {
        let base_url = std::env::var(BASE_URL_ENV_VAR)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| STATS_BASE_URL.to_string());

        let timeout_secs = match cli_timeout {
            Some(secs) => secs,
            None => match std::env::var(TIMEOUT_ENV_VAR) {
                Ok(raw) => raw.trim().parse::<u64>().map_err(|_| {
                    NbaError::invalid_input(TIMEOUT_ENV_VAR, raw.clone(), "whole seconds")
                })?,
                Err(_) => DEFAULT_TIMEOUT_SECS,
            },
        };

        if timeout_secs == 0 {
            return Err(NbaError::invalid_input(
                "timeout",
                "0",
                "a timeout of at least one second",
            ));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
