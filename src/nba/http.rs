//! HTTP client for the NBA stats API

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::{
    core::{stats_header_map, ClientConfig, Table},
    nba::{endpoints::StatsRequest, types::StatsEnvelope},
    NbaError, Result,
};

#[cfg(test)]
mod tests;

/// Thin wrapper over `reqwest` that knows the API base URL and headers.
///
/// Every call is a single GET with no retry; non-2xx statuses and
/// timeouts come back as [`NbaError::Http`].
#[derive(Debug, Clone)]
pub struct StatsClient {
    http: Client,
    base_url: String,
}

impl StatsClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .default_headers(stats_header_map())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Client against a custom base URL with the default timeout.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Self::new(&ClientConfig {
            base_url: base_url.to_string(),
            ..ClientConfig::default()
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}/{endpoint}` and return the raw JSON body.
    pub async fn get_json(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, ?params, "stats request");

        let v = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        Ok(v)
    }

    /// Issue `request` and return the raw JSON body.
    pub async fn fetch<R: StatsRequest>(&self, request: &R) -> Result<Value> {
        self.get_json(R::ENDPOINT, &request.params()).await
    }

    /// Issue `request` and return its result set as a table.
    pub async fn fetch_table<R: StatsRequest>(&self, request: &R) -> Result<Table> {
        let raw = self.fetch(request).await?;
        let envelope: StatsEnvelope = serde_json::from_value(raw)?;

        envelope
            .into_table(R::RESULT_SET)
            .ok_or_else(|| NbaError::Upstream {
                endpoint: R::ENDPOINT.to_string(),
                message: "response contained no result sets".to_string(),
            })
    }
}
