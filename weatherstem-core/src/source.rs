//! Where raw station payloads come from: the live API or a saved file.

use std::fmt::Debug;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::debug;

use crate::config::Config;

/// Anything that can produce a raw response body for the station list.
#[async_trait]
pub trait StationSource: Send + Sync + Debug {
    async fn fetch_raw(&self) -> Result<String>;
}

/// Live WeatherSTEM API access.
#[derive(Debug, Clone)]
pub struct WebSource {
    api_url: String,
    api_key: String,
    stations: Vec<String>,
    http: Client,
}

impl WebSource {
    /// Build a client for the configured endpoint.
    ///
    /// Certificate verification is disabled on purpose: some per-domain
    /// WeatherSTEM hosts serve certificates that do not match their names,
    /// and the payload is public weather data.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .danger_accept_invalid_certs(true)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            stations: config.stations.clone(),
            http,
        })
    }

    fn request_body(&self) -> serde_json::Value {
        json!({
            "api_key": self.api_key,
            "stations": self.stations,
        })
    }
}

#[async_trait]
impl StationSource for WebSource {
    async fn fetch_raw(&self) -> Result<String> {
        debug!(url = %self.api_url, stations = self.stations.len(), "requesting station data");

        let res = self
            .http
            .post(&self.api_url)
            .json(&self.request_body())
            .send()
            .await
            .context("Failed to send request to the WeatherSTEM API")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read the WeatherSTEM response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "WeatherSTEM request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        Ok(body)
    }
}

/// Replays a saved response body, for working offline.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl StationSource for FileSource {
    async fn fetch_raw(&self) -> Result<String> {
        fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read station data from {}", self.path.display()))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        // The cap may fall inside a multi-byte character; back off to a boundary.
        let mut cut = MAX;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}
