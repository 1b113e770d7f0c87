//! iTranvías timetable client.

use std::time::Duration;

use serde_json::{json, Value};

use crate::config::ServerConfig;
use crate::lines::map_line_numbers_to_friendly_names;

/// Errors that can occur when querying the timetable API.
#[derive(Debug, thiserror::Error)]
pub enum TimetableError {
    /// HTTP request failed before a response arrived
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-2xx status
    #[error("HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// Response body was not valid JSON
    #[error("{message}")]
    Json { message: String, raw: String },
}

impl TimetableError {
    /// Fold the error into the JSON shape returned to the caller.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Json { message, raw } => json!({
                "error": format!("Error parsing JSON: {message}"),
                "raw": raw,
            }),
            other => json!({
                "error": format!("Error during API analysis: {other}"),
            }),
        }
    }
}

/// Client for the upstream timetable endpoint.
#[derive(Debug, Clone)]
pub struct TimetableClient {
    http: reqwest::Client,
    base_url: String,
}

impl TimetableClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, TimetableError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("mcp-bus-finder/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self, TimetableError> {
        Self::new(config.timetable_url.clone(), config.http_timeout)
    }

    /// Fetch the raw timetable document for a stop.
    pub async fn fetch(&self, stop: i64) -> Result<Value, TimetableError> {
        let cache_buster = chrono::Utc::now().timestamp_millis();

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("dato", stop.to_string()),
                ("func", "0".to_string()),
                ("_", cache_buster.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TimetableError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| TimetableError::Json {
            message: e.to_string(),
            raw: body,
        })
    }

    /// Timetable for a stop with friendly line names, or an `{error}` object.
    pub async fn get_bus_timetable(&self, stop: i64) -> Value {
        match self.fetch(stop).await {
            Ok(doc) => map_line_numbers_to_friendly_names(&doc),
            Err(e) => {
                tracing::warn!(stop, error = %e, "timetable request failed");
                e.to_json()
            }
        }
    }
}
