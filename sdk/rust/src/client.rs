use reqwest::Client;
use serde::{Deserialize, Serialize};

pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Envelope returned by every scenario route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeView {
    pub message: String,
    pub description: String,
    pub downstream_status_code: u16,
    pub payload: serde_json::Value,
}

/// One entry of `GET /caller/scenarios`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioInfo {
    pub id: String,
    pub label: String,
    pub path: String,
    pub method: String,
    pub endpoint: Option<String>,
    pub expected_statuses: Vec<u16>,
}

/// Result of invoking one scenario route.
#[derive(Debug, Clone)]
pub struct ScenarioRun {
    pub status: u16,
    pub request_id: Option<String>,
    /// Present when the service answered 200.
    pub envelope: Option<EnvelopeView>,
}

pub struct CallerClient {
    client: Client,
    base_url: String,
}

impl CallerClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// List the scenarios the service exposes.
    pub async fn list_scenarios(&self) -> Result<Vec<ScenarioInfo>, Error> {
        let resp = self
            .client
            .get(format!("{}/caller/scenarios", self.base_url))
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(format!("Caller returned error status {}: {}", status, text).into());
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Invoke a scenario by route, with or without the `/caller/` prefix.
    pub async fn run(&self, route: &str) -> Result<ScenarioRun, Error> {
        let path = if route.starts_with("/caller/") {
            route.to_string()
        } else {
            format!("/caller/{}", route.trim_start_matches('/'))
        };

        let resp = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;

        let status = resp.status().as_u16();
        let request_id = resp
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let text = resp.text().await?;

        let envelope = if status == 200 {
            Some(serde_json::from_str(&text)?)
        } else {
            None
        };

        Ok(ScenarioRun {
            status,
            request_id,
            envelope,
        })
    }
}
