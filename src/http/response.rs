//! Response bodies other than the envelope.

use serde::Serialize;

use crate::scenario::{
    DownstreamMethod, HeaderAuth, RequestBody, ResponseShape, Scenario, ScenarioId,
};

/// Public view of one scenario, served by `GET /caller/scenarios`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSummary {
    pub id: ScenarioId,
    pub label: &'static str,
    /// Full local path, including the `/caller` prefix.
    pub path: String,
    pub method: DownstreamMethod,
    /// Resolved endpoint template; `None` when unconfigured.
    pub endpoint: Option<String>,
    pub auth: HeaderAuth,
    pub body: RequestBody,
    pub response_shape: ResponseShape,
    pub expected_statuses: &'static [u16],
}

impl ScenarioSummary {
    pub fn new(prefix: &str, scenario: &Scenario, endpoint: Option<&str>) -> Self {
        Self {
            id: scenario.id,
            label: scenario.label,
            path: format!("{prefix}{}", scenario.route),
            method: scenario.method,
            endpoint: endpoint.map(str::to_string),
            auth: scenario.auth,
            body: scenario.body,
            response_shape: scenario.response,
            expected_statuses: scenario.success_statuses,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
