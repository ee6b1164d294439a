//! Request handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::response::{HealthResponse, ScenarioSummary};
use super::server::{AppState, CALLER_PREFIX};
use crate::scenario::{Scenario, SCENARIOS};

/// Run one scenario and return its envelope.
pub async fn run_scenario(state: AppState, scenario: &'static Scenario) -> Response {
    match state.service.run(scenario).await {
        Ok(envelope) => Json(envelope).into_response(),
        Err(e) => {
            tracing::error!(scenario = scenario.label, error = %e, "Scenario could not run");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn list_scenarios(State(state): State<AppState>) -> Json<Vec<ScenarioSummary>> {
    let summaries = SCENARIOS
        .iter()
        .map(|s| ScenarioSummary::new(CALLER_PREFIX, s, state.service.endpoint(s.id)))
        .collect();
    Json(summaries)
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
