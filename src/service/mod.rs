//! Scenario execution.
//!
//! Resolves each scenario's endpoint once at startup and runs one scenario
//! per call: downstream request, then normalization into an [`Envelope`].

use std::collections::BTreeMap;
use std::time::Instant;

use thiserror::Error;

use crate::client::{CallError, ReceiverClient};
use crate::config::CallerConfig;
use crate::envelope::Envelope;
use crate::observability::metrics;
use crate::scenario::{Scenario, ScenarioId, SCENARIOS};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("no endpoint configured for {0}")]
    EndpointNotConfigured(&'static str),

    #[error("failed to build receiver client: {0}")]
    Client(#[from] CallError),
}

/// Runs scenarios against the configured receiver.
pub struct CallerService {
    client: ReceiverClient,
    endpoints: BTreeMap<ScenarioId, String>,
}

impl CallerService {
    pub fn new(config: &CallerConfig) -> Result<Self, ServiceError> {
        let client = ReceiverClient::new(config)?;
        let endpoints = SCENARIOS
            .iter()
            .filter_map(|s| config.receiver.endpoint_for(s).map(|url| (s.id, url)))
            .collect();

        Ok(Self { client, endpoints })
    }

    /// Endpoint template resolved for `id`.
    pub fn endpoint(&self, id: ScenarioId) -> Option<&str> {
        self.endpoints.get(&id).map(String::as_str)
    }

    /// Invoke `scenario` once.
    ///
    /// Downstream failures are reported inside the envelope; only a
    /// missing endpoint is an error here.
    pub async fn run(&self, scenario: &Scenario) -> Result<Envelope, ServiceError> {
        let template = self
            .endpoint(scenario.id)
            .ok_or(ServiceError::EndpointNotConfigured(scenario.label))?;

        let start = Instant::now();
        let outcome = self.client.call(scenario, template).await;
        let envelope = Envelope::from_outcome(scenario, outcome);

        metrics::record_call(scenario.label, envelope.outcome().as_str(), start);
        tracing::debug!(
            scenario = scenario.label,
            outcome = envelope.outcome().as_str(),
            status = envelope.downstream_status_code(),
            "Scenario finished"
        );

        Ok(envelope)
    }
}
