//! Client for the caller service's local endpoints.

mod client;

pub use client::{CallerClient, EnvelopeView, ScenarioInfo, ScenarioRun};
