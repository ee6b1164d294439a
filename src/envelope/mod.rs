//! Uniform result envelope.
//!
//! # Responsibilities
//! - Classify a downstream outcome as success, in-band error or failure
//! - Decode the body with the scenario's declared shape
//! - Build the envelope once; it is never mutated afterwards
//!
//! # Design Decisions
//! - Error statuses are reported in-band with the downstream status code
//! - Transport and decode failures become a 500 envelope whose description
//!   is the error message
//! - Only scenarios flagged `ParseStructured` parse error bodies as
//!   `ResponseObjectList`

pub mod decode;

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::client::{CallError, DownstreamResponse};
use crate::scenario::{ErrorBodyHandling, Scenario};

pub use decode::DecodeError;

pub const SUCCESS_MESSAGE: &str = "Response from third party";
pub const ERROR_STATUS_MESSAGE: &str = "Error Response from third party";
pub const FAILURE_MESSAGE: &str = "Error while calling api";

/// Body carried in the envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// Serialized as `null`.
    Absent,
    Text(String),
    Json(Value),
}

/// How a call ended. Used for logging and metric labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    ErrorStatus,
    Failure,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::ErrorStatus => "error_status",
            Outcome::Failure => "failure",
        }
    }
}

/// Result of one scenario invocation, as returned to the local caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    message: String,
    description: String,
    downstream_status_code: u16,
    payload: Payload,
    #[serde(skip)]
    outcome: Outcome,
}

impl Envelope {
    /// Normalize the outcome of a downstream call.
    pub fn from_outcome(
        scenario: &Scenario,
        outcome: Result<DownstreamResponse, CallError>,
    ) -> Self {
        let response = match outcome {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(scenario = scenario.label, error = %err, "Downstream call failed");
                return Self::failure(&err);
            }
        };

        let expected = scenario.expects(response.status);
        let decoded = if expected || scenario.error_body == ErrorBodyHandling::Declared {
            decode::decode(scenario.response, &response.body)
        } else {
            decode::decode_structured_error(&response.body)
        };

        let payload = match decoded {
            Ok(payload) => payload,
            Err(err) => {
                tracing::error!(
                    scenario = scenario.label,
                    status = response.status.as_u16(),
                    error = %err,
                    "Failed to decode downstream body"
                );
                return Self::failure(&err);
            }
        };

        let (message, outcome) = if expected {
            (SUCCESS_MESSAGE, Outcome::Success)
        } else {
            tracing::warn!(
                scenario = scenario.label,
                status = response.status.as_u16(),
                "Downstream returned an unexpected status"
            );
            (ERROR_STATUS_MESSAGE, Outcome::ErrorStatus)
        };

        Self {
            message: message.to_string(),
            description: scenario.description(),
            downstream_status_code: response.status.as_u16(),
            payload,
            outcome,
        }
    }

    /// Envelope for a call that could not complete.
    pub fn failure(error: &dyn fmt::Display) -> Self {
        Self {
            message: FAILURE_MESSAGE.to_string(),
            description: error.to_string(),
            downstream_status_code: 500,
            payload: Payload::Absent,
            outcome: Outcome::Failure,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn downstream_status_code(&self) -> u16 {
        self.downstream_status_code
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{find, ScenarioId};
    use reqwest::StatusCode;
    use serde_json::json;

    fn response(status: StatusCode, body: &str) -> Result<DownstreamResponse, CallError> {
        Ok(DownstreamResponse {
            status,
            body: body.to_string(),
        })
    }

    #[test]
    fn test_success_envelope() {
        let scenario = find(ScenarioId::ResponseSingleStringDemo).unwrap();
        let envelope = Envelope::from_outcome(scenario, response(StatusCode::OK, "Hello"));

        assert_eq!(envelope.outcome(), Outcome::Success);
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "message": "Response from third party",
                "description": "call ResponseSingleStringDemo API",
                "downstreamStatusCode": 200,
                "payload": "Hello"
            })
        );
    }

    #[test]
    fn test_create_expects_201_only() {
        let scenario = find(ScenarioId::RequestBodyObjectDemo).unwrap();

        let created = Envelope::from_outcome(scenario, response(StatusCode::CREATED, "saved"));
        assert_eq!(created.message(), SUCCESS_MESSAGE);
        assert_eq!(created.downstream_status_code(), 201);

        let ok = Envelope::from_outcome(scenario, response(StatusCode::OK, "saved"));
        assert_eq!(ok.message(), ERROR_STATUS_MESSAGE);
        assert_eq!(ok.payload(), &Payload::Text("saved".to_string()));
    }

    #[test]
    fn test_error_status_keeps_declared_shape() {
        let scenario = find(ScenarioId::ErrorInternalServerErrorResponseDemo).unwrap();
        let envelope = Envelope::from_outcome(
            scenario,
            response(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":"boom"}"#),
        );
        assert_eq!(envelope.outcome(), Outcome::ErrorStatus);
        assert_eq!(envelope.downstream_status_code(), 500);
        assert_eq!(envelope.payload(), &Payload::Text(r#"{"error":"boom"}"#.to_string()));
    }

    #[test]
    fn test_structured_error_body_for_bad_request() {
        let scenario = find(ScenarioId::ErrorBadRequestResponseDemo).unwrap();
        let body = r#"{"timestamp":"t","status":{"code":"400","message":"Bad Request"}}"#;
        let envelope = Envelope::from_outcome(scenario, response(StatusCode::BAD_REQUEST, body));

        assert_eq!(envelope.message(), ERROR_STATUS_MESSAGE);
        assert_eq!(envelope.downstream_status_code(), 400);
        let Payload::Json(value) = envelope.payload() else {
            panic!("expected json payload");
        };
        assert_eq!(value["status"]["message"], "Bad Request");
        assert_eq!(value["dataList"], Value::Null);
    }

    #[test]
    fn test_unparseable_structured_error_body_is_a_failure() {
        let scenario = find(ScenarioId::ErrorNotFoundResponseDemo).unwrap();
        let envelope =
            Envelope::from_outcome(scenario, response(StatusCode::NOT_FOUND, "Not Found"));
        assert_eq!(envelope.outcome(), Outcome::Failure);
        assert_eq!(envelope.downstream_status_code(), 500);
        assert_eq!(envelope.payload(), &Payload::Absent);
    }

    #[test]
    fn test_decode_failure_on_success_status() {
        let scenario = find(ScenarioId::ResponseSingleObjectDemo).unwrap();
        let envelope = Envelope::from_outcome(scenario, response(StatusCode::OK, "ten"));
        assert_eq!(envelope.message(), FAILURE_MESSAGE);
        assert!(envelope.description().starts_with("cannot decode Count response"));
    }

    #[test]
    fn test_call_error_becomes_failure() {
        let scenario = find(ScenarioId::RequestParamStringDemo).unwrap();
        let envelope = Envelope::from_outcome(
            scenario,
            Err(CallError::MissingPathVariable("id".to_string())),
        );
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "message": "Error while calling api",
                "description": "missing value for path variable `id`",
                "downstreamStatusCode": 500,
                "payload": null
            })
        );
    }
}
