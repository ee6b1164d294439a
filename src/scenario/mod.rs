//! Scenario descriptors.
//!
//! # Data Flow
//! ```text
//! GET /caller/<route>
//!     → table.rs (static descriptor for the route)
//!     → client (build + send one downstream request)
//!     → envelope (normalize status and payload)
//! ```
//!
//! Every demo use case is one row in [`SCENARIOS`]. A descriptor states what
//! the downstream request carries and which response shape to expect; the
//! calling routine and normalizer never branch on the scenario identity.

mod table;

use std::str::FromStr;

use reqwest::StatusCode;
use serde::de::IntoDeserializer;
use serde::{Deserialize, Serialize};

use crate::models::{StringListObject, Student, StudentListObject};

pub use table::SCENARIOS;

/// Identifier of one demo scenario. Also the key of its endpoint in config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioId {
    ResponseSingleStringDemo,
    ResponseSingleObjectDemo,
    ResponseObjectDemo,
    ResponseStringListDemo,
    ResponseObjectListDemo,
    ResponseCustomObjectListDemo,
    ResponseNestedObjectDemo,
    ResponseNestedObjectAndNestedObjectListDemo,
    RequestBodyObjectDemo,
    RequestBodyObjectListDemo,
    RequestBodyStringListDemo,
    RequestPathVariableIntegerDemo,
    RequestMultiPathVariablesDemo,
    RequestParamStringDemo,
    RequestMultiParamsDemo,
    RequestPathVariableAndParamsDemo,
    RequestFromHeaderDemo,
    RequestFromHeaderAndRequestParamDemo,
    RequestFromHeaderAndRequestBodyDemo,
    RequestFileUploadDemo,
    RequestFromHeaderAndBulkFileUpload,
    RequestPathVariableAndResponseObjectDemo,
    RequestParamStringAndResponseObjectListDemo,
    RequestFromHeaderAndRequestBodyAndResponseNestedObjectDemo,
    RequestFromHeaderAndRequestParamStringAndResponseNestedObjectListDemo,
    RequestFromHeaderAndPathVarAndParamsAndResponseNestedObjectListDemo,
    ErrorBadRequestResponseDemo,
    ErrorNotFoundResponseDemo,
    ErrorInternalServerErrorResponseDemo,
}

impl FromStr for ScenarioId {
    type Err = serde::de::value::Error;

    /// Parses the snake_case key used in `[receiver.endpoints]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::deserialize(s.into_deserializer())
    }
}

/// HTTP method used for the downstream call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DownstreamMethod {
    Get,
    Post,
    Put,
}

impl DownstreamMethod {
    pub fn as_reqwest(self) -> reqwest::Method {
        match self {
            DownstreamMethod::Get => reqwest::Method::GET,
            DownstreamMethod::Post => reqwest::Method::POST,
            DownstreamMethod::Put => reqwest::Method::PUT,
        }
    }
}

/// Values substituted into `{placeholder}` segments of the endpoint URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum PathVars {
    None,
    /// Filled left to right regardless of placeholder names.
    Positional(&'static [&'static str]),
    /// Filled by placeholder name.
    Named(&'static [(&'static str, &'static str)]),
}

/// Authorization header attached to the downstream call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderAuth {
    None,
    /// `Authorization: Basic ...` from the configured credentials.
    Basic,
    /// `Authorization: Bearer ...` from the configured token.
    Bearer,
}

/// Sample JSON documents a scenario can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonSample {
    Student,
    StudentList,
    StringList,
}

impl JsonSample {
    pub fn to_value(self) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            JsonSample::Student => serde_json::to_value(Student::sample()),
            JsonSample::StudentList => serde_json::to_value(StudentListObject::sample()),
            JsonSample::StringList => serde_json::to_value(StringListObject::sample()),
        }
    }
}

/// One of the configured upload files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadFile {
    Primary,
    Secondary,
}

/// Request body of the downstream call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequestBody {
    None,
    Json { sample: JsonSample },
    /// Every file is sent as its own part under `field`.
    Multipart {
        field: &'static str,
        files: &'static [UploadFile],
    },
}

/// Shape the downstream body is decoded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseShape {
    Text,
    Count,
    Student,
    StringList,
    StudentList,
    StudentNameAndClassList,
    ResponseObject,
    ResponseObjectList,
}

/// What happens to the body when the status is not an expected success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorBodyHandling {
    /// Decode with the declared response shape, same as a success.
    Declared,
    /// Parse as [`crate::models::ResponseObjectList`]. Only the canned
    /// bad-request and not-found scenarios do this.
    ParseStructured,
}

/// Static description of one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub id: ScenarioId,
    /// Human-readable name used in envelope descriptions and metrics.
    pub label: &'static str,
    /// Local route under `/caller`.
    pub route: &'static str,
    /// Endpoint template relative to `receiver.base_url`.
    pub default_endpoint: &'static str,
    pub method: DownstreamMethod,
    pub path_vars: PathVars,
    pub query: &'static [(&'static str, &'static str)],
    pub auth: HeaderAuth,
    pub body: RequestBody,
    pub response: ResponseShape,
    /// Statuses that count as success for this scenario.
    pub success_statuses: &'static [u16],
    pub error_body: ErrorBodyHandling,
}

impl Scenario {
    /// Whether `status` is one of the expected success statuses.
    pub fn expects(&self, status: StatusCode) -> bool {
        self.success_statuses.contains(&status.as_u16())
    }

    /// Envelope description for this scenario.
    pub fn description(&self) -> String {
        format!("call {} API", self.label)
    }
}

/// Look up a scenario by identifier.
pub fn find(id: ScenarioId) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}

/// Look up a scenario by its local route.
pub fn find_by_route(route: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.route == route)
}
