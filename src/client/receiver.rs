//! HTTP client for the receiver service.

use std::time::Duration;

use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;

use super::template::build_url;
use super::CallError;
use crate::config::schema::{BasicAuthConfig, CallerConfig, UploadConfig};
use crate::scenario::{HeaderAuth, RequestBody, Scenario, UploadFile};

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Status and raw body of one downstream response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownstreamResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Sends scenario requests to the receiver.
///
/// Built once at startup; cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ReceiverClient {
    http: reqwest::Client,
    basic_auth: BasicAuthConfig,
    bearer_token: String,
    uploads: UploadConfig,
}

impl ReceiverClient {
    pub fn new(config: &CallerConfig) -> Result<Self, CallError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeouts.connect_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.timeouts.downstream_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            basic_auth: config.receiver.basic_auth.clone(),
            bearer_token: config.receiver.bearer_token.clone(),
            uploads: config.uploads.clone(),
        })
    }

    /// Perform exactly one downstream call for `scenario` against `template`.
    pub async fn call(
        &self,
        scenario: &Scenario,
        template: &str,
    ) -> Result<DownstreamResponse, CallError> {
        let url = build_url(template, scenario.path_vars, scenario.query)?;
        let mut builder = self.http.request(scenario.method.as_reqwest(), url);

        builder = match scenario.auth {
            HeaderAuth::None => builder,
            HeaderAuth::Basic => builder.basic_auth(
                &self.basic_auth.username,
                Some(&self.basic_auth.password),
            ),
            HeaderAuth::Bearer => builder.bearer_auth(&self.bearer_token),
        };

        let (builder, request_data) = match scenario.body {
            RequestBody::None => (builder, String::new()),
            RequestBody::Json { sample } => {
                let value = sample.to_value()?;
                let data = value.to_string();
                (builder.json(&value), data)
            }
            RequestBody::Multipart { field, files } => {
                let mut form = Form::new();
                let mut names = Vec::with_capacity(files.len());
                for file in files {
                    let (part, name) = self.upload_part(*file).await?;
                    form = form.part(field, part);
                    names.push(name);
                }
                (builder.multipart(form), format!("{field}: {}", names.join(", ")))
            }
        };

        let request = builder.build()?;
        tracing::info!(
            scenario = scenario.label,
            url = %request.url(),
            method = %request.method(),
            request_data = %request_data,
            headers = ?mask_headers(request.headers()),
            "Calling downstream"
        );

        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;

        tracing::info!(
            scenario = scenario.label,
            status = status.as_u16(),
            body = %body,
            "Downstream responded"
        );

        Ok(DownstreamResponse { status, body })
    }

    async fn upload_part(&self, file: UploadFile) -> Result<(Part, String), CallError> {
        let path = self.uploads.path(file);
        let upload_error = |source| CallError::Upload {
            path: path.display().to_string(),
            source,
        };
        let handle = tokio::fs::File::open(path).await.map_err(upload_error)?;
        let length = handle.metadata().await.map_err(upload_error)?.len();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let part = Part::stream_with_length(reqwest::Body::from(handle), length)
            .file_name(name.clone())
            .mime_str(XLSX_MIME)?;
        Ok((part, name))
    }
}

/// Header list for logging with credential values replaced.
pub fn mask_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let shown = if name == AUTHORIZATION {
                let raw = value.to_str().unwrap_or_default();
                match raw.split_once(' ') {
                    Some((scheme, _)) => format!("{scheme} ****"),
                    None => "****".to_string(),
                }
            } else {
                value.to_str().unwrap_or("<binary>").to_string()
            };
            (name.to_string(), shown)
        })
        .collect()
}
