//! # HTTP Service
//!
//! Sends processing requests to the model service over HTTP.

use super::{ProcessingService, ServiceReply};
use crate::error::SubmitError;
use crate::interface::codec::RequestPayload;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Url};

/// Path of the processing endpoint on the model service
pub const PROCESS_PATH: &str = "/api/model/process";

/// Endpoint used when no profile configures one
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/model/process";

/// Processing service reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpService {
    client: Client,
    endpoint: Url,
}

impl HttpService {
    /// Create a service posting to `endpoint`
    pub fn new(endpoint: &str) -> Result<Self> {
        tracing::debug!("Creating HttpService for endpoint {endpoint}");
        let endpoint =
            Url::parse(endpoint).with_context(|| format!("Invalid endpoint URL '{endpoint}'"))?;
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        tracing::info!("HTTP client created successfully");

        Ok(Self { client, endpoint })
    }

    /// Create a service for the processing endpoint of the server at `base_url`
    pub fn for_server(base_url: &str) -> Result<Self> {
        Self::new(&format!("{}{PROCESS_PATH}", base_url.trim_end_matches('/')))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ProcessingService for HttpService {
    async fn process(&self, payload: &RequestPayload) -> Result<ServiceReply, SubmitError> {
        tracing::debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::debug!("Response {status} with {} bytes", body.len());

        Ok(ServiceReply::new(status, body))
    }
}
