// src/core/service_client.rs
//! HTTP client for the remote extraction and gap-analysis service

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, info, trace};

use crate::core::config_manager::ServiceConfig;
use crate::error::{GapError, Result};
use crate::types::{
    ExtractTextRequest, ExtractTextResponse, GapAnalysisRequest, GapAnalysisResponse,
    ServiceErrorBody,
};

/// The two remote calls the client depends on.
#[async_trait]
pub trait GapService: Send + Sync {
    /// Send a document and receive its plain text.
    async fn extract_text(&self, request: &ExtractTextRequest) -> Result<String>;

    /// Send job description and resume text, receive the raw analysis.
    async fn analyze_gap(&self, request: &GapAnalysisRequest) -> Result<GapAnalysisResponse>;
}

pub struct ServiceClient {
    client: reqwest::Client,
    config: ServiceConfig,
}

impl ServiceClient {
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// POST a JSON body and decode the JSON reply, keeping the raw text for logs.
    pub async fn post_json<T, R>(&self, endpoint: &str, payload: &T) -> Result<R>
    where
        T: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.config.api_base_url, endpoint);
        trace!("POST {}", url);

        let response = self.client.post(&url).json(payload).send().await?;

        let status = response.status();
        trace!("Response status: {}", status);

        let response_text = response.text().await?;
        debug!("Raw response from {}: {}", endpoint, response_text);

        if !status.is_success() {
            let message = serde_json::from_str::<ServiceErrorBody>(&response_text)
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| {
                    if response_text.is_empty() {
                        "Unknown error".to_string()
                    } else {
                        response_text.clone()
                    }
                });
            error!("Service error {} from {}: {}", status, endpoint, message);
            return Err(GapError::Service {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str::<R>(&response_text).map_err(|e| {
            error!("Failed to parse response from {}: {}", endpoint, e);
            GapError::Parse(e)
        })
    }
}

#[async_trait]
impl GapService for ServiceClient {
    async fn extract_text(&self, request: &ExtractTextRequest) -> Result<String> {
        info!("Sending {} to text extraction service", request.file_name);

        let response: ExtractTextResponse = self
            .post_json(&self.config.extract_endpoint, request)
            .await?;

        let text = response.text.ok_or(GapError::MissingField("text"))?;
        info!("Extracted {} characters from {}", text.len(), request.file_name);
        Ok(text)
    }

    async fn analyze_gap(&self, request: &GapAnalysisRequest) -> Result<GapAnalysisResponse> {
        info!("Sending resume gap analysis request");
        self.post_json(&self.config.analyze_endpoint, request).await
    }
}
