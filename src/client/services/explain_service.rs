use log::{debug, info};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::client::config::ClientConfig;
use crate::client::models::messages::Message;
use crate::common::models::{ExplanationResult, TopicRequest};

#[derive(Debug, Error)]
pub enum ExplainError {
    /// Never surfaced: `submit` with an empty topic is a silent no-op.
    #[error("topic is empty")]
    EmptyInput,
    #[error("Failed to fetch response from backend (HTTP {0})")]
    Status(StatusCode),
    #[error("Failed to fetch response from backend: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Invalid response from backend: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid response from backend: expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}

impl ExplainError {
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, ExplainError::Parse(_) | ExplainError::NotAnObject(_))
    }
}

/// Talks to the remote `/api/topic` endpoint.
#[derive(Debug, Clone)]
pub struct ExplainService {
    client: reqwest::Client,
    endpoint: Url,
}

impl ExplainService {
    pub fn new(config: &ClientConfig) -> Result<Self, ExplainError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POSTs `{"topic": ...}` and parses the JSON object that comes back.
    pub async fn explain(&self, topic: &str) -> Result<ExplanationResult, ExplainError> {
        if topic.is_empty() {
            return Err(ExplainError::EmptyInput);
        }

        debug!("POST {} topic='{}'", self.endpoint, topic);
        let body = serde_json::to_vec(&TopicRequest { topic: topic.to_string() })?;
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExplainError::Status(status));
        }

        let bytes = response.bytes().await?;
        let value: Value = serde_json::from_slice(&bytes)?;
        let result = match value {
            Value::Object(map) => ExplanationResult::from_map(map),
            Value::Array(_) => return Err(ExplainError::NotAnObject("an array")),
            Value::String(_) => return Err(ExplainError::NotAnObject("a string")),
            Value::Number(_) => return Err(ExplainError::NotAnObject("a number")),
            Value::Bool(_) => return Err(ExplainError::NotAnObject("a boolean")),
            Value::Null => return Err(ExplainError::NotAnObject("null")),
        };
        info!("Received {} sections from {}", result.len(), self.endpoint);
        Ok(result)
    }
}

/// Runs the fetch for `topic` and folds the outcome into the message the state machine expects.
pub async fn fetch_explanation(service: ExplainService, topic: String) -> Message {
    Message::ExplanationReceived(service.explain(&topic).await.map_err(|e| e.to_string()))
}
