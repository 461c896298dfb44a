use async_trait::async_trait;
use log::debug;
use serde_json::{json, Value};
use thiserror::Error;

use crate::server::config::ServerConfig;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error [{status}]: {message}")]
    Api { status: u16, message: String },
    #[error("model returned an empty completion")]
    EmptyCompletion,
}

/// Something that turns a prompt into raw model text.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
    fn model_id(&self) -> &str;
}

/// Hugging Face inference through its OpenAI-compatible chat completions API.
pub struct HuggingFaceGenerator {
    endpoint: String,
    model: String,
    token: Option<String>,
    max_tokens: u32,
    temperature: f32,
    client: reqwest::Client,
}

impl HuggingFaceGenerator {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            endpoint: config.hf_endpoint.clone(),
            model: config.hf_model.clone(),
            token: config.hf_token.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ContentGenerator for HuggingFaceGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = json!({
            "model": &self.model,
            "messages": [{"role": "user", "content": prompt}],
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
        });

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        debug!("Calling {} with model {}", self.endpoint, self.model);

        let resp = request.send().await?;
        let json = check_response_status(resp).await?;
        completion_text(&json)
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

async fn check_response_status(resp: reqwest::Response) -> Result<Value, GenerationError> {
    let status = resp.status().as_u16();
    let text = resp.text().await?;
    let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
    if status >= 400 {
        let message = body["error"]["message"]
            .as_str()
            .or_else(|| body["error"].as_str())
            .or_else(|| body["message"].as_str())
            .map(str::to_string)
            .unwrap_or_else(|| if text.is_empty() { "unknown API error".to_string() } else { text.clone() });
        return Err(GenerationError::Api { status, message });
    }
    Ok(body)
}

fn completion_text(json: &Value) -> Result<String, GenerationError> {
    match json["choices"][0]["message"]["content"].as_str() {
        Some(content) if !content.trim().is_empty() => Ok(content.to_string()),
        _ => Err(GenerationError::EmptyCompletion),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/v1/chat/completions", addr)
    }

    fn generator_for(endpoint: String, token: Option<&str>) -> HuggingFaceGenerator {
        let config = ServerConfig {
            hf_endpoint: endpoint,
            hf_token: token.map(str::to_string),
            ..ServerConfig::default()
        };
        HuggingFaceGenerator::new(&config)
    }

    #[tokio::test]
    async fn sends_chat_request_and_returns_content() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                let auth = headers.get("authorization").and_then(|v| v.to_str().ok()).unwrap_or("").to_string();
                let echo = format!(
                    "{}|{}|{}",
                    body["model"].as_str().unwrap_or(""),
                    body["messages"][0]["content"].as_str().unwrap_or(""),
                    auth
                );
                Json(json!({"choices": [{"message": {"role": "assistant", "content": echo}}]}))
            }),
        );
        let endpoint = serve(router).await;

        let out = generator_for(endpoint, Some("hf_secret")).generate("explain tides").await.unwrap();
        assert_eq!(out, "google/gemma-2-2b-it|explain tides|Bearer hf_secret");
    }

    #[tokio::test]
    async fn api_errors_carry_status_and_message() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { (StatusCode::UNAUTHORIZED, Json(json!({"error": "Invalid credentials"}))) }),
        );
        let endpoint = serve(router).await;

        let err = generator_for(endpoint, None).generate("x").await.unwrap_err();
        match err {
            GenerationError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid credentials");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn blank_completion_is_an_error() {
        let json = json!({"choices": [{"message": {"content": "   "}}]});
        assert!(matches!(completion_text(&json), Err(GenerationError::EmptyCompletion)));
        assert!(matches!(completion_text(&json!({})), Err(GenerationError::EmptyCompletion)));
    }
}
