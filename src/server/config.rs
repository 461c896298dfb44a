use std::env;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Browser origin allowed by CORS (the web front-end's dev server by default).
    pub allowed_origin: String,
    pub hf_endpoint: String,
    pub hf_model: String,
    pub hf_token: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            allowed_origin: "http://localhost:5173".to_string(),
            hf_endpoint: "https://router.huggingface.co/v1/chat/completions".to_string(),
            hf_model: "google/gemma-2-2b-it".to_string(),
            hf_token: None,
            max_tokens: 1024,
            temperature: 0.7,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        Self {
            host: env::var("SERVER_HOST").unwrap_or(defaults.host),
            port: env::var("SERVER_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(defaults.port),
            allowed_origin: env::var("ALLOWED_ORIGIN").unwrap_or(defaults.allowed_origin),
            hf_endpoint: env::var("HF_ENDPOINT").unwrap_or(defaults.hf_endpoint),
            hf_model: env::var("HF_MODEL").unwrap_or(defaults.hf_model),
            hf_token: env::var("HF_TOKEN")
                .or_else(|_| env::var("HUGGINGFACEHUB_API_TOKEN"))
                .ok()
                .filter(|t| !t.trim().is_empty()),
            max_tokens: env::var("HF_MAX_TOKENS").ok().and_then(|v| v.parse().ok()).unwrap_or(defaults.max_tokens),
            temperature: env::var("HF_TEMPERATURE").ok().and_then(|v| v.parse().ok()).unwrap_or(defaults.temperature),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
