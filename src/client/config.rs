use std::env;
use std::time::Duration;

use log::info;
use thiserror::Error;
use url::Url;

use crate::client::models::app_state::ThemeMode;

pub const DEFAULT_ENDPOINT: &str = "https://learn-2pj7.onrender.com/api/topic";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid endpoint URL '{value}': {source}")]
    InvalidEndpoint {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid value for {var}: '{value}'")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: Url,
    /// `None` means the request runs until the server answers or the connection drops.
    pub request_timeout: Option<Duration>,
    pub initial_theme: ThemeMode,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            request_timeout: None,
            initial_theme: ThemeMode::Dark,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let endpoint = env::var("LAYMAN_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let mut config = Self::with_endpoint(&endpoint)?;

        if let Ok(raw) = env::var("LAYMAN_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { var: "LAYMAN_REQUEST_TIMEOUT_SECS", value: raw.clone() })?;
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        if let Ok(raw) = env::var("LAYMAN_THEME") {
            config.initial_theme = match raw.trim().to_ascii_lowercase().as_str() {
                "dark" => ThemeMode::Dark,
                "light" => ThemeMode::Light,
                _ => return Err(ConfigError::InvalidValue { var: "LAYMAN_THEME", value: raw }),
            };
        }

        info!("Client configuration loaded:");
        info!("  Endpoint: {}", config.endpoint);
        info!("  Request timeout: {:?}", config.request_timeout);
        info!("  Theme: {:?}", config.initial_theme);

        Ok(config)
    }

    pub fn with_endpoint(endpoint: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.set_endpoint(endpoint)?;
        Ok(config)
    }

    /// Replaces only the endpoint; timeout and theme keep whatever was loaded.
    pub fn set_endpoint(&mut self, endpoint: &str) -> Result<(), ConfigError> {
        self.endpoint = Url::parse(endpoint).map_err(|source| ConfigError::InvalidEndpoint {
            value: endpoint.to_string(),
            source,
        })?;
        Ok(())
    }
}
