use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;
use std::time::Duration;

pub mod server;
pub mod storage;

pub use server::ServerConfig;
pub use storage::StorageConfig;

pub const DEFAULT_ASSISTANT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ASSISTANT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub assistant: AssistantConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(AppError::Configuration(format!("Invalid LOG_FORMAT: {}", s))),
        }
    }
}

/// Text-generation service used to turn rough work descriptions into items
///
/// Without an API key the assistant is disabled and every parse returns no
/// items.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl AssistantConfig {
    pub fn from_env() -> Result<Self> {
        Ok(AssistantConfig {
            api_key: env::var("ASSISTANT_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            model: env::var("ASSISTANT_MODEL")
                .unwrap_or_else(|_| DEFAULT_ASSISTANT_MODEL.to_string()),
            base_url: env::var("ASSISTANT_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_ASSISTANT_BASE_URL.to_string()),
            timeout_secs: env::var("ASSISTANT_TIMEOUT_SECS")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid ASSISTANT_TIMEOUT_SECS".to_string())
                })?,
        })
    }

    /// Assistant with no key: every parse yields nothing
    pub fn disabled() -> Self {
        AssistantConfig {
            api_key: None,
            model: DEFAULT_ASSISTANT_MODEL.to_string(),
            base_url: DEFAULT_ASSISTANT_BASE_URL.to_string(),
            timeout_secs: 20,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format: env::var("LOG_FORMAT")
                    .unwrap_or_else(|_| "pretty".to_string())
                    .parse()?,
            },
            server: ServerConfig::from_env()?,
            storage: StorageConfig::from_env(),
            assistant: AssistantConfig::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.workers == 0 {
            return Err(AppError::Configuration(
                "Server workers must be greater than 0".to_string(),
            ));
        }

        if self.storage.data_file.as_os_str().is_empty() {
            return Err(AppError::Configuration("DATA_FILE cannot be empty".to_string()));
        }

        if self.assistant.timeout_secs == 0 {
            return Err(AppError::Configuration(
                "Assistant timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
