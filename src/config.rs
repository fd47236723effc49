//! Configuration management for Idea Enhancer.
//!
//! Configuration can be set via environment variables (a `.env` file in the
//! working directory is honored):
//! - `OPENAI_API_KEY` - Required. API key for the chat completion provider.
//! - `OPENAI_BASE_URL` - Optional. Provider base URL. Defaults to `https://api.openai.com/v1`.
//! - `SERPAPI_API_KEY` - Optional. Search provider credential. The bundled
//!   DuckDuckGo search tool does not need it.
//! - `DEFAULT_MODEL` - Optional. The chat model to use. Defaults to `gpt-4`.
//! - `HOST` - Optional. Server host. Defaults to `127.0.0.1`.
//! - `PORT` - Optional. Server port. Defaults to `8000`.
//! - `MAX_ITERATIONS` - Optional. Maximum agent loop iterations. Defaults to `10`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the chat completion provider
    pub api_key: String,

    /// Base URL of the chat completion provider
    pub base_url: String,

    /// Search provider credential. Read for forward compatibility; the
    /// DuckDuckGo HTML search in use is keyless.
    pub search_api_key: Option<String>,

    /// Default chat model identifier
    pub default_model: String,

    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Maximum iterations for the agent loop
    pub max_iterations: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if `OPENAI_API_KEY` is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("OPENAI_API_KEY".to_string()))?;

        let base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());

        let search_api_key = std::env::var("SERPAPI_API_KEY").ok();

        let default_model =
            std::env::var("DEFAULT_MODEL").unwrap_or_else(|_| "gpt-4".to_string());

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), format!("{}", e)))?;

        let max_iterations = std::env::var("MAX_ITERATIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|e| {
                ConfigError::InvalidValue("MAX_ITERATIONS".to_string(), format!("{}", e))
            })?;

        Ok(Self {
            api_key,
            base_url,
            search_api_key,
            default_model,
            host,
            port,
            max_iterations,
        })
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(api_key: String, base_url: String, default_model: String) -> Self {
        Self {
            api_key,
            base_url,
            search_api_key: None,
            default_model,
            host: "127.0.0.1".to_string(),
            port: 8000,
            max_iterations: 10,
        }
    }
}
