//! Configuration management for the MCP server.
//!
//! Configuration is assembled once at startup from defaults, environment
//! variables and the API key resolved by the CLI layer. The resulting
//! [`Config`] is shared read-only for the lifetime of the process.

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// Animation API endpoint used in development.
pub const DEVELOPMENT_BASE_URL: &str = "http://localhost:3001/api";

/// Animation API endpoint used everywhere else.
pub const PRODUCTION_BASE_URL: &str = "https://allyson.ai/api";

/// User agent sent with every upload.
pub const USER_AGENT: &str = "Allyson-MCP-Server/1.0.0";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Remote animation API configuration.
    pub api: ApiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Deployment environment, selects the API endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    /// Parse an environment name. Anything other than "development" is production.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("development") {
            Self::Development
        } else {
            Self::Production
        }
    }

    /// Base URL of the animation API for this environment.
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Development => DEVELOPMENT_BASE_URL,
            Self::Production => PRODUCTION_BASE_URL,
        }
    }
}

/// Configuration for the remote animation API.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Bearer token sent with every request.
    pub api_key: String,

    /// Base URL; the upload endpoint is `{base_url}/mcp`.
    pub base_url: String,

    /// Value of the `User-Agent` header.
    pub user_agent: String,

    /// Environment the base URL was derived from.
    pub environment: Environment,
}

impl ApiConfig {
    /// Full URL of the upload endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/mcp", self.base_url.trim_end_matches('/'))
    }

    /// Whether the base URL differs from the one the environment selects.
    pub fn is_overridden(&self) -> bool {
        self.base_url != self.environment.base_url()
    }
}

/// Custom Debug implementation to redact the API key from logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("environment", &self.environment)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        let environment = Environment::default();
        Self {
            api_key: String::new(),
            base_url: environment.base_url().to_string(),
            user_agent: USER_AGENT.to_string(),
            environment,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "allyson-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            api: ApiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `api_key` is the key resolved by the CLI (`--api-key` or `API_KEY`).
    /// A missing or blank key is a configuration error. The `.env` file, if
    /// any, is expected to have been loaded by the caller.
    ///
    /// The environment comes from `MCP_ENV`, falling back to `NODE_ENV`.
    pub fn from_env(api_key: Option<String>) -> Result<Self> {
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                Error::config(
                    "API key is required. Use --api-key flag or API_KEY environment variable.",
                )
            })?;

        let mut config = Self::default();
        config.api.api_key = api_key;

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(env) = std::env::var("MCP_ENV").or_else(|_| std::env::var("NODE_ENV")) {
            config.api.environment = Environment::parse(&env);
            config.api.base_url = config.api.environment.base_url().to_string();
        }

        if let Ok(base_url) = std::env::var("MCP_API_BASE_URL") {
            config.api.base_url = base_url;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        unsafe {
            std::env::remove_var("MCP_ENV");
            std::env::remove_var("NODE_ENV");
            std::env::remove_var("MCP_API_BASE_URL");
        }
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        assert!(matches!(Config::from_env(None), Err(Error::Config(_))));
        assert!(matches!(
            Config::from_env(Some("   ".to_string())),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_production_endpoint_by_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        let config = Config::from_env(Some("key".to_string())).unwrap();
        assert_eq!(config.api.api_key, "key");
        assert_eq!(config.api.environment, Environment::Production);
        assert_eq!(config.api.endpoint(), "https://allyson.ai/api/mcp");
        assert!(!config.api.is_overridden());
    }

    #[test]
    fn test_development_endpoint() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("MCP_ENV", "development");
        }
        let config = Config::from_env(Some("key".to_string())).unwrap();
        assert_eq!(config.api.endpoint(), "http://localhost:3001/api/mcp");
        assert!(!config.api.is_overridden());
        clear_env();
    }

    #[test]
    fn test_node_env_selects_development() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("NODE_ENV", "development");
        }
        let config = Config::from_env(Some("key".to_string())).unwrap();
        assert_eq!(config.api.environment, Environment::Development);
        assert_eq!(config.api.endpoint(), "http://localhost:3001/api/mcp");
        clear_env();
    }

    #[test]
    fn test_mcp_env_takes_precedence_over_node_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("MCP_ENV", "production");
            std::env::set_var("NODE_ENV", "development");
        }
        let config = Config::from_env(Some("key".to_string())).unwrap();
        assert_eq!(config.api.environment, Environment::Production);
        clear_env();
    }

    #[test]
    fn test_base_url_override() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("MCP_API_BASE_URL", "http://127.0.0.1:9000/api/");
        }
        let config = Config::from_env(Some("key".to_string())).unwrap();
        assert_eq!(config.api.endpoint(), "http://127.0.0.1:9000/api/mcp");
        assert!(config.api.is_overridden());
        clear_env();
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let api = ApiConfig {
            api_key: "super_secret_key".to_string(),
            ..ApiConfig::default()
        };
        let debug_str = format!("{:?}", api);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("development"), Environment::Development);
        assert_eq!(Environment::parse(" Development "), Environment::Development);
        assert_eq!(Environment::parse("staging"), Environment::Production);
        assert_eq!(Environment::parse(""), Environment::Production);
    }
}
