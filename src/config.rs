use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind the HTTP listener to
    #[serde(default = "default_port")]
    pub port: u16,
    /// Outbound fetch timeout in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout: u64,
    /// User-Agent header sent with outbound fetches
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            fetch_timeout: default_fetch_timeout(),
            user_agent: None,
        }
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_fetch_timeout() -> u64 {
    30
}

impl ServerConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_ prefix (e.g. RECIPE_PORT)
    /// 2. config.toml file in current directory
    /// 3. Default values
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("RECIPE").try_parsing(true))
            .build()?;

        settings.try_deserialize()
    }
}
