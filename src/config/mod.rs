use crate::services::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::services::text::{DEFAULT_EXCERPT_LENGTH, ELLIPSIS};
use crate::services::validation::EXCERPT_MAX;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_path")]
    pub path: String,
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            pool_size: default_pool_size(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    #[serde(default = "default_excerpt_length")]
    pub excerpt_length: usize,
    /// Insert sample posts on `serve` when the database is empty.
    #[serde(default = "default_true")]
    pub seed_on_empty: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            excerpt_length: default_excerpt_length(),
            seed_on_empty: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout() -> u64 {
    30
}

fn default_database_path() -> String {
    "data/blogline.db".to_string()
}

fn default_pool_size() -> u32 {
    10
}

fn default_excerpt_length() -> usize {
    DEFAULT_EXCERPT_LENGTH
}

fn default_true() -> bool {
    true
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_max_page_size() -> usize {
    MAX_PAGE_SIZE
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:4200".to_string(),
        "https://localhost:4200".to_string(),
        "http://127.0.0.1:4200".to_string(),
    ]
}

impl Config {
    /// Reads `path`, or falls back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!(
                "Config file '{}' not found, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Could not read config file '{}': {}", path.display(), e)
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api.max_page_size == 0 {
            anyhow::bail!("api.max_page_size must be greater than 0");
        }
        if self.api.max_page_size > MAX_PAGE_SIZE {
            anyhow::bail!("api.max_page_size must be {} or less", MAX_PAGE_SIZE);
        }
        if self.api.default_page_size == 0 {
            anyhow::bail!("api.default_page_size must be greater than 0");
        }
        if self.api.default_page_size > self.api.max_page_size {
            anyhow::bail!("api.default_page_size must not exceed api.max_page_size");
        }
        if self.content.excerpt_length == 0 {
            anyhow::bail!("content.excerpt_length must be greater than 0");
        }
        // Generated excerpts carry a trailing ellipsis and must still fit.
        let max_excerpt = EXCERPT_MAX - ELLIPSIS.len();
        if self.content.excerpt_length > max_excerpt {
            anyhow::bail!("content.excerpt_length must be {} or less", max_excerpt);
        }
        // Credentialed CORS cannot use a wildcard origin.
        if self.cors.allowed_origins.iter().any(|o| o.trim() == "*") {
            anyhow::bail!("cors.allowed_origins must list explicit origins, not \"*\"");
        }
        if self.database.pool_size == 0 {
            anyhow::bail!("database.pool_size must be greater than 0");
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
