//! Relay configuration
//!
//! Values are layered: serde defaults, then an optional TOML file, then
//! `RELAY__SECTION__KEY` environment variables, then the flat variables the
//! deployment scripts already export (`OLLAMA_BASE_URL`, `MODEL_NAME`,
//! `FALKORDB_HOST`, `FALKORDB_PORT`).

use crate::error::{RelayError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Config file consulted when `RELAY_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Complete relay configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub inference: InferenceConfig,

    #[serde(default)]
    pub graph: GraphConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum accepted request body in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

/// Inference server (Ollama) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Fact graph (FalkorDB) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(default = "default_graph_host")]
    pub host: String,

    #[serde(default = "default_graph_port")]
    pub port: u16,

    #[serde(default = "default_graph_name")]
    pub graph_name: String,

    /// Result cap applied to every lookup query
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Number of leading prompt words used by the keyword fallback
    #[serde(default = "default_max_keywords")]
    pub max_keywords: usize,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 5005 }
fn default_max_body_bytes() -> usize { 1024 * 1024 }
fn default_base_url() -> String { "http://localhost:11434".to_string() }
fn default_model() -> String { "tinyllama".to_string() }
fn default_timeout_secs() -> u64 { 120 }
fn default_graph_host() -> String { "localhost".to_string() }
fn default_graph_port() -> u16 { 6379 }
fn default_graph_name() -> String { "chatbot_knowledge".to_string() }
fn default_max_results() -> usize { 3 }
fn default_max_keywords() -> usize { 5 }
fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> LogFormat { LogFormat::Pretty }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            host: default_graph_host(),
            port: default_graph_port(),
            graph_name: default_graph_name(),
            max_results: default_max_results(),
            max_keywords: default_max_keywords(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from the file named by `RELAY_CONFIG` (or
    /// `config.toml`) and the process environment
    pub fn load() -> Result<Self> {
        let path = std::env::var("RELAY_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::from_file(&path)
    }

    /// Load configuration from a file that may not exist
    pub fn from_file(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("RELAY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Parse configuration from a TOML string, without environment layers
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Apply the flat deployment variables on top of the layered values
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("OLLAMA_BASE_URL") {
            self.inference.base_url = val;
        }

        if let Some(val) = lookup("MODEL_NAME") {
            self.inference.model = val;
        }

        if let Some(val) = lookup("FALKORDB_HOST") {
            self.graph.host = val;
        }

        if let Some(val) = lookup("FALKORDB_PORT") {
            self.graph.port = val.parse().map_err(|_| {
                RelayError::Config(format!("FALKORDB_PORT is not a valid port: {}", val))
            })?;
        }

        Ok(self)
    }

    /// Socket address the HTTP listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl InferenceConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL of the generate endpoint
    pub fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url.trim_end_matches('/'))
    }
}

impl GraphConfig {
    /// Connection URL understood by the redis client
    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}/", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 5005);
        assert_eq!(config.inference.base_url, "http://localhost:11434");
        assert_eq!(config.inference.model, "tinyllama");
        assert_eq!(config.inference.timeout(), Duration::from_secs(120));
        assert_eq!(config.graph.graph_name, "chatbot_knowledge");
        assert_eq!(config.graph.max_results, 3);
        assert_eq!(config.graph.max_keywords, 5);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            [inference]
            model = "llama3.2"

            [graph]
            port = 6380

            [logging]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.inference.model, "llama3.2");
        assert_eq!(config.inference.base_url, "http://localhost:11434");
        assert_eq!(config.graph.port, 6380);
        assert_eq!(config.graph.host, "localhost");
        assert_eq!(config.server.port, 5005);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_flat_overrides() {
        let vars: HashMap<&str, &str> = [
            ("OLLAMA_BASE_URL", "http://gpu-box:11434"),
            ("MODEL_NAME", "phi3"),
            ("FALKORDB_HOST", "falkor"),
            ("FALKORDB_PORT", "7000"),
        ]
        .into_iter()
        .collect();

        let config = Config::default()
            .with_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.inference.base_url, "http://gpu-box:11434");
        assert_eq!(config.inference.model, "phi3");
        assert_eq!(config.graph.redis_url(), "redis://falkor:7000/");
    }

    #[test]
    fn test_invalid_port_override() {
        let result = Config::default().with_overrides(|key| {
            (key == "FALKORDB_PORT").then(|| "not-a-port".to_string())
        });
        assert!(matches!(result, Err(RelayError::Config(_))));
    }

    #[test]
    fn test_generate_url_trims_slash() {
        let mut config = InferenceConfig::default();
        config.base_url = "http://localhost:11434/".to_string();
        assert_eq!(config.generate_url(), "http://localhost:11434/api/generate");
    }
}
