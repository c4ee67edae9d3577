use serde::{Deserialize, Serialize};
use std::fs;

use crate::error::ServiceError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    pub llm_config: LLMConfig,
    #[serde(default)]
    pub translator_config: TranslatorConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_api_prefix() -> String {
    "/api/v1".to_string()
}

/// Configuration for the chat-completion provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMConfig {
    #[serde(default = "default_provider")]
    pub provider: String,

    #[serde(rename = "base_url")]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Empty value falls back to the OPENAI_API_KEY environment variable
    #[serde(rename = "llm_api_key")]
    #[serde(default)]
    pub llm_api_key: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(rename = "request_timeout_secs")]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_provider() -> String {
    "openai_llm".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_temperature() -> f32 {
    0.1
}

fn default_request_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Upper bound on in-flight translation calls per batch
    #[serde(rename = "max_concurrent_requests")]
    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,
}

fn default_max_concurrent_requests() -> usize {
    4
}

/// Optional project label attached to detector/translator log events.
/// Plain data handed to the components at construction, never written
/// into the process environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default)]
    pub project: Option<String>,
}

impl Config {
    pub fn load(path: &str) -> Result<Self, ServiceError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ServiceError::Configuration(format!("could not read config file {}: {}", path, e))
        })?;

        let path_lower = path.to_lowercase();
        let mut config: Config = if path_lower.ends_with(".json") || path_lower.ends_with(".jsonld")
        {
            serde_json::from_str(&content).map_err(|e| {
                ServiceError::Configuration(format!("invalid JSON config {}: {}", path, e))
            })?
        } else {
            serde_yaml::from_str(&content).map_err(|e| {
                ServiceError::Configuration(format!("invalid YAML config {}: {}", path, e))
            })?
        };

        config.resolve_api_key()?;
        Ok(config)
    }

    /// The API key may live in the config file or in OPENAI_API_KEY.
    /// Having neither is fatal: the process must not start serving traffic
    /// without a credential.
    fn resolve_api_key(&mut self) -> Result<(), ServiceError> {
        if self.llm_config.llm_api_key.is_empty() {
            match std::env::var("OPENAI_API_KEY") {
                Ok(key) if !key.is_empty() => self.llm_config.llm_api_key = key,
                _ => {
                    return Err(ServiceError::Configuration(
                        "no LLM API key: set llm_config.llm_api_key or OPENAI_API_KEY".to_string(),
                    ))
                }
            }
        }
        Ok(())
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_prefix: default_api_prefix(),
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            max_concurrent_requests: default_max_concurrent_requests(),
        }
    }
}
