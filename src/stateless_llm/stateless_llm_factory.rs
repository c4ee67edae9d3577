use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use super::openai_compatible_llm::OpenAICompatibleLLM;
use super::stateless_llm_interface::StatelessLLMInterface;
use crate::config::LLMConfig;
use crate::error::ServiceError;

/// Factory for creating stateless LLM instances
pub struct StatelessLLMFactory;

impl StatelessLLMFactory {
    /// Create an LLM client based on the configuration.
    ///
    /// # Arguments
    /// * `config` - LLM provider configuration
    pub fn create_llm(config: &LLMConfig) -> Result<Arc<dyn StatelessLLMInterface>, ServiceError> {
        info!("Initializing LLM: {}", config.provider);

        match config.provider.as_str() {
            "openai_compatible_llm" | "openai_llm" | "gemini_llm" | "deepseek_llm"
            | "groq_llm" | "mistral_llm" => Ok(Arc::new(OpenAICompatibleLLM::new(
                config.model.clone(),
                config.base_url.clone(),
                config.llm_api_key.clone(),
                config.temperature,
                Duration::from_secs(config.request_timeout_secs),
            )?)),
            other => Err(ServiceError::Configuration(format!(
                "Unsupported LLM provider: {}",
                other
            ))),
        }
    }
}
