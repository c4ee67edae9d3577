use std::sync::Arc;

use crate::config::Config;
use crate::error::ServiceError;
use crate::stateless_llm::StatelessLLMFactory;
use crate::translate::{LanguageDetector, TranslationOrchestrator, Translator};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub orchestrator: Arc<TranslationOrchestrator>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, ServiceError> {
        let llm = StatelessLLMFactory::create_llm(&config.llm_config)?;
        let project = config.observability.project.clone();

        let orchestrator = Arc::new(TranslationOrchestrator::new(
            LanguageDetector::new(llm.clone(), project.clone()),
            Translator::new(llm, project),
            config.translator_config.max_concurrent_requests,
        ));

        Ok(Self {
            config,
            orchestrator,
        })
    }
}
