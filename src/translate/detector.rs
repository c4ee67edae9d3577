use std::sync::Arc;
use tracing::{error, info};

use crate::error::ServiceError;
use crate::stateless_llm::{ChatMessage, StatelessLLMInterface};

const DETECT_SYSTEM_PROMPT: &str =
    "Detect the language of the following text and respond with only the language name:";

/// Identifies the input language with a single chat completion call
pub struct LanguageDetector {
    llm: Arc<dyn StatelessLLMInterface>,
    project: Option<String>,
}

impl LanguageDetector {
    pub fn new(llm: Arc<dyn StatelessLLMInterface>, project: Option<String>) -> Self {
        Self { llm, project }
    }

    /// Returns the model's answer trimmed, verbatim. The label is opaque:
    /// it is not checked against any known language list.
    pub async fn detect(&self, text: &str) -> Result<String, ServiceError> {
        let messages = vec![
            ChatMessage::system(DETECT_SYSTEM_PROMPT),
            ChatMessage::user(text),
        ];

        let project = self.project.as_deref().unwrap_or("");
        match self.llm.chat_completion(messages).await {
            Ok(response) => {
                let language = response.trim().to_string();
                info!(project, operation = "language_detection", "Detected language: {}", language);
                Ok(language)
            }
            Err(e) => {
                error!(project, operation = "language_detection", "Error detecting language: {}", e);
                Err(e)
            }
        }
    }
}
