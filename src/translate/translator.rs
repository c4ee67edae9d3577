use std::sync::Arc;
use tracing::{error, info};

use crate::error::ServiceError;
use crate::stateless_llm::{ChatMessage, StatelessLLMInterface};

/// Translates one text into one target language per call
pub struct Translator {
    llm: Arc<dyn StatelessLLMInterface>,
    project: Option<String>,
}

/// The numeric/markup rules live in the prompt only; the output is trusted
/// as-is and not re-validated.
fn system_prompt(target_language: &str) -> String {
    format!(
        "You are an expert translator.\n\
         If there are HTML markups, remove them. Give the outputs in a very simple format.\n\
         If there is any math, keep the numbers and symbols unchanged.\n\n\
         Translate the following text to {}.\n\
         Maintain the original meaning, tone, and style while ensuring natural and fluent output.",
        target_language
    )
}

impl Translator {
    pub fn new(llm: Arc<dyn StatelessLLMInterface>, project: Option<String>) -> Self {
        Self { llm, project }
    }

    /// `target_language` is an opaque identifier; an ISO code and a free-form
    /// name both just get substituted into the instruction.
    pub async fn translate(&self, text: &str, target_language: &str) -> Result<String, ServiceError> {
        let project = self.project.as_deref().unwrap_or("");
        info!(project, operation = "translation", "Translating to {}", target_language);

        let messages = vec![
            ChatMessage::system(system_prompt(target_language)),
            ChatMessage::user(text),
        ];

        match self.llm.chat_completion(messages).await {
            Ok(response) => Ok(response.trim().to_string()),
            Err(e) => {
                error!(project, "Translation to {} failed: {}", target_language, e);
                Err(e)
            }
        }
    }
}
