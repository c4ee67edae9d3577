/// Translate API types shared between the HTTP layer and the orchestrator

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    /// Reserved. Accepted for forward compatibility; detection always runs.
    #[serde(default)]
    pub source_language: Option<String>,
    pub target_languages: Vec<String>,
}

/// Per-target result: a translation, or an isolated failure.
/// `source_language` is present on both arms since detection completes
/// before any per-target attempt starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationOutcome {
    Success {
        text: String,
        source_language: String,
    },
    Failure {
        error: String,
        source_language: String,
    },
}

/// One entry per unique requested target language
pub type TranslationMap = HashMap<String, TranslationOutcome>;

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub translations: TranslationMap,
}
