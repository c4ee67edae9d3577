use futures::stream::{self, StreamExt};
use std::collections::HashSet;
use tracing::{error, info};

use super::detector::LanguageDetector;
use super::interface::{TranslationMap, TranslationOutcome};
use super::translator::Translator;
use crate::error::ServiceError;

/// Coordinates one detection call and the per-target translation fan-out
pub struct TranslationOrchestrator {
    detector: LanguageDetector,
    translator: Translator,
    max_concurrent_requests: usize,
}

impl TranslationOrchestrator {
    pub fn new(
        detector: LanguageDetector,
        translator: Translator,
        max_concurrent_requests: usize,
    ) -> Self {
        Self {
            detector,
            translator,
            max_concurrent_requests,
        }
    }

    /// Translate `text` into every requested target language.
    ///
    /// Detection runs exactly once and its failure fails the whole batch.
    /// Each translation failure is isolated into that target's outcome; the
    /// other targets still complete. Duplicate targets collapse to a single
    /// attempt, so the map holds one entry per unique requested language.
    pub async fn translate_batch(
        &self,
        text: &str,
        target_languages: &[String],
    ) -> Result<TranslationMap, ServiceError> {
        if target_languages.is_empty() {
            return Ok(TranslationMap::new());
        }

        let source_language = self.detector.detect(text).await?;
        info!(
            "Batch translation from {} to {:?}",
            source_language, target_languages
        );

        let mut seen = HashSet::new();
        let unique_targets: Vec<String> = target_languages
            .iter()
            .filter(|lang| seen.insert(lang.as_str()))
            .cloned()
            .collect();

        // Independent calls: each task reads the shared (text, source_language)
        // and produces its own (target, outcome) pair.
        let translations: TranslationMap = stream::iter(unique_targets)
            .map(|target| {
                let source_language = source_language.clone();
                async move {
                    let outcome = match self.translator.translate(text, &target).await {
                        Ok(translated) => {
                            info!("Successfully translated to {}", target);
                            TranslationOutcome::Success {
                                text: translated,
                                source_language,
                            }
                        }
                        Err(e) => {
                            error!("Error translating to {}: {}", target, e);
                            TranslationOutcome::Failure {
                                error: e.to_string(),
                                source_language,
                            }
                        }
                    };
                    (target, outcome)
                }
            })
            .buffer_unordered(self.max_concurrent_requests.max(1))
            .collect()
            .await;

        Ok(translations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stateless_llm::{ChatMessage, StatelessLLMInterface};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Scripted LLM: answers detection with a fixed result and translations
    /// by the target language found in the system prompt.
    struct ScriptedLLM {
        detection: Result<String, String>,
        translations: Vec<(&'static str, Result<&'static str, &'static str>)>,
        calls: AtomicUsize,
    }

    impl ScriptedLLM {
        fn new(
            detection: Result<String, String>,
            translations: Vec<(&'static str, Result<&'static str, &'static str>)>,
        ) -> Arc<Self> {
            Arc::new(Self {
                detection,
                translations,
                calls: AtomicUsize::new(0),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl StatelessLLMInterface for ScriptedLLM {
        async fn chat_completion(
            &self,
            messages: Vec<ChatMessage>,
        ) -> Result<String, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let system = &messages[0].content;

            if system.starts_with("Detect the language") {
                return self
                    .detection
                    .clone()
                    .map_err(ServiceError::ExternalService);
            }

            for (lang, result) in &self.translations {
                if system.contains(&format!("text to {}.", lang)) {
                    return match result {
                        Ok(text) => Ok(text.to_string()),
                        Err(msg) => Err(ServiceError::ExternalService(msg.to_string())),
                    };
                }
            }
            Err(ServiceError::ExternalService(
                "no scripted translation".to_string(),
            ))
        }
    }

    fn orchestrator(llm: Arc<ScriptedLLM>) -> TranslationOrchestrator {
        TranslationOrchestrator::new(
            LanguageDetector::new(llm.clone(), None),
            Translator::new(llm, None),
            4,
        )
    }

    fn targets(langs: &[&str]) -> Vec<String> {
        langs.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn translates_every_target_with_shared_source_language() {
        let llm = ScriptedLLM::new(
            Ok("English".to_string()),
            vec![("es", Ok("Hola mundo")), ("fr", Ok("Bonjour le monde"))],
        );
        let orchestrator = orchestrator(llm.clone());

        let result = orchestrator
            .translate_batch("Hello world", &targets(&["es", "fr"]))
            .await
            .unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(
            result["es"],
            TranslationOutcome::Success {
                text: "Hola mundo".to_string(),
                source_language: "English".to_string(),
            }
        );
        assert_eq!(
            result["fr"],
            TranslationOutcome::Success {
                text: "Bonjour le monde".to_string(),
                source_language: "English".to_string(),
            }
        );
        // one detection + one translation per target
        assert_eq!(llm.call_count(), 3);
    }

    #[tokio::test]
    async fn one_failing_target_does_not_abort_the_batch() {
        let llm = ScriptedLLM::new(
            Ok("English".to_string()),
            vec![("es", Ok("Hola mundo")), ("fr", Err("quota exceeded"))],
        );
        let orchestrator = orchestrator(llm);

        let result = orchestrator
            .translate_batch("Hello world", &targets(&["es", "fr"]))
            .await
            .unwrap();

        assert!(matches!(
            result["es"],
            TranslationOutcome::Success { .. }
        ));
        match &result["fr"] {
            TranslationOutcome::Failure {
                error,
                source_language,
            } => {
                assert!(error.contains("quota exceeded"));
                assert_eq!(source_language, "English");
            }
            other => panic!("expected failure outcome, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn detection_failure_fails_the_whole_batch() {
        let llm = ScriptedLLM::new(
            Err("upstream unavailable".to_string()),
            vec![("es", Ok("Hola mundo"))],
        );
        let orchestrator = orchestrator(llm.clone());

        let result = orchestrator
            .translate_batch("Hello world", &targets(&["es"]))
            .await;

        assert!(matches!(result, Err(ServiceError::ExternalService(_))));
        // no translation call is issued once detection fails
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn duplicate_targets_collapse_to_one_entry() {
        let llm = ScriptedLLM::new(Ok("English".to_string()), vec![("es", Ok("Hola mundo"))]);
        let orchestrator = orchestrator(llm.clone());

        let result = orchestrator
            .translate_batch("Hello world", &targets(&["es", "es"]))
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert!(matches!(
            result["es"],
            TranslationOutcome::Success { .. }
        ));
        // one detection + a single attempt for the deduplicated target
        assert_eq!(llm.call_count(), 2);
    }

    #[tokio::test]
    async fn empty_target_list_makes_no_outbound_calls() {
        let llm = ScriptedLLM::new(Ok("English".to_string()), vec![]);
        let orchestrator = orchestrator(llm.clone());

        let result = orchestrator.translate_batch("Hello world", &[]).await.unwrap();

        assert!(result.is_empty());
        assert_eq!(llm.call_count(), 0);
    }
}
