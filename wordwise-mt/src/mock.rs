//! Mock text generator for testing
//!
//! A deterministic, API-free [`TextGenerator`] for exercising the
//! translation pipeline without API keys or network access. Every prompt it
//! receives is recorded so tests can inspect what would have been sent.
//!
//! # Example
//!
//! ```ignore
//! use wordwise_mt::{MockGenerator, MockMode, TextGenerator};
//!
//! #[tokio::test]
//! async fn test_generation() {
//!     let mock = MockGenerator::new(MockMode::Respond("{\"translations\": []}".into()));
//!     let text = mock.generate("anything").await.unwrap();
//!     assert_eq!(text, "{\"translations\": []}");
//! }
//! ```

use crate::error::{MtError, MtResult};
use crate::generator::TextGenerator;
use crate::prompt::words_from_prompt;
use crate::response::TranslationPair;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Mock generation modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Return the given text verbatim, whatever the prompt
    Respond(String),

    /// Translate every word of a translation prompt by appending a suffix:
    /// "haus" → "haus_en"
    Suffix(String),

    /// Answer translation prompts from a dictionary: word → translation.
    /// Words missing from the dictionary are left out of the response,
    /// like a service that skips words it cannot translate.
    Dictionary(HashMap<String, String>),

    /// Simulate service errors
    Error(String),
}

/// Mock generator that simulates various service behaviours
#[derive(Debug)]
pub struct MockGenerator {
    mode: MockMode,
    /// Optional simulated network delay (in milliseconds)
    delay_ms: u64,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            delay_ms: 0,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Create a MockGenerator with simulated network delay
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self {
            delay_ms,
            ..Self::new(mode)
        }
    }

    /// Convenience constructor for [`MockMode::Dictionary`]
    pub fn dictionary<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(source, target)| (source.to_string(), target.to_string()))
            .collect();
        Self::new(MockMode::Dictionary(map))
    }

    /// All prompts received so far, oldest first
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    async fn apply_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }

    fn apply_mode(&self, prompt: &str) -> MtResult<String> {
        match &self.mode {
            MockMode::Respond(text) => Ok(text.clone()),
            MockMode::Suffix(suffix) => {
                let translations: Vec<TranslationPair> = prompt_words(prompt)?
                    .into_iter()
                    .map(|word| {
                        let target = format!("{}{}", word, suffix);
                        TranslationPair::new(word, target)
                    })
                    .collect();
                Ok(serde_json::json!({ "translations": translations }).to_string())
            }
            MockMode::Dictionary(map) => {
                let translations: Vec<TranslationPair> = prompt_words(prompt)?
                    .into_iter()
                    .filter_map(|word| {
                        map.get(&word)
                            .map(|target| TranslationPair::new(word.clone(), target.clone()))
                    })
                    .collect();
                Ok(serde_json::json!({ "translations": translations }).to_string())
            }
            MockMode::Error(msg) => Err(MtError::GenerationError(msg.clone())),
        }
    }
}

fn prompt_words(prompt: &str) -> MtResult<Vec<String>> {
    words_from_prompt(prompt)
        .ok_or_else(|| MtError::GenerationError("Prompt contains no word list".to_string()))
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> MtResult<String> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(prompt.to_string());

        self.apply_delay().await;
        self.apply_mode(prompt)
    }

    fn provider_name(&self) -> &str {
        "Mock Generator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::build_translation_prompt;

    #[tokio::test]
    async fn test_respond_returns_text() {
        let mock = MockGenerator::new(MockMode::Respond("hello".to_string()));
        assert_eq!(mock.generate("anything").await.unwrap(), "hello");
    }

    #[tokio::test]
    async fn test_prompts_are_recorded() {
        let mock = MockGenerator::new(MockMode::Respond(String::new()));
        mock.generate("first").await.unwrap();
        mock.generate("second").await.unwrap();
        assert_eq!(mock.prompts(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_dictionary_answers_known_words() {
        let mock = MockGenerator::dictionary([("haus", "house"), ("katze", "cat")]);
        let words = vec!["katze".to_string(), "baum".to_string()];
        let prompt = build_translation_prompt(&words, "German", "English");

        let text = mock.generate(&prompt).await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "translations": [{ "source": "katze", "target": "cat" }] })
        );
    }

    #[tokio::test]
    async fn test_suffix_translates_every_word() {
        let mock = MockGenerator::new(MockMode::Suffix("_en".to_string()));
        let words = vec!["haus".to_string(), "katze".to_string()];
        let prompt = build_translation_prompt(&words, "German", "English");

        let text = mock.generate(&prompt).await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["translations"][0]["target"], "haus_en");
        assert_eq!(json["translations"][1]["target"], "katze_en");
    }

    #[tokio::test]
    async fn test_dictionary_without_word_list() {
        let mock = MockGenerator::dictionary([("haus", "house")]);
        assert!(matches!(
            mock.generate("no words here").await,
            Err(MtError::GenerationError(_))
        ));
    }

    #[tokio::test]
    async fn test_error_mode_returns_error() {
        let mock = MockGenerator::new(MockMode::Error("API unavailable".to_string()));
        match mock.generate("hello").await {
            Err(MtError::GenerationError(msg)) => assert_eq!(msg, "API unavailable"),
            _ => panic!("Expected GenerationError"),
        }
        // The failed call is still recorded
        assert_eq!(mock.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_delay_adds_latency() {
        let mock = MockGenerator::with_delay(MockMode::Respond("ok".to_string()), 50);
        let start = std::time::Instant::now();
        mock.generate("hello").await.unwrap();
        assert!(start.elapsed().as_millis() >= 50);
    }

    #[test]
    fn test_provider_name() {
        let mock = MockGenerator::new(MockMode::Respond(String::new()));
        assert_eq!(mock.provider_name(), "Mock Generator");
    }
}
