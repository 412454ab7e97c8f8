//! Batch word translation through a text-generation service
//!
//! `WordTranslator` sends one prompt per batch, parses the answer, and
//! reconciles it with the input so callers always get one pair per word,
//! in the order they asked.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use wordwise_mt::{GeminiProvider, WordTranslator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let translator = WordTranslator::new(Arc::new(GeminiProvider::from_env()?));
//!     let words = vec!["Haus".to_string(), "Katze".to_string()];
//!     for pair in translator.translate(&words, "German", "English").await? {
//!         println!("{} → {}", pair.source, pair.target);
//!     }
//!     Ok(())
//! }
//! ```

use crate::error::{MtError, MtResult};
use crate::generator::TextGenerator;
use crate::prompt::build_translation_prompt;
use crate::reconcile::reconcile;
use crate::response::{TranslationPair, parse_translation_response};
use std::sync::Arc;

/// Translator for batches of words, backed by an injected [`TextGenerator`]
#[derive(Clone)]
pub struct WordTranslator {
    generator: Arc<dyn TextGenerator>,
}

impl WordTranslator {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        WordTranslator { generator }
    }

    pub fn provider_name(&self) -> &str {
        self.generator.provider_name()
    }

    /// Translate `words` from `source_language` to `target_language`
    ///
    /// Languages are display names ("German", "English") passed through to
    /// the service unvalidated. Exactly one request is made; there is no
    /// retry.
    ///
    /// # Returns
    ///
    /// One [`TranslationPair`] per input word, in input order. Words the
    /// service did not translate keep their source text as target.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` for an empty batch or empty language name
    /// - `UnparsableResponse` if the answer holds no translation object
    /// - any error raised by the generator itself
    pub async fn translate(
        &self,
        words: &[String],
        source_language: &str,
        target_language: &str,
    ) -> MtResult<Vec<TranslationPair>> {
        if words.is_empty() {
            return Err(MtError::InvalidArgument(
                "Word list to translate is empty".to_string(),
            ));
        }
        for (name, language) in [("source", source_language), ("target", target_language)] {
            if language.trim().is_empty() {
                return Err(MtError::InvalidArgument(format!("{} language is empty", name)));
            }
        }

        let prompt = build_translation_prompt(words, source_language, target_language);
        tracing::info!(
            provider = self.provider_name(),
            words = words.len(),
            source_language,
            target_language,
            "requesting translation"
        );

        let raw = self.generator.generate(&prompt).await?;
        let pairs = parse_translation_response(&raw)?;
        tracing::debug!(
            returned = pairs.len(),
            requested = words.len(),
            "parsed translation response"
        );

        Ok(reconcile(words, pairs))
    }
}

impl std::fmt::Debug for WordTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordTranslator")
            .field("provider", &self.provider_name())
            .finish()
    }
}
