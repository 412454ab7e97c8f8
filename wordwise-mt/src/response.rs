//! Parsing of translation responses
//!
//! The service is asked for a bare `{"translations": [...]}` object but
//! sometimes wraps it in prose or code fences. Parsing is therefore two-staged:
//!
//! 1. **Strict**: the whole trimmed text must be the expected object.
//! 2. **Recovery**: the text is scanned for well-formed top-level JSON
//!    objects using serde_json's streaming deserializer. Objects nested in an
//!    already recovered object are not visited again. Exactly one recovered
//!    object of the expected shape is accepted; zero or several fail.

use crate::error::{MtError, MtResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A source word and its translation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TranslationPair {
    pub source: String,
    pub target: String,
}

impl TranslationPair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        TranslationPair {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Envelope of a translation response before per-item validation
#[derive(Debug, Deserialize)]
struct RawTranslations {
    translations: Vec<Value>,
}

/// Parse the raw service output into translation pairs
///
/// Items of the `translations` array that are not
/// `{"source": string, "target": string}` objects are dropped; the
/// reconciliation step treats the affected words as untranslated.
///
/// # Errors
///
/// `UnparsableResponse` if neither the strict parse nor the fragment
/// recovery yields exactly one object with a `translations` array.
pub fn parse_translation_response(raw: &str) -> MtResult<Vec<TranslationPair>> {
    let envelope = match serde_json::from_str::<RawTranslations>(raw.trim()) {
        Ok(envelope) => envelope,
        Err(strict_error) => {
            tracing::debug!(
                error = %strict_error,
                "strict parse failed, scanning for an embedded object"
            );
            recover_fragment(raw)?
        }
    };

    Ok(collect_pairs(envelope.translations))
}

fn recover_fragment(raw: &str) -> MtResult<RawTranslations> {
    let mut candidates = Vec::new();
    let mut pos = 0;

    while let Some(offset) = raw[pos..].find('{') {
        let start = pos + offset;
        let mut stream = serde_json::Deserializer::from_str(&raw[start..]).into_iter::<Value>();

        match stream.next() {
            Some(Ok(value)) => {
                // Skip past the whole object so nested objects are not revisited
                pos = start + stream.byte_offset();
                if let Ok(envelope) = serde_json::from_value::<RawTranslations>(value) {
                    candidates.push(envelope);
                }
            }
            _ => pos = start + 1,
        }
    }

    match candidates.len() {
        1 => Ok(candidates.remove(0)),
        0 => Err(MtError::UnparsableResponse(format!(
            "no JSON object with a 'translations' array found in: {}",
            preview(raw)
        ))),
        n => Err(MtError::UnparsableResponse(format!(
            "found {} candidate translation objects, expected exactly one",
            n
        ))),
    }
}

fn collect_pairs(items: Vec<Value>) -> Vec<TranslationPair> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<TranslationPair>(item) {
            Ok(pair) => Some(pair),
            Err(e) => {
                tracing::debug!(error = %e, "skipping malformed translation item");
                None
            }
        })
        .collect()
}

/// Shorten service output for error messages
fn preview(raw: &str) -> String {
    const MAX_CHARS: usize = 120;
    let mut preview: String = raw.chars().take(MAX_CHARS).collect();
    if raw.chars().count() > MAX_CHARS {
        preview.push('…');
    }
    preview
}
