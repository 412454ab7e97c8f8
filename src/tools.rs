//! Caller-facing tools for the vocabulary agent
//!
//! The agent loop hands the model [`tool_definitions`] and routes the
//! model's tool calls to [`Toolbox::dispatch`]. Each tool validates its
//! JSON arguments, runs one core operation, and returns a JSON value.

use crate::error::{ToolError, ToolResult};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::{Mutex, PoisonError};
use wordwise_lists::{Difficulty, WordListStore, WordListSummary, WordSampler};
use wordwise_mt::{TranslationPair, WordTranslator};

pub const RANDOM_WORDS_TOOL: &str = "get_n_random_words";
pub const RANDOM_WORDS_BY_DIFFICULTY_TOOL: &str = "get_n_random_words_by_difficulty_level";
pub const TRANSLATE_WORDS_TOOL: &str = "translate_words";

/// Function declarations for the three tools, in the chat-completions
/// `tools` format
pub fn tool_definitions() -> Vec<Value> {
    vec![
        json!({
            "type": "function",
            "function": {
                "name": RANDOM_WORDS_TOOL,
                "description": "Retrieve n random words from the word list of a language.",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "language": {
                            "type": "string",
                            "description": "Language name, e.g. \"German\" or \"Spanish\"."
                        },
                        "n": {
                            "type": "integer",
                            "minimum": 0,
                            "description": "Number of words; must not exceed the size of the word list."
                        }
                    },
                    "required": ["language", "n"]
                }
            }
        }),
        json!({
            "type": "function",
            "function": {
                "name": RANDOM_WORDS_BY_DIFFICULTY_TOOL,
                "description": "Retrieve n random words of one difficulty level from the word list of a language.",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "language": {
                            "type": "string",
                            "description": "Language name, e.g. \"German\" or \"Spanish\"."
                        },
                        "difficulty_level": {
                            "type": "string",
                            "enum": Difficulty::ALL.map(|d| d.as_str()),
                            "description": "Difficulty level of the words."
                        },
                        "n": {
                            "type": "integer",
                            "minimum": 0,
                            "description": "Number of words; must not exceed the words available at that level."
                        }
                    },
                    "required": ["language", "difficulty_level", "n"]
                }
            }
        }),
        json!({
            "type": "function",
            "function": {
                "name": TRANSLATE_WORDS_TOOL,
                "description": "Translate a list of words. Returns one {source, target} pair per word, in the same order; untranslatable words are returned unchanged.",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "words": {
                            "type": "array",
                            "items": { "type": "string" },
                            "minItems": 1
                        },
                        "source_language": { "type": "string" },
                        "target_language": { "type": "string" }
                    },
                    "required": ["words", "source_language", "target_language"]
                }
            }
        }),
    ]
}

#[derive(Debug, Deserialize)]
struct RandomWordsArgs {
    language: String,
    n: i64,
}

#[derive(Debug, Deserialize)]
struct RandomWordsByDifficultyArgs {
    language: String,
    difficulty_level: String,
    n: i64,
}

#[derive(Debug, Deserialize)]
struct TranslateWordsArgs {
    words: Vec<String>,
    source_language: String,
    target_language: String,
}

/// Word lists, sampler, and translator behind the tool calls
#[derive(Debug)]
pub struct Toolbox {
    store: WordListStore,
    sampler: Mutex<WordSampler>,
    translator: WordTranslator,
}

impl Toolbox {
    pub fn new(store: WordListStore, translator: WordTranslator) -> Self {
        Self::with_sampler(store, translator, WordSampler::new())
    }

    pub fn with_sampler(
        store: WordListStore,
        translator: WordTranslator,
        sampler: WordSampler,
    ) -> Self {
        Toolbox {
            store,
            sampler: Mutex::new(sampler),
            translator,
        }
    }

    pub fn store(&self) -> &WordListStore {
        &self.store
    }

    /// `n` random distinct words from `language`'s word list
    pub fn get_random_words(&self, language: &str, n: i64) -> ToolResult<Vec<String>> {
        let count = count_from(n)?;
        let list = self.store.load(language)?;
        let words = self.lock_sampler().sample(&list, count)?;
        tracing::debug!(language, count, "sampled random words");
        Ok(words)
    }

    /// `n` random distinct words of one difficulty tier
    ///
    /// `difficulty` must be `beginner`, `intermediate` or `advanced`.
    pub fn get_random_words_by_difficulty(
        &self,
        language: &str,
        difficulty: &str,
        n: i64,
    ) -> ToolResult<Vec<String>> {
        let tier: Difficulty = difficulty.parse()?;
        let count = count_from(n)?;
        let list = self.store.load(language)?;
        let words = self.lock_sampler().sample_by_difficulty(&list, tier, count)?;
        tracing::debug!(language, %tier, count, "sampled random words by difficulty");
        Ok(words)
    }

    /// Translate `words`, one pair per word in input order
    pub async fn translate_words(
        &self,
        words: &[String],
        source_language: &str,
        target_language: &str,
    ) -> ToolResult<Vec<TranslationPair>> {
        Ok(self
            .translator
            .translate(words, source_language, target_language)
            .await?)
    }

    /// Languages with a word list
    pub fn languages(&self) -> ToolResult<Vec<String>> {
        Ok(self.store.available_languages()?)
    }

    /// Entry counts of a language's word list
    pub fn summary(&self, language: &str) -> ToolResult<WordListSummary> {
        Ok(self.store.load(language)?.summary())
    }

    /// Run the tool called `name` with JSON `args`
    ///
    /// Unknown tool names and arguments that do not match the tool's
    /// parameters fail with `InvalidArgument`.
    pub async fn dispatch(&self, name: &str, args: Value) -> ToolResult<Value> {
        tracing::info!(tool = name, "dispatching tool call");

        match name {
            RANDOM_WORDS_TOOL => {
                let args: RandomWordsArgs = parse_args(name, args)?;
                Ok(json!(self.get_random_words(&args.language, args.n)?))
            }
            RANDOM_WORDS_BY_DIFFICULTY_TOOL => {
                let args: RandomWordsByDifficultyArgs = parse_args(name, args)?;
                Ok(json!(self.get_random_words_by_difficulty(
                    &args.language,
                    &args.difficulty_level,
                    args.n
                )?))
            }
            TRANSLATE_WORDS_TOOL => {
                let args: TranslateWordsArgs = parse_args(name, args)?;
                let pairs = self
                    .translate_words(&args.words, &args.source_language, &args.target_language)
                    .await?;
                Ok(json!(pairs))
            }
            other => Err(ToolError::invalid_argument(format!(
                "Unknown tool '{}'",
                other
            ))),
        }
    }

    fn lock_sampler(&self) -> std::sync::MutexGuard<'_, WordSampler> {
        self.sampler.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn parse_args<T: serde::de::DeserializeOwned>(tool: &str, args: Value) -> ToolResult<T> {
    serde_json::from_value(args).map_err(|e| {
        ToolError::invalid_argument(format!("Invalid arguments for '{}': {}", tool, e))
    })
}

/// Convert a tool-call count into a sample size
fn count_from(n: i64) -> ToolResult<usize> {
    usize::try_from(n).map_err(|_| {
        ToolError::invalid_argument(format!("Word count must not be negative, got {}", n))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::collections::HashSet;
    use std::sync::Arc;
    use tempfile::TempDir;
    use wordwise_lists::WORD_LIST_FILE_NAME;
    use wordwise_mt::{MockGenerator, MockMode};

    /// German list with 50 entries, 12 advanced, 18 intermediate, 20 beginner
    fn german_fixture() -> String {
        let records: serde_json::Map<String, Value> = (0..50)
            .map(|i| {
                let tier = match i {
                    0..12 => "advanced",
                    12..30 => "intermediate",
                    _ => "beginner",
                };
                (
                    i.to_string(),
                    json!({ "word": format!("wort{}", i), "word_difficulty": tier }),
                )
            })
            .collect();
        Value::Object(records).to_string()
    }

    fn toolbox_with(mock: MockGenerator) -> (Toolbox, TempDir) {
        let dir = TempDir::new().unwrap();
        let german = dir.path().join("German");
        std::fs::create_dir_all(&german).unwrap();
        std::fs::write(german.join(WORD_LIST_FILE_NAME), german_fixture()).unwrap();

        let toolbox = Toolbox::with_sampler(
            WordListStore::new(dir.path()),
            WordTranslator::new(Arc::new(mock)),
            WordSampler::seeded(17),
        );
        (toolbox, dir)
    }

    fn toolbox() -> (Toolbox, TempDir) {
        toolbox_with(MockGenerator::dictionary([("Haus", "house"), ("Katze", "cat")]))
    }

    fn tier_of(word: &str) -> &'static str {
        let i: usize = word.trim_start_matches("wort").parse().unwrap();
        match i {
            0..12 => "advanced",
            12..30 => "intermediate",
            _ => "beginner",
        }
    }

    #[test]
    fn test_random_words() {
        let (toolbox, _dir) = toolbox();
        let words = toolbox.get_random_words("German", 20).unwrap();
        assert_eq!(words.len(), 20);
        assert_eq!(words.iter().collect::<HashSet<_>>().len(), 20);
    }

    #[test]
    fn test_random_words_by_difficulty() {
        let (toolbox, _dir) = toolbox();
        let words = toolbox
            .get_random_words_by_difficulty("German", "advanced", 10)
            .unwrap();
        assert_eq!(words.len(), 10);
        assert_eq!(words.iter().collect::<HashSet<_>>().len(), 10);
        assert!(words.iter().all(|w| tier_of(w) == "advanced"));
    }

    #[test]
    fn test_too_many_words_by_difficulty() {
        let (toolbox, _dir) = toolbox();
        let error = toolbox
            .get_random_words_by_difficulty("German", "advanced", 13)
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InsufficientData);
    }

    #[test]
    fn test_too_many_words() {
        let (toolbox, _dir) = toolbox();
        let error = toolbox.get_random_words("German", 51).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InsufficientData);
    }

    #[test]
    fn test_zero_words() {
        let (toolbox, _dir) = toolbox();
        assert!(toolbox.get_random_words("German", 0).unwrap().is_empty());
    }

    #[test]
    fn test_negative_count() {
        let (toolbox, _dir) = toolbox();
        let error = toolbox.get_random_words("German", -1).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_invalid_difficulty() {
        let (toolbox, _dir) = toolbox();
        let error = toolbox
            .get_random_words_by_difficulty("German", "expert", 1)
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_unknown_language() {
        let (toolbox, _dir) = toolbox();
        let error = toolbox.get_random_words("Klingon", 1).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ResourceNotFound);
        assert!(error.to_string().contains("Klingon"));
    }

    #[test]
    fn test_summary_and_languages() {
        let (toolbox, _dir) = toolbox();
        assert_eq!(toolbox.languages().unwrap(), vec!["German".to_string()]);

        let summary = toolbox.summary("German").unwrap();
        assert_eq!(summary.total, 50);
        assert_eq!(summary.advanced, 12);
        assert_eq!(summary.intermediate, 18);
        assert_eq!(summary.beginner, 20);
    }

    #[tokio::test]
    async fn test_translate_words() {
        let (toolbox, _dir) = toolbox();
        let words = vec!["Haus".to_string(), "Baum".to_string(), "katze".to_string()];
        let pairs = toolbox
            .translate_words(&words, "German", "English")
            .await
            .unwrap();
        assert_eq!(
            pairs,
            vec![
                TranslationPair::new("Haus", "house"),
                TranslationPair::new("Baum", "Baum"),
                TranslationPair::new("katze", "katze"),
            ]
        );
    }

    #[tokio::test]
    async fn test_translate_unparsable() {
        let (toolbox, _dir) =
            toolbox_with(MockGenerator::new(MockMode::Respond("no idea".to_string())));
        let error = toolbox
            .translate_words(&["Haus".to_string()], "German", "English")
            .await
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnparsableResponse);
    }

    #[tokio::test]
    async fn test_dispatch_random_words() {
        let (toolbox, _dir) = toolbox();
        let result = toolbox
            .dispatch(RANDOM_WORDS_TOOL, json!({ "language": "German", "n": 5 }))
            .await
            .unwrap();
        assert_eq!(result.as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_dispatch_random_words_by_difficulty() {
        let (toolbox, _dir) = toolbox();
        let result = toolbox
            .dispatch(
                RANDOM_WORDS_BY_DIFFICULTY_TOOL,
                json!({ "language": "German", "difficulty_level": "beginner", "n": 3 }),
            )
            .await
            .unwrap();
        let words: Vec<String> = serde_json::from_value(result).unwrap();
        assert_eq!(words.len(), 3);
        assert!(words.iter().all(|w| tier_of(w) == "beginner"));
    }

    #[tokio::test]
    async fn test_dispatch_translate() {
        let (toolbox, _dir) = toolbox();
        let result = toolbox
            .dispatch(
                TRANSLATE_WORDS_TOOL,
                json!({
                    "words": ["Katze"],
                    "source_language": "German",
                    "target_language": "English"
                }),
            )
            .await
            .unwrap();
        assert_eq!(result, json!([{ "source": "Katze", "target": "cat" }]));
    }

    #[tokio::test]
    async fn test_dispatch_rejects_bad_calls() {
        let (toolbox, _dir) = toolbox();

        let unknown = toolbox.dispatch("make_deck", json!({})).await.unwrap_err();
        assert_eq!(unknown.kind(), ErrorKind::InvalidArgument);

        let missing = toolbox
            .dispatch(RANDOM_WORDS_TOOL, json!({ "language": "German" }))
            .await
            .unwrap_err();
        assert_eq!(missing.kind(), ErrorKind::InvalidArgument);

        let ill_typed = toolbox
            .dispatch(RANDOM_WORDS_TOOL, json!({ "language": "German", "n": "five" }))
            .await
            .unwrap_err();
        assert_eq!(ill_typed.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_tool_definitions_match_dispatch_names() {
        let names: Vec<String> = tool_definitions()
            .iter()
            .map(|tool| tool["function"]["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                RANDOM_WORDS_TOOL,
                RANDOM_WORDS_BY_DIFFICULTY_TOOL,
                TRANSLATE_WORDS_TOOL
            ]
        );

        let definitions = tool_definitions();
        let tiers = &definitions[1]["function"]["parameters"]["properties"]["difficulty_level"]
            ["enum"];
        assert_eq!(*tiers, json!(["beginner", "intermediate", "advanced"]));
    }
}
