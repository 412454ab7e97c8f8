//! Loading and caching of per-language word lists
//!
//! Word lists live on disk, one directory per language:
//!
//! ```text
//! data/
//! ├── German/word-list-cleaned.json
//! └── Spanish/word-list-cleaned.json
//! ```
//!
//! Each file is a JSON object mapping opaque keys to records:
//!
//! ```json
//! {
//!     "0": { "word": "haus", "word_difficulty": "beginner" },
//!     "1": { "word": "gemütlichkeit", "word_difficulty": "advanced" }
//! }
//! ```

use crate::entry::{Difficulty, WordEntry};
use crate::error::{WordListError, WordListResult};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

/// File name of the cleaned word list inside each language directory
pub const WORD_LIST_FILE_NAME: &str = "word-list-cleaned.json";

/// Default base directory of the word lists
pub const DEFAULT_DATA_DIR: &str = "data";

/// The loaded word list of one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    language: String,
    entries: Arc<[WordEntry]>,
}

/// Entry counts of a word list, overall and per tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct WordListSummary {
    pub total: usize,
    pub beginner: usize,
    pub intermediate: usize,
    pub advanced: usize,
}

impl WordList {
    pub fn new(language: &str, entries: Vec<WordEntry>) -> Self {
        WordList {
            language: language.to_string(),
            entries: entries.into(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count_by_difficulty(&self, difficulty: Difficulty) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.difficulty == difficulty)
            .count()
    }

    pub fn summary(&self) -> WordListSummary {
        WordListSummary {
            total: self.len(),
            beginner: self.count_by_difficulty(Difficulty::Beginner),
            intermediate: self.count_by_difficulty(Difficulty::Intermediate),
            advanced: self.count_by_difficulty(Difficulty::Advanced),
        }
    }
}

/// Lazily loading, caching store of word lists addressed by language
///
/// Each language is read from disk on first access and kept in memory
/// afterwards. Loaded lists are immutable; concurrent first loads of the
/// same language may both read the file, and the last insert wins.
#[derive(Debug)]
pub struct WordListStore {
    base_dir: PathBuf,
    cache: RwLock<HashMap<String, Arc<WordList>>>,
}

impl WordListStore {
    /// Create a store reading word lists below `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        WordListStore {
            base_dir: base_dir.into(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the word-list file for `language`
    pub fn path_for(&self, language: &str) -> PathBuf {
        self.base_dir.join(language).join(WORD_LIST_FILE_NAME)
    }

    /// Load the word list of `language`, reading it from disk on first access
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the language identifier is empty or contains
    ///   characters other than alphanumerics, `-` and `_`
    /// - `ResourceNotFound` if no word list exists for the language
    /// - `MalformedResource` if the file is not valid JSON or a record lacks
    ///   a `word` or `word_difficulty` field
    /// - `Io` for any other read failure
    pub fn load(&self, language: &str) -> WordListResult<Arc<WordList>> {
        validate_language(language)?;

        if let Some(list) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(language)
        {
            tracing::debug!(language, "word list cache hit");
            return Ok(Arc::clone(list));
        }

        let path = self.path_for(language);
        let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => WordListError::ResourceNotFound {
                language: language.to_string(),
            },
            _ => WordListError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            },
        })?;

        let list = Arc::new(parse_word_list(language, &content)?);
        tracing::info!(
            language,
            entries = list.len(),
            path = %path.display(),
            "loaded word list"
        );

        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(language.to_string(), Arc::clone(&list));

        Ok(list)
    }

    /// List the languages that have a word list below the base directory,
    /// sorted by name
    pub fn available_languages(&self) -> WordListResult<Vec<String>> {
        let io_error = |e: std::io::Error| WordListError::Io {
            path: self.base_dir.display().to_string(),
            message: e.to_string(),
        };

        let mut languages = Vec::new();
        for entry in fs::read_dir(&self.base_dir).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if !path.join(WORD_LIST_FILE_NAME).is_file() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
                languages.push(name.to_string());
            }
        }

        languages.sort();
        Ok(languages)
    }
}

/// Parse the JSON content of a word-list file into a `WordList`
///
/// Records are validated eagerly: the first record missing a `word` or
/// `word_difficulty` string, or carrying an unknown tier, fails the whole
/// load. Extra fields are ignored.
pub fn parse_word_list(language: &str, content: &str) -> WordListResult<WordList> {
    let malformed = |key: &str, reason: String| WordListError::MalformedResource {
        language: language.to_string(),
        key: key.to_string(),
        reason,
    };

    let json: Value = serde_json::from_str(content)
        .map_err(|e| malformed("(root)", format!("invalid JSON: {}", e)))?;
    let records = json
        .as_object()
        .ok_or_else(|| malformed("(root)", "root must be an object".to_string()))?;

    let mut entries = Vec::with_capacity(records.len());
    for (key, record) in records {
        let word = record
            .get("word")
            .and_then(Value::as_str)
            .ok_or_else(|| malformed(key, "missing or non-string 'word' field".to_string()))?;
        let tier = record
            .get("word_difficulty")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                malformed(
                    key,
                    "missing or non-string 'word_difficulty' field".to_string(),
                )
            })?;
        let difficulty = tier
            .parse::<Difficulty>()
            .map_err(|_| malformed(key, format!("unknown difficulty '{}'", tier)))?;

        entries.push(WordEntry {
            key: key.clone(),
            word: word.to_string(),
            difficulty,
        });
    }

    Ok(WordList::new(language, entries))
}

/// Check that a language identifier is usable as a directory name
fn validate_language(language: &str) -> WordListResult<()> {
    if language.is_empty() {
        return Err(WordListError::InvalidArgument(
            "Language identifier is empty".to_string(),
        ));
    }

    if !language
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(WordListError::InvalidArgument(format!(
            "Invalid characters in language identifier: {}",
            language
        )));
    }

    Ok(())
}
