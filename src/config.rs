//! Process configuration from the environment
//!
//! | variable | meaning | default |
//! |---|---|---|
//! | `WORDWISE_DATA_DIR` | base directory of the word lists | `data` |
//! | `GOOGLE_API_KEY` | Gemini API key | none, required for real translations |
//! | `WORDWISE_MODEL` | Gemini model name | `gemini-2.0-flash` |
//! | `WORDWISE_WEB_ADDR` | listen address of the web server | `127.0.0.1:3000` |
//!
//! Binaries load a `.env` file (if present) before reading these.

use std::path::PathBuf;
use std::sync::Arc;
use wordwise_lists::{DEFAULT_DATA_DIR, WordListStore};
use wordwise_mt::{GeminiProvider, MtError, MtResult, TextGenerator, WordTranslator};

pub const DEFAULT_WEB_ADDR: &str = "127.0.0.1:3000";

#[derive(Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub api_key: Option<String>,
    pub model: String,
    pub web_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        Config {
            data_dir: var("WORDWISE_DATA_DIR")
                .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string())
                .into(),
            api_key: var("GOOGLE_API_KEY"),
            model: var("WORDWISE_MODEL")
                .unwrap_or_else(|| GeminiProvider::DEFAULT_MODEL.to_string()),
            web_addr: var("WORDWISE_WEB_ADDR").unwrap_or_else(|| DEFAULT_WEB_ADDR.to_string()),
        }
    }

    pub fn word_list_store(&self) -> WordListStore {
        WordListStore::new(&self.data_dir)
    }

    /// Build the Gemini-backed translator
    ///
    /// Fails with `ConfigError` when no API key is configured.
    pub fn gemini_translator(&self) -> MtResult<WordTranslator> {
        let api_key = self.api_key.clone().ok_or_else(|| {
            MtError::ConfigError("GOOGLE_API_KEY environment variable not set".to_string())
        })?;
        let provider: Arc<dyn TextGenerator> =
            Arc::new(GeminiProvider::new(api_key, self.model.clone())?);
        Ok(WordTranslator::new(provider))
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &self.data_dir)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("model", &self.model)
            .field("web_addr", &self.web_addr)
            .finish()
    }
}
