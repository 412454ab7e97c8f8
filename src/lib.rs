//! Vocabulary tools for an LLM language-learning assistant
//!
//! `wordwise` is the caller-facing layer over [`wordwise_lists`] (word lists
//! and sampling) and [`wordwise_mt`] (LLM-backed word translation). An agent
//! loop offers the model [`tool_definitions`] and routes its tool calls to
//! [`Toolbox::dispatch`]; other callers use the typed [`Toolbox`] methods
//! directly.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use wordwise::{Config, Toolbox};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env();
//!     let toolbox = Toolbox::new(config.word_list_store(), config.gemini_translator()?);
//!
//!     let words = toolbox.get_random_words_by_difficulty("German", "beginner", 5)?;
//!     for pair in toolbox.translate_words(&words, "German", "English").await? {
//!         println!("{} → {}", pair.source, pair.target);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod tools;

pub use config::Config;
pub use error::{ErrorKind, ToolError, ToolResult};
pub use tools::{
    RANDOM_WORDS_BY_DIFFICULTY_TOOL, RANDOM_WORDS_TOOL, TRANSLATE_WORDS_TOOL, Toolbox,
    tool_definitions,
};

pub use wordwise_lists::{Difficulty, WordEntry, WordListStore, WordListSummary};
pub use wordwise_mt::{TextGenerator, TranslationPair, WordTranslator};

/// Initialise `tracing` output for the binaries
///
/// `RUST_LOG` takes precedence; otherwise `default_level` applies.
pub fn init_tracing(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
