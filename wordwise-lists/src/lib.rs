//! Per-language word lists for vocabulary practice
//!
//! Word lists are JSON files produced by an offline cleaning pipeline. Each
//! entry carries a lemmatized word and a difficulty tier. This crate loads
//! them ([`WordListStore`]) and draws random, duplicate-free samples from them
//! ([`sample_words`], [`WordSampler`]).
//!
//! # Example
//!
//! ```ignore
//! use wordwise_lists::{Difficulty, WordListStore, WordSampler};
//!
//! let store = WordListStore::new("data");
//! let german = store.load("German")?;
//!
//! let mut sampler = WordSampler::new();
//! let words = sampler.sample_by_difficulty(&german, Difficulty::Advanced, 10)?;
//! println!("{:?}", words);
//! ```

pub mod entry;
pub mod error;
pub mod sampler;
pub mod store;

pub use entry::{Difficulty, WordEntry};
pub use error::{WordListError, WordListResult};
pub use sampler::{WordSampler, sample_words};
pub use store::{
    DEFAULT_DATA_DIR, WORD_LIST_FILE_NAME, WordList, WordListStore, WordListSummary,
    parse_word_list,
};
