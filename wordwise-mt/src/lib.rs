//! LLM-backed batch word translation
//!
//! This crate translates batches of vocabulary words through a hosted
//! text-generation service and reconciles the answer with the requested word
//! order.
//!
//! # Overview
//!
//! 1. **Generator trait & providers** - [`TextGenerator`] with a Gemini
//!    implementation and a deterministic mock
//! 2. **Prompt** - one prompt per batch, embedding the words as a JSON array
//! 3. **Response parsing** - strict JSON first, then recovery of a single
//!    embedded object from surrounding prose
//! 4. **Reconciliation** - exact match, capitalized match, or identity,
//!    per input word, in input order
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use wordwise_mt::{MockGenerator, WordTranslator};
//!
//! let translator = WordTranslator::new(Arc::new(MockGenerator::dictionary([("Haus", "house")])));
//! let pairs = translator.translate(&["Haus".to_string()], "German", "English").await?;
//! assert_eq!(pairs[0].target, "house");
//! ```

pub mod error;
pub mod gemini;
pub mod generator;
pub mod mock;
pub mod prompt;
pub mod reconcile;
pub mod response;
pub mod translator;

pub use error::{MtError, MtResult};
pub use gemini::GeminiProvider;
pub use generator::TextGenerator;
pub use mock::{MockGenerator, MockMode};
pub use prompt::build_translation_prompt;
pub use reconcile::{capitalize, reconcile};
pub use response::{TranslationPair, parse_translation_response};
pub use translator::WordTranslator;
