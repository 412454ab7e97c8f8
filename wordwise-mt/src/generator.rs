//! Text-generation trait
//!
//! `TextGenerator` abstracts the hosted LLM behind a single prompt-in,
//! text-out call, so the translation logic can run against Gemini in
//! production and a [`MockGenerator`](crate::mock::MockGenerator) in tests.
//! Clients are constructed explicitly and injected; nothing here holds a
//! global client.

use crate::error::MtResult;
use async_trait::async_trait;

/// Generic trait for text-generation providers
///
/// All methods are async to support I/O-bound operations like network
/// requests. Implementations do not retry; a single call is a single round
/// trip to the service.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate free-form text for a single prompt
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The generated text, unparsed
    /// * `Err(MtError)` - If the service could not be reached or returned no text
    async fn generate(&self, prompt: &str) -> MtResult<String>;

    /// Get the name of this provider
    ///
    /// Used for logging to identify which provider handled a request.
    fn provider_name(&self) -> &str;
}
