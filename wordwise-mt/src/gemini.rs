//! Google Gemini provider for text generation
//!
//! This module calls the Generative Language API
//! (`models/{model}:generateContent`) to obtain completions for a prompt.
//!
//! # Authentication
//!
//! The provider loads the API key from the `GOOGLE_API_KEY` environment
//! variable and the model from `WORDWISE_MODEL` (default
//! [`GeminiProvider::DEFAULT_MODEL`]). Obtain a key from:
//! https://aistudio.google.com/
//!
//! # Example
//!
//! ```ignore
//! use wordwise_mt::{GeminiProvider, TextGenerator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = GeminiProvider::from_env()?;
//!     let text = provider.generate("Say hello in German").await?;
//!     println!("{}", text);
//!     Ok(())
//! }
//! ```

use crate::error::{MtError, MtResult};
use crate::generator::TextGenerator;
use async_trait::async_trait;
use serde_json::{Value, json};

/// Gemini `generateContent` provider
#[derive(Clone)]
pub struct GeminiProvider {
    /// API key for authentication
    api_key: String,
    /// Model name, e.g. "gemini-2.0-flash"
    model: String,
    /// HTTP client for async requests
    client: reqwest::Client,
    /// Base URL of the Generative Language API
    base_url: String,
}

impl GeminiProvider {
    pub const DEFAULT_MODEL: &'static str = "gemini-2.0-flash";

    /// Transport timeout for a single request
    const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Create a new provider with an explicit API key and model
    ///
    /// # Errors
    ///
    /// `ConfigError` if the key or model is empty, `NetworkError` if the HTTP
    /// client cannot be built.
    pub fn new(api_key: String, model: String) -> MtResult<Self> {
        if api_key.trim().is_empty() {
            return Err(MtError::ConfigError("API key cannot be empty".to_string()));
        }
        if model.trim().is_empty() {
            return Err(MtError::ConfigError("Model name cannot be empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(Self::REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| MtError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            model,
            client,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        })
    }

    /// Create a provider from `GOOGLE_API_KEY` and the optional `WORDWISE_MODEL`
    pub fn from_env() -> MtResult<Self> {
        let api_key = std::env::var("GOOGLE_API_KEY").map_err(|_| {
            MtError::ConfigError("GOOGLE_API_KEY environment variable not set".to_string())
        })?;
        let model =
            std::env::var("WORDWISE_MODEL").unwrap_or_else(|_| Self::DEFAULT_MODEL.to_string());

        Self::new(api_key, model)
    }

    /// Point the provider at a different API endpoint (proxies, test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    fn request_body(prompt: &str) -> Value {
        json!({
            "contents": [
                { "role": "user", "parts": [{ "text": prompt }] }
            ],
            "generationConfig": { "temperature": 0.0 }
        })
    }

    /// Join the text parts of the first candidate of a `generateContent` response
    fn extract_text(response: &Value) -> MtResult<String> {
        if let Some(reason) = response["promptFeedback"]["blockReason"].as_str() {
            return Err(MtError::GenerationError(format!(
                "Prompt was blocked: {}",
                reason
            )));
        }

        let parts = response["candidates"][0]["content"]["parts"]
            .as_array()
            .ok_or_else(|| {
                MtError::GenerationError(
                    "Invalid API response: missing 'candidates[0].content.parts'".to_string(),
                )
            })?;

        let text: String = parts
            .iter()
            .filter_map(|part| part["text"].as_str())
            .collect();

        if text.is_empty() {
            return Err(MtError::GenerationError(
                "Invalid API response: candidate has no text".to_string(),
            ));
        }

        Ok(text)
    }
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("api_key", &"***")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    async fn generate(&self, prompt: &str) -> MtResult<String> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(if status.is_client_error() {
                MtError::ConfigError(format!("API client error ({}): {}", status, error_text))
            } else {
                MtError::GenerationError(format!("API server error ({}): {}", status, error_text))
            });
        }

        let json: Value = response.json().await.map_err(|e| {
            MtError::GenerationError(format!("Failed to parse API response: {}", e))
        })?;

        let text = Self::extract_text(&json)?;
        tracing::debug!(model = %self.model, chars = text.len(), "received completion");
        Ok(text)
    }

    fn provider_name(&self) -> &str {
        "Google Gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_valid_key() {
        let provider = GeminiProvider::new("test-key".to_string(), "gemini-test".to_string());
        assert!(provider.is_ok());
        assert_eq!(provider.unwrap().provider_name(), "Google Gemini");
    }

    #[test]
    fn test_new_with_empty_key() {
        match GeminiProvider::new("  ".to_string(), "gemini-test".to_string()) {
            Err(MtError::ConfigError(msg)) => assert!(msg.contains("empty")),
            _ => panic!("Expected ConfigError"),
        }
    }

    #[test]
    fn test_new_with_empty_model() {
        assert!(matches!(
            GeminiProvider::new("test-key".to_string(), String::new()),
            Err(MtError::ConfigError(_))
        ));
    }

    #[test]
    fn test_from_env_without_key() {
        unsafe {
            std::env::remove_var("GOOGLE_API_KEY");
        }
        match GeminiProvider::from_env() {
            Err(MtError::ConfigError(msg)) => assert!(msg.contains("not set")),
            _ => panic!("Expected ConfigError"),
        }
    }

    #[test]
    fn test_endpoint() {
        let provider = GeminiProvider::new("k".to_string(), "gemini-test".to_string())
            .unwrap()
            .with_base_url("http://localhost:8080/v1beta/");
        assert_eq!(
            provider.endpoint(),
            "http://localhost:8080/v1beta/models/gemini-test:generateContent"
        );
    }

    #[test]
    fn test_request_body_carries_prompt() {
        let body = GeminiProvider::request_body("translate this");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "translate this");
        assert_eq!(body["contents"][0]["role"], "user");
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response = json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": "{\"translations\": " }, { "text": "[]}" }]
                },
                "finishReason": "STOP"
            }]
        });
        assert_eq!(
            GeminiProvider::extract_text(&response).unwrap(),
            "{\"translations\": []}"
        );
    }

    #[test]
    fn test_extract_text_without_candidates() {
        let response = json!({ "candidates": [] });
        assert!(matches!(
            GeminiProvider::extract_text(&response),
            Err(MtError::GenerationError(_))
        ));
    }

    #[test]
    fn test_extract_text_blocked_prompt() {
        let response = json!({ "promptFeedback": { "blockReason": "SAFETY" } });
        match GeminiProvider::extract_text(&response) {
            Err(MtError::GenerationError(msg)) => assert!(msg.contains("SAFETY")),
            other => panic!("Expected GenerationError, got {:?}", other),
        }
    }

    #[test]
    fn test_debug_output_masks_key() {
        let provider =
            GeminiProvider::new("secret-key".to_string(), "gemini-test".to_string()).unwrap();
        let debug_str = format!("{:?}", provider);
        assert!(debug_str.contains("***"));
        assert!(!debug_str.contains("secret-key"));
    }

    #[tokio::test]
    #[ignore] // Run with: cargo test --ignored
    async fn test_real_api_generation() {
        if std::env::var("GOOGLE_API_KEY").is_err() {
            eprintln!("Skipping: GOOGLE_API_KEY not set");
            return;
        }

        let provider = GeminiProvider::from_env().unwrap();
        let text = provider
            .generate("Reply with the single word: hallo")
            .await
            .unwrap();
        assert!(!text.trim().is_empty());
    }
}
