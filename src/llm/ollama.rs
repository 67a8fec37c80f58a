//! rig-core adapter for a local Ollama backend.

use std::fmt;

use async_trait::async_trait;
use rig::completion::Prompt;
use rig::prelude::*;
use rig::providers::ollama;

use super::{LanguageModel, LlmError};

/// Model served by a default local Ollama install.
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.1:8b";

/// Temperature used for summary-style calls.
pub const SUMMARY_TEMPERATURE: f64 = 0.5;

/// Temperature used for translation calls.
pub const TRANSLATION_TEMPERATURE: f64 = 1.0;

/// [`LanguageModel`] backed by rig-core's Ollama provider.
///
/// An agent is built per call so each request carries its own system
/// preamble; the underlying HTTP client is shared.
pub struct OllamaModel {
    client: ollama::Client,
    model: String,
    temperature: f64,
}

impl OllamaModel {
    /// Connects to the default local Ollama endpoint.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            client: ollama::Client::from_val(rig::client::Nothing),
            model: model.into(),
            temperature: SUMMARY_TEMPERATURE,
        }
    }

    /// Uses the default model name.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_OLLAMA_MODEL)
    }

    /// Overrides the sampling temperature. Summaries default to
    /// [`SUMMARY_TEMPERATURE`]; translation callers typically raise it
    /// to [`TRANSLATION_TEMPERATURE`].
    #[must_use]
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}

impl fmt::Debug for OllamaModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OllamaModel")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl LanguageModel for OllamaModel {
    async fn generate(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        let agent = self
            .client
            .agent(&self.model)
            .preamble(system)
            .temperature(self.temperature)
            .build();
        agent
            .prompt(prompt)
            .await
            .map_err(|err| LlmError::Provider(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_the_client() {
        let model = OllamaModel::with_defaults().temperature(0.9);
        let rendered = format!("{model:?}");
        assert!(rendered.contains("llama3.1:8b"));
        assert!(rendered.contains("0.9"));
    }
}
