//! Language-model collaborator boundary.
//!
//! The pipeline treats the model backend as an opaque text-in/text-out
//! function with a declared failure mode: [`LanguageModel`] is the whole
//! contract. [`ollama::OllamaModel`] adapts a local rig-core provider,
//! and [`MockLanguageModel`] keeps tests deterministic and offline.

pub mod ollama;
pub mod summarize;

use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use ollama::OllamaModel;
pub use summarize::Summarizer;

/// Failure mode of a model call. Not retried here; retry policy belongs
/// to the caller.
#[derive(Debug, Error)]
pub enum LlmError {
    /// The backend rejected or failed the call.
    #[error("language model call failed: {0}")]
    Provider(String),
}

/// Opaque text-in/text-out model backend.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Generates a completion for `prompt` under the `system` persona.
    async fn generate(&self, system: &str, prompt: &str) -> Result<String, LlmError>;
}

/// Length and shape of a requested summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStyle {
    /// 3–5 bullet points, key facts only.
    Short,
    /// 2–3 paragraphs covering history, concepts, and details.
    Medium,
}

impl SummaryStyle {
    fn instruction(self) -> &'static str {
        match self {
            SummaryStyle::Short => {
                "Provide a concise summary in 3-5 bullet points. Focus on the absolute key facts."
            }
            SummaryStyle::Medium => {
                "Provide a medium-length summary (2-3 paragraphs). Cover the main history, key concepts, and significant details."
            }
        }
    }
}

/// Persona for summarization calls.
pub(crate) const SUMMARY_SYSTEM_PROMPT: &str = "You are an expert educational assistant named Wikismith. Your goal is to summarize complex academic content into clear, easy-to-understand text. Do not add any conversational filler (like 'Here is the summary'). Just output the summary.";

/// Persona for translation calls.
pub(crate) const TRANSLATION_SYSTEM_PROMPT: &str = "You are an expert translator";

/// Assembles the user prompt for a summary request.
pub fn summary_prompt(style: SummaryStyle, text: &str) -> String {
    format!(
        "Instructions: {}\n\nSource Text:\n{}",
        style.instruction(),
        text
    )
}

/// Assembles the user prompt for a translation request.
pub fn translation_prompt(target_language: &str, text: &str) -> String {
    format!("Translate the text to {target_language} : {text}")
}

/// Translates `text` into `target_language` in one model call.
pub async fn translate(
    model: &dyn LanguageModel,
    text: &str,
    target_language: &str,
) -> Result<String, LlmError> {
    model
        .generate(
            TRANSLATION_SYSTEM_PROMPT,
            &translation_prompt(target_language, text),
        )
        .await
}

/// Deterministic in-process model for tests and offline runs.
///
/// Records every prompt it receives and answers with a numbered
/// placeholder, so callers can assert on call counts and prompt
/// contents without a live backend.
#[derive(Debug, Default)]
pub struct MockLanguageModel {
    calls: Mutex<Vec<String>>,
}

impl MockLanguageModel {
    /// Creates an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }

    /// Copies of every prompt received so far, in call order.
    pub fn recorded_prompts(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl LanguageModel for MockLanguageModel {
    async fn generate(&self, _system: &str, prompt: &str) -> Result<String, LlmError> {
        let mut calls = self
            .calls
            .lock()
            .map_err(|_| LlmError::Provider("mock lock poisoned".to_string()))?;
        calls.push(prompt.to_string());
        Ok(format!("[mock response {}]", calls.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_prompt_carries_style_instruction() {
        let short = summary_prompt(SummaryStyle::Short, "body");
        assert!(short.contains("3-5 bullet points"));
        assert!(short.contains("Source Text:\nbody"));

        let medium = summary_prompt(SummaryStyle::Medium, "body");
        assert!(medium.contains("2-3 paragraphs"));
    }

    #[test]
    fn translation_prompt_names_target_language() {
        let prompt = translation_prompt("German", "Hello");
        assert!(prompt.contains("German"));
        assert!(prompt.contains("Hello"));
    }

    #[tokio::test]
    async fn mock_records_prompts_in_order() {
        let mock = MockLanguageModel::new();
        mock.generate("sys", "first").await.unwrap();
        mock.generate("sys", "second").await.unwrap();
        assert_eq!(mock.call_count(), 2);
        assert_eq!(mock.recorded_prompts(), ["first", "second"]);
    }

    #[tokio::test]
    async fn translate_routes_through_the_model() {
        let mock = MockLanguageModel::new();
        let result = translate(&mock, "bonjour", "English").await.unwrap();
        assert!(!result.is_empty());
        assert!(mock.recorded_prompts()[0].contains("English"));
    }
}
