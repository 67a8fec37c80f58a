//! Chunked summarization driver.
//!
//! Texts that fit one chunk go to the model whole. Longer texts are
//! split by the chunker, each chunk summarized independently (chunk
//! order preserved), and the partial summaries condensed by one final
//! combining pass. No call is retried; the first failure propagates.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::config::ChunkPolicy;
use crate::preprocess::split_into_chunks;

use super::{LanguageModel, LlmError, SUMMARY_SYSTEM_PROMPT, SummaryStyle, summary_prompt};

/// Drives a [`LanguageModel`] over chunked input.
pub struct Summarizer {
    model: Arc<dyn LanguageModel>,
    policy: ChunkPolicy,
}

impl Summarizer {
    /// Builds a summarizer over the given model and chunking policy.
    pub fn new(model: Arc<dyn LanguageModel>, policy: ChunkPolicy) -> Self {
        Self { model, policy }
    }

    /// Summarizes `text` in the requested style.
    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn summarize(&self, text: &str, style: SummaryStyle) -> Result<String, LlmError> {
        if text.chars().count() <= self.policy.chunk_size() {
            return self
                .model
                .generate(SUMMARY_SYSTEM_PROMPT, &summary_prompt(style, text))
                .await;
        }

        let chunks = split_into_chunks(text, &self.policy);
        debug!(chunk_count = chunks.len(), "summarizing chunk by chunk");

        let mut partials = Vec::with_capacity(chunks.len());
        for chunk in &chunks {
            let partial = self
                .model
                .generate(SUMMARY_SYSTEM_PROMPT, &summary_prompt(style, chunk))
                .await?;
            partials.push(partial);
        }

        if partials.len() == 1 {
            if let Some(only) = partials.pop() {
                return Ok(only);
            }
        }

        let combined = partials.join("\n\n");
        self.model
            .generate(SUMMARY_SYSTEM_PROMPT, &summary_prompt(style, &combined))
            .await
    }
}
