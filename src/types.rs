//! Shared data model for the acquisition and preprocessing pipeline.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ordered mapping from section title to section body.
///
/// Keys are unique and insertion order matches document order, so the
/// map serializes to a JSON object whose keys appear in reading order.
pub type SectionMap = IndexMap<String, String>;

/// Everything a successful Wikipedia resolution yields.
///
/// Produced once per resolution and immutable thereafter; the caller
/// owns it and decides what (if anything) to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievedContent {
    /// Canonical page title as reported by the backend.
    pub title: String,
    /// Full plaintext article body.
    pub content: String,
    /// Lead summary (the intro section).
    pub summary: String,
    /// Canonical page URL.
    pub canonical_url: String,
    /// Two-letter language edition code the page was resolved against.
    pub language: String,
}

/// Umbrella error for pipeline-level operations.
///
/// Each collaborator keeps its own closed error taxonomy; this enum only
/// gathers them so `DocumentPipeline` callers match on one type.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Wikipedia resolution failed.
    #[error(transparent)]
    Resolve(#[from] crate::wiki::ResolveError),

    /// PDF extraction failed.
    #[error(transparent)]
    Pdf(#[from] crate::pdf::PdfError),

    /// A language-model call failed.
    #[error(transparent)]
    Llm(#[from] crate::llm::LlmError),

    /// Configuration was invalid.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
}
