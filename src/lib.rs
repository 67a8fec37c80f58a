//! ```text
//! Wikipedia URL ──► wiki::WikiClient::resolve ──► RetrievedContent
//! PDF file ──────► pdf::PdfExtractor::extract ──► PdfDocument
//!                                   │
//!            raw text ──► preprocess::normalize_text
//!                                   │
//!                     ┌─────────────┴─────────────┐
//!        preprocess::segment_sections   preprocess::split_into_chunks
//!                     │                             │
//!                SectionMap                    Vec<String>
//!                     │                             │
//!         pipeline::ProcessedDocument     llm::Summarizer ──► summaries
//! ```
//!
//! # wikismith
//!
//! Content acquisition and preprocessing pipeline for LLM-assisted
//! learning tools. Given a source document (a Wikipedia article URL or
//! an uploaded PDF), the crate extracts raw text, normalizes it,
//! segments it into titled sections for display, and splits it into
//! bounded, overlapping chunks sized for language-model consumption.
//!
//! The four core components are independent and composable:
//!
//! - [`preprocess::normalize_text`] — collapses whitespace and newline
//!   runs; pure and total.
//! - [`preprocess::segment_sections`] — heuristic header detection over
//!   loosely structured prose, producing an ordered title → body map.
//! - [`preprocess::split_into_chunks`] — sentence-respecting chunking
//!   under a validated [`ChunkPolicy`].
//! - [`wiki::WikiClient`] — resolves a Wikipedia URL to page content via
//!   the MediaWiki Action API, translating backend failures into the
//!   crate's error taxonomy.
//!
//! [`pipeline::DocumentPipeline`] wires them together for the two source
//! kinds, and [`llm::Summarizer`] feeds the chunk sequence to an opaque
//! [`llm::LanguageModel`] collaborator.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use wikismith::{DocumentPipeline, PipelineConfig};
//!
//! let pipeline = DocumentPipeline::new(PipelineConfig::default())?;
//! let document = pipeline
//!     .process_url("https://en.wikipedia.org/wiki/Rust_(programming_language)", None)
//!     .await?;
//! println!("{} sections, {} chunks", document.sections.len(), document.chunks.len());
//! ```

pub mod config;
pub mod llm;
pub mod pdf;
pub mod pipeline;
pub mod preprocess;
pub mod types;
pub mod wiki;

pub use config::{ChunkPolicy, ConfigError, PipelineConfig};
pub use pipeline::{DocumentPipeline, ProcessedDocument};
pub use preprocess::{normalize_text, segment_sections, split_into_chunks};
pub use types::{PipelineError, RetrievedContent, SectionMap};
pub use wiki::{ResolveError, WikiClient};
