//! End-to-end document pipeline.
//!
//! [`DocumentPipeline`] wires the source resolvers to the preprocessing
//! core: resolve (or extract) raw text, normalize it, segment it into
//! titled sections for display, and chunk it for model feeding.
//! Segmentation runs on the raw text, since header detection needs the
//! paragraph breaks that normalization collapses; chunking runs on the
//! normalized text.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::config::PipelineConfig;
use crate::pdf::PdfExtractor;
use crate::preprocess::{normalize_text, segment_sections, split_into_chunks};
use crate::types::{PipelineError, SectionMap};
use crate::wiki::WikiClient;

/// Fully preprocessed document, ready for display and model feeding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedDocument {
    /// Display title: the resolved page title or the PDF file name.
    pub title: String,
    /// Canonical source URL, when the source was a Wikipedia page.
    pub source_url: Option<String>,
    /// Language edition, when the source was a Wikipedia page.
    pub language: Option<String>,
    /// Lead summary, when the source provides one.
    pub summary: Option<String>,
    /// Normalized full text.
    pub content: String,
    /// Ordered section title → body mapping.
    pub sections: SectionMap,
    /// Model-sized chunks of the normalized text.
    pub chunks: Vec<String>,
}

/// Composes resolution, normalization, segmentation, and chunking.
#[derive(Debug, Clone)]
pub struct DocumentPipeline {
    config: PipelineConfig,
    wiki: WikiClient,
}

impl DocumentPipeline {
    /// Builds a pipeline from the given configuration.
    pub fn new(config: PipelineConfig) -> Result<Self, PipelineError> {
        let wiki = WikiClient::new(&config)?;
        Ok(Self { config, wiki })
    }

    /// Builds a pipeline around an existing client. Tests use this to
    /// inject a client pointed at a mock server.
    pub fn with_wiki_client(config: PipelineConfig, wiki: WikiClient) -> Self {
        Self { config, wiki }
    }

    /// The configuration this pipeline runs with.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Resolves a Wikipedia URL and preprocesses its content.
    #[instrument(skip(self))]
    pub async fn process_url(
        &self,
        url: &str,
        language: Option<&str>,
    ) -> Result<ProcessedDocument, PipelineError> {
        let retrieved = self.wiki.resolve(url, language).await?;
        let document = self.assemble(
            retrieved.title,
            Some(retrieved.canonical_url),
            Some(retrieved.language),
            Some(retrieved.summary),
            &retrieved.content,
        );
        info!(
            title = %document.title,
            sections = document.sections.len(),
            chunks = document.chunks.len(),
            "processed Wikipedia article"
        );
        Ok(document)
    }

    /// Extracts a PDF and preprocesses its text.
    #[instrument(skip(self, extractor))]
    pub async fn process_pdf(
        &self,
        extractor: PdfExtractor,
    ) -> Result<ProcessedDocument, PipelineError> {
        let pdf = extractor.extract().await?;
        let title = pdf
            .file_name
            .clone()
            .unwrap_or_else(|| "document.pdf".to_string());
        let full_text = pdf.full_text();
        let document = self.assemble(title, None, None, None, &full_text);
        info!(
            title = %document.title,
            pages = pdf.page_count,
            sections = document.sections.len(),
            chunks = document.chunks.len(),
            "processed PDF document"
        );
        Ok(document)
    }

    fn assemble(
        &self,
        title: String,
        source_url: Option<String>,
        language: Option<String>,
        summary: Option<String>,
        raw_text: &str,
    ) -> ProcessedDocument {
        let content = normalize_text(raw_text);
        let sections = segment_sections(raw_text);
        let chunks = split_into_chunks(&content, &self.config.chunking);
        ProcessedDocument {
            title,
            source_url,
            language,
            summary,
            content,
            sections,
            chunks,
        }
    }
}
