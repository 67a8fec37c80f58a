//! PDF text extraction.
//!
//! Page decoding is delegated to `lopdf`; this module only turns its
//! per-page output into the raw text the preprocessing pipeline
//! consumes. Pages are kept individually and joined with an explicit
//! page-break marker so downstream display can still show page
//! boundaries.

use std::path::PathBuf;

use lopdf::Document;
use thiserror::Error;
use tracing::debug;

/// Separator inserted between pages in [`PdfDocument::full_text`].
const PAGE_BREAK: &str = "\n\n--- Page Break ---\n\n";

/// Failures surfaced by [`PdfExtractor::extract`].
#[derive(Debug, Error)]
pub enum PdfError {
    /// The given path does not exist.
    #[error("PDF file not found: {0}")]
    NotFound(PathBuf),

    /// The given path does not name a `.pdf` file.
    #[error("not a PDF file: {0}")]
    NotAPdf(PathBuf),

    /// The document parsed but contains no pages.
    #[error("PDF contains no pages")]
    EmptyDocument,

    /// The document could not be parsed or a page could not be decoded.
    #[error("failed to read PDF: {0}")]
    Parse(String),

    /// Reading the file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Per-page text extracted from one PDF document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfDocument {
    /// Text of each page, in page order.
    pub pages: Vec<String>,
    /// Number of pages extracted.
    pub page_count: usize,
    /// File name of the source, when extracted from a path.
    pub file_name: Option<String>,
}

impl PdfDocument {
    /// All pages joined with a visible page-break marker.
    pub fn full_text(&self) -> String {
        self.pages.join(PAGE_BREAK)
    }
}

enum PdfSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

/// PDF extraction entrypoint over a file path or in-memory bytes.
pub struct PdfExtractor {
    source: PdfSource,
}

impl PdfExtractor {
    /// Extracts from a `.pdf` file on disk.
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            source: PdfSource::Path(path.into()),
        }
    }

    /// Extracts from an already-uploaded byte buffer.
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            source: PdfSource::Bytes(bytes.into()),
        }
    }

    /// Runs the extraction.
    pub async fn extract(self) -> Result<PdfDocument, PdfError> {
        match self.source {
            PdfSource::Path(path) => {
                if tokio::fs::metadata(&path).await.is_err() {
                    return Err(PdfError::NotFound(path));
                }
                let is_pdf = path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
                if !is_pdf {
                    return Err(PdfError::NotAPdf(path));
                }
                let bytes = tokio::fs::read(&path).await?;
                let file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned());
                extract_pages(&bytes, file_name)
            }
            PdfSource::Bytes(bytes) => extract_pages(&bytes, None),
        }
    }
}

fn extract_pages(bytes: &[u8], file_name: Option<String>) -> Result<PdfDocument, PdfError> {
    let document = Document::load_mem(bytes).map_err(|err| PdfError::Parse(err.to_string()))?;

    let mut page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
    page_numbers.sort_unstable();
    if page_numbers.is_empty() {
        return Err(PdfError::EmptyDocument);
    }

    let mut pages = Vec::with_capacity(page_numbers.len());
    for number in &page_numbers {
        let text = document
            .extract_text(&[*number])
            .map_err(|err| PdfError::Parse(format!("page {number}: {err}")))?;
        pages.push(text);
    }

    debug!(
        page_count = pages.len(),
        file_name = file_name.as_deref().unwrap_or("<bytes>"),
        "extracted PDF pages"
    );

    Ok(PdfDocument {
        page_count: pages.len(),
        pages,
        file_name,
    })
}
