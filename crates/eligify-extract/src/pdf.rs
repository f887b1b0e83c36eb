//! PDF text extraction using pdfium.
//!
//! Each page's selectable text is extracted, blank pages are skipped, and the
//! remaining pages are joined with a blank line. Scanned documents without a
//! text layer yield [`PdfError::NoText`].
//!
//! ## Usage
//!
//! ```no_run
//! use eligify_extract::{PdfTextExtractor, PdfiumTextExtractor};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = PdfiumTextExtractor::new()?;
//! let bytes = std::fs::read("benefits.pdf")?;
//! let text = extractor.extract_text(&bytes)?;
//! # Ok(())
//! # }
//! ```

use pdfium_render::prelude::*;
use std::sync::Mutex;
use tracing::debug;

use crate::error::PdfError;

/// Separator placed between the text of consecutive pages.
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Turns PDF bytes into plain text.
///
/// Extraction is blocking; async callers should run it on a blocking thread.
pub trait PdfTextExtractor: Send + Sync {
    /// Extract the concatenated text of all pages with text.
    ///
    /// # Errors
    ///
    /// [`PdfError::Invalid`] if the bytes are not a readable PDF and
    /// [`PdfError::NoText`] if no page has extractable text.
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, PdfError>;
}

/// Join per-page text, skipping pages that are blank.
///
/// # Errors
///
/// Returns [`PdfError::NoText`] when every page is blank.
pub fn join_page_text<I, S>(pages: I) -> Result<String, PdfError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let text = pages
        .into_iter()
        .filter(|page| !page.as_ref().trim().is_empty())
        .map(|page| page.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(PAGE_SEPARATOR);

    let text = text.trim();
    if text.is_empty() {
        return Err(PdfError::NoText);
    }
    Ok(text.to_string())
}

/// [`PdfTextExtractor`] backed by the pdfium library.
///
/// pdfium is not re-entrant, so documents are processed one at a time.
pub struct PdfiumTextExtractor {
    pdfium: Mutex<Pdfium>,
}

impl std::fmt::Debug for PdfiumTextExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfiumTextExtractor").finish_non_exhaustive()
    }
}

impl PdfiumTextExtractor {
    /// Bind to pdfium, preferring a copy next to the executable's working
    /// directory and falling back to the system library.
    ///
    /// # Errors
    ///
    /// Returns [`PdfError::Library`] if no pdfium library can be loaded.
    pub fn new() -> Result<Self, PdfError> {
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(|e| PdfError::Library(e.to_string()))?;
        Ok(Self {
            pdfium: Mutex::new(Pdfium::new(bindings)),
        })
    }
}

impl PdfTextExtractor for PdfiumTextExtractor {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, PdfError> {
        let pdfium = self
            .pdfium
            .lock()
            .map_err(|_| PdfError::Library("pdfium lock poisoned".to_string()))?;

        let document = pdfium
            .load_pdf_from_byte_slice(pdf_bytes, None)
            .map_err(|e| PdfError::Invalid(e.to_string()))?;

        let mut pages = Vec::new();
        for (index, page) in document.pages().iter().enumerate() {
            let text = page
                .text()
                .map_err(|e| PdfError::Invalid(format!("page {}: {e}", index + 1)))?;
            pages.push(text.all());
        }

        debug!(pages = pages.len(), bytes = pdf_bytes.len(), "Extracted PDF text");
        join_page_text(pages)
    }
}
