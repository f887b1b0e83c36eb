//! # eligify-extract
//!
//! Turns unstructured benefit documents into a
//! [`BenefitsSummary`](eligify_core::BenefitsSummary).
//!
//! Two collaborators sit behind traits so callers can inject them and tests
//! can substitute fakes:
//!
//! - [`BenefitsExtractor`] - free text to structured benefits, implemented by
//!   [`OpenAIClient`]
//! - [`PdfTextExtractor`] - PDF bytes to plain text, implemented by
//!   [`PdfiumTextExtractor`]
//!
//! ## Modules
//!
//! - [`extractor`] - Extractor trait, system prompt, output parsing
//! - [`openai`] - `OpenAI` chat-completions client
//! - [`pdf`] - PDF text extraction using pdfium
//! - [`error`] - Error types

pub mod error;
pub mod extractor;
pub mod openai;
pub mod pdf;

pub use error::{ExtractError, ExtractErrorKind, PdfError};
pub use extractor::{ensure_text, parse_benefits, BenefitsExtractor, SYSTEM_PROMPT};
pub use openai::OpenAIClient;
pub use pdf::{join_page_text, PdfTextExtractor, PdfiumTextExtractor};
