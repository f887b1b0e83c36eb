//! Error types for benefit and PDF text extraction

use thiserror::Error;

/// Broad class of an extraction failure, used to pick a user-facing response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractErrorKind {
    /// Nothing to extract from
    InvalidInput,
    /// The model API could not be reached or refused the request
    Service,
    /// The model answered with something other than a benefits object
    MalformedOutput,
}

/// Errors from the benefits extractor
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Empty or whitespace-only input text
    #[error("Please provide benefits text")]
    EmptyInput,

    /// Transport failure talking to the model API
    #[error("request to extraction service failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success HTTP status from the model API
    #[error("extraction service error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Successful response without any message content
    #[error("extraction service returned no content")]
    EmptyResponse,

    /// Message content is not JSON of the benefits shape
    #[error("malformed extractor output: {0}")]
    MalformedOutput(#[from] serde_json::Error),
}

impl ExtractError {
    #[must_use]
    pub const fn kind(&self) -> ExtractErrorKind {
        match self {
            Self::EmptyInput => ExtractErrorKind::InvalidInput,
            Self::Request(_) | Self::Api { .. } | Self::EmptyResponse => ExtractErrorKind::Service,
            Self::MalformedOutput(_) => ExtractErrorKind::MalformedOutput,
        }
    }
}

/// Errors from PDF text extraction
#[derive(Debug, Error)]
pub enum PdfError {
    /// The pdfium library could not be bound
    #[error("PDF library unavailable: {0}")]
    Library(String),

    /// The bytes are not a readable PDF
    #[error("Could not parse PDF: {0}")]
    Invalid(String),

    /// The document parsed but no page had selectable text
    #[error("Could not extract text from PDF. Please ensure the PDF contains selectable text.")]
    NoText,
}

/// Result type for benefits extraction
pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(ExtractError::EmptyInput.kind(), ExtractErrorKind::InvalidInput);
        assert_eq!(ExtractError::EmptyResponse.kind(), ExtractErrorKind::Service);
        assert_eq!(
            ExtractError::Api {
                status: 429,
                body: "rate limited".to_string()
            }
            .kind(),
            ExtractErrorKind::Service
        );

        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert_eq!(
            ExtractError::from(json_err).kind(),
            ExtractErrorKind::MalformedOutput
        );
    }

    #[test]
    fn test_pdf_error_messages() {
        assert_eq!(
            PdfError::NoText.to_string(),
            "Could not extract text from PDF. Please ensure the PDF contains selectable text."
        );
        assert!(PdfError::Invalid("bad header".to_string())
            .to_string()
            .starts_with("Could not parse PDF"));
    }
}
