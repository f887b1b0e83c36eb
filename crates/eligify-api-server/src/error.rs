//! Mapping of failures onto HTTP responses.
//!
//! Every error is rendered as `{"detail": "<message>"}`. Input problems are
//! 400s; extraction-service failures and malformed model output are 500s
//! prefixed with `AI processing error: `.

use axum::{
    extract::rejection::JsonRejection,
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use eligify_extract::{ExtractError, ExtractErrorKind, PdfError};
use thiserror::Error;
use tracing::error;

use crate::types::ErrorResponse;

/// Errors surfaced by the HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request failed validation
    #[error("{0}")]
    BadRequest(String),

    /// Body was not valid JSON for the endpoint
    #[error(transparent)]
    Json(#[from] JsonRejection),

    /// Body was not a readable multipart form
    #[error(transparent)]
    Multipart(#[from] MultipartRejection),

    /// A multipart field could not be read
    #[error("Could not read file: {0}")]
    Upload(#[from] MultipartError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Pdf(#[from] PdfError),

    /// Server was started without a working pdfium library
    #[error("PDF support is unavailable on this server")]
    PdfUnavailable,

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status_and_detail(&self) -> (StatusCode, String) {
        match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
            Self::Json(rejection) => (rejection.status(), rejection.body_text()),
            Self::Multipart(rejection) => (rejection.status(), rejection.body_text()),
            Self::Upload(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::Extract(e) => match e.kind() {
                ExtractErrorKind::InvalidInput => (StatusCode::BAD_REQUEST, e.to_string()),
                ExtractErrorKind::Service | ExtractErrorKind::MalformedOutput => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("AI processing error: {e}"),
                ),
            },
            Self::Pdf(PdfError::Library(_)) | Self::PdfUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "PDF support is unavailable on this server".to_string(),
            ),
            Self::Pdf(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred. Please try again.".to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }
        (status, Json(ErrorResponse { detail })).into_response()
    }
}
