//! REST API server for dental benefits extraction and treatment cost estimates
//!
//! Endpoints:
//! - `POST /summarize` and `POST /summarize-pdf`: structured benefits from
//!   pasted text or an uploaded PDF
//! - `POST /calculate-treatment`: patient/insurance split for a treatment plan
//! - `POST /save-to-open-dental`: practice-management record preview
//! - `GET /`, `/health`, `/app`, `/static/*`: descriptor, health, frontend

pub mod config;
pub mod error;
mod handlers;
mod types;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use eligify_extract::{BenefitsExtractor, PdfTextExtractor};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub use config::{ServerConfig, DEFAULT_MAX_UPLOAD_BYTES};
pub use error::ApiError;
pub use handlers::*;
pub use types::*;

/// API server state shared across handlers
#[derive(Clone)]
pub struct ApiState {
    /// Free text to structured benefits
    pub extractor: Arc<dyn BenefitsExtractor>,
    /// PDF to text; `None` when pdfium could not be loaded
    pub pdf: Option<Arc<dyn PdfTextExtractor>>,
    /// Directory served at `/app` and `/static`
    pub frontend_dir: Arc<PathBuf>,
    /// Request body limit, sized for PDF uploads
    pub max_upload_bytes: usize,
}

impl ApiState {
    /// Create state around an extractor, without PDF support
    #[must_use]
    pub fn new(extractor: Arc<dyn BenefitsExtractor>, frontend_dir: impl Into<PathBuf>) -> Self {
        Self {
            extractor,
            pdf: None,
            frontend_dir: Arc::new(frontend_dir.into()),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    #[must_use]
    pub fn with_pdf_extractor(mut self, pdf: Arc<dyn PdfTextExtractor>) -> Self {
        self.pdf = Some(pdf);
        self
    }

    #[must_use]
    pub const fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }
}

/// Build the API router with all endpoints
pub fn build_router(state: ApiState) -> Router {
    let static_files = ServeDir::new(state.frontend_dir.as_ref());
    let body_limit = state.max_upload_bytes;

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/app", get(serve_app))
        .route("/summarize", post(summarize_text))
        .route("/summarize-pdf", post(summarize_pdf))
        .route("/calculate-treatment", post(calculate_treatment_plan))
        .route("/save-to-open-dental", post(save_to_open_dental))
        .nest_service("/static", static_files)
        // Middleware
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve the API on an already-bound listener
pub async fn serve(listener: TcpListener, state: ApiState) -> Result<(), std::io::Error> {
    tracing::info!("Starting API server on {}", listener.local_addr()?);
    axum::serve(listener, build_router(state)).await
}

/// Start the API server
pub async fn start_server(addr: &str, state: ApiState) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(addr).await?;
    serve(listener, state).await
}
