//! HTTP request handlers for API endpoints

use axum::{
    extract::{
        multipart::MultipartRejection,
        rejection::JsonRejection,
        Multipart, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use eligify_core::{
    calculate_treatment, export_to_practice, BenefitsSummary, PracticeExport,
    PracticeExportRequest, TreatmentCalculationRequest, TreatmentCalculationResponse,
};
use tracing::{info, warn};

use crate::{
    error::ApiError,
    types::{BenefitsRequest, EndpointMap, FrontendMissing, HealthResponse, ServiceInfo, SERVICE_NAME},
    ApiState,
};

/// Content types accepted for PDF uploads
const PDF_CONTENT_TYPES: [&str; 2] = ["application/pdf", "application/octet-stream"];

/// Multipart field carrying the PDF
const UPLOAD_FIELD: &str = "file";

/// Service descriptor
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: EndpointMap::default(),
    })
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

/// Serve the frontend entry page
pub async fn serve_app(State(state): State<ApiState>) -> Response {
    let index_path = state.frontend_dir.join("index.html");
    match tokio::fs::read_to_string(&index_path).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            warn!("Frontend index not readable at {}: {}", index_path.display(), e);
            (
                StatusCode::NOT_FOUND,
                Json(FrontendMissing {
                    error: "Frontend not found".to_string(),
                    message: "Please ensure frontend files are in the correct directory."
                        .to_string(),
                    expected_path: state.frontend_dir.display().to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Extract benefits from pasted text
pub async fn summarize_text(
    State(state): State<ApiState>,
    payload: Result<Json<BenefitsRequest>, JsonRejection>,
) -> Result<Json<BenefitsSummary>, ApiError> {
    let Json(request) = payload?;
    if request.raw_text.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Please provide benefits text".to_string(),
        ));
    }

    info!(text_len = request.raw_text.len(), "Summarizing pasted benefits text");
    let summary = state.extractor.extract(&request.raw_text).await?;
    Ok(Json(summary))
}

/// Extract benefits from an uploaded PDF
///
/// Expects a multipart form with a `file` field of type `application/pdf`
/// (or `application/octet-stream`). Text is pulled from every page with a
/// text layer and sent to the extractor as one document.
pub async fn summarize_pdf(
    State(state): State<ApiState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<BenefitsSummary>, ApiError> {
    let mut multipart = multipart?;

    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let content_type = field.content_type().unwrap_or_default().to_string();
        if !PDF_CONTENT_TYPES.contains(&content_type.as_str()) {
            return Err(ApiError::BadRequest(
                "Only PDF files are supported".to_string(),
            ));
        }
        upload = Some(field.bytes().await?);
        break;
    }
    let pdf_bytes = upload.ok_or_else(|| {
        ApiError::BadRequest(format!("Missing '{UPLOAD_FIELD}' upload field"))
    })?;

    let pdf = state.pdf.clone().ok_or(ApiError::PdfUnavailable)?;
    info!(bytes = pdf_bytes.len(), "Extracting text from uploaded PDF");

    let text = tokio::task::spawn_blocking(move || pdf.extract_text(&pdf_bytes))
        .await
        .map_err(|e| ApiError::Internal(format!("PDF extraction task failed: {e}")))??;

    let summary = state.extractor.extract(&text).await?;
    Ok(Json(summary))
}

/// Calculate patient costs for a treatment plan
pub async fn calculate_treatment_plan(
    payload: Result<Json<TreatmentCalculationRequest>, JsonRejection>,
) -> Result<Json<TreatmentCalculationResponse>, ApiError> {
    let Json(request) = payload?;
    info!(
        procedures = request.procedures.len(),
        "Calculating treatment plan costs"
    );
    Ok(Json(calculate_treatment(&request)))
}

/// Preview the practice-management record for extracted benefits
pub async fn save_to_open_dental(
    payload: Result<Json<PracticeExportRequest>, JsonRejection>,
) -> Result<Json<PracticeExport>, ApiError> {
    let Json(request) = payload?;
    info!("Building practice-management export");
    Ok(Json(export_to_practice(
        &request.patient_name,
        &request.benefits_data,
    )))
}
