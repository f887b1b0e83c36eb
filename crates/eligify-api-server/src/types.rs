//! API request and response types

use serde::{Deserialize, Serialize};

/// Service name reported by the descriptor and health endpoints
pub const SERVICE_NAME: &str = "Eligify API";

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// Route map advertised at `/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointMap {
    pub health: String,
    pub app: String,
    pub summarize_text: String,
    pub summarize_pdf: String,
    pub calculate_treatment: String,
    pub save_to_open_dental: String,
}

impl Default for EndpointMap {
    fn default() -> Self {
        Self {
            health: "/health".to_string(),
            app: "/app".to_string(),
            summarize_text: "/summarize".to_string(),
            summarize_pdf: "/summarize-pdf".to_string(),
            calculate_treatment: "/calculate-treatment".to_string(),
            save_to_open_dental: "/save-to-open-dental".to_string(),
        }
    }
}

/// Service descriptor returned at `/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub status: String,
    pub service: String,
    pub version: String,
    pub endpoints: EndpointMap,
}

/// Pasted benefits text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenefitsRequest {
    pub raw_text: String,
}

/// Error body for every failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Returned by `/app` when the frontend has not been deployed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontendMissing {
    pub error: String,
    pub message: String,
    pub expected_path: String,
}
