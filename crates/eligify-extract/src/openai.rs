//! `OpenAI` chat-completions client for benefits extraction.
//!
//! ## Example
//!
//! ```no_run
//! use eligify_extract::{BenefitsExtractor, OpenAIClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAIClient::new(std::env::var("OPENAI_API_KEY")?);
//! let benefits = client
//!     .extract("Deductible $50, $25 remaining. Basic services covered at 80%.")
//!     .await?;
//! println!("{:?}", benefits.basic);
//! # Ok(())
//! # }
//! ```
//!
//! The request uses `response_format: json_object` with temperature 0. The
//! base URL is configurable so tests and compatible gateways can stand in for
//! the public API.

// Clippy pedantic allows:
// - Latency in milliseconds
#![allow(clippy::cast_possible_truncation)]

use async_trait::async_trait;
use eligify_core::BenefitsSummary;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::error::{ExtractError, Result};
use crate::extractor::{ensure_text, parse_benefits, BenefitsExtractor, SYSTEM_PROMPT};

/// Public `OpenAI` API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f64,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    r#type: &'static str,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

/// HTTP client for `OpenAI`-compatible chat completion APIs
#[derive(Debug, Clone)]
pub struct OpenAIClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAIClient {
    /// Create a client for the public API with the default model.
    #[must_use = "creates OpenAI client with API key"]
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Use a different chat model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point the client at another API root, e.g. `http://127.0.0.1:9000/v1`.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl BenefitsExtractor for OpenAIClient {
    async fn extract(&self, raw_text: &str) -> Result<BenefitsSummary> {
        ensure_text(raw_text)?;
        let start = Instant::now();

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                Message {
                    role: "user",
                    content: raw_text,
                },
            ],
            temperature: 0.0,
            response_format: ResponseFormat {
                r#type: "json_object",
            },
        };

        info!(
            model = %self.model,
            text_len = raw_text.len(),
            "Requesting benefits extraction"
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Extraction service returned an error");
            return Err(ExtractError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let chat_response: ChatResponse = response.json().await?;
        let latency_ms = start.elapsed().as_millis() as u64;

        if let Some(usage) = &chat_response.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Extraction token usage"
            );
        }

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ExtractError::EmptyResponse)?;

        let summary = parse_benefits(&content).inspect_err(|e| {
            warn!(error = %e, "Extractor output did not match the benefits shape");
        })?;

        info!(latency_ms, "Benefits extraction complete");
        Ok(summary)
    }
}
