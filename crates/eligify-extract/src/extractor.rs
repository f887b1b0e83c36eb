//! Benefits extractor contract and model-output parsing.

use async_trait::async_trait;
use eligify_core::BenefitsSummary;

use crate::error::{ExtractError, Result};

/// Turns free-form payer text into a [`BenefitsSummary`].
///
/// Implementations are constructed once and shared across requests.
#[async_trait]
pub trait BenefitsExtractor: Send + Sync {
    /// Extract structured benefits from raw text.
    ///
    /// # Errors
    ///
    /// [`ExtractError::EmptyInput`] for blank text, a service error when the
    /// backing model cannot be reached, or [`ExtractError::MalformedOutput`]
    /// when its answer is not a benefits object.
    async fn extract(&self, raw_text: &str) -> Result<BenefitsSummary>;
}

/// Reject blank input before spending a model call on it.
///
/// # Errors
///
/// Returns [`ExtractError::EmptyInput`] when `raw_text` is empty or whitespace.
pub fn ensure_text(raw_text: &str) -> Result<()> {
    if raw_text.trim().is_empty() {
        return Err(ExtractError::EmptyInput);
    }
    Ok(())
}

/// Parse model output into a benefits summary.
///
/// The content may be wrapped in a markdown code fence or surrounded by
/// prose; the outermost JSON object is parsed.
///
/// # Errors
///
/// Returns [`ExtractError::MalformedOutput`] when the object does not match
/// the benefits shape.
pub fn parse_benefits(content: &str) -> Result<BenefitsSummary> {
    let json = extract_json(content);
    Ok(serde_json::from_str(json)?)
}

/// Extract JSON from response, handling markdown code blocks.
fn extract_json(text: &str) -> &str {
    let text = text.trim();

    if text.starts_with("```") {
        if let Some(start) = text.find('\n') {
            let after_first_line = &text[start + 1..];
            if let Some(end) = after_first_line.rfind("```") {
                return after_first_line[..end].trim();
            }
        }
    }

    if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
        if start < end {
            return &text[start..=end];
        }
    }

    text
}

/// Instructions sent as the system message for every extraction.
pub const SYSTEM_PROMPT: &str = r#"You are an expert dental insurance benefits interpreter trained to extract ONLY dental coverage information
from long, messy payer portal text or benefit summaries.

Read the full text provided by the user, identify all relevant dental benefits,
and return a STRICT JSON object matching the schema below.

EXTRACTION RULES:
1. Never invent values. If a value is not explicitly stated, return null or an empty list.
2. Ignore non-dental information (vision, medical, employer info, contact info, legal text).
3. plan_status must be one of "active", "inactive", "terminated", "pending" (lowercase), or null.
4. preventive, basic, major, orthodontics: return ONLY the percentage, e.g. "100%", "80%", "50%", "0%".
5. deductible_total and deductible_remaining are numbers, not strings. Fill what is stated.
6. annual_max_total and annual_max_remaining are numbers, not strings. Fill what is stated.
7. frequency_limits: short rules such as "2 cleanings per year", "Full mouth x-rays once per 5 years".
8. waiting_periods: one entry per category, e.g. "Preventive: none", "Basic: 6 months", "Major: 12 months".
9. notes: anything else relevant: exclusions, usage history, reset rules, downgrades,
   pre-authorization requirements.

OUTPUT SCHEMA:
{
  "plan_status": string or null,
  "deductible_total": number or null,
  "deductible_remaining": number or null,
  "annual_max_total": number or null,
  "annual_max_remaining": number or null,
  "preventive": string or null,
  "basic": string or null,
  "major": string or null,
  "orthodontics": string or null,
  "frequency_limits": [strings],
  "waiting_periods": [strings],
  "notes": [strings]
}

Return ONLY valid JSON. No markdown, no explanation, no extra fields."#;
