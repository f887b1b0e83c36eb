//! Structured dental benefits summary.
//!
//! This is the shape produced by the benefits extractor from free-form payer
//! text. Every field is optional because the source text rarely states all
//! of them; a field missing from the JSON and an explicit `null` both read as
//! `None`.

use serde::{Deserialize, Serialize};

use crate::category::CoveragePolicy;
use crate::error::{CoverageParseError, Result};

/// Eligibility status of a dental plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    Active,
    Inactive,
    Terminated,
    Pending,
}

impl std::fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
            Self::Terminated => write!(f, "terminated"),
            Self::Pending => write!(f, "pending"),
        }
    }
}

/// Dental benefits extracted from a payer portal or benefit summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenefitsSummary {
    pub plan_status: Option<PlanStatus>,
    pub deductible_total: Option<f64>,
    pub deductible_remaining: Option<f64>,
    pub annual_max_total: Option<f64>,
    pub annual_max_remaining: Option<f64>,
    /// Preventive coverage as stated, e.g. `"100%"`
    pub preventive: Option<String>,
    /// Basic coverage as stated, e.g. `"80%"`
    pub basic: Option<String>,
    /// Major coverage as stated, e.g. `"50%"`
    pub major: Option<String>,
    pub orthodontics: Option<String>,
    /// Service frequency rules, e.g. "2 cleanings per year"
    pub frequency_limits: Option<Vec<String>>,
    /// Per-category waiting periods, e.g. "Major: 12 months"
    pub waiting_periods: Option<Vec<String>>,
    /// Exclusions, usage history and other plan details
    pub notes: Option<Vec<String>>,
}

impl BenefitsSummary {
    /// Coverage percentages for a treatment calculation.
    ///
    /// Absent or unreadable category strings count as 0% coverage.
    #[must_use]
    pub fn coverage_policy(&self) -> CoveragePolicy {
        let pct = |value: &Option<String>| {
            value
                .as_deref()
                .and_then(|s| parse_coverage_percentage(s).ok())
                .unwrap_or(0.0)
        };
        CoveragePolicy::new(pct(&self.preventive), pct(&self.basic), pct(&self.major))
    }

    /// `(deductible_remaining, annual_max_remaining)`, absent values as 0.
    #[must_use]
    pub fn remaining_balances(&self) -> (f64, f64) {
        (
            self.deductible_remaining.unwrap_or(0.0),
            self.annual_max_remaining.unwrap_or(0.0),
        )
    }
}

/// Parse a coverage string such as `"80%"`, `" 100 % "` or `"50"`.
///
/// # Errors
///
/// Returns [`CoverageParseError::Empty`] for blank input and
/// [`CoverageParseError::Invalid`] when the remainder is not a number.
pub fn parse_coverage_percentage(value: &str) -> Result<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoverageParseError::Empty);
    }
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    number
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| CoverageParseError::Invalid(value.to_string()))
}
