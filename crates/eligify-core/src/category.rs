//! Procedure categories and the coverage policy applied to each.
//!
//! Payers group dental procedures into three coverage tiers. A treatment
//! plan carries one coverage percentage per tier, and the tier also decides
//! whether the shared deductible pool is drawn on:
//!
//! | category | coverage used | deductible applies |
//! |---|---|---|
//! | [`ProcedureCategory::Preventive`] | `preventive_coverage` | no |
//! | [`ProcedureCategory::Basic`] | `basic_coverage` | yes |
//! | [`ProcedureCategory::Major`] | `major_coverage` | yes |
//! | [`ProcedureCategory::Uncategorized`] | 0% | no |

use serde::{Deserialize, Serialize};

/// Coverage tier of a procedure.
///
/// Parsed case-insensitively from the wire. Any label other than the three
/// recognized spellings (including the empty string) becomes
/// [`ProcedureCategory::Uncategorized`] rather than an error, so callers get
/// no warning for a misspelled category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum ProcedureCategory {
    /// Cleanings, exams, routine x-rays
    Preventive,
    /// Fillings, simple extractions
    Basic,
    /// Crowns, bridges, implants
    Major,
    /// Anything else: zero coverage, no deductible
    #[default]
    Uncategorized,
}

impl ProcedureCategory {
    /// Wire label for this category.
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Preventive => "preventive",
            Self::Basic => "basic",
            Self::Major => "major",
            Self::Uncategorized => "uncategorized",
        }
    }

    /// Whether procedures in this category draw on the deductible pool.
    #[inline]
    #[must_use]
    pub const fn deductible_applies(&self) -> bool {
        matches!(self, Self::Basic | Self::Major)
    }
}

impl From<&str> for ProcedureCategory {
    fn from(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "preventive" => Self::Preventive,
            "basic" => Self::Basic,
            "major" => Self::Major,
            _ => Self::Uncategorized,
        }
    }
}

impl From<String> for ProcedureCategory {
    fn from(label: String) -> Self {
        Self::from(label.as_str())
    }
}

impl std::fmt::Display for ProcedureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coverage percentages for one calculation run.
///
/// Values are expected in `0..=100` but are not clamped; out-of-range
/// figures flow through the arithmetic unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CoveragePolicy {
    /// Percentage paid for preventive procedures
    #[serde(rename = "preventive_coverage")]
    pub preventive: f64,
    /// Percentage paid for basic procedures
    #[serde(rename = "basic_coverage")]
    pub basic: f64,
    /// Percentage paid for major procedures
    #[serde(rename = "major_coverage")]
    pub major: f64,
}

impl CoveragePolicy {
    #[must_use]
    pub const fn new(preventive: f64, basic: f64, major: f64) -> Self {
        Self {
            preventive,
            basic,
            major,
        }
    }

    /// Resolve the coverage percentage and deductible rule for a category.
    #[must_use]
    pub fn resolve(&self, category: ProcedureCategory) -> CategoryPolicy {
        let coverage_percentage = match category {
            ProcedureCategory::Preventive => self.preventive,
            ProcedureCategory::Basic => self.basic,
            ProcedureCategory::Major => self.major,
            ProcedureCategory::Uncategorized => 0.0,
        };
        CategoryPolicy {
            coverage_percentage,
            deductible_applies: category.deductible_applies(),
        }
    }
}

/// Policy applied to a single procedure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryPolicy {
    /// Share of the post-deductible amount paid by insurance, in percent
    pub coverage_percentage: f64,
    /// Whether the deductible pool is drawn on
    pub deductible_applies: bool,
}
