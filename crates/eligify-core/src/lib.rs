//! # eligify-core
//!
//! Dental benefit data model and treatment-plan cost calculator.
//!
//! ## Modules
//!
//! - [`category`] - Procedure categories and per-category coverage policy
//! - [`treatment`] - Treatment plan request/response types
//! - [`calculator`] - Deductible allocation and plan totals
//! - [`benefits`] - Structured benefits summary produced by extraction
//! - [`practice`] - Practice-management export reshaping
//!
//! All calculation is synchronous and pure: each call builds its own running
//! balances, so concurrent requests share no state.

pub mod benefits;
pub mod calculator;
pub mod category;
pub mod error;
pub mod practice;
pub mod treatment;

pub use benefits::{parse_coverage_percentage, BenefitsSummary, PlanStatus};
pub use calculator::{
    allocate_procedure, calculate_treatment, summarize, ProcedureAllocation, TreatmentTotals,
    FULL_COVERAGE_NOTE,
};
pub use category::{CategoryPolicy, CoveragePolicy, ProcedureCategory};
pub use error::CoverageParseError;
pub use practice::{export_to_practice, PracticeExport, PracticeExportRequest};
pub use treatment::{
    ProcedureCostBreakdown, TreatmentCalculationRequest, TreatmentCalculationResponse,
    TreatmentProcedure,
};
