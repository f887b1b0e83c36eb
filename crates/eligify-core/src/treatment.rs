//! Treatment plan request and response types

use serde::{Deserialize, Serialize};

use crate::category::{CoveragePolicy, ProcedureCategory};

/// A single proposed procedure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentProcedure {
    /// Procedure code (e.g. CDT `D2740`), opaque to the calculator
    pub code: String,
    /// Free-text description
    pub description: String,
    /// Dentist's billed fee, treated as the full allowed amount
    pub fee: f64,
    /// Coverage tier
    pub category: ProcedureCategory,
}

impl TreatmentProcedure {
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        fee: f64,
        category: ProcedureCategory,
    ) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            fee,
            category,
        }
    }
}

/// Cost calculation request for an ordered treatment plan.
///
/// Procedure order is significant: the deductible pool is drawn down in
/// list order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentCalculationRequest {
    /// Procedures in the order they will be processed
    pub procedures: Vec<TreatmentProcedure>,
    /// Deductible still owed by the patient before this plan
    pub deductible_remaining: f64,
    /// Annual maximum still available before this plan
    pub annual_max_remaining: f64,
    /// Coverage percentages per category
    #[serde(flatten)]
    pub coverage: CoveragePolicy,
}

/// Cost breakdown for one procedure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcedureCostBreakdown {
    pub code: String,
    pub description: String,
    pub dentist_fee: f64,
    /// Always equal to `dentist_fee`; no fee schedule is modeled
    pub insurance_allowed: f64,
    pub deductible_applied: f64,
    pub insurance_pays: f64,
    pub patient_coinsurance: f64,
    /// `deductible_applied + patient_coinsurance`
    pub patient_pays: f64,
    pub coverage_percentage: f64,
    #[serde(default)]
    pub notes: Vec<String>,
}

/// Result of a treatment plan calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreatmentCalculationResponse {
    /// Breakdowns in request order
    pub procedures: Vec<ProcedureCostBreakdown>,
    pub total_dentist_fees: f64,
    pub total_insurance_pays: f64,
    pub total_patient_pays: f64,
    pub total_deductible_used: f64,
    /// Annual maximum left after this plan; negative when the plan exceeds it
    pub remaining_annual_max: f64,
    /// Human-readable summary of the totals
    pub summary: String,
}
