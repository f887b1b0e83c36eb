//! Treatment plan cost calculation.
//!
//! Each procedure is priced against the coverage percentage of its category
//! and the deductible balance left over by the procedures before it. The
//! plan is therefore a strict left-to-right fold: [`allocate_procedure`]
//! prices one procedure and reports how much deductible it consumed, and
//! [`calculate_treatment`] threads the shrinking balance through the list
//! and accumulates totals.
//!
//! ## Example
//!
//! ```
//! use eligify_core::{
//!     calculate_treatment, CoveragePolicy, ProcedureCategory, TreatmentCalculationRequest,
//!     TreatmentProcedure,
//! };
//!
//! let request = TreatmentCalculationRequest {
//!     procedures: vec![
//!         TreatmentProcedure::new("D2391", "Composite filling", 100.0, ProcedureCategory::Basic),
//!         TreatmentProcedure::new("D2740", "Porcelain crown", 200.0, ProcedureCategory::Major),
//!     ],
//!     deductible_remaining: 50.0,
//!     annual_max_remaining: 1000.0,
//!     coverage: CoveragePolicy::new(100.0, 80.0, 50.0),
//! };
//!
//! let response = calculate_treatment(&request);
//! assert!((response.total_insurance_pays - 140.0).abs() < 1e-9);
//! assert!((response.total_patient_pays - 160.0).abs() < 1e-9);
//! assert!((response.remaining_annual_max - 860.0).abs() < 1e-9);
//! ```
//!
//! Annotation quirk: a procedure covered at 100% that also absorbed part of
//! the deductible carries both the deductible note and the
//! "Covered at 100% - no patient cost" note. The latter refers only to the
//! post-deductible portion.

use crate::category::CategoryPolicy;
use crate::treatment::{
    ProcedureCostBreakdown, TreatmentCalculationRequest, TreatmentCalculationResponse,
    TreatmentProcedure,
};

/// Note emitted for procedures covered in full after the deductible.
pub const FULL_COVERAGE_NOTE: &str = "Covered at 100% - no patient cost";

/// Priced procedure plus the deductible it consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureAllocation {
    pub breakdown: ProcedureCostBreakdown,
    /// Amount to subtract from the running deductible balance
    pub deductible_applied: f64,
}

/// Price one procedure against the current deductible balance.
///
/// The deductible bite is the lesser of the remaining balance and the fee,
/// and is zero when the category does not draw on the deductible or the
/// balance is already exhausted (zero or negative). Coverage percentages are
/// used as given, so values outside `0..=100` produce negative insurance or
/// patient amounts.
#[must_use]
pub fn allocate_procedure(
    procedure: &TreatmentProcedure,
    policy: CategoryPolicy,
    deductible_remaining: f64,
) -> ProcedureAllocation {
    let coverage = policy.coverage_percentage;
    let insurance_allowed = procedure.fee;

    let deductible_applied = if policy.deductible_applies && deductible_remaining > 0.0 {
        deductible_remaining.min(insurance_allowed)
    } else {
        0.0
    };

    let amount_after_deductible = insurance_allowed - deductible_applied;
    let insurance_pays = amount_after_deductible * (coverage / 100.0);
    let patient_coinsurance = amount_after_deductible * ((100.0 - coverage) / 100.0);
    let patient_pays = deductible_applied + patient_coinsurance;

    let mut notes = Vec::new();
    if deductible_applied > 0.0 {
        notes.push(format!("${deductible_applied:.2} applied to deductible"));
    }
    if coverage < 100.0 {
        notes.push(format!("Patient pays {:.0}% coinsurance", 100.0 - coverage));
    }
    if coverage == 100.0 {
        notes.push(FULL_COVERAGE_NOTE.to_string());
    }

    ProcedureAllocation {
        breakdown: ProcedureCostBreakdown {
            code: procedure.code.clone(),
            description: procedure.description.clone(),
            dentist_fee: procedure.fee,
            insurance_allowed,
            deductible_applied,
            insurance_pays,
            patient_coinsurance,
            patient_pays,
            coverage_percentage: coverage,
            notes,
        },
        deductible_applied,
    }
}

/// Running totals across a treatment plan.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TreatmentTotals {
    pub dentist_fees: f64,
    pub insurance_pays: f64,
    pub patient_pays: f64,
    pub deductible_used: f64,
}

impl TreatmentTotals {
    fn add(&mut self, allocation: &ProcedureAllocation) {
        self.dentist_fees += allocation.breakdown.dentist_fee;
        self.insurance_pays += allocation.breakdown.insurance_pays;
        self.patient_pays += allocation.breakdown.patient_pays;
        self.deductible_used += allocation.deductible_applied;
    }
}

/// Price a whole treatment plan.
///
/// Procedures are processed strictly in request order; each one sees the
/// deductible balance left by its predecessors. The remaining annual maximum
/// is not clamped and goes negative when insurance payments exceed it.
#[must_use]
pub fn calculate_treatment(request: &TreatmentCalculationRequest) -> TreatmentCalculationResponse {
    let mut deductible_remaining = request.deductible_remaining;
    let mut totals = TreatmentTotals::default();
    let mut breakdowns = Vec::with_capacity(request.procedures.len());

    for procedure in &request.procedures {
        let policy = request.coverage.resolve(procedure.category);
        let allocation = allocate_procedure(procedure, policy, deductible_remaining);

        totals.add(&allocation);
        deductible_remaining -= allocation.deductible_applied;
        breakdowns.push(allocation.breakdown);
    }

    let remaining_annual_max = request.annual_max_remaining - totals.insurance_pays;

    TreatmentCalculationResponse {
        procedures: breakdowns,
        total_dentist_fees: totals.dentist_fees,
        total_insurance_pays: totals.insurance_pays,
        total_patient_pays: totals.patient_pays,
        total_deductible_used: totals.deductible_used,
        remaining_annual_max,
        summary: summarize(&totals, remaining_annual_max),
    }
}

/// Render the plan summary sentence.
#[must_use]
pub fn summarize(totals: &TreatmentTotals, remaining_annual_max: f64) -> String {
    let mut summary = format!(
        "Total treatment cost: ${:.2}. Insurance will pay: ${:.2}. Patient responsibility: ${:.2}. ",
        totals.dentist_fees, totals.insurance_pays, totals.patient_pays
    );
    if totals.deductible_used > 0.0 {
        summary.push_str(&format!(
            "(Includes ${:.2} deductible). ",
            totals.deductible_used
        ));
    }
    summary.push_str(&format!(
        "Remaining annual maximum after treatment: ${remaining_annual_max:.2}."
    ));
    summary
}
