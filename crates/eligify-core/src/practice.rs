//! Practice-management export.
//!
//! Reshapes a [`BenefitsSummary`] into the field layout an Open Dental
//! insurance plan record uses. Nothing is written anywhere; the result is
//! returned to the caller as a preview of what would be saved.

use serde::{Deserialize, Serialize};

use crate::benefits::{BenefitsSummary, PlanStatus};

/// Request to export benefits for one patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeExportRequest {
    pub patient_name: String,
    pub benefits_data: BenefitsSummary,
}

/// Outcome of an export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeExport {
    pub success: bool,
    pub message: String,
    pub saved_fields: SavedFields,
}

/// Fields as laid out in the practice-management record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedFields {
    pub patient_name: String,
    pub plan_status: Option<PlanStatus>,
    pub insurance_plan: InsurancePlanFields,
    pub coverage_percentages: CoveragePercentages,
    pub frequency_limitations: Vec<String>,
    pub benefit_notes: Vec<String>,
    pub waiting_periods: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsurancePlanFields {
    pub annual_max: Option<f64>,
    pub annual_max_used: Option<f64>,
    pub deductible: Option<f64>,
    pub deductible_used: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoveragePercentages {
    pub diagnostic_preventive: Option<String>,
    pub basic_restorative: Option<String>,
    pub major_restorative: Option<String>,
    pub orthodontics: Option<String>,
}

/// Amount used from a benefit, known only when both figures are present and
/// non-zero.
fn amount_used(total: Option<f64>, remaining: Option<f64>) -> Option<f64> {
    match (total, remaining) {
        (Some(total), Some(remaining)) if total != 0.0 && remaining != 0.0 => {
            Some(total - remaining)
        }
        _ => None,
    }
}

/// Build the practice-management record for a patient.
#[must_use]
pub fn export_to_practice(patient_name: &str, benefits: &BenefitsSummary) -> PracticeExport {
    let saved_fields = SavedFields {
        patient_name: patient_name.to_string(),
        plan_status: benefits.plan_status,
        insurance_plan: InsurancePlanFields {
            annual_max: benefits.annual_max_total,
            annual_max_used: amount_used(benefits.annual_max_total, benefits.annual_max_remaining),
            deductible: benefits.deductible_total,
            deductible_used: amount_used(benefits.deductible_total, benefits.deductible_remaining),
        },
        coverage_percentages: CoveragePercentages {
            diagnostic_preventive: benefits.preventive.clone(),
            basic_restorative: benefits.basic.clone(),
            major_restorative: benefits.major.clone(),
            orthodontics: benefits.orthodontics.clone(),
        },
        frequency_limitations: benefits.frequency_limits.clone().unwrap_or_default(),
        benefit_notes: benefits.notes.clone().unwrap_or_default(),
        waiting_periods: benefits.waiting_periods.clone().unwrap_or_default(),
    };

    PracticeExport {
        success: true,
        message: format!(
            "Successfully saved insurance benefits for {patient_name} to Open Dental"
        ),
        saved_fields,
    }
}
