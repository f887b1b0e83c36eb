//! Property-Based Tests
//!
//! Invariants of the treatment cost calculator:
//! - Patient and insurance payments reconcile with total fees
//! - Deductible bites never exceed the fee or the remaining pool
//! - Preventive and uncategorized procedures never draw on the deductible
//! - Order only matters when the deductible pool runs out partway

use eligify_core::{
    calculate_treatment, CoveragePolicy, ProcedureCategory, TreatmentCalculationRequest,
    TreatmentProcedure,
};
use proptest::prelude::*;

const TOLERANCE: f64 = 1e-6;

fn category_strategy() -> impl Strategy<Value = ProcedureCategory> {
    prop_oneof![
        Just(ProcedureCategory::Preventive),
        Just(ProcedureCategory::Basic),
        Just(ProcedureCategory::Major),
        Just(ProcedureCategory::Uncategorized),
    ]
}

fn procedure_strategy() -> impl Strategy<Value = TreatmentProcedure> {
    (0.0f64..5_000.0, category_strategy()).prop_map(|(fee, category)| {
        TreatmentProcedure::new("D0000", "Generated procedure", fee, category)
    })
}

fn policy_strategy() -> impl Strategy<Value = CoveragePolicy> {
    (0.0f64..=100.0, 0.0f64..=100.0, 0.0f64..=100.0)
        .prop_map(|(preventive, basic, major)| CoveragePolicy::new(preventive, basic, major))
}

fn request(
    procedures: Vec<TreatmentProcedure>,
    deductible_remaining: f64,
    coverage: CoveragePolicy,
) -> TreatmentCalculationRequest {
    TreatmentCalculationRequest {
        procedures,
        deductible_remaining,
        annual_max_remaining: 2_000.0,
        coverage,
    }
}

// ============================================================================
// Reconciliation
// ============================================================================

/// Property: patient + insurance == fees, per procedure and in total
#[test]
fn proptest_payments_reconcile_with_fees() {
    proptest!(|(
        procedures in prop::collection::vec(procedure_strategy(), 0..12),
        deductible in 0.0f64..500.0,
        coverage in policy_strategy(),
    )| {
        let response = calculate_treatment(&request(procedures, deductible, coverage));

        for b in &response.procedures {
            prop_assert!((b.patient_pays + b.insurance_pays - b.dentist_fee).abs() < TOLERANCE);
            prop_assert!((b.patient_pays - (b.deductible_applied + b.patient_coinsurance)).abs() < TOLERANCE);
            prop_assert_eq!(b.insurance_allowed, b.dentist_fee);
        }

        let reconciled = response.total_patient_pays + response.total_insurance_pays;
        prop_assert!((reconciled - response.total_dentist_fees).abs() < TOLERANCE);
        prop_assert!(
            (response.remaining_annual_max - (2_000.0 - response.total_insurance_pays)).abs() < TOLERANCE
        );
    });
}

/// Property: breakdowns come back in request order, one per procedure
#[test]
fn proptest_breakdowns_preserve_order() {
    proptest!(|(fees in prop::collection::vec(0.0f64..1_000.0, 0..10))| {
        let procedures: Vec<_> = fees
            .iter()
            .enumerate()
            .map(|(i, fee)| TreatmentProcedure::new(format!("D{i:04}"), "p", *fee, ProcedureCategory::Basic))
            .collect();
        let response = calculate_treatment(&request(procedures, 100.0, CoveragePolicy::new(100.0, 80.0, 50.0)));

        prop_assert_eq!(response.procedures.len(), fees.len());
        for (i, b) in response.procedures.iter().enumerate() {
            prop_assert_eq!(&b.code, &format!("D{i:04}"));
            prop_assert_eq!(b.dentist_fee, fees[i]);
        }
    });
}

// ============================================================================
// Deductible pool
// ============================================================================

/// Property: each bite is within [0, min(fee, pool at that point)]
#[test]
fn proptest_deductible_bite_bounds() {
    proptest!(|(
        procedures in prop::collection::vec(procedure_strategy(), 0..12),
        deductible in 0.0f64..500.0,
        coverage in policy_strategy(),
    )| {
        let response = calculate_treatment(&request(procedures, deductible, coverage));

        let mut pool = deductible;
        for b in &response.procedures {
            prop_assert!(b.deductible_applied >= 0.0);
            prop_assert!(b.deductible_applied <= b.dentist_fee);
            prop_assert!(b.deductible_applied <= pool.max(0.0));
            pool -= b.deductible_applied;
        }
        prop_assert!(pool >= -TOLERANCE);
        prop_assert!((response.total_deductible_used - (deductible - pool)).abs() < TOLERANCE);
    });
}

/// Property: preventive and uncategorized procedures never absorb deductible
#[test]
fn proptest_no_deductible_outside_basic_and_major() {
    proptest!(|(
        procedures in prop::collection::vec(procedure_strategy(), 1..12),
        deductible in 0.0f64..10_000.0,
        coverage in policy_strategy(),
    )| {
        let categories: Vec<_> = procedures.iter().map(|p| p.category).collect();
        let response = calculate_treatment(&request(procedures, deductible, coverage));

        for (category, b) in categories.iter().zip(&response.procedures) {
            if !category.deductible_applies() {
                prop_assert_eq!(b.deductible_applied, 0.0);
            }
            if *category == ProcedureCategory::Uncategorized {
                prop_assert_eq!(b.coverage_percentage, 0.0);
                prop_assert_eq!(b.patient_pays, b.dentist_fee);
                prop_assert_eq!(b.insurance_pays, 0.0);
            }
        }
    });
}

// ============================================================================
// Ordering
// ============================================================================

fn assert_same_totals(a: &TreatmentCalculationRequest, b: &TreatmentCalculationRequest) -> Result<(), TestCaseError> {
    let ra = calculate_treatment(a);
    let rb = calculate_treatment(b);
    prop_assert!((ra.total_dentist_fees - rb.total_dentist_fees).abs() < TOLERANCE);
    prop_assert!((ra.total_insurance_pays - rb.total_insurance_pays).abs() < TOLERANCE);
    prop_assert!((ra.total_patient_pays - rb.total_patient_pays).abs() < TOLERANCE);
    Ok(())
}

/// Property: with no deductible left, reversing the plan leaves totals unchanged
#[test]
fn proptest_order_irrelevant_without_deductible() {
    proptest!(|(
        procedures in prop::collection::vec(procedure_strategy(), 0..12),
        coverage in policy_strategy(),
    )| {
        let mut reversed = procedures.clone();
        reversed.reverse();
        assert_same_totals(&request(procedures, 0.0, coverage), &request(reversed, 0.0, coverage))?;
    });
}

/// Property: when the pool covers every eligible fee, order is irrelevant too
#[test]
fn proptest_order_irrelevant_when_pool_never_exhausted() {
    proptest!(|(
        procedures in prop::collection::vec(procedure_strategy(), 0..12),
        coverage in policy_strategy(),
    )| {
        let pool: f64 = procedures.iter().map(|p| p.fee).sum::<f64>() + 1.0;
        let mut reversed = procedures.clone();
        reversed.reverse();
        assert_same_totals(&request(procedures, pool, coverage), &request(reversed, pool, coverage))?;
    });
}

#[test]
fn test_order_changes_totals_when_pool_exhausted_partway() {
    let filling = TreatmentProcedure::new("D2391", "Composite filling", 100.0, ProcedureCategory::Basic);
    let crown = TreatmentProcedure::new("D2740", "Porcelain crown", 200.0, ProcedureCategory::Major);
    let coverage = CoveragePolicy::new(100.0, 80.0, 50.0);

    let filling_first = calculate_treatment(&request(vec![filling.clone(), crown.clone()], 50.0, coverage));
    let crown_first = calculate_treatment(&request(vec![crown, filling], 50.0, coverage));

    // Filling absorbs the deductible: 40 + 100 paid by insurance
    assert!((filling_first.total_insurance_pays - 140.0).abs() < TOLERANCE);
    assert!((filling_first.total_patient_pays - 160.0).abs() < TOLERANCE);
    assert_eq!(filling_first.procedures[0].deductible_applied, 50.0);

    // Crown absorbs the deductible: 75 + 80 paid by insurance
    assert!((crown_first.total_insurance_pays - 155.0).abs() < TOLERANCE);
    assert!((crown_first.total_patient_pays - 145.0).abs() < TOLERANCE);
    assert_eq!(crown_first.procedures[0].deductible_applied, 50.0);
    assert_eq!(crown_first.procedures[1].deductible_applied, 0.0);

    assert!((filling_first.total_dentist_fees - crown_first.total_dentist_fees).abs() < TOLERANCE);
    assert_eq!(filling_first.total_deductible_used, crown_first.total_deductible_used);
}

#[test]
fn test_preventive_ignores_large_deductible() {
    let cleaning = TreatmentProcedure::new("D1110", "Adult prophylaxis", 120.0, ProcedureCategory::Preventive);
    let response = calculate_treatment(&request(vec![cleaning], 1_000.0, CoveragePolicy::new(100.0, 80.0, 50.0)));

    let b = &response.procedures[0];
    assert_eq!(b.deductible_applied, 0.0);
    assert_eq!(b.insurance_pays, 120.0);
    assert_eq!(b.patient_pays, 0.0);
    assert_eq!(response.total_deductible_used, 0.0);
    assert!(!response.summary.contains("Includes"));
}

#[test]
fn test_unrecognized_category_pays_full_fee() {
    let whitening = TreatmentProcedure::new(
        "D9972",
        "External bleaching",
        350.0,
        ProcedureCategory::from("cosmetic"),
    );
    let response = calculate_treatment(&request(vec![whitening], 50.0, CoveragePolicy::new(100.0, 80.0, 50.0)));

    let b = &response.procedures[0];
    assert_eq!(b.coverage_percentage, 0.0);
    assert_eq!(b.deductible_applied, 0.0);
    assert_eq!(b.patient_pays, 350.0);
    assert_eq!(b.notes, vec!["Patient pays 100% coinsurance".to_string()]);
}
