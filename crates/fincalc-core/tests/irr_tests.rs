use fincalc_core::irr::{self, IrrInput, IRR_ITERATIONS};
use fincalc_core::time_value;
use fincalc_core::FinCalcError;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// IRR fixed-step trajectory
// These pin the exact 100-step trajectory, not a textbook IRR.
// ===========================================================================

fn outlay_then_inflows() -> Vec<Decimal> {
    vec![dec!(-1000), dec!(300), dec!(300), dec!(300), dec!(300)]
}

#[test]
fn test_irr_outlay_then_inflows_trajectory() {
    // The textbook IRR is ~7.7%; the fixed step overshoots and never returns
    let result = irr::irr(&outlay_then_inflows()).unwrap();
    assert_eq!(result, dec!(984.4794));
}

#[test]
fn test_irr_all_inflows_trajectory() {
    let cfs = vec![dec!(300); 5];
    let result = irr::irr(&cfs).unwrap();
    assert_eq!(result, dec!(-305.9981));
}

#[test]
fn test_irr_is_deterministic() {
    let cfs = outlay_then_inflows();
    let first = irr::irr(&cfs).unwrap();
    let second = irr::irr(&cfs).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.round_dp(4), first);
}

#[test]
fn test_irr_root_at_initial_estimate() {
    let cfs = vec![dec!(-1000), dec!(1100)];
    assert_eq!(time_value::npv(&cfs, dec!(0.1)).unwrap(), Decimal::ZERO);
    assert_eq!(irr::irr(&cfs).unwrap(), dec!(0.1));
}

#[test]
fn test_irr_propagates_npv_failure() {
    // First step: 0.1 - 110 / 100 = -1.0, where (1 + r) is zero
    let cfs = vec![dec!(0), dec!(121)];
    assert_eq!(time_value::npv(&cfs, dec!(0.1)).unwrap(), dec!(110));
    let err = irr::irr(&cfs).unwrap_err();
    assert!(matches!(err, FinCalcError::DivisionByZero { .. }));
}

// ===========================================================================
// Diagnostic envelope
// ===========================================================================

#[test]
fn test_irr_detailed_reports_residual_and_warnings() {
    let input = IrrInput {
        cash_flows: vec![dec!(300); 5],
    };
    let out = irr::irr_detailed(&input).unwrap();
    assert_eq!(out.result.irr, dec!(-305.9981));
    assert_eq!(out.result.iterations, IRR_ITERATIONS);
    // Not a root, and below -100%
    assert_eq!(out.warnings.len(), 2);
    assert_eq!(out.metadata.decimal_places, 4);
}

#[test]
fn test_irr_detailed_echoes_assumptions() {
    let input = IrrInput {
        cash_flows: outlay_then_inflows(),
    };
    let out = irr::irr_detailed(&input).unwrap();
    let echoed = out.assumptions["cash_flows"].as_array().unwrap();
    assert_eq!(echoed.len(), 5);
    assert_eq!(echoed[0], "-1000");
}
