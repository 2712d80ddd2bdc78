//! Internal Rate of Return by fixed-step correction.
//!
//! Starting from 10%, the estimate is moved by `NPV(estimate) / 100` on each
//! of exactly [`IRR_ITERATIONS`] steps. There is no derivative term, no
//! convergence test and no clamping; cash-flow shapes without a nearby root
//! drift far from any economically meaningful rate. The returned value must
//! match this exact trajectory, not a solved IRR.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::math::{checked_div, checked_sub};
use crate::precision::{round, Precision};
use crate::time_value::npv;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::FinCalcResult;

/// Starting estimate for the rate search.
pub const IRR_INITIAL_ESTIMATE: Decimal = dec!(0.1);

/// Number of correction steps; always run to completion.
pub const IRR_ITERATIONS: u32 = 100;

const STEP_DIVISOR: Decimal = dec!(100);

/// Input for the diagnostic IRR calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrrInput {
    /// Periodic cash flows, index 0 undiscounted
    pub cash_flows: Vec<Money>,
}

/// Output of the diagnostic IRR calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrrOutput {
    /// Rounded rate estimate after the final step
    pub irr: Rate,
    /// Rounded NPV at the unrounded final estimate, absent when it cannot
    /// be evaluated there
    pub residual_npv: Option<Money>,
    /// Correction steps taken
    pub iterations: u32,
}

/// Estimate the IRR of `cash_flows`, rounded to four places.
///
/// Any NPV failure along the trajectory (e.g. the estimate landing on -100%)
/// aborts the whole computation.
pub fn irr(cash_flows: &[Money]) -> FinCalcResult<Rate> {
    let estimate = run_fixed_step(cash_flows)?;
    Ok(round(estimate, Precision::BasisPoints))
}

/// Same trajectory as [`irr`], reported with its residual NPV and warnings.
pub fn irr_detailed(input: &IrrInput) -> FinCalcResult<ComputationOutput<IrrOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let estimate = run_fixed_step(&input.cash_flows)?;
    let residual_npv = match npv(&input.cash_flows, estimate) {
        Ok(residual) => {
            if !residual.is_zero() {
                warnings.push(format!(
                    "Estimate did not settle on a root after {IRR_ITERATIONS} steps; residual NPV {residual}"
                ));
            }
            Some(residual)
        }
        Err(e) => {
            warnings.push(format!("Residual NPV unavailable at the final estimate: {e}"));
            None
        }
    };
    if estimate <= dec!(-1) {
        warnings.push(format!(
            "Estimate {estimate} is at or below -100%; the discount factor changes sign"
        ));
    }

    let output = IrrOutput {
        irr: round(estimate, Precision::BasisPoints),
        residual_npv,
        iterations: IRR_ITERATIONS,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "IRR via fixed-step NPV correction (100 steps from 10%)",
        input,
        warnings,
        elapsed,
        Precision::BasisPoints,
        output,
    ))
}

fn run_fixed_step(cash_flows: &[Money]) -> FinCalcResult<Rate> {
    let mut estimate = IRR_INITIAL_ESTIMATE;
    for _ in 0..IRR_ITERATIONS {
        let step = checked_div(npv(cash_flows, estimate)?, STEP_DIVISOR, "IRR step")?;
        estimate = checked_sub(estimate, step, "IRR estimate")?;
    }
    Ok(estimate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_flows(first: Decimal) -> Vec<Decimal> {
        vec![first, dec!(300), dec!(300), dec!(300), dec!(300)]
    }

    #[test]
    fn test_irr_runs_away_for_outlay_then_inflows() {
        assert_eq!(irr(&level_flows(dec!(-1000))).unwrap(), dec!(984.4794));
    }

    #[test]
    fn test_irr_runs_negative_for_all_inflows() {
        assert_eq!(irr(&level_flows(dec!(300))).unwrap(), dec!(-305.9981));
    }

    #[test]
    fn test_irr_fixed_point_at_initial_estimate() {
        // NPV at 10% is exactly zero, so the estimate never moves
        let cfs = vec![dec!(-100), dec!(110)];
        assert_eq!(irr(&cfs).unwrap(), dec!(0.1));
    }

    #[test]
    fn test_irr_empty_returns_initial_estimate() {
        assert_eq!(irr(&[]).unwrap(), dec!(0.1));
    }

    #[test]
    fn test_irr_single_flow_steps_linearly() {
        // NPV is the flow itself each step: 0.1 - 100 * (100 / 100)
        assert_eq!(irr(&[dec!(100)]).unwrap(), dec!(-99.9));
    }

    #[test]
    fn test_irr_detailed_matches_plain() {
        let input = IrrInput {
            cash_flows: level_flows(dec!(-1000)),
        };
        let out = irr_detailed(&input).unwrap();
        assert_eq!(out.result.irr, irr(&input.cash_flows).unwrap());
        assert_eq!(out.result.iterations, IRR_ITERATIONS);
        assert!(out.result.residual_npv.is_some_and(|r| !r.is_zero()));
        assert!(!out.warnings.is_empty());
    }

    #[test]
    fn test_irr_detailed_no_warning_at_root() {
        let input = IrrInput {
            cash_flows: vec![dec!(-100), dec!(110)],
        };
        let out = irr_detailed(&input).unwrap();
        assert_eq!(out.result.residual_npv, Some(Decimal::ZERO));
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_irr_detailed_survives_unevaluable_final_estimate() {
        // Each step moves by 1.1 / 100, landing exactly on -100% after the
        // last one; the zero flow then divides by a zero discount factor.
        let cfs = vec![dec!(1.1), dec!(0)];
        assert_eq!(irr(&cfs).unwrap(), dec!(-1));

        let out = irr_detailed(&IrrInput { cash_flows: cfs.clone() }).unwrap();
        assert_eq!(out.result.irr, irr(&cfs).unwrap());
        assert_eq!(out.result.residual_npv, None);
        assert!(out.warnings.iter().any(|w| w.contains("Residual NPV unavailable")));
        assert!(out.warnings.iter().any(|w| w.contains("-100%")));
    }
}
