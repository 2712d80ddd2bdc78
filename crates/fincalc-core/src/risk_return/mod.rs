//! Risk and return metrics: CAPM-family returns, cost of capital and
//! simple bond yield.

pub mod bonds;
pub mod capm;
pub mod cost_of_capital;

pub use bonds::yield_to_maturity;
pub use capm::{capm, risk_adjusted_return, sharpe_ratio};
pub use cost_of_capital::{break_even_point, economic_value_added, wacc};
