pub mod error;
pub mod irr;
pub mod math;
pub mod precision;
pub mod time_value;
pub mod types;

#[cfg(feature = "ratios")]
pub mod ratios;

#[cfg(feature = "risk_return")]
pub mod risk_return;

pub use error::FinCalcError;
pub use precision::Precision;
pub use types::*;

/// Standard result type for all fincalc operations
pub type FinCalcResult<T> = Result<T, FinCalcError>;
