use clap::Args;
use fincalc_core::irr::{self, IrrInput};
use fincalc_core::time_value;
use fincalc_core::Precision;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{evaluate, period_warnings, CommandResult};
use crate::input;

/// Arguments for compound interest
#[derive(Args, Serialize)]
#[command(allow_hyphen_values = true)]
pub struct CompoundInterestArgs {
    /// Starting principal
    #[arg(long)]
    pub principal: Decimal,

    /// Nominal rate per period (e.g. 0.05 for 5%)
    #[arg(long)]
    pub rate: Decimal,

    /// Number of periods (years)
    #[arg(long)]
    pub time: i32,

    /// Compounding events per period
    #[arg(long, default_value = "1")]
    pub frequency: i32,
}

/// Arguments shared by the annuity value calculations
#[derive(Args, Serialize)]
#[command(allow_hyphen_values = true)]
pub struct AnnuityArgs {
    /// Level payment per period
    #[arg(long)]
    pub payment: Decimal,

    /// Rate per period; must be non-zero
    #[arg(long)]
    pub rate: Decimal,

    /// Number of payments
    #[arg(long)]
    pub periods: i32,
}

/// Arguments for net present value
#[derive(Args)]
pub struct NpvArgs {
    /// Comma-separated cash flows, index 0 undiscounted (e.g. "-1000,300,300")
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub cash_flows: Option<Vec<Decimal>>,

    /// Discount rate per period
    #[arg(long, allow_hyphen_values = true)]
    pub discount_rate: Decimal,

    /// Path to JSON file with a cash-flow array
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for internal rate of return
#[derive(Args)]
pub struct IrrArgs {
    /// Comma-separated cash flows, index 0 undiscounted
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub cash_flows: Option<Vec<Decimal>>,

    /// Path to JSON file with a cash-flow array
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for loan amortization
#[derive(Args, Serialize)]
#[command(allow_hyphen_values = true)]
pub struct LoanArgs {
    /// Amount borrowed
    #[arg(long)]
    pub principal: Decimal,

    /// Nominal annual rate; divided by 12 for the monthly rate
    #[arg(long)]
    pub annual_rate: Decimal,

    /// Number of monthly payments
    #[arg(long)]
    pub periods: i32,
}

/// Arguments for effective annual rate
#[derive(Args, Serialize)]
#[command(allow_hyphen_values = true)]
pub struct EffectiveRateArgs {
    /// Nominal annual rate
    #[arg(long)]
    pub nominal_rate: Decimal,

    /// Compounding periods per year
    #[arg(long)]
    pub compounding_periods: i32,
}

/// Arguments for the simplified annual percentage rate
#[derive(Args, Serialize)]
#[command(allow_hyphen_values = true)]
pub struct AprArgs {
    /// Total up-front fees
    #[arg(long)]
    pub total_fees: Decimal,

    /// Amount borrowed
    #[arg(long)]
    pub loan_amount: Decimal,

    /// Loan term in periods
    #[arg(long)]
    pub loan_term: i32,

    /// Interest rate applied once to the loan amount
    #[arg(long)]
    pub interest_rate: Decimal,
}

/// Arguments for time-weighted return
#[derive(Args)]
pub struct TwrArgs {
    /// Comma-separated period returns (e.g. "0.1,0.2,-0.1")
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub returns: Option<Vec<Decimal>>,

    /// Path to JSON file with a returns array
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for simplified modified duration
#[derive(Args, Serialize)]
#[command(allow_hyphen_values = true)]
pub struct DurationArgs {
    /// Bond price
    #[arg(long)]
    pub price: Decimal,

    /// Yield per year
    #[arg(long = "yield")]
    pub yield_rate: Decimal,

    /// Years to discount over
    #[arg(long)]
    pub years: i32,
}

pub fn run_compound_interest(args: CompoundInterestArgs) -> CommandResult {
    let warnings = period_warnings("frequency * time", args.frequency.saturating_mul(args.time));
    evaluate(
        "Compound interest: P * (1 + r/m)^(m*t)",
        &args,
        Precision::Cents,
        warnings,
        || time_value::compound_interest(args.principal, args.rate, args.time, args.frequency),
    )
}

pub fn run_future_value_of_annuity(args: AnnuityArgs) -> CommandResult {
    evaluate(
        "Future value of ordinary annuity: PMT * ((1 + r)^n - 1) / r",
        &args,
        Precision::Cents,
        period_warnings("periods", args.periods),
        || time_value::future_value_of_annuity(args.payment, args.rate, args.periods),
    )
}

pub fn run_present_value_of_annuity(args: AnnuityArgs) -> CommandResult {
    evaluate(
        "Present value of ordinary annuity: PMT * (1 - (1 + r)^-n) / r",
        &args,
        Precision::Cents,
        period_warnings("periods", args.periods),
        || time_value::present_value_of_annuity(args.payment, args.rate, args.periods),
    )
}

pub fn run_npv(args: NpvArgs) -> CommandResult {
    let cash_flows = input::load_sequence(&args.cash_flows, &args.input, "cash_flows")?;
    let assumptions = serde_json::json!({
        "cash_flows": cash_flows,
        "discount_rate": args.discount_rate,
    });
    evaluate(
        "Net present value: sum of CF_t / (1 + r)^t",
        &assumptions,
        Precision::Cents,
        Vec::new(),
        || time_value::npv(&cash_flows, args.discount_rate),
    )
}

pub fn run_irr(args: IrrArgs) -> CommandResult {
    let cash_flows = input::load_sequence(&args.cash_flows, &args.input, "cash_flows")?;
    let output = irr::irr_detailed(&IrrInput { cash_flows })?;
    Ok(serde_json::to_value(output)?)
}

pub fn run_loan_amortization(args: LoanArgs) -> CommandResult {
    evaluate(
        "Level loan payment: P * i / (1 - (1 + i)^-n), i = annual rate / 12",
        &args,
        Precision::Cents,
        period_warnings("periods", args.periods),
        || time_value::loan_amortization(args.principal, args.annual_rate, args.periods),
    )
}

pub fn run_effective_annual_rate(args: EffectiveRateArgs) -> CommandResult {
    evaluate(
        "Effective annual rate: (1 + r/m)^m - 1",
        &args,
        Precision::BasisPoints,
        period_warnings("compounding_periods", args.compounding_periods),
        || time_value::effective_annual_rate(args.nominal_rate, args.compounding_periods),
    )
}

pub fn run_annual_percentage_rate(args: AprArgs) -> CommandResult {
    evaluate(
        "Simplified APR: (fees + loan * rate) / term",
        &args,
        Precision::Cents,
        Vec::new(),
        || {
            time_value::annual_percentage_rate(
                args.total_fees,
                args.loan_amount,
                args.loan_term,
                args.interest_rate,
            )
        },
    )
}

pub fn run_time_weighted_return(args: TwrArgs) -> CommandResult {
    let returns = input::load_sequence(&args.returns, &args.input, "returns")?;
    let assumptions = serde_json::json!({ "returns": returns });
    evaluate(
        "Time-weighted return: product of (1 + r_i) - 1",
        &assumptions,
        Precision::BasisPoints,
        Vec::new(),
        || time_value::time_weighted_return(&returns),
    )
}

pub fn run_modified_duration(args: DurationArgs) -> CommandResult {
    evaluate(
        "Simplified modified duration: price / (1 + y)^n",
        &args,
        Precision::Cents,
        Vec::new(),
        || time_value::modified_duration(args.price, args.yield_rate, args.years),
    )
}
