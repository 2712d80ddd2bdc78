use clap::Args;
use fincalc_core::risk_return;
use fincalc_core::Precision;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{evaluate, CommandResult};

/// Arguments for CAPM expected return
#[derive(Args, Serialize)]
#[command(allow_hyphen_values = true)]
pub struct CapmArgs {
    #[arg(long)]
    pub risk_free_rate: Decimal,
    #[arg(long)]
    pub beta: Decimal,
    #[arg(long)]
    pub market_return: Decimal,
}

/// Arguments for Sharpe ratio
#[derive(Args, Serialize)]
#[command(allow_hyphen_values = true)]
pub struct SharpeArgs {
    #[arg(long)]
    pub portfolio_return: Decimal,
    #[arg(long)]
    pub risk_free_rate: Decimal,
    /// Standard deviation of portfolio returns
    #[arg(long)]
    pub portfolio_risk: Decimal,
}

/// Arguments for beta-adjusted excess return
#[derive(Args, Serialize)]
#[command(allow_hyphen_values = true)]
pub struct RiskAdjustedArgs {
    #[arg(long)]
    pub return_rate: Decimal,
    #[arg(long)]
    pub risk_free_rate: Decimal,
    #[arg(long)]
    pub beta: Decimal,
}

/// Arguments for WACC from capital amounts
#[derive(Args, Serialize)]
#[command(allow_hyphen_values = true)]
pub struct WaccArgs {
    /// Market value of equity
    #[arg(long)]
    pub equity: Decimal,
    /// Market value of debt
    #[arg(long)]
    pub debt: Decimal,
    #[arg(long)]
    pub cost_equity: Decimal,
    /// Pre-tax cost of debt
    #[arg(long)]
    pub cost_debt: Decimal,
    #[arg(long)]
    pub tax_rate: Decimal,
}

/// Arguments for Economic Value Added
#[derive(Args, Serialize)]
#[command(allow_hyphen_values = true)]
pub struct EvaArgs {
    #[arg(long, alias = "nopat")]
    pub net_operating_profit: Decimal,
    #[arg(long)]
    pub capital_employed: Decimal,
    #[arg(long)]
    pub cost_of_capital: Decimal,
}

/// Arguments for break-even units
#[derive(Args, Serialize)]
#[command(allow_hyphen_values = true)]
pub struct BreakEvenArgs {
    #[arg(long)]
    pub fixed_costs: Decimal,
    #[arg(long)]
    pub price_per_unit: Decimal,
    #[arg(long)]
    pub variable_cost_per_unit: Decimal,
}

/// Arguments for approximate yield to maturity
#[derive(Args, Serialize)]
#[command(allow_hyphen_values = true)]
pub struct YtmArgs {
    /// Annual coupon payment
    #[arg(long)]
    pub coupon_payment: Decimal,
    #[arg(long)]
    pub face_value: Decimal,
    #[arg(long)]
    pub market_price: Decimal,
    #[arg(long)]
    pub years_to_maturity: i32,
}

pub fn run_capm(args: CapmArgs) -> CommandResult {
    evaluate(
        "CAPM: rf + beta * (rm - rf)",
        &args,
        Precision::BasisPoints,
        Vec::new(),
        || risk_return::capm(args.risk_free_rate, args.beta, args.market_return),
    )
}

pub fn run_sharpe(args: SharpeArgs) -> CommandResult {
    evaluate(
        "Sharpe ratio: (rp - rf) / sigma",
        &args,
        Precision::Cents,
        Vec::new(),
        || risk_return::sharpe_ratio(args.portfolio_return, args.risk_free_rate, args.portfolio_risk),
    )
}

pub fn run_risk_adjusted_return(args: RiskAdjustedArgs) -> CommandResult {
    evaluate(
        "Risk-adjusted return: (r - rf) / beta",
        &args,
        Precision::BasisPoints,
        Vec::new(),
        || risk_return::risk_adjusted_return(args.return_rate, args.risk_free_rate, args.beta),
    )
}

pub fn run_wacc(args: WaccArgs) -> CommandResult {
    let mut warnings = Vec::new();
    if args.tax_rate < Decimal::ZERO || args.tax_rate > Decimal::ONE {
        warnings.push(format!("Tax rate {} is outside 0..1", args.tax_rate));
    }
    evaluate(
        "WACC: E/V * ke + D/V * kd * (1 - t)",
        &args,
        Precision::BasisPoints,
        warnings,
        || {
            risk_return::wacc(
                args.equity,
                args.debt,
                args.cost_equity,
                args.cost_debt,
                args.tax_rate,
            )
        },
    )
}

pub fn run_eva(args: EvaArgs) -> CommandResult {
    evaluate(
        "Economic value added: NOPAT - capital * cost of capital",
        &args,
        Precision::Cents,
        Vec::new(),
        || {
            risk_return::economic_value_added(
                args.net_operating_profit,
                args.capital_employed,
                args.cost_of_capital,
            )
        },
    )
}

pub fn run_break_even(args: BreakEvenArgs) -> CommandResult {
    let mut warnings = Vec::new();
    if args.price_per_unit < args.variable_cost_per_unit {
        warnings.push("Price is below variable cost; break-even units are negative".to_string());
    }
    evaluate(
        "Break-even units: fixed costs / (price - variable cost)",
        &args,
        Precision::Cents,
        warnings,
        || {
            risk_return::break_even_point(
                args.fixed_costs,
                args.price_per_unit,
                args.variable_cost_per_unit,
            )
        },
    )
}

pub fn run_yield_to_maturity(args: YtmArgs) -> CommandResult {
    evaluate(
        "Approximate YTM: (C + (F - P) / n) / ((F + P) / 2)",
        &args,
        Precision::BasisPoints,
        Vec::new(),
        || {
            risk_return::yield_to_maturity(
                args.coupon_payment,
                args.face_value,
                args.market_price,
                args.years_to_maturity,
            )
        },
    )
}
