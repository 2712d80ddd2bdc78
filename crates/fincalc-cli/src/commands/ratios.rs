use clap::Args;
use fincalc_core::ratios;
use fincalc_core::Precision;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{evaluate, CommandResult};

/// Arguments for debt-to-income ratio
#[derive(Args, Serialize)]
#[command(allow_hyphen_values = true)]
pub struct DebtToIncomeArgs {
    #[arg(long)]
    pub total_debt: Decimal,
    #[arg(long)]
    pub total_income: Decimal,
}

/// Arguments for net cash flow
#[derive(Args, Serialize)]
#[command(allow_hyphen_values = true)]
pub struct CashFlowArgs {
    #[arg(long)]
    pub inflow: Decimal,
    #[arg(long)]
    pub outflow: Decimal,
}

/// Arguments for return on investment
#[derive(Args, Serialize)]
#[command(allow_hyphen_values = true)]
pub struct RoiArgs {
    /// Total amount returned by the investment
    #[arg(long)]
    pub gain: Decimal,
    /// Amount invested
    #[arg(long)]
    pub cost: Decimal,
}

/// Arguments for ratios of an income figure to revenue
#[derive(Args, Serialize)]
#[command(allow_hyphen_values = true)]
pub struct MarginArgs {
    /// Net income (profit margin) or gross profit (gross margin)
    #[arg(long, alias = "gross-profit")]
    pub income: Decimal,
    #[arg(long)]
    pub revenue: Decimal,
}

/// Arguments for inventory turnover
#[derive(Args, Serialize)]
#[command(allow_hyphen_values = true)]
pub struct InventoryTurnoverArgs {
    #[arg(long, alias = "cogs")]
    pub cost_of_goods_sold: Decimal,
    #[arg(long)]
    pub average_inventory: Decimal,
}

/// Arguments for current ratio
#[derive(Args, Serialize)]
#[command(allow_hyphen_values = true)]
pub struct CurrentRatioArgs {
    #[arg(long)]
    pub current_assets: Decimal,
    #[arg(long)]
    pub current_liabilities: Decimal,
}

/// Arguments for quick (acid-test) ratio
#[derive(Args, Serialize)]
#[command(allow_hyphen_values = true)]
pub struct QuickRatioArgs {
    #[arg(long)]
    pub current_assets: Decimal,
    #[arg(long)]
    pub inventories: Decimal,
    #[arg(long)]
    pub current_liabilities: Decimal,
}

/// Arguments for return on equity
#[derive(Args, Serialize)]
#[command(allow_hyphen_values = true)]
pub struct RoeArgs {
    #[arg(long)]
    pub net_income: Decimal,
    #[arg(long)]
    pub shareholder_equity: Decimal,
}

/// Arguments for ratios measured against total assets
#[derive(Args, Serialize)]
#[command(allow_hyphen_values = true)]
pub struct AssetBaseArgs {
    /// Total debt, total expenses or net income, depending on the ratio
    #[arg(long, aliases = ["total-debt", "total-expenses", "net-income"])]
    pub amount: Decimal,
    #[arg(long)]
    pub total_assets: Decimal,
}

/// Arguments for price-to-earnings ratio
#[derive(Args, Serialize)]
#[command(allow_hyphen_values = true)]
pub struct PeArgs {
    #[arg(long, alias = "price")]
    pub market_price_per_share: Decimal,
    #[arg(long, alias = "eps")]
    pub earnings_per_share: Decimal,
}

pub fn run_debt_to_income(args: DebtToIncomeArgs) -> CommandResult {
    evaluate(
        "Debt-to-income: debt / income * 100",
        &args,
        Precision::Cents,
        Vec::new(),
        || ratios::debt_to_income_ratio(args.total_debt, args.total_income),
    )
}

pub fn run_net_cash_flow(args: CashFlowArgs) -> CommandResult {
    evaluate(
        "Net cash flow: inflow - outflow",
        &args,
        Precision::Cents,
        Vec::new(),
        || ratios::net_cash_flow(args.inflow, args.outflow),
    )
}

pub fn run_return_on_investment(args: RoiArgs) -> CommandResult {
    evaluate(
        "Return on investment: (gain - cost) / cost * 100",
        &args,
        Precision::Cents,
        Vec::new(),
        || ratios::return_on_investment(args.gain, args.cost),
    )
}

pub fn run_profit_margin(args: MarginArgs) -> CommandResult {
    evaluate(
        "Profit margin: net income / revenue * 100",
        &args,
        Precision::Cents,
        Vec::new(),
        || ratios::profit_margin(args.income, args.revenue),
    )
}

pub fn run_gross_profit_margin(args: MarginArgs) -> CommandResult {
    evaluate(
        "Gross profit margin: gross profit / revenue * 100",
        &args,
        Precision::Cents,
        Vec::new(),
        || ratios::gross_profit_margin(args.income, args.revenue),
    )
}

pub fn run_inventory_turnover(args: InventoryTurnoverArgs) -> CommandResult {
    evaluate(
        "Inventory turnover: COGS / average inventory",
        &args,
        Precision::Cents,
        Vec::new(),
        || ratios::inventory_turnover_ratio(args.cost_of_goods_sold, args.average_inventory),
    )
}

pub fn run_current_ratio(args: CurrentRatioArgs) -> CommandResult {
    evaluate(
        "Current ratio: current assets / current liabilities",
        &args,
        Precision::Cents,
        Vec::new(),
        || ratios::current_ratio(args.current_assets, args.current_liabilities),
    )
}

pub fn run_quick_ratio(args: QuickRatioArgs) -> CommandResult {
    evaluate(
        "Quick ratio: (current assets - inventories) / current liabilities",
        &args,
        Precision::Cents,
        Vec::new(),
        || ratios::quick_ratio(args.current_assets, args.inventories, args.current_liabilities),
    )
}

pub fn run_return_on_equity(args: RoeArgs) -> CommandResult {
    evaluate(
        "Return on equity: net income / equity * 100",
        &args,
        Precision::Cents,
        Vec::new(),
        || ratios::return_on_equity(args.net_income, args.shareholder_equity),
    )
}

pub fn run_leverage_ratio(args: AssetBaseArgs) -> CommandResult {
    evaluate(
        "Leverage ratio: total debt / total assets",
        &args,
        Precision::Cents,
        Vec::new(),
        || ratios::leverage_ratio(args.amount, args.total_assets),
    )
}

pub fn run_expense_ratio(args: AssetBaseArgs) -> CommandResult {
    evaluate(
        "Expense ratio: total expenses / total assets * 100",
        &args,
        Precision::Cents,
        Vec::new(),
        || ratios::expense_ratio(args.amount, args.total_assets),
    )
}

pub fn run_return_on_assets(args: AssetBaseArgs) -> CommandResult {
    evaluate(
        "Return on assets: net income / total assets * 100",
        &args,
        Precision::Cents,
        Vec::new(),
        || ratios::return_on_assets(args.amount, args.total_assets),
    )
}

pub fn run_price_to_earnings(args: PeArgs) -> CommandResult {
    let mut warnings = Vec::new();
    if args.earnings_per_share < Decimal::ZERO {
        warnings.push("Negative earnings per share gives a negative multiple".to_string());
    }
    evaluate(
        "Price-to-earnings: price per share / EPS",
        &args,
        Precision::Cents,
        warnings,
        || ratios::price_to_earnings_ratio(args.market_price_per_share, args.earnings_per_share),
    )
}
