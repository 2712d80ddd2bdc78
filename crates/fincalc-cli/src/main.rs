mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::ratios::{
    AssetBaseArgs, CashFlowArgs, CurrentRatioArgs, DebtToIncomeArgs, InventoryTurnoverArgs,
    MarginArgs, PeArgs, QuickRatioArgs, RoeArgs, RoiArgs,
};
use commands::risk_return::{
    BreakEvenArgs, CapmArgs, EvaArgs, RiskAdjustedArgs, SharpeArgs, WaccArgs, YtmArgs,
};
use commands::time_value::{
    AnnuityArgs, AprArgs, CompoundInterestArgs, DurationArgs, EffectiveRateArgs, IrrArgs,
    LoanArgs, NpvArgs, TwrArgs,
};

/// Deterministic, decimal-precision financial formulas
#[derive(Parser)]
#[command(
    name = "fincalc",
    version,
    about = "Deterministic, decimal-precision financial formulas",
    long_about = "Evaluates time-value-of-money, accounting ratio and risk/return formulas \
                  with 128-bit decimal arithmetic and explicit half-to-even rounding. \
                  Every result is wrapped with its methodology, echoed inputs and warnings."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Future value of a lump sum with periodic compounding
    CompoundInterest(CompoundInterestArgs),
    /// Future value of an ordinary annuity
    FutureValueAnnuity(AnnuityArgs),
    /// Present value of an ordinary annuity
    PresentValueAnnuity(AnnuityArgs),
    /// Net present value of periodic cash flows
    Npv(NpvArgs),
    /// Internal rate of return (fixed 100-step estimate from 10%)
    Irr(IrrArgs),
    /// Level monthly payment for an amortizing loan
    LoanAmortization(LoanArgs),
    /// Effective annual rate from a nominal rate
    EffectiveAnnualRate(EffectiveRateArgs),
    /// Simplified annual percentage rate
    Apr(AprArgs),
    /// Time-weighted return from period returns
    TimeWeightedReturn(TwrArgs),
    /// Simplified modified duration
    ModifiedDuration(DurationArgs),
    /// Debt-to-income ratio (percent)
    DebtToIncome(DebtToIncomeArgs),
    /// Net cash flow
    CashFlow(CashFlowArgs),
    /// Return on investment (percent)
    Roi(RoiArgs),
    /// Net profit margin (percent)
    ProfitMargin(MarginArgs),
    /// Gross profit margin (percent)
    GrossMargin(MarginArgs),
    /// Inventory turnover ratio
    InventoryTurnover(InventoryTurnoverArgs),
    /// Current ratio
    CurrentRatio(CurrentRatioArgs),
    /// Quick (acid-test) ratio
    QuickRatio(QuickRatioArgs),
    /// Return on equity (percent)
    Roe(RoeArgs),
    /// Leverage ratio (debt / assets)
    LeverageRatio(AssetBaseArgs),
    /// Expense ratio (percent)
    ExpenseRatio(AssetBaseArgs),
    /// Return on assets (percent)
    Roa(AssetBaseArgs),
    /// Price-to-earnings ratio
    PeRatio(PeArgs),
    /// CAPM expected return
    Capm(CapmArgs),
    /// Sharpe ratio
    Sharpe(SharpeArgs),
    /// Excess return per unit of beta
    RiskAdjustedReturn(RiskAdjustedArgs),
    /// Weighted average cost of capital from equity and debt amounts
    Wacc(WaccArgs),
    /// Economic value added
    Eva(EvaArgs),
    /// Break-even units
    BreakEven(BreakEvenArgs),
    /// Approximate yield to maturity
    Ytm(YtmArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    use commands::{ratios as r, risk_return as rr, time_value as tv};

    let result: commands::CommandResult = match cli.command {
        Commands::CompoundInterest(args) => tv::run_compound_interest(args),
        Commands::FutureValueAnnuity(args) => tv::run_future_value_of_annuity(args),
        Commands::PresentValueAnnuity(args) => tv::run_present_value_of_annuity(args),
        Commands::Npv(args) => tv::run_npv(args),
        Commands::Irr(args) => tv::run_irr(args),
        Commands::LoanAmortization(args) => tv::run_loan_amortization(args),
        Commands::EffectiveAnnualRate(args) => tv::run_effective_annual_rate(args),
        Commands::Apr(args) => tv::run_annual_percentage_rate(args),
        Commands::TimeWeightedReturn(args) => tv::run_time_weighted_return(args),
        Commands::ModifiedDuration(args) => tv::run_modified_duration(args),
        Commands::DebtToIncome(args) => r::run_debt_to_income(args),
        Commands::CashFlow(args) => r::run_net_cash_flow(args),
        Commands::Roi(args) => r::run_return_on_investment(args),
        Commands::ProfitMargin(args) => r::run_profit_margin(args),
        Commands::GrossMargin(args) => r::run_gross_profit_margin(args),
        Commands::InventoryTurnover(args) => r::run_inventory_turnover(args),
        Commands::CurrentRatio(args) => r::run_current_ratio(args),
        Commands::QuickRatio(args) => r::run_quick_ratio(args),
        Commands::Roe(args) => r::run_return_on_equity(args),
        Commands::LeverageRatio(args) => r::run_leverage_ratio(args),
        Commands::ExpenseRatio(args) => r::run_expense_ratio(args),
        Commands::Roa(args) => r::run_return_on_assets(args),
        Commands::PeRatio(args) => r::run_price_to_earnings(args),
        Commands::Capm(args) => rr::run_capm(args),
        Commands::Sharpe(args) => rr::run_sharpe(args),
        Commands::RiskAdjustedReturn(args) => rr::run_risk_adjusted_return(args),
        Commands::Wacc(args) => rr::run_wacc(args),
        Commands::Eva(args) => rr::run_eva(args),
        Commands::BreakEven(args) => rr::run_break_even(args),
        Commands::Ytm(args) => rr::run_yield_to_maturity(args),
        Commands::Version => {
            println!("fincalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
