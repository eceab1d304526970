use crate::portfolio::holdings::HoldingSummary;
use crate::portfolio::summary::summary_model::PortfolioSummary;
use crate::utils::option_math::{checked_sub, percentage_of, sum_present};

pub trait PortfolioSummaryCalculatorTrait: Send + Sync {
    fn calculate(&self, summaries: Option<&[HoldingSummary]>) -> Option<PortfolioSummary>;
}

/// Aggregates holding summaries into portfolio totals.
#[derive(Debug, Default, Clone, Copy)]
pub struct PortfolioSummaryCalculator;

impl PortfolioSummaryCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl PortfolioSummaryCalculatorTrait for PortfolioSummaryCalculator {
    fn calculate(&self, summaries: Option<&[HoldingSummary]>) -> Option<PortfolioSummary> {
        calculate_portfolio_summary(summaries)
    }
}

/// Sums the present per-holding values and derives the portfolio ratios.
///
/// Absent values are skipped, not counted as zero. Today's percentage uses
/// the aggregate current value as its base.
pub fn calculate_portfolio_summary(
    summaries: Option<&[HoldingSummary]>,
) -> Option<PortfolioSummary> {
    let summaries = summaries.filter(|s| !s.is_empty())?;

    let current_value = sum_present(summaries.iter().map(|s| s.current_value));
    let total_investment = sum_present(summaries.iter().map(|s| s.total_investment));
    let total_pnl = checked_sub(current_value, total_investment);
    let total_pnl_percentage = percentage_of(total_pnl, total_investment);
    let todays_pnl = sum_present(summaries.iter().map(|s| s.todays_pnl));
    let todays_pnl_percentage = percentage_of(todays_pnl, current_value);

    Some(PortfolioSummary {
        current_value,
        total_investment,
        total_pnl,
        total_pnl_percentage,
        todays_pnl,
        todays_pnl_percentage,
    })
}
