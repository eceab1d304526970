use crate::portfolio::holdings::{Holding, HoldingSummary};
use crate::utils::option_math::{checked_mul, checked_sub, percentage_of};

pub trait HoldingSummaryCalculatorTrait: Send + Sync {
    fn calculate(&self, holding: Option<&Holding>) -> Option<HoldingSummary>;
}

/// Per-holding P&L calculator.
#[derive(Debug, Default, Clone, Copy)]
pub struct HoldingSummaryCalculator;

impl HoldingSummaryCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl HoldingSummaryCalculatorTrait for HoldingSummaryCalculator {
    fn calculate(&self, holding: Option<&Holding>) -> Option<HoldingSummary> {
        calculate_holding_summary(holding)
    }
}

/// Derives every P&L figure of a holding from its own inputs.
///
/// Each field only looks at its direct dependencies, so a missing quantity
/// removes the value-based fields but leaves `todays_pnl_percentage`, which
/// depends on `close` and `ltp` alone.
pub fn calculate_holding_summary(holding: Option<&Holding>) -> Option<HoldingSummary> {
    let holding = holding?;
    let quantity = holding.quantity_decimal();

    let current_value = checked_mul(holding.ltp, quantity);
    let total_investment = checked_mul(holding.avg_price, quantity);
    let total_pnl = checked_sub(current_value, total_investment);
    let total_pnl_percentage = percentage_of(total_pnl, total_investment);

    let price_change = checked_sub(holding.close, holding.ltp);
    let todays_pnl = checked_mul(price_change, quantity);
    let todays_pnl_percentage = percentage_of(price_change, holding.ltp);

    Some(HoldingSummary {
        holding: Some(holding.clone()),
        current_value,
        total_investment,
        total_pnl,
        total_pnl_percentage,
        todays_pnl,
        todays_pnl_percentage,
    })
}
