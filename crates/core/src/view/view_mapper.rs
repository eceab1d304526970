use rust_decimal::Decimal;

use crate::constants::{
    CURRENT_VALUE_LABEL, DEFAULT_CURRENCY_SYMBOL, LTP_LABEL, NET_QUANTITY_LABEL, PNL_LABEL,
    PROFIT_LOSS_LABEL, TODAYS_PNL_LABEL, TOTAL_INVESTMENT_LABEL,
};
use crate::portfolio::holdings::HoldingSummary;
use crate::portfolio::summary::{Portfolio, PortfolioSummary};
use crate::view::format::{format_currency, format_percentage};
use crate::view::view_model::{HoldingView, PortfolioSummaryView, PortfolioView};

/// Turns computed portfolios into display strings.
///
/// A label is only emitted alongside a value; missing figures leave both empty.
#[derive(Debug, Clone)]
pub struct PortfolioViewMapper {
    currency_symbol: String,
}

impl Default for PortfolioViewMapper {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL)
    }
}

impl PortfolioViewMapper {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn map_to_view(&self, portfolio: Option<&Portfolio>) -> Option<PortfolioView> {
        let portfolio = portfolio?;
        Some(PortfolioView {
            holdings: portfolio.holdings.as_ref().map(|holdings| {
                holdings
                    .iter()
                    .map(|summary| self.map_holding(Some(summary)))
                    .collect()
            }),
            summary: self.map_summary(portfolio.summary.as_ref()),
            as_of: portfolio.as_of,
        })
    }

    pub fn map_holding(&self, summary: Option<&HoldingSummary>) -> HoldingView {
        let holding = summary.and_then(|s| s.holding.as_ref());
        let quantity = holding.and_then(|h| h.quantity);
        let ltp = holding.and_then(|h| h.ltp);
        let total_pnl = summary.and_then(|s| s.total_pnl);

        HoldingView {
            symbol: holding.and_then(|h| h.symbol.clone()),
            net_quantity_label: label_if(quantity.is_some(), NET_QUANTITY_LABEL),
            net_quantity_value: quantity.map(|q| q.to_string()),
            ltp_label: label_if(ltp.is_some(), LTP_LABEL),
            ltp_value: self.currency(ltp),
            pnl_label: label_if(total_pnl.is_some(), PNL_LABEL),
            pnl_value: self.currency(total_pnl),
            is_pnl_positive: is_non_negative(total_pnl),
        }
    }

    pub fn map_summary(&self, summary: Option<&PortfolioSummary>) -> Option<PortfolioSummaryView> {
        let s = summary?;
        Some(PortfolioSummaryView {
            profit_loss_label: label_if(s.total_pnl.is_some(), PROFIT_LOSS_LABEL),
            profit_loss_value: self.currency(s.total_pnl),
            profit_loss_percentage: s
                .total_pnl_percentage
                .map(|pct| format!(" ({}%)", format_percentage(pct))),
            is_profit_loss_positive: is_non_negative(s.total_pnl),

            current_value_label: label_if(s.current_value.is_some(), CURRENT_VALUE_LABEL),
            current_value_value: self.currency(s.current_value),

            total_investment_label: label_if(s.total_investment.is_some(), TOTAL_INVESTMENT_LABEL),
            total_investment_value: self.currency(s.total_investment),

            todays_pnl_label: label_if(s.todays_pnl.is_some(), TODAYS_PNL_LABEL),
            todays_pnl_value: self.currency(s.todays_pnl),
            is_todays_pnl_positive: is_non_negative(s.todays_pnl),
        })
    }

    fn currency(&self, value: Option<Decimal>) -> Option<String> {
        value.map(|v| format_currency(v, &self.currency_symbol))
    }
}

fn label_if(present: bool, label: &str) -> Option<String> {
    present.then(|| label.to_string())
}

fn is_non_negative(value: Option<Decimal>) -> Option<bool> {
    value.map(|v| v >= Decimal::ZERO)
}
