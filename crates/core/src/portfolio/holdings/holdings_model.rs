use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One owned position as received from the holdings endpoint.
///
/// Every field is independently optional; the calculators tolerate any subset
/// being absent.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: Option<String>,
    pub quantity: Option<i64>,
    /// Last traded price
    pub ltp: Option<Decimal>,
    /// Average acquisition price
    pub avg_price: Option<Decimal>,
    /// Previous close price
    pub close: Option<Decimal>,
}

impl Holding {
    pub fn new(
        symbol: impl Into<String>,
        quantity: i64,
        ltp: Decimal,
        avg_price: Decimal,
        close: Decimal,
    ) -> Self {
        Self {
            symbol: Some(symbol.into()),
            quantity: Some(quantity),
            ltp: Some(ltp),
            avg_price: Some(avg_price),
            close: Some(close),
        }
    }

    /// Quantity lifted into decimal space for arithmetic.
    pub fn quantity_decimal(&self) -> Option<Decimal> {
        self.quantity.map(Decimal::from)
    }
}

/// Derived P&L view of a single holding.
///
/// A field is present only when all of its direct inputs are present, and for
/// the percentage fields only when the denominator is non-zero.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingSummary {
    pub holding: Option<Holding>,
    /// ltp * quantity
    pub current_value: Option<Decimal>,
    /// avg_price * quantity
    pub total_investment: Option<Decimal>,
    /// current_value - total_investment
    pub total_pnl: Option<Decimal>,
    /// (total_pnl / total_investment) * 100
    pub total_pnl_percentage: Option<Decimal>,
    /// (close - ltp) * quantity
    pub todays_pnl: Option<Decimal>,
    /// ((close - ltp) / ltp) * 100
    pub todays_pnl_percentage: Option<Decimal>,
}
