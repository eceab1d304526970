/// Multiplier turning a ratio into a percentage
pub const PERCENT_MULTIPLIER: i64 = 100;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Currency symbol used when none is configured
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Message published when a failure carries no text of its own
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

// Display labels
pub const NET_QUANTITY_LABEL: &str = "NET QTY: ";
pub const LTP_LABEL: &str = "LTP: ";
pub const PNL_LABEL: &str = "P&L: ";
pub const PROFIT_LOSS_LABEL: &str = "Profit & Loss*";
pub const CURRENT_VALUE_LABEL: &str = "Current value*";
pub const TOTAL_INVESTMENT_LABEL: &str = "Total investment*";
pub const TODAYS_PNL_LABEL: &str = "Today's Profit & Loss*";
