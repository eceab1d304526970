use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Top-level response envelope: `{ "data": { "userHolding": [...] } }`.
///
/// Every level is optional; a missing or null node decodes to `None`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PortfolioResponse {
    #[serde(default)]
    pub data: Option<PortfolioData>,
}

impl PortfolioResponse {
    /// Borrow the holding records, if the payload carries any.
    pub fn user_holding(&self) -> Option<&[Option<HoldingRecord>]> {
        self.data
            .as_ref()
            .and_then(|data| data.user_holding.as_deref())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    #[serde(default)]
    pub user_holding: Option<Vec<Option<HoldingRecord>>>,
}

/// One holding as served by the endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingRecord {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient_number::deserialize_option_i64")]
    pub quantity: Option<i64>,
    /// Last traded price
    #[serde(default, deserialize_with = "lenient_number::deserialize_option_decimal")]
    pub ltp: Option<Decimal>,
    /// Average acquisition price
    #[serde(default, deserialize_with = "lenient_number::deserialize_option_decimal")]
    pub avg_price: Option<Decimal>,
    /// Previous close price
    #[serde(default, deserialize_with = "lenient_number::deserialize_option_decimal")]
    pub close: Option<Decimal>,
}

/// Numeric fields that cannot be represented decode as `None` so one bad
/// record never fails the whole payload.
mod lenient_number {
    use rust_decimal::Decimal;
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};
    use serde_json::Number;
    use std::str::FromStr;
    use tracing::warn;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberInput {
        Number(Number),
        String(String),
        Other(IgnoredAny),
    }

    fn parse_decimal_value(value: &str) -> Option<Decimal> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        let parsed = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .ok();
        if parsed.is_none() {
            warn!("Dropping unrepresentable decimal value '{}'", value);
        }
        parsed
    }

    pub fn deserialize_option_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<NumberInput>::deserialize(deserializer)?;
        Ok(match raw {
            Some(NumberInput::Number(n)) => parse_decimal_value(&n.to_string()),
            Some(NumberInput::String(s)) => parse_decimal_value(&s),
            Some(NumberInput::Other(_)) | None => None,
        })
    }

    pub fn deserialize_option_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<NumberInput>::deserialize(deserializer)?;
        let quantity = match raw {
            Some(NumberInput::Number(n)) => n.as_i64(),
            Some(NumberInput::String(s)) => s.trim().parse().ok(),
            Some(NumberInput::Other(_)) | None => None,
        };
        Ok(quantity)
    }
}
