//! Market identifiers and order enums shared by the panel and its CLI.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Exchange a symbol is quoted on.
///
/// `KR` is the default whenever a caller does not name a market.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    AsRefStr,
    Hash,
    Eq,
    PartialEq,
)]
#[value(rename_all = "UPPER")]
pub enum Market {
    /// Korea Exchange; prices in KRW.
    #[default]
    KR,
    /// US exchanges; prices in USD.
    US,
}

/// Buy or sell side of an order.
#[allow(missing_docs)]
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, ValueEnum, Display, EnumString, Eq, PartialEq,
)]
#[value(rename_all = "UPPER")]
#[strum(ascii_case_insensitive)]
pub enum OrderSide {
    #[default]
    BUY,
    SELL,
}

/// How an order is priced.
#[allow(missing_docs)]
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, ValueEnum, Display, EnumString, Eq, PartialEq,
)]
#[value(rename_all = "UPPER")]
#[strum(ascii_case_insensitive)]
pub enum OrderType {
    #[default]
    MARKET,
    LIMIT,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn market_defaults_to_kr() {
        assert_eq!(Market::default(), Market::KR);
    }

    #[test]
    fn market_codes_are_upper_case() {
        assert_eq!(Market::US.as_ref(), "US");
        assert_eq!(Market::KR.to_string(), "KR");
        assert_eq!(Market::from_str("us", true).unwrap(), Market::US);
        assert!(Market::from_str("JP", true).is_err());
    }

    #[test]
    fn order_enums_round_trip_through_strings() {
        assert_eq!("limit".parse::<OrderType>().unwrap(), OrderType::LIMIT);
        assert_eq!(OrderSide::SELL.to_string(), "SELL");
    }
}
