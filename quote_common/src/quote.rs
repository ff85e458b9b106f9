//! Quote payload returned by the market price endpoint.
//!
//! The endpoint answers with a JSON object carrying at least `price`; the
//! change fields default to zero. Anything else the server echoes (symbol,
//! name, volume, market) is ignored, so its shape never fails a lookup.
use serde::{Deserialize, Serialize};

/// Price snapshot for a single symbol.
///
/// A `price` of exactly zero means the server had no quote for the symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Last traded price.
    pub price: f64,
    /// Absolute change against the previous close.
    #[serde(default)]
    pub change: f64,
    /// Change against the previous close, in percent.
    #[serde(default)]
    pub change_pct: f64,
}

impl Quote {
    /// Build a quote from the three fields the panel renders.
    pub fn new(price: f64, change: f64, change_pct: f64) -> Self {
        Quote {
            price,
            change,
            change_pct,
        }
    }

    /// `false` when the server used the zero-price sentinel.
    pub fn is_available(&self) -> bool {
        self.price != 0.0
    }

    /// Non-negative change renders with the positive styling.
    pub fn is_up(&self) -> bool {
        self.change >= 0.0
    }
}
