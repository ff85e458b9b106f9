//! Quote panel controller: loading state, lookup and render in one step.

use log::info;
use quote_common::{Market, Quote, Result};

use crate::fetcher::{QuoteSource, fetch};
use crate::region::RegionHandle;
use crate::render::{render, render_loading};

/// Binds a quote source to the region that displays its answers.
///
/// Loads are not sequenced: when two overlap, whichever finishes last owns the
/// region, even if it was started first.
pub struct QuotePanel<S> {
    source: S,
    price_region: Option<RegionHandle>,
}

impl<S: QuoteSource> QuotePanel<S> {
    pub fn new(source: S, price_region: Option<RegionHandle>) -> Self {
        QuotePanel {
            source,
            price_region,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Look up `symbol` and render the outcome into the price region.
    ///
    /// A blank symbol returns `Ok(None)` without touching the region. Otherwise
    /// the loading placeholder is written first, then replaced with the quote,
    /// the not-found message or the failure message. The quote is returned so
    /// the caller can pass its price on, e.g. to [`estimate_order`].
    ///
    /// Lookup failures are not errors here; only a poisoned region lock is.
    ///
    /// [`estimate_order`]: crate::order_form::estimate_order
    pub async fn load(&self, symbol: &str, market: Market) -> Result<Option<Quote>> {
        if symbol.trim().is_empty() {
            return Ok(None);
        }

        render_loading(self.price_region.as_ref())?;
        let quote = fetch(&self.source, symbol, market).await.ok().flatten();
        if quote.is_none() {
            info!("[{}/{market}] quote unavailable", symbol.trim());
        }
        render(self.price_region.as_ref(), quote.as_ref())?;
        Ok(quote)
    }
}
