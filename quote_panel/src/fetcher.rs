//! The one network boundary of the panel: current-price lookups.
//!
//! A `QuoteSource` answers a single lookup with either a `Quote` or a typed
//! `FetchError`. The page shows every error the same way; the type keeps the
//! cause visible to logs and tests. No retries, no timeout and no
//! cancellation: a lookup runs until the transport gives up.
use log::{debug, warn};
use quote_common::net::{parse_base_url, price_url};
use quote_common::{FetchError, Market, PanelError, Quote};
use reqwest::Client;
use std::future::Future;
use url::Url;

/// Something that can look up the current price of a symbol.
pub trait QuoteSource {
    /// Look up `symbol` on `market`. `symbol` is never blank here.
    fn fetch_quote(
        &self,
        symbol: &str,
        market: Market,
    ) -> impl Future<Output = Result<Quote, FetchError>> + Send;
}

/// Look up a quote, short-circuiting a blank symbol.
///
/// `Ok(None)` means the symbol was blank and no request was made.
pub async fn fetch<S: QuoteSource>(
    source: &S,
    symbol: &str,
    market: Market,
) -> Result<Option<Quote>, FetchError> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Ok(None);
    }
    source.fetch_quote(symbol, market).await.map(Some)
}

/// `QuoteSource` backed by the market price endpoint of the trading server.
#[derive(Debug, Clone)]
pub struct HttpQuoteSource {
    client: Client,
    base_url: Url,
}

impl HttpQuoteSource {
    /// Client for the server at `base_url` (e.g. `http://127.0.0.1:8000`).
    pub fn new(base_url: &str) -> Result<Self, PanelError> {
        let client = reqwest::ClientBuilder::new()
            .build()
            .map_err(|e| PanelError::HttpClient(e.to_string()))?;
        Self::with_client(client, base_url)
    }

    /// Reuse an existing `reqwest::Client`.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, PanelError> {
        Ok(HttpQuoteSource {
            client,
            base_url: parse_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl QuoteSource for HttpQuoteSource {
    async fn fetch_quote(&self, symbol: &str, market: Market) -> Result<Quote, FetchError> {
        // cannot-be-a-base URLs are rejected in `with_client`
        let url = price_url(&self.base_url, symbol, market)
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        debug!("GET {url}");

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("[{symbol}/{market}] price request failed: {e}");
                return Err(FetchError::Transport(e.to_string()));
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("[{symbol}/{market}] price endpoint answered {status}");
            return Err(FetchError::Status(status.as_u16()));
        }

        match response.json::<Quote>().await {
            Ok(quote) => {
                debug!(
                    "[{symbol}/{market}] price={} change={} change_pct={}",
                    quote.price, quote.change, quote.change_pct
                );
                Ok(quote)
            }
            Err(e) => {
                warn!("[{symbol}/{market}] undecodable price body: {e}");
                Err(FetchError::Decode(e.to_string()))
            }
        }
    }
}
