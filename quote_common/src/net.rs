//! Endpoint constants and URL helpers for the market API.

use url::Url;

use crate::error::PanelError;
use crate::market::Market;

/// Base URL of the trading web server when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Path segments of the current-price endpoint; the symbol is appended.
pub const PRICE_PATH: [&str; 3] = ["api", "market", "price"];

/// Query parameter naming the market.
pub const MARKET_PARAM: &str = "market";

/// Sidebar partial showing the compact portfolio summary.
pub const PORTFOLIO_COMPACT_PATH: &str = "/partials/portfolio-compact";
/// Sidebar partial listing open positions.
pub const POSITIONS_COMPACT_PATH: &str = "/partials/positions-compact";
/// Sidebar partial listing recent orders.
pub const ORDERS_COMPACT_PATH: &str = "/partials/orders-compact";
/// Prefix of the per-symbol position partial; the symbol is appended.
pub const STOCK_POSITION_PATH: &str = "/partials/stock-position";

/// Build `{base}/api/market/price/{symbol}?market={market}`.
///
/// The symbol is escaped as a single path segment (a `/` in the symbol stays
/// inside it) and the market is query-escaped. Any path already on `base` is
/// kept as a prefix.
pub fn price_url(base: &Url, symbol: &str, market: Market) -> Result<Url, PanelError> {
    let mut url = base.clone();
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| PanelError::CannotBeABase(base.to_string()))?;
        segments.pop_if_empty().extend(PRICE_PATH).push(symbol);
    }
    url.query_pairs_mut()
        .clear()
        .append_pair(MARKET_PARAM, market.as_ref());
    Ok(url)
}

/// Path of the position partial for `symbol`, escaped the same way as in
/// [`price_url`].
pub fn stock_position_path(symbol: &str) -> Result<String, PanelError> {
    let mut url = Url::parse("http://localhost")?.join(STOCK_POSITION_PATH)?;
    url.path_segments_mut()
        .map_err(|_| PanelError::CannotBeABase(STOCK_POSITION_PATH.to_string()))?
        .push(symbol);
    Ok(url.path().to_string())
}

/// Parse a configured base URL.
pub fn parse_base_url(raw: &str) -> Result<Url, PanelError> {
    let url = Url::parse(raw.trim())?;
    if url.cannot_be_a_base() {
        return Err(PanelError::CannotBeABase(raw.to_string()));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        parse_base_url(DEFAULT_BASE_URL).unwrap()
    }

    #[test]
    fn builds_price_url() {
        let url = price_url(&base(), "005930", Market::KR).unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8000/api/market/price/005930?market=KR"
        );
    }

    #[test]
    fn escapes_symbol_as_one_segment() {
        let url = price_url(&base(), "BRK/B", Market::US).unwrap();
        assert_eq!(url.path(), "/api/market/price/BRK%2FB");
        assert_eq!(url.query(), Some("market=US"));
    }

    #[test]
    fn escapes_spaces_and_unicode() {
        let url = price_url(&base(), "삼성 전자", Market::KR).unwrap();
        assert!(url.path().ends_with("/%EC%82%BC%EC%84%B1%20%EC%A0%84%EC%9E%90"));
    }

    #[test]
    fn keeps_base_path_prefix() {
        let base = parse_base_url("https://example.com/trading/").unwrap();
        let url = price_url(&base, "AAPL", Market::US).unwrap();
        assert_eq!(url.path(), "/trading/api/market/price/AAPL");
    }

    #[test]
    fn position_path_escapes_symbol() {
        assert_eq!(
            stock_position_path("005930").unwrap(),
            "/partials/stock-position/005930"
        );
        assert_eq!(
            stock_position_path("BRK/B").unwrap(),
            "/partials/stock-position/BRK%2FB"
        );
    }

    #[test]
    fn rejects_non_hierarchical_base() {
        assert!(matches!(
            parse_base_url("mailto:ops@example.com"),
            Err(PanelError::CannotBeABase(_))
        ));
        assert!(matches!(parse_base_url("not a url"), Err(PanelError::Url(_))));
    }
}
