//! Quote panel: the client side of a trading page, without a browser.
//!
//! The crate looks up current prices from the trading server and renders them
//! into page regions, and carries the small order form and watchlist handlers
//! that sit next to the quote:
//! - `region`: headless page elements and the `Page` they are resolved from.
//! - `render`: quote markup and number formatting.
//! - `fetcher`: the `QuoteSource` trait and its HTTP implementation.
//! - `panel`: loading placeholder, lookup and render as one step.
//! - `order_form`: side and order type toggles, order estimate, result clearing.
//! - `watchlist`: tab switching and search results visibility.
//! - `signals`: the sidebar refresh signal and the partial reloads it triggers.
pub mod fetcher;
pub mod order_form;
pub mod panel;
pub mod region;
pub mod render;
pub mod signals;
pub mod watchlist;

pub use fetcher::{HttpQuoteSource, QuoteSource};
pub use panel::QuotePanel;
pub use region::{Page, Region, RegionHandle};
