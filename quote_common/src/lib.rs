//!
//! Common types and utilities shared by the quote panel library and its CLI.
//!
//! This crate aggregates:
//! - `error`: unified error type `PanelError` and the typed `FetchError`.
//! - `result`: handy `Result<T, PanelError>` alias.
//! - `market`: market codes and order enums.
//! - `quote`: the price snapshot returned by the market API.
//! - `net`: endpoint constants and URL builders.
#![warn(missing_docs)]
pub mod error;
pub mod market;
pub mod net;
pub mod quote;
pub mod result;

pub use error::{FetchError, PanelError};
pub use market::{Market, OrderSide, OrderType};
pub use quote::Quote;
pub use result::Result;
