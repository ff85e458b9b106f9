//! Command-line arguments for the quote panel CLI.
//!
//! Every option can also come from the environment (or a `.env` file loaded
//! before parsing). See `main` for end-to-end usage.
use clap::{Parser, Subcommand};
use quote_common::net::DEFAULT_BASE_URL;
use quote_common::{Market, OrderType};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the trading web server that serves `/api/market/price`.
    #[arg(long, env = "QUOTE_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up the current price of a symbol and print the rendered quote.
    Quote {
        /// Ticker symbol, e.g. `005930` or `AAPL`.
        symbol: String,

        /// Market the symbol trades on.
        #[arg(long, value_enum, ignore_case = true, default_value_t = Market::KR)]
        market: Market,
    },

    /// Print the order estimate for a quantity at a given or looked-up price.
    Estimate {
        /// Number of shares.
        #[arg(long)]
        quantity: String,

        /// Current price; when omitted and `--symbol` is given, it is looked up.
        #[arg(long)]
        price: Option<f64>,

        /// Symbol whose current price to use when `--price` is omitted.
        #[arg(long)]
        symbol: Option<String>,

        /// `MARKET` or `LIMIT`.
        #[arg(long, value_enum, ignore_case = true, default_value_t = OrderType::MARKET)]
        order_type: OrderType,

        /// Limit price, used for `LIMIT` orders.
        #[arg(long, default_value = "")]
        limit_price: String,

        /// Market the order is placed on; selects the currency.
        #[arg(long, value_enum, ignore_case = true, default_value_t = Market::KR)]
        market: Market,
    },
}
