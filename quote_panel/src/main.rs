//! Quote Panel CLI. Looks up current prices from the trading server and prints
//! the markup the page would show, or the order estimate for a quantity.
//!
//! Usage example (CLI):
//! ```bash
//! quote_panel --base-url http://127.0.0.1:8000 quote 005930 --market KR
//! quote_panel estimate --quantity 10 --symbol AAPL --market US
//! ```
//!
//! `QUOTE_API_BASE_URL` (environment or `.env`) replaces `--base-url`;
//! `RUST_LOG` controls log verbosity.
#![warn(missing_docs)]
mod args;

use crate::args::{Args, Command};
use clap::Parser;
use log::{debug, info};
use quote_common::{PanelError, Result};
use quote_panel::order_form::{EstimateInput, PriceContext, estimate_order, render_estimate};
use quote_panel::{HttpQuoteSource, Page, QuotePanel, Region};

const PRICE_REGION_ID: &str = "stock-price";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), PanelError> {
    let dotenv = dotenvy::dotenv();
    init_logger();
    if let Err(e) = dotenv {
        debug!("No .env file loaded: {e}");
    }
    let args = Args::parse();
    debug!("Command line input recorded: {args:?}");

    let source = HttpQuoteSource::new(&args.base_url)?;
    info!("Using price endpoint at {}", source.base_url());

    let mut page = Page::new();
    let price_region = page.insert(Region::new(PRICE_REGION_ID));
    let panel = QuotePanel::new(source, page.resolve(PRICE_REGION_ID));

    match args.command {
        Command::Quote { symbol, market } => {
            panel.load(&symbol, market).await?;
            println!("{}", price_region.lock()?.html);
        }
        Command::Estimate {
            quantity,
            price,
            symbol,
            order_type,
            limit_price,
            market,
        } => {
            let current_price = match (price, symbol) {
                (Some(price), _) => Some(price),
                (None, Some(symbol)) => panel
                    .load(&symbol, market)
                    .await?
                    .filter(|q| q.is_available())
                    .map(|q| q.price),
                (None, None) => None,
            };
            let estimate = estimate_order(EstimateInput {
                quantity: &quantity,
                order_type,
                limit_price: &limit_price,
                context: PriceContext::new(current_price, market),
            });
            if estimate.is_none() {
                info!("Nothing to estimate: price or quantity is missing");
            }
            println!("{}", render_estimate(estimate.as_ref()));
        }
    }

    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
