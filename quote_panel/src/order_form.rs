//! Inline order form: side toggle, limit price toggle, cost estimate and the
//! auto-clearing result message.
//!
//! The estimate never reads ambient page state. The caller passes the current
//! price and market in a [`PriceContext`], usually straight from the last
//! [`QuotePanel::load`](crate::panel::QuotePanel::load).
use log::warn;
use quote_common::{Market, OrderSide, OrderType, Result};
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::region::{Page, RegionHandle, with_region};
use crate::render::{format_fixed_grouped, format_grouped};

/// Commission charged on the order value, as a fraction.
pub const COMMISSION_RATE: f64 = 0.0005;

/// How long an order result message stays on screen.
pub const RESULT_CLEAR_DELAY: Duration = Duration::from_secs(5);

const ACTIVE_CLASS: &str = "active";
const LIMIT_PLACEHOLDER: &str = "Enter limit price";
const MARKET_PLACEHOLDER: &str = "Market order";

/// Elements of the order form, resolved once. `None` (or an empty list) means
/// the page does not have that element.
#[derive(Debug, Clone, Default)]
pub struct OrderFormRegions {
    /// Hidden input carrying the side (`order-side`).
    pub side_input: Option<RegionHandle>,
    /// All side buttons (`.side-btn`).
    pub side_buttons: Vec<RegionHandle>,
    /// `order-submit-btn`.
    pub submit_button: Option<RegionHandle>,
    /// `inline-order-type` select, or the standalone form's `order-type`.
    pub order_type: Option<RegionHandle>,
    /// `inline-limit-price` input, or the standalone form's `limit-price`.
    pub limit_price: Option<RegionHandle>,
    /// `order-quantity` input.
    pub quantity: Option<RegionHandle>,
    /// `order-estimate` output.
    pub estimate: Option<RegionHandle>,
    /// `order-result` message area.
    pub result: Option<RegionHandle>,
}

impl OrderFormRegions {
    /// Resolve the form elements of `page`. Side buttons are the elements whose
    /// id starts with `side-btn-`.
    pub fn from_page(page: &Page) -> Self {
        OrderFormRegions {
            side_input: page.resolve("order-side"),
            side_buttons: page.resolve_prefixed("side-btn-").into_values().collect(),
            submit_button: page.resolve("order-submit-btn"),
            order_type: page
                .resolve("inline-order-type")
                .or_else(|| page.resolve("order-type")),
            limit_price: page
                .resolve("inline-limit-price")
                .or_else(|| page.resolve("limit-price")),
            quantity: page.resolve("order-quantity"),
            estimate: page.resolve("order-estimate"),
            result: page.resolve("order-result"),
        }
    }
}

/// Price the estimate falls back to for market orders.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceContext {
    /// Last known price of the symbol on screen, if any.
    pub current_price: Option<f64>,
    pub market: Market,
}

impl PriceContext {
    pub fn new(current_price: Option<f64>, market: Market) -> Self {
        PriceContext {
            current_price,
            market,
        }
    }
}

/// Raw form values an estimate is computed from.
#[derive(Debug, Clone, Copy)]
pub struct EstimateInput<'a> {
    pub quantity: &'a str,
    pub order_type: OrderType,
    pub limit_price: &'a str,
    pub context: PriceContext,
}

/// Expected order value and commission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderEstimate {
    pub total: f64,
    pub commission: f64,
    pub market: Market,
}

/// Compute the expected cost of an order.
///
/// The quantity is the leading integer of the field (`"12 shares"` is 12). A
/// limit order with a filled-in limit price uses that price; anything else
/// uses the context price. `None` when either the price or the quantity is not
/// positive.
pub fn estimate_order(input: EstimateInput<'_>) -> Option<OrderEstimate> {
    let quantity = parse_leading_int(input.quantity);
    let price = if input.order_type == OrderType::LIMIT && !input.limit_price.trim().is_empty() {
        parse_price(input.limit_price)
    } else {
        input.context.current_price.unwrap_or(0.0)
    };

    if price.is_nan() || price <= 0.0 || quantity <= 0 {
        return None;
    }

    let total = price * quantity as f64;
    Some(OrderEstimate {
        total,
        commission: total * COMMISSION_RATE,
        market: input.context.market,
    })
}

/// Markup for an estimate; empty when there is none.
pub fn render_estimate(estimate: Option<&OrderEstimate>) -> String {
    let Some(estimate) = estimate else {
        return String::new();
    };
    match estimate.market {
        Market::KR => format!(
            "Estimated: <strong>{} KRW</strong> <small>(commission {} KRW)</small>",
            format_grouped(estimate.total, 3),
            format_grouped(estimate.commission.round(), 0),
        ),
        Market::US => format!(
            "Estimated: <strong>${}</strong> <small>(commission ${:.2})</small>",
            format_fixed_grouped(estimate.total, 2),
            estimate.commission,
        ),
    }
}

/// Event handlers of the order form.
pub struct OrderForm {
    regions: OrderFormRegions,
}

impl OrderForm {
    pub fn new(regions: OrderFormRegions) -> Self {
        OrderForm { regions }
    }

    pub fn regions(&self) -> &OrderFormRegions {
        &self.regions
    }

    /// Select the order side from one of the side buttons.
    pub fn set_side(&self, side: OrderSide, button: &RegionHandle) -> Result<()> {
        with_region(self.regions.side_input.as_ref(), |r| r.set_value(side.to_string()))?;

        for other in &self.regions.side_buttons {
            with_region(Some(other), |r| r.remove_class(ACTIVE_CLASS))?;
        }
        with_region(Some(button), |r| r.add_class(ACTIVE_CLASS))?;

        with_region(self.regions.submit_button.as_ref(), |r| match side {
            OrderSide::BUY => {
                r.set_text("Buy order");
                r.set_class_name("order-submit-btn buy");
            }
            OrderSide::SELL => {
                r.set_text("Sell order");
                r.set_class_name("order-submit-btn sell");
            }
        })?;
        Ok(())
    }

    /// React to an order type change: only limit orders take a limit price.
    ///
    /// Recomputes the estimate afterwards, unless the page has no limit price
    /// input at all.
    pub fn toggle_limit_price(&self, order_type: OrderType, context: PriceContext) -> Result<()> {
        with_region(self.regions.order_type.as_ref(), |r| r.set_value(order_type.to_string()))?;

        let toggled = with_region(self.regions.limit_price.as_ref(), |r| match order_type {
            OrderType::LIMIT => {
                r.set_disabled(false);
                r.set_placeholder(LIMIT_PLACEHOLDER);
            }
            OrderType::MARKET => {
                r.set_disabled(true);
                r.set_value("");
                r.set_placeholder(MARKET_PLACEHOLDER);
            }
        })?;
        if toggled.is_none() {
            return Ok(());
        }

        self.update_estimate(context)?;
        Ok(())
    }

    /// Bring the limit price input in line with the order type the form was
    /// rendered with. Call once when the form appears on the page.
    pub fn sync_limit_price(&self, context: PriceContext) -> Result<()> {
        let order_type = read_order_type(self.regions.order_type.as_ref())?;
        self.toggle_limit_price(order_type, context)
    }

    /// Recompute the estimate from the current form values and write it out.
    ///
    /// Returns the estimate that was rendered, or `None` when the page has no
    /// estimate element or the form does not yield a positive total.
    pub fn update_estimate(&self, context: PriceContext) -> Result<Option<OrderEstimate>> {
        if self.regions.estimate.is_none() {
            return Ok(None);
        }

        let quantity = read_value(self.regions.quantity.as_ref())?;
        let limit_price = read_value(self.regions.limit_price.as_ref())?;
        let order_type = read_order_type(self.regions.order_type.as_ref())?;

        let estimate = estimate_order(EstimateInput {
            quantity: &quantity,
            order_type,
            limit_price: &limit_price,
            context,
        });
        let markup = render_estimate(estimate.as_ref());
        with_region(self.regions.estimate.as_ref(), |r| r.set_html(markup))?;
        Ok(estimate)
    }

    /// Clear the order result message after [`RESULT_CLEAR_DELAY`].
    ///
    /// Must be called from within a tokio runtime.
    pub fn on_order_complete(&self) -> Option<JoinHandle<()>> {
        schedule_result_clear(self.regions.result.clone(), RESULT_CLEAR_DELAY)
    }
}

/// Spawn a task that empties `result` once `delay` has elapsed.
///
/// Returns `None` when there is no result region to clear.
pub fn schedule_result_clear(
    result: Option<RegionHandle>,
    delay: Duration,
) -> Option<JoinHandle<()>> {
    let result = result?;
    Some(tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if let Err(e) = with_region(Some(&result), |r| r.clear()) {
            warn!("Failed to clear order result: {e}");
        }
    }))
}

fn read_value(region: Option<&RegionHandle>) -> Result<String> {
    Ok(with_region(region, |r| r.value.clone())?.unwrap_or_default())
}

fn read_order_type(region: Option<&RegionHandle>) -> Result<OrderType> {
    Ok(read_value(region)?.parse().unwrap_or_default())
}

/// Leading integer of `raw`, after optional whitespace and sign; 0 if none.
fn parse_leading_int(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    match rest[..end].parse::<i64>() {
        Ok(n) if negative => -n,
        Ok(n) => n,
        Err(_) => 0,
    }
}

/// Leading decimal number of `raw` (`"65000 KRW"` is 65000); 0 if none.
fn parse_price(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let bytes = trimmed.as_bytes();
    let is_digit = |i: usize| bytes.get(i).is_some_and(|b| b.is_ascii_digit());

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    while is_digit(end) {
        end += 1;
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while is_digit(end) {
            end += 1;
        }
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        if is_digit(exp) {
            while is_digit(exp) {
                exp += 1;
            }
            end = exp;
        }
    }

    trimmed[..end]
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .unwrap_or(0.0)
}
