//! Quote markup and number formatting.
//!
//! Rendering is a pure function of its input: the same quote always produces
//! the same markup, whatever the region held before.
use quote_common::{Quote, Result};

use crate::region::{RegionHandle, with_region};

/// Placeholder written while a request is in flight.
pub const LOADING_MARKUP: &str = r#"<span class="quote-loading">Loading…</span>"#;
/// Shown when the request failed for any reason.
pub const FAILED_MARKUP: &str = r#"<span class="quote-error">Price lookup failed</span>"#;
/// Shown when the server answered with the zero-price sentinel.
pub const NOT_FOUND_MARKUP: &str = r#"<span class="quote-empty">No quote available</span>"#;

/// Class applied to a non-negative change.
pub const POSITIVE_CLASS: &str = "positive";
/// Class applied to a negative change.
pub const NEGATIVE_CLASS: &str = "negative";

const PRICE_FRACTION_DIGITS: usize = 3;
const PERCENT_FRACTION_DIGITS: usize = 2;

/// Markup for a quote, or for its absence.
pub fn render_quote(quote: Option<&Quote>) -> String {
    let Some(quote) = quote else {
        return FAILED_MARKUP.to_string();
    };
    if !quote.is_available() {
        return NOT_FOUND_MARKUP.to_string();
    }

    let (class, sign) = if quote.is_up() {
        (POSITIVE_CLASS, "+")
    } else {
        (NEGATIVE_CLASS, "")
    };
    format!(
        r#"<span class="quote-price">{price}</span> <span class="quote-change {class}">{sign}{change} ({sign}{pct}%)</span>"#,
        price = format_grouped(quote.price, PRICE_FRACTION_DIGITS),
        change = format_grouped(quote.change, PRICE_FRACTION_DIGITS),
        pct = format_grouped(quote.change_pct, PERCENT_FRACTION_DIGITS),
    )
}

/// Write the markup for `quote` into `region`. An absent region is left alone.
pub fn render(region: Option<&RegionHandle>, quote: Option<&Quote>) -> Result<()> {
    let markup = render_quote(quote);
    with_region(region, |r| r.set_html(markup))?;
    Ok(())
}

/// Write the loading placeholder into `region`.
pub fn render_loading(region: Option<&RegionHandle>) -> Result<()> {
    with_region(region, |r| r.set_html(LOADING_MARKUP))?;
    Ok(())
}

/// Group thousands with `,` and keep at most `max_fraction` digits, dropping
/// trailing zeros. Negative zero prints as `0`.
pub fn format_grouped(value: f64, max_fraction: usize) -> String {
    let fixed = format!("{:.*}", max_fraction, value.abs());
    let fixed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    };
    with_sign(value, &group_fixed(&fixed))
}

/// Group thousands with `,` and print exactly `fraction` digits.
pub fn format_fixed_grouped(value: f64, fraction: usize) -> String {
    let fixed = format!("{:.*}", fraction, value.abs());
    with_sign(value, &group_fixed(&fixed))
}

// A negative value that rounds to zero still prints as `-0`; negative zero
// itself does not.
fn with_sign(value: f64, digits: &str) -> String {
    if value < 0.0 {
        format!("-{digits}")
    } else {
        digits.to_string()
    }
}

fn group_fixed(fixed: &str) -> String {
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed, None),
    };

    let len = int_part.len();
    let mut grouped = String::with_capacity(len + len / 3 + 4);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}
