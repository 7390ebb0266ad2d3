//! Chain-level pricing: apply the Black-Scholes pricers to a whole set of
//! quotes sharing one pair of market rates.

pub mod types;

use std::cmp::Ordering;

use anyhow::{anyhow, Result};

use crate::models::bs::{bs_call_price, bs_put_price};
pub use types::{MarketParams, OptionQuote, PricingResult};

/// Price a single quote, dispatching on its option type.
///
/// The option type is matched case-insensitively against "call" and "put";
/// anything else is an error.  Numeric edge cases (zero volatility,
/// expired quotes, non-finite fields) follow the scalar pricer semantics
/// and never fail here.
pub fn price_quote(quote: &OptionQuote, params: &MarketParams) -> Result<f64> {
    match quote.option_type.to_lowercase().as_str() {
        "call" => Ok(bs_call_price(
            quote.underlying_price,
            quote.strike_price,
            params.r,
            quote.volatility,
            params.q,
            quote.years_to_exp,
        )),
        "put" => Ok(bs_put_price(
            quote.underlying_price,
            quote.strike_price,
            params.r,
            quote.volatility,
            params.q,
            quote.years_to_exp,
        )),
        other => Err(anyhow!("Invalid option type: {}", other)),
    }
}

/// Price every quote in a chain.
///
/// Results are sorted by strike price in ascending order for consistent
/// downstream reporting.  The first quote with an unknown option type
/// aborts the run with its error.
pub fn price_chain(quotes: Vec<OptionQuote>, params: MarketParams) -> Result<Vec<PricingResult>> {
    let mut results = Vec::with_capacity(quotes.len());

    for quote in quotes {
        let price = price_quote(&quote, &params)?;
        results.push(PricingResult {
            option_type: quote.option_type,
            strike_price: quote.strike_price,
            underlying_price: quote.underlying_price,
            years_to_exp: quote.years_to_exp,
            volatility: quote.volatility,
            price,
        });
    }

    results.sort_by(|a, b| {
        a.strike_price
            .partial_cmp(&b.strike_price)
            .unwrap_or(Ordering::Equal)
    });
    Ok(results)
}
