// demos/pricing_demo.rs

//! Demonstration of Black-Scholes chain pricing
//!
//! This example shows how to:
//! 1. Build an option chain (synthetic, or loaded from a CSV file)
//! 2. Load market parameters (defaults, or from a TOML file)
//! 3. Price the whole chain and report the results
//!
//! Usage:
//!     cargo run --example pricing_demo
//!     cargo run --example pricing_demo -- <csv_path> [params_toml_path]
//!
//! The CSV must carry option_type, strike_price, underlying_price,
//! years_to_exp and volatility columns. The TOML file holds the market
//! parameters, e.g.:
//!
//!     r = 0.02
//!     q = 0.0

use std::env;
use std::error::Error;

use blackscholes_lib::{price_chain, MarketParams, OptionQuote};

// ---------------------------------------------------------------------------
// CSV deserialization helpers
// ---------------------------------------------------------------------------

#[derive(serde::Deserialize, Clone)]
struct CsvRow {
    #[serde(rename = "option_type")]
    option_type: String,
    #[serde(rename = "strike_price")]
    strike_price: f64,
    #[serde(rename = "underlying_price")]
    underlying_price: f64,
    #[serde(rename = "years_to_exp")]
    years_to_exp: f64,
    #[serde(rename = "volatility")]
    volatility: f64,
}

impl From<CsvRow> for OptionQuote {
    fn from(r: CsvRow) -> Self {
        OptionQuote {
            option_type: r.option_type,
            strike_price: r.strike_price,
            underlying_price: r.underlying_price,
            years_to_exp: r.years_to_exp,
            volatility: if r.volatility > 1.0 {
                r.volatility / 100.0
            } else {
                r.volatility
            },
        }
    }
}

fn load_chain_csv(path: &str) -> Result<Vec<OptionQuote>, Box<dyn Error>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut quotes = Vec::new();
    for result in rdr.deserialize() {
        let row: CsvRow = result?;
        quotes.push(row.into());
    }
    Ok(quotes)
}

fn load_market_params(path: &str) -> Result<MarketParams, Box<dyn Error>> {
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("Black-Scholes Chain Pricing Demo");
    println!("================================");

    let args: Vec<String> = env::args().collect();

    let quotes = if args.len() > 1 {
        load_chain_csv(&args[1])?
    } else {
        create_demo_chain()
    };
    let params = if args.len() > 2 {
        load_market_params(&args[2])?
    } else {
        MarketParams { r: 0.02, q: 0.0 }
    };

    println!("Chain loaded: {} quotes", quotes.len());
    println!("Market parameters: r = {:.2}%, q = {:.2}%", params.r * 100.0, params.q * 100.0);

    let results = price_chain(quotes, params)?;

    println!("\nPricing Results:");
    println!(
        "{:<8} {:<8} {:<10} {:<12} {:<12}",
        "Type", "Strike", "TTE (y)", "Vol", "Price"
    );
    println!("{}", "-".repeat(54));

    for result in &results {
        println!(
            "{:<8} {:<8.0} {:<10.4} {:<12.4} {:<12.4}",
            result.option_type,
            result.strike_price,
            result.years_to_exp,
            result.volatility,
            result.price
        );
    }

    // Summary statistics
    let avg_price: f64 =
        results.iter().map(|r| r.price).sum::<f64>() / results.len().max(1) as f64;

    println!("\nSummary Statistics:");
    println!("  Average option price: ${:.4}", avg_price);
    println!(
        "  All prices non-negative: {}",
        results.iter().all(|r| r.price >= 0.0)
    );

    Ok(())
}

/// Create a synthetic option chain for demonstration
fn create_demo_chain() -> Vec<OptionQuote> {
    let underlying_price = 100.0;
    let years_to_exp = 0.25; // 3 months

    // Strikes with a simple volatility smile
    let chain_data = vec![
        (80.0, 0.32, "call"),
        (80.0, 0.32, "put"),
        (90.0, 0.26, "call"),
        (90.0, 0.26, "put"),
        (100.0, 0.22, "call"),
        (100.0, 0.22, "put"), // ATM
        (110.0, 0.25, "call"),
        (110.0, 0.25, "put"),
        (120.0, 0.30, "call"),
        (120.0, 0.30, "put"),
    ];

    chain_data
        .into_iter()
        .map(|(strike, vol, option_type)| OptionQuote {
            option_type: option_type.to_string(),
            strike_price: strike,
            underlying_price,
            years_to_exp,
            volatility: vol,
        })
        .collect()
}
