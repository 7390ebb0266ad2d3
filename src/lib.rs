//! # BlackScholes-Lib: Closed-Form European Option Pricing
//!
//! `blackscholes-lib` is a small Rust library for quantitative finance applications,
//! focused on theoretical fair values of European call and put contracts under the
//! Black-Scholes model. It is intended as a building block inside larger risk and
//! simulation systems that supply well-typed numeric inputs and consume a price.
//!
//! ## Core Features
//!
//! - **Scalar Pricing**: Closed-form call and put prices from spot, strike, rate,
//!   volatility, dividend yield, and time to maturity
//! - **Element-Wise Pricing**: Slice overloads with a scalar-broadcasting contract
//!   for batch evaluation
//! - **Chain Pricing**: Price a whole quote chain against one set of market rates
//! - **Float Semantics**: Degenerate and out-of-domain inputs propagate IEEE-754
//!   NaN/infinity instead of raising
//!
//! ## Quick Start
//!
//! ```rust
//! use blackscholes_lib::{bs_call_price, bs_put_price};
//!
//! // S=100, K=100, r=0, sigma=20%, q=0, T=1y
//! let call = bs_call_price(100.0, 100.0, 0.0, 0.2, 0.0, 1.0);
//! let put = bs_put_price(100.0, 100.0, 0.0, 0.2, 0.0, 1.0);
//!
//! // At the money with zero rates, call and put coincide (put-call parity)
//! assert!((call - put).abs() < 1e-9);
//! assert!((call - 7.9656).abs() < 1e-3);
//! ```
//!
//! Chain pricing mirrors the scalar API for batch consumers:
//!
//! ```rust
//! use blackscholes_lib::{price_chain, MarketParams, OptionQuote};
//!
//! let quotes = vec![OptionQuote {
//!     option_type: "call".to_string(),
//!     strike_price: 105.0,
//!     underlying_price: 100.0,
//!     years_to_exp: 0.5,
//!     volatility: 0.25,
//! }];
//!
//! let results = price_chain(quotes, MarketParams { r: 0.02, q: 0.0 })?;
//! assert!(results[0].price > 0.0);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Scope
//!
//! The crate does not calibrate volatility from market prices, compute Greeks,
//! model American-style early exercise, or run Monte Carlo / finite-difference
//! schemes. Input validation is the caller's responsibility; the formulas are
//! evaluated as given.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod chain;
pub mod math;
pub mod models;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Scalar pricers and their element-wise overloads
pub use models::bs::broadcast::{bs_call_price_slice, bs_put_price_slice};
pub use models::bs::{bs_call_price, bs_put_price};

// Chain-level API
pub use chain::{price_chain, price_quote, MarketParams, OptionQuote, PricingResult};
