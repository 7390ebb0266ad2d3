/// Single option quote to be priced: the contract terms plus the
/// volatility to plug into the Black-Scholes formula.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionQuote {
    /// Option type: "call" or "put"
    pub option_type: String,
    /// Strike price
    pub strike_price: f64,
    /// Underlying asset price
    pub underlying_price: f64,
    /// Time to expiration in years
    pub years_to_exp: f64,
    /// Annualized volatility (as decimal, e.g., 0.25 for 25%)
    pub volatility: f64,
}

/// Market-wide parameters shared by every quote in a chain
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketParams {
    /// Continuously-compounded risk-free rate
    pub r: f64,
    /// Continuously-compounded dividend yield
    pub q: f64,
}

impl Default for MarketParams {
    fn default() -> Self {
        Self { r: 0.02, q: 0.0 }
    }
}

/// Lightweight struct to hold the pricing result for each quote
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Option type: "call" or "put"
    pub option_type: String,
    /// Strike price
    pub strike_price: f64,
    /// Underlying asset price
    pub underlying_price: f64,
    /// Time to expiration in years
    pub years_to_exp: f64,
    /// Annualized volatility used for pricing
    pub volatility: f64,
    /// Black-Scholes price of the quote
    pub price: f64,
}
