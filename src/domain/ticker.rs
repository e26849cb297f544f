//! Ticker snapshot returned by a market data source.

/// One snapshot of the market for a single product.
///
/// Only `ltp` (last traded price) feeds the recorded sample; bid and ask are
/// carried for display and may be absent from some responses.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticker {
    pub product_code: String,
    pub ltp: f64,
    pub best_bid: Option<f64>,
    pub best_ask: Option<f64>,
}

impl Ticker {
    /// Bid/ask midpoint, when both sides are quoted.
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid, self.best_ask) {
            (Some(bid), Some(ask)) => Some((bid + ask) / 2.0),
            _ => None,
        }
    }
}
