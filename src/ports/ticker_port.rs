//! Market data access port trait.

use crate::domain::error::PricelogError;
use crate::domain::ticker::Ticker;

pub trait TickerPort {
    fn fetch_ticker(&self) -> Result<Ticker, PricelogError>;
}
