//! The recording task: fetch, stamp, append.

use chrono::NaiveDate;

use crate::domain::error::PricelogError;
use crate::domain::sample::{monthly_log_name, PriceSample};
use crate::ports::clock_port::ClockPort;
use crate::ports::log_store_port::LogStorePort;
use crate::ports::ticker_port::TickerPort;

/// One full invocation: fetch the ticker, stamp it with the injected clock,
/// append the sample to the current month's log. Nothing is caught or
/// retried; the first failure aborts the invocation.
pub fn record_price(
    ticker: &dyn TickerPort,
    store: &dyn LogStorePort,
    clock: &dyn ClockPort,
) -> Result<PriceSample, PricelogError> {
    let snapshot = ticker.fetch_ticker()?;
    let now = clock.now();
    let sample = PriceSample::new(now, snapshot.ltp);
    append_sample(store, now.date(), &sample)?;
    Ok(sample)
}

/// Append one sample to the log selected by `today`'s year and month,
/// creating the log on first use. The read-last-row/write-row sequence is
/// not guarded; overlapping invocations could race on the same row index.
pub fn append_sample(
    store: &dyn LogStorePort,
    today: NaiveDate,
    sample: &PriceSample,
) -> Result<(), PricelogError> {
    let name = monthly_log_name(today);
    if !store.log_exists(&name)? {
        store.create_log(&name)?;
    }
    let row = store.last_row(&name)? + 1;
    store.set_cell(&name, row, 1, &sample.timestamp)?;
    store.set_cell(&name, row, 2, &sample.price.to_string())?;
    Ok(())
}
