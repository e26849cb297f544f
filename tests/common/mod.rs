#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use pricelog::adapters::bitflyer_adapter::parse_ticker;
use pricelog::domain::error::PricelogError;
use pricelog::domain::ticker::Ticker;
use pricelog::ports::clock_port::ClockPort;
use pricelog::ports::log_store_port::LogStorePort;
use pricelog::ports::scheduler_port::{SchedulerPort, TriggerHandle};
use pricelog::ports::ticker_port::TickerPort;
use std::cell::RefCell;
use std::collections::HashMap;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    date(y, mo, d).and_hms_opt(h, mi, s).unwrap()
}

/// Ticker port backed by a canned response body, run through the real
/// response parser.
pub struct BodyTickerPort {
    pub body: String,
}

impl BodyTickerPort {
    pub fn new(body: &str) -> Self {
        Self {
            body: body.to_string(),
        }
    }
}

impl TickerPort for BodyTickerPort {
    fn fetch_ticker(&self) -> Result<Ticker, PricelogError> {
        parse_ticker(&self.body)
    }
}

/// Ticker port that always fails at the HTTP level.
pub struct FailingTickerPort {
    pub reason: String,
}

impl TickerPort for FailingTickerPort {
    fn fetch_ticker(&self) -> Result<Ticker, PricelogError> {
        Err(PricelogError::Fetch {
            reason: self.reason.clone(),
        })
    }
}

/// Clock pinned to one instant.
pub struct FixedClock {
    pub now: NaiveDateTime,
}

impl FixedClock {
    pub fn at(now: NaiveDateTime) -> Self {
        Self { now }
    }
}

impl ClockPort for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }
}

/// In-memory log store that also records every `create_log` call.
#[derive(Default)]
pub struct MemoryLogStore {
    pub logs: RefCell<HashMap<String, Vec<Vec<String>>>>,
    pub created: RefCell<Vec<String>>,
}

impl MemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(self, name: &str, rows: Vec<(&str, &str)>) -> Self {
        let rows = rows
            .into_iter()
            .map(|(ts, price)| vec![ts.to_string(), price.to_string()])
            .collect();
        self.logs.borrow_mut().insert(name.to_string(), rows);
        self
    }

    pub fn log_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.logs.borrow().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn rows(&self, name: &str) -> Vec<Vec<String>> {
        self.logs.borrow().get(name).cloned().unwrap_or_default()
    }
}

impl LogStorePort for MemoryLogStore {
    fn log_exists(&self, name: &str) -> Result<bool, PricelogError> {
        Ok(self.logs.borrow().contains_key(name))
    }

    fn create_log(&self, name: &str) -> Result<(), PricelogError> {
        if self.logs.borrow().contains_key(name) {
            return Err(PricelogError::Storage {
                reason: format!("log {name} already exists"),
            });
        }
        self.logs.borrow_mut().insert(name.to_string(), Vec::new());
        self.created.borrow_mut().push(name.to_string());
        Ok(())
    }

    fn last_row(&self, name: &str) -> Result<usize, PricelogError> {
        self.logs
            .borrow()
            .get(name)
            .map(Vec::len)
            .ok_or_else(|| PricelogError::Storage {
                reason: format!("no log named {name}"),
            })
    }

    fn set_cell(
        &self,
        name: &str,
        row: usize,
        col: usize,
        value: &str,
    ) -> Result<(), PricelogError> {
        let mut logs = self.logs.borrow_mut();
        let rows = logs.get_mut(name).ok_or_else(|| PricelogError::Storage {
            reason: format!("no log named {name}"),
        })?;
        while rows.len() < row {
            rows.push(vec![String::new(), String::new()]);
        }
        let target = &mut rows[row - 1];
        while target.len() < col {
            target.push(String::new());
        }
        target[col - 1] = value.to_string();
        Ok(())
    }

    fn read_rows(&self, name: &str) -> Result<Vec<(String, f64)>, PricelogError> {
        let logs = self.logs.borrow();
        let rows = logs.get(name).ok_or_else(|| PricelogError::Storage {
            reason: format!("no log named {name}"),
        })?;
        rows.iter()
            .map(|row| {
                let price = row[1].parse().map_err(|_| PricelogError::Storage {
                    reason: format!("non-numeric price cell: {:?}", row[1]),
                })?;
                Ok((row[0].clone(), price))
            })
            .collect()
    }
}

/// Scheduler that records registrations instead of touching a crontab.
#[derive(Default)]
pub struct RecordingScheduler {
    pub registered: RefCell<Vec<(String, u32)>>,
}

impl SchedulerPort for RecordingScheduler {
    fn register_interval(
        &self,
        command: &str,
        every_minutes: u32,
    ) -> Result<TriggerHandle, PricelogError> {
        self.registered
            .borrow_mut()
            .push((command.to_string(), every_minutes));
        Ok(TriggerHandle {
            entry: format!("*/{every_minutes} * * * * {command}"),
        })
    }
}
