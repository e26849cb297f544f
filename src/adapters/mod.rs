//! Concrete adapter implementations for ports.

pub mod bitflyer_adapter;
pub mod csv_log_store;
pub mod system_clock;
pub mod cron_scheduler;
pub mod file_config_adapter;
