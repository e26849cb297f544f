//! Port traits consumed by the domain task and implemented by adapters.

pub mod ticker_port;
pub mod log_store_port;
pub mod clock_port;
pub mod scheduler_port;
pub mod config_port;
