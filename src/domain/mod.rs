//! Core domain types and logic.

pub mod ticker;
pub mod sample;
pub mod task;
pub mod error;
