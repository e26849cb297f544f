//! Periodic trigger registration port trait.

use crate::domain::error::PricelogError;

/// Receipt for one registered trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerHandle {
    pub entry: String,
}

pub trait SchedulerPort {
    /// Register `command` to run every `every_minutes` minutes, indefinitely,
    /// until an operator removes it. Not idempotent: each call registers one
    /// more independent trigger.
    fn register_interval(
        &self,
        command: &str,
        every_minutes: u32,
    ) -> Result<TriggerHandle, PricelogError>;
}
