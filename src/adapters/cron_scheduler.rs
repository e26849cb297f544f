//! Crontab scheduler adapter.
//!
//! Registers the recording task with the invoking user's crontab. Each call
//! appends one more entry; registering twice schedules two independent runs
//! per interval.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::domain::error::PricelogError;
use crate::ports::scheduler_port::{SchedulerPort, TriggerHandle};

pub struct CronSchedulerAdapter;

impl CronSchedulerAdapter {
    fn cron_entry(command: &str, every_minutes: u32) -> String {
        format!("*/{every_minutes} * * * * {command}")
    }

    fn current_crontab() -> String {
        // A user with no crontab yet makes `crontab -l` exit non-zero;
        // treat that the same as an empty table.
        match Command::new("crontab").arg("-l").output() {
            Ok(output) if output.status.success() => {
                String::from_utf8_lossy(&output.stdout).into_owned()
            }
            _ => String::new(),
        }
    }

    fn install_crontab(table: &str) -> Result<(), PricelogError> {
        let mut child = Command::new("crontab")
            .arg("-")
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| PricelogError::Trigger {
                reason: format!("failed to run crontab: {e}"),
            })?;

        child
            .stdin
            .take()
            .ok_or_else(|| PricelogError::Trigger {
                reason: "crontab stdin unavailable".into(),
            })?
            .write_all(table.as_bytes())
            .map_err(|e| PricelogError::Trigger {
                reason: format!("failed to write crontab: {e}"),
            })?;

        let status = child.wait().map_err(|e| PricelogError::Trigger {
            reason: format!("failed to wait for crontab: {e}"),
        })?;
        if !status.success() {
            return Err(PricelogError::Trigger {
                reason: format!("crontab rejected the new table ({status})"),
            });
        }
        Ok(())
    }
}

impl SchedulerPort for CronSchedulerAdapter {
    fn register_interval(
        &self,
        command: &str,
        every_minutes: u32,
    ) -> Result<TriggerHandle, PricelogError> {
        if !(1..=59).contains(&every_minutes) {
            return Err(PricelogError::Trigger {
                reason: format!("interval must be 1..=59 minutes, got {every_minutes}"),
            });
        }

        let mut table = Self::current_crontab();
        if !table.is_empty() && !table.ends_with('\n') {
            table.push('\n');
        }

        let entry = Self::cron_entry(command, every_minutes);
        table.push_str(&entry);
        table.push('\n');

        Self::install_crontab(&table)?;
        Ok(TriggerHandle { entry })
    }
}
