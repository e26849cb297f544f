//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::bitflyer_adapter::BitflyerAdapter;
use crate::adapters::cron_scheduler::CronSchedulerAdapter;
use crate::adapters::csv_log_store::{CsvLogStore, DEFAULT_DATA_DIR};
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::system_clock::SystemClock;
use crate::domain::error::PricelogError;
use crate::domain::task;
use crate::ports::config_port::ConfigPort;
use crate::ports::log_store_port::LogStorePort;
use crate::ports::scheduler_port::SchedulerPort;
use crate::ports::ticker_port::TickerPort;

pub const DEFAULT_EVERY_MINUTES: u32 = 1;

#[derive(Parser, Debug)]
#[command(name = "pricelog", about = "BTC/JPY ticker sampler with monthly logs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch the current price and append it to this month's log
    Tick {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        data_dir: Option<PathBuf>,
        /// Fetch and print the ticker without writing anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Register a cron entry that runs `tick` periodically
    SetTrigger {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        data_dir: Option<PathBuf>,
        /// Interval in minutes (1-59)
        #[arg(long)]
        every: Option<u32>,
    },
    /// Print the samples recorded for one month
    Show {
        /// Month to show, as YYYYMM
        #[arg(short, long)]
        month: String,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Tick {
            config,
            data_dir,
            dry_run,
        } => run_tick(config.as_ref(), data_dir.as_ref(), dry_run),
        Command::SetTrigger {
            config,
            data_dir,
            every,
        } => run_set_trigger(config.as_ref(), data_dir.as_ref(), every),
        Command::Show {
            month,
            config,
            data_dir,
        } => run_show(&month, config.as_ref(), data_dir.as_ref()),
    }
}

pub fn load_config(path: Option<&PathBuf>) -> Result<FileConfigAdapter, ExitCode> {
    let Some(path) = path else {
        return Ok(FileConfigAdapter::empty());
    };
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = PricelogError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

pub fn resolve_data_dir(cli_override: Option<&PathBuf>, config: &dyn ConfigPort) -> PathBuf {
    if let Some(dir) = cli_override {
        return dir.clone();
    }
    config
        .get_string("storage", "data_dir")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

pub fn resolve_every_minutes(cli_override: Option<u32>, config: &dyn ConfigPort) -> u32 {
    if let Some(every) = cli_override {
        return every;
    }
    config.get_int("trigger", "every_minutes", DEFAULT_EVERY_MINUTES as i64) as u32
}

/// Command line the cron entry will run: the current executable plus the
/// `tick` arguments this invocation was given.
pub fn tick_command(
    exe: &Path,
    config: Option<&PathBuf>,
    data_dir: Option<&PathBuf>,
) -> String {
    let mut command = format!("{} tick", exe.display());
    if let Some(config) = config {
        command.push_str(&format!(" --config {}", config.display()));
    }
    if let Some(dir) = data_dir {
        command.push_str(&format!(" --data-dir {}", dir.display()));
    }
    command
}

fn run_tick(
    config_path: Option<&PathBuf>,
    data_dir: Option<&PathBuf>,
    dry_run: bool,
) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let ticker_port = BitflyerAdapter::from_config(&config);

    if dry_run {
        let ticker = match ticker_port.fetch_ticker() {
            Ok(t) => t,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };
        println!("product_code: {}", ticker.product_code);
        println!("ltp:          {}", ticker.ltp);
        if let Some(bid) = ticker.best_bid {
            println!("best_bid:     {bid}");
        }
        if let Some(ask) = ticker.best_ask {
            println!("best_ask:     {ask}");
        }
        if let Some(mid) = ticker.mid_price() {
            println!("mid:          {mid}");
        }
        return ExitCode::SUCCESS;
    }

    let store = CsvLogStore::new(resolve_data_dir(data_dir, &config));

    match task::record_price(&ticker_port, &store, &SystemClock) {
        Ok(sample) => {
            let month = &sample.timestamp[..6];
            eprintln!(
                "Appended ({}, {}) to log {}",
                sample.timestamp, sample.price, month
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_set_trigger(
    config_path: Option<&PathBuf>,
    data_dir: Option<&PathBuf>,
    every: Option<u32>,
) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let every_minutes = resolve_every_minutes(every, &config);

    let exe = match std::env::current_exe() {
        Ok(p) => p,
        Err(e) => {
            let err = PricelogError::from(e);
            eprintln!("error: {err}");
            return (&err).into();
        }
    };
    let command = tick_command(&exe, config_path, data_dir);

    match CronSchedulerAdapter.register_interval(&command, every_minutes) {
        Ok(handle) => {
            eprintln!("Registered cron entry: {}", handle.entry);
            eprintln!("Run `crontab -e` to remove it; registering again adds another entry.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_show(
    month: &str,
    config_path: Option<&PathBuf>,
    data_dir: Option<&PathBuf>,
) -> ExitCode {
    if month.len() != 6 || !month.bytes().all(|b| b.is_ascii_digit()) {
        eprintln!("error: month must be YYYYMM, got {month:?}");
        return ExitCode::from(2);
    }

    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let store = CsvLogStore::new(resolve_data_dir(data_dir, &config));

    match store.read_rows(month) {
        Ok(rows) => {
            for (timestamp, price) in &rows {
                println!("{timestamp} {price}");
            }
            eprintln!("{} samples in log {}", rows.len(), month);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}
