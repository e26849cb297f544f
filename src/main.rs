use clap::Parser;
use pricelog::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
