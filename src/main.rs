//! Tmplfill: fill text templates with typed placeholders.
//!
//! This is the main entry point for the `tmplfill` CLI. It parses arguments,
//! sets up logging, dispatches to the command handler, and maps errors to
//! exit codes.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod resolve;
pub mod template;

#[cfg(test)]
mod test_support;

use cli::Cli;
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.log_level);

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn init_logging(level: LevelFilter) {
    let mut log_config = ConfigBuilder::new();
    log_config.set_time_level(LevelFilter::Off);
    log_config.set_location_level(LevelFilter::Off);

    // Logs go to stderr so `fill --stdout` output stays clean.
    if let Err(e) = TermLogger::init(
        level,
        log_config.build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Warning: failed to initialise logging: {}", e);
    }
}
