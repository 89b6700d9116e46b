//! CLI argument parsing for tmplfill.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// Tmplfill: fill text templates with typed `{{ placeholders }}`.
///
/// String and list placeholders are prompted for on the terminal;
/// datetime placeholders are rendered from the current time.
#[derive(Parser, Debug)]
#[command(name = "tmplfill")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: LevelFilter,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for tmplfill.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fill a template and write the result.
    ///
    /// Prompts for every string and list placeholder not given with --set,
    /// computes datetime placeholders, and writes the rendered text.
    Fill(FillArgs),

    /// List the arguments a template declares.
    Inspect(InspectArgs),
}

/// Arguments for the `fill` command.
#[derive(Parser, Debug)]
pub struct FillArgs {
    /// Template file to read ("-" reads standard input).
    pub template: PathBuf,

    /// Where to write the result (default: config `default_output`).
    pub output: Option<PathBuf>,

    /// Print the result to standard output instead of writing a file.
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Preset a value, skipping its prompt (repeatable).
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(String, String)>,

    /// Never prompt; unset arguments use their default or become empty.
    #[arg(long)]
    pub no_prompt: bool,

    /// Render datetime placeholders at this time ("YYYY-MM-DD HH:MM:SS").
    #[arg(long)]
    pub now: Option<String>,

    /// Config file (default: ./.tmplfill.yaml when present).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `inspect` command.
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Template file to read ("-" reads standard input).
    pub template: PathBuf,

    /// Print arguments as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Parse a `NAME=VALUE` pair. The value may itself contain `=`.
fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", raw))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing name in '{}'", raw));
    }

    Ok((name.to_string(), value.to_string()))
}
