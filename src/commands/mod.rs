//! Command implementations for tmplfill.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus template loading shared by every command.

mod fill;
mod inspect;

use crate::cli::Command;
use crate::error::{Result, TmplError};
use log::debug;
use std::io::Read;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Fill(args) => fill::cmd_fill(args),
        Command::Inspect(args) => inspect::cmd_inspect(args),
    }
}

/// Read a template from a file, or from standard input when `path` is `-`.
pub(crate) fn read_template(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        debug!("reading template from stdin");
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| TmplError::Io(format!("failed to read template from stdin: {}", e)))?;
        return Ok(content);
    }

    debug!("reading template from {}", path.display());
    std::fs::read_to_string(path).map_err(|e| {
        TmplError::Io(format!(
            "failed to read template '{}': {}",
            path.display(),
            e
        ))
    })
}
