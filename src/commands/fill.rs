//! Implementation of the `tmplfill fill` command.
//!
//! Parses the template, resolves a value for every argument (presets,
//! prompts, clock), fills the template and writes the result.

use super::read_template;
use crate::cli::FillArgs;
use crate::config::Config;
use crate::error::{Result, TmplError};
use crate::fs::atomic_write_file;
use crate::resolve::{
    Clock, FixedClock, NoPrompt, SystemClock, TerminalPrompter, ValueSource, resolve_values,
};
use crate::template;
use log::info;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Execute the `tmplfill fill` command.
pub fn cmd_fill(args: FillArgs) -> Result<()> {
    let cwd = std::env::current_dir()
        .map_err(|e| TmplError::Io(format!("failed to read current directory: {}", e)))?;
    let config = Config::discover(args.config.as_deref(), &cwd)?;

    check_prompt_input(&args.template, args.no_prompt)?;
    let text = read_template(&args.template)?;

    // Config values first so `--set` wins.
    let mut presets = config.values.clone();
    presets.extend(args.set);

    let clock: Box<dyn Clock> = match &args.now {
        Some(now) => Box::new(FixedClock::parse(now)?),
        None => Box::new(SystemClock::new(config.use_utc)),
    };

    let rendered = if args.no_prompt {
        render(&text, &presets, &mut NoPrompt, clock.as_ref())?
    } else {
        render(&text, &presets, &mut TerminalPrompter::stdio(), clock.as_ref())?
    };

    if args.stdout {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(rendered.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| TmplError::Io(format!("failed to write to stdout: {}", e)))?;
        return Ok(());
    }

    let output = output_path(args.output, &config);
    write_rendered(&output, &rendered)?;
    eprintln!();
    eprintln!("Final output written to {}", output.display());

    Ok(())
}

/// Refuse to prompt when the template itself is read from stdin.
///
/// Stdin is at end of input once the template has been read, so every
/// prompt would be answered with nothing.
fn check_prompt_input(template: &Path, no_prompt: bool) -> Result<()> {
    if template == Path::new("-") && !no_prompt {
        return Err(TmplError::UserError(
            "cannot prompt for values when the template is read from stdin.\n\n\
             Pass values with --set NAME=VALUE and add --no-prompt, or give the \
             template as a file path."
                .to_string(),
        ));
    }
    Ok(())
}

/// Parse, resolve and fill `text` in one pass.
pub(crate) fn render(
    text: &str,
    presets: &BTreeMap<String, String>,
    source: &mut dyn ValueSource,
    clock: &dyn Clock,
) -> Result<String> {
    let arguments = template::parse(text)?;
    let values = resolve_values(&arguments, presets, source, clock)?;
    Ok(template::fill(text, &arguments, &values))
}

fn output_path(explicit: Option<PathBuf>, config: &Config) -> PathBuf {
    explicit.unwrap_or_else(|| PathBuf::from(&config.default_output))
}

fn write_rendered(path: &Path, rendered: &str) -> Result<()> {
    atomic_write_file(path, rendered)?;
    info!("wrote {} bytes to {}", rendered.len(), path.display());
    Ok(())
}
