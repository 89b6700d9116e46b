//! Value resolution: turning parsed arguments into the values the filler
//! substitutes.
//!
//! Each argument type has one way of producing its value:
//!
//! - **string**: one line of text, falling back to the `default` property
//! - **list**: entries joined with `", "` (no entries renders as `""`)
//! - **datetime**: the clock's current time rendered with the argument's
//!   format; never asked for
//!
//! Values preset from the command line or config skip prompting entirely.

mod clock;
mod prompt;

pub use clock::{Clock, FixedClock, SystemClock};
pub use prompt::TerminalPrompter;

use crate::error::Result;
use crate::template::{Argument, ArgumentType, format_datetime};
use log::debug;
use std::collections::{BTreeMap, HashMap};

/// Separator placed between list entries.
pub const LIST_SEPARATOR: &str = ", ";

/// Somewhere answers for string and list arguments come from.
pub trait ValueSource {
    /// Ask for a single line of text.
    fn read_line(&mut self, argument: &Argument) -> Result<String>;

    /// Ask for list entries.
    fn read_list(&mut self, argument: &Argument) -> Result<Vec<String>>;
}

/// A source that answers nothing, leaving every unset argument to its
/// default (or empty).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPrompt;

impl ValueSource for NoPrompt {
    fn read_line(&mut self, _argument: &Argument) -> Result<String> {
        Ok(String::new())
    }

    fn read_list(&mut self, _argument: &Argument) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}

/// Join list entries the way list placeholders render.
pub fn join_list<I, S>(entries: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .map(|entry| entry.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

/// Split a comma separated preset into trimmed, non-empty entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build the value map for `arguments`, one entry per argument.
///
/// `presets` take precedence over `source` for string and list arguments.
/// Datetime arguments always come from `clock`.
pub fn resolve_values(
    arguments: &[Argument],
    presets: &BTreeMap<String, String>,
    source: &mut dyn ValueSource,
    clock: &dyn Clock,
) -> Result<HashMap<String, String>> {
    let mut values = HashMap::with_capacity(arguments.len());

    for argument in arguments {
        let preset = presets.get(&argument.name).map(String::as_str);
        let value = resolve_value(argument, preset, source, clock)?;
        debug!("resolved '{}' ({})", argument.name, argument.arg_type);
        values.insert(argument.name.clone(), value);
    }

    Ok(values)
}

fn resolve_value(
    argument: &Argument,
    preset: Option<&str>,
    source: &mut dyn ValueSource,
    clock: &dyn Clock,
) -> Result<String> {
    if let ArgumentType::Datetime { format } = &argument.arg_type {
        return Ok(format_datetime(format, clock.now()));
    }

    if let Some(preset) = preset {
        return Ok(match argument.arg_type {
            ArgumentType::List => join_list(split_list(preset)),
            _ => preset.to_string(),
        });
    }

    let value = match argument.arg_type {
        ArgumentType::List => join_list(source.read_list(argument)?),
        _ => source.read_line(argument)?.trim().to_string(),
    };

    if value.is_empty()
        && let Some(default) = argument.default_value()
    {
        return Ok(default.to_string());
    }

    Ok(value)
}
