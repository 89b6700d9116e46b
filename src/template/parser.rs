//! Placeholder extraction.

use super::ParseError;
use super::argument::{Argument, ArgumentType, Properties, PropertyKind};
use log::debug;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Identifier accepted as an argument name. `\w` is Unicode-aware, so
/// names such as `título` are accepted.
const NAME_PATTERN: &str = r"\w[\w-]*";

/// Matches any placeholder; shared with the filler so both agree on spans.
pub(super) static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&placeholder_pattern(NAME_PATTERN)).expect("Invalid placeholder regex")
});

static PROPERTY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\(([^)]*)\)").expect("Invalid property regex"));

/// Build the placeholder grammar with `name` as the name sub-pattern.
///
/// Capture groups: `name`, `type`, `paren` (`:type('lit')`), `quoted`
/// (`:type 'lit'`) and `props` (the trailing `prop(value)` run).
fn placeholder_pattern(name: &str) -> String {
    format!(
        r"\{{\{{\s*(?P<name>{name})(?::(?P<type>string|list|datetime)\b(?:\s*\(\s*'(?P<paren>[^']*)'\s*\)|\s+'(?P<quoted>[^']*)')?)?(?P<props>(?:\s+\w+\([^)]*\))*)\s*\}}\}}"
    )
}

/// Parse a template into its arguments.
///
/// Arguments come back in order of the first occurrence of each name. When
/// a name is declared more than once the last declaration wins, keeping the
/// position of the first.
///
/// # Errors
///
/// Returns [`ParseError::MissingFormat`] for the first `datetime` placeholder
/// with no format. Spans that do not match the grammar are skipped, never
/// reported.
pub fn parse(template: &str) -> Result<Vec<Argument>, ParseError> {
    let mut arguments: Vec<Argument> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for caps in PLACEHOLDER_REGEX.captures_iter(template) {
        let argument = argument_from_captures(&caps)?;

        match slots.get(&argument.name) {
            Some(&slot) => {
                if arguments[slot] != argument {
                    debug!(
                        "argument '{}' redeclared; keeping the later declaration",
                        argument.name
                    );
                }
                arguments[slot] = argument;
            }
            None => {
                slots.insert(argument.name.clone(), arguments.len());
                arguments.push(argument);
            }
        }
    }

    debug!("parsed {} argument(s)", arguments.len());
    Ok(arguments)
}

fn argument_from_captures(caps: &Captures<'_>) -> Result<Argument, ParseError> {
    let name = caps["name"].to_string();
    let type_tag = caps.name("type").map_or("string", |m| m.as_str());
    let mut properties = Properties::new();

    // The inline literal is the format for datetime and the default otherwise.
    let literal = caps
        .name("paren")
        .or_else(|| caps.name("quoted"))
        .map(|m| m.as_str())
        .filter(|lit| !lit.is_empty());
    if let Some(literal) = literal {
        let kind = if type_tag == "datetime" {
            PropertyKind::Format
        } else {
            PropertyKind::Default
        };
        properties.insert(kind, literal);
    }

    if let Some(props) = caps.name("props") {
        for prop in PROPERTY_REGEX.captures_iter(props.as_str()) {
            let kind = PropertyKind::from_name(&prop[1]);
            let value = strip_quotes(&prop[2]);
            // An empty format() never clears an inline format.
            if kind == PropertyKind::Format && value.is_empty() {
                continue;
            }
            properties.insert(kind, value);
        }
    }

    let arg_type = match type_tag {
        "list" => ArgumentType::List,
        "datetime" => {
            let format = properties
                .get(&PropertyKind::Format)
                .filter(|format| !format.is_empty())
                .ok_or_else(|| ParseError::MissingFormat {
                    argument: name.clone(),
                })?;
            ArgumentType::Datetime {
                format: format.to_string(),
            }
        }
        _ => ArgumentType::String,
    };

    Ok(Argument {
        name,
        arg_type,
        properties,
    })
}

fn strip_quotes(value: &str) -> &str {
    value.trim().trim_matches(|c| c == '\'' || c == '"')
}
