//! Placeholder substitution.

use super::argument::Argument;
use super::parser::PLACEHOLDER_REGEX;
use log::debug;
use regex::Captures;
use std::collections::{HashMap, HashSet};

/// Replace every placeholder of every argument with its resolved value.
///
/// - Placeholders whose name is not among `arguments` are left as written.
/// - An argument with no entry in `values` is replaced by the empty string.
/// - Values are inserted literally; they are never scanned for placeholders.
pub fn fill(template: &str, arguments: &[Argument], values: &HashMap<String, String>) -> String {
    let known: HashSet<&str> = arguments.iter().map(|arg| arg.name.as_str()).collect();

    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures<'_>| {
            let name = &caps["name"];
            if !known.contains(name) {
                return caps[0].to_string();
            }
            match values.get(name) {
                Some(value) => value.clone(),
                None => {
                    debug!("no value for '{}', substituting empty string", name);
                    String::new()
                }
            }
        })
        .into_owned()
}
