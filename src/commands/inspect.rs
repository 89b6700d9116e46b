//! Implementation of the `tmplfill inspect` command.
//!
//! Shows every argument a template declares, in the order they first
//! appear, with their types and properties.

use super::read_template;
use crate::cli::InspectArgs;
use crate::error::{Result, TmplError};
use crate::template::{self, Argument};

/// Execute the `tmplfill inspect` command.
pub fn cmd_inspect(args: InspectArgs) -> Result<()> {
    let text = read_template(&args.template)?;
    let arguments = template::parse(&text)?;

    if args.json {
        let json = serde_json::to_string_pretty(&arguments)
            .map_err(|e| TmplError::UserError(format!("failed to serialize arguments: {}", e)))?;
        println!("{}", json);
    } else {
        print!("{}", format_arguments(&arguments));
    }

    Ok(())
}

fn format_arguments(arguments: &[Argument]) -> String {
    if arguments.is_empty() {
        return "No arguments.\n".to_string();
    }

    let mut out = format!("Arguments ({}):\n", arguments.len());
    for argument in arguments {
        out.push_str(&format!("  {} ({})\n", argument.name, argument.arg_type));
        for property in &argument.properties {
            let marker = if property.kind.is_known() { "" } else { " [unknown]" };
            out.push_str(&format!(
                "    {}: {}{}\n",
                property.name(),
                property.value,
                marker
            ));
        }
    }
    out
}
