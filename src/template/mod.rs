//! Placeholder templates: the argument model, the parser and the filler.
//!
//! # Syntax
//!
//! A placeholder is a `{{ ... }}` span of the form:
//!
//! ```text
//! {{ name[:type ['literal']] [prop(value) ...] }}
//! ```
//!
//! - `name` - identifier; repeated placeholders with the same name share one argument
//! - `type` - `string` (default), `list` or `datetime`
//! - `'literal'` - a default value, or the format for `datetime` (required there);
//!   may also be written `:type('literal')`
//! - `prop(value)` - `example`, `describe`, `default`, `format`, or any other name
//!
//! Spans that do not fit this grammar are not placeholders: they are left in
//! the rendered text untouched.
//!
//! # Pipeline
//!
//! ```text
//! text --parse--> [Argument] --(resolve)--> {name: value} --fill--> rendered text
//! ```

mod argument;
mod datetime;
mod filler;
mod parser;


pub use argument::{Argument, ArgumentType, Properties, Property, PropertyKind};
pub use datetime::format_datetime;
pub use filler::fill;
pub use parser::parse;

use thiserror::Error;

/// Errors raised while parsing a template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `datetime` placeholder has neither an inline format nor `format(...)`.
    #[error("datetime argument '{argument}' requires a format")]
    MissingFormat {
        /// Name of the offending argument.
        argument: String,
    },
}
