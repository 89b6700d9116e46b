//! Interactive prompting on a terminal (or any reader/writer pair).

use super::ValueSource;
use crate::error::{Result, TmplError};
use crate::template::Argument;
use console::style;
use std::io::{self, BufRead, Stderr, StdinLock, Write};

/// Prompts for values line by line.
///
/// The prompt is `Enter <name>`, with `(e.g: <example>)` appended when the
/// argument has an example and the description printed dimmed below it.
/// Input lines follow a `$ ` marker; list entries end at an empty line.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<StdinLock<'static>, Stderr> {
    /// Prompt on stderr and read from stdin, leaving stdout for output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompter, returning what was written to its output.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn write_prompt(&mut self, argument: &Argument) -> Result<()> {
        let mut header = format!("{} {}", style("Enter").green().for_stderr(), argument.name);
        if let Some(example) = argument.example() {
            header.push_str(&format!(" (e.g: {})", example));
        }
        writeln!(self.output, "{}", header).map_err(write_error)?;

        if let Some(description) = argument.description() {
            writeln!(self.output, "{}", style(description).dim().for_stderr())
                .map_err(write_error)?;
        }

        self.write_marker()
    }

    fn write_marker(&mut self) -> Result<()> {
        write!(self.output, "$ ").map_err(write_error)?;
        self.output.flush().map_err(write_error)
    }

    /// Read one line; end of input reads as an empty line.
    fn next_line(&mut self) -> Result<String> {
        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .map_err(|e| TmplError::Io(format!("failed to read input: {}", e)))?;
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> ValueSource for TerminalPrompter<R, W> {
    fn read_line(&mut self, argument: &Argument) -> Result<String> {
        self.write_prompt(argument)?;
        self.next_line()
    }

    fn read_list(&mut self, argument: &Argument) -> Result<Vec<String>> {
        self.write_prompt(argument)?;

        let mut entries = Vec::new();
        loop {
            let entry = self.next_line()?;
            if entry.is_empty() {
                break;
            }
            entries.push(entry);
            self.write_marker()?;
        }
        Ok(entries)
    }
}

fn write_error(e: io::Error) -> TmplError {
    TmplError::Io(format!("failed to write prompt: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::parse;
    use crate::test_support::prompter;

    fn output_of<R, W: AsRef<[u8]>>(p: TerminalPrompter<R, W>) -> String {
        console::strip_ansi_codes(&String::from_utf8_lossy(p.output.as_ref())).into_owned()
    }

    #[test]
    fn prompt_shows_name_and_marker() {
        let arg = &parse("{{ title }}").unwrap()[0];
        let mut p = prompter("Hello\n");
        assert_eq!(p.read_line(arg).unwrap(), "Hello");
        assert_eq!(output_of(p), "Enter title\n$ ");
    }

    #[test]
    fn prompt_shows_example_and_description() {
        let arg = &parse("{{ name example('Jane') describe('Full name') }}").unwrap()[0];
        let mut p = prompter("Ada\n");
        p.read_line(arg).unwrap();
        assert_eq!(output_of(p), "Enter name (e.g: Jane)\nFull name\n$ ");
    }

    #[test]
    fn list_prompts_marker_per_entry() {
        let arg = &parse("{{ tags:list }}").unwrap()[0];
        let mut p = prompter("a\nb\n\n");
        assert_eq!(p.read_list(arg).unwrap(), vec!["a", "b"]);
        assert_eq!(output_of(p), "Enter tags\n$ $ $ ");
    }

    #[test]
    fn end_of_input_reads_as_empty() {
        let arg = &parse("{{ tags:list }}").unwrap()[0];
        let mut p = prompter("only");
        assert_eq!(p.read_list(arg).unwrap(), vec!["only"]);
        assert_eq!(p.read_line(arg).unwrap(), "");
    }
}
