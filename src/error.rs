//! Error types for the tmplfill CLI.
//!
//! Uses thiserror for derive macros. Parse failures come from the template
//! core and are wrapped here so every failure maps to one exit code.

use crate::exit_codes;
use crate::template::ParseError;
use thiserror::Error;

/// Main error type for tmplfill operations.
#[derive(Error, Debug)]
pub enum TmplError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// The template could not be parsed.
    #[error("Template error: {0}")]
    Parse(#[from] ParseError),

    /// Reading or writing a file or terminal failed.
    #[error("I/O failed: {0}")]
    Io(String),
}

impl TmplError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            TmplError::UserError(_) => exit_codes::USER_ERROR,
            TmplError::Parse(_) => exit_codes::PARSE_FAILURE,
            TmplError::Io(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for tmplfill operations.
pub type Result<T> = std::result::Result<T, TmplError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = TmplError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn parse_error_has_correct_exit_code() {
        let err = TmplError::from(ParseError::MissingFormat {
            argument: "created".to_string(),
        });
        assert_eq!(err.exit_code(), exit_codes::PARSE_FAILURE);
    }

    #[test]
    fn io_error_has_correct_exit_code() {
        let err = TmplError::Io("disk full".to_string());
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = TmplError::from(ParseError::MissingFormat {
            argument: "created".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Template error: datetime argument 'created' requires a format"
        );

        let err = TmplError::Io("disk full".to_string());
        assert_eq!(err.to_string(), "I/O failed: disk full");
    }
}
