//! Exit code constants for the tmplfill CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable config)
//! - 2: Template parse failure (e.g. datetime placeholder without a format)
//! - 3: I/O failure (reading the template, prompting, writing the output)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// The template could not be parsed.
pub const PARSE_FAILURE: i32 = 2;

/// Reading input or writing output failed.
pub const IO_FAILURE: i32 = 3;
