//! Sources of "now" for datetime arguments.

use crate::error::{Result, TmplError};
use chrono::{Local, NaiveDateTime, Utc};

/// Format accepted by [`FixedClock::parse`].
pub const FIXED_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock time, local or UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    utc: bool,
}

impl SystemClock {
    pub fn new(utc: bool) -> Self {
        Self { utc }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        if self.utc {
            Utc::now().naive_utc()
        } else {
            Local::now().naive_local()
        }
    }
}

/// A clock stopped at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Parse a `YYYY-MM-DD HH:MM:SS` timestamp.
    pub fn parse(raw: &str) -> Result<Self> {
        NaiveDateTime::parse_from_str(raw.trim(), FIXED_TIME_FORMAT)
            .map(FixedClock)
            .map_err(|e| {
                TmplError::UserError(format!(
                    "invalid --now value '{}': {} (expected YYYY-MM-DD HH:MM:SS)",
                    raw, e
                ))
            })
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
