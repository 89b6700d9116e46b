use crate::resolve::{FixedClock, TerminalPrompter};
use chrono::NaiveDate;
use std::io::Cursor;

/// A clock fixed at 2024-03-05 09:07:02.
pub(crate) fn fixed_clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(9, 7, 2)
            .unwrap(),
    )
}

/// A prompter that reads the given answers and records its prompts.
pub(crate) fn prompter(answers: &str) -> TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>> {
    TerminalPrompter::new(Cursor::new(answers.as_bytes().to_vec()), Vec::new())
}
