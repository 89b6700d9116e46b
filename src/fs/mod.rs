//! Filesystem utilities for tmplfill.
//!
//! Rendered output is written atomically so an interrupted run never leaves
//! a half-written document behind.

pub mod atomic;

pub use atomic::{atomic_write, atomic_write_file};
