//! Display formatting for terminal output
//!
//! Provides utilities for formatting tickets and report values for the
//! console.

pub mod report;
pub mod ticket;

pub use report::{format_hours, format_paid, right_align};
pub use ticket::format_exit_quote;
