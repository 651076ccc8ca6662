//! Storage layer for the parking tracker
//!
//! All state lives in memory for the life of the process. The store is
//! constructed once at startup and owned by the menu shell.

pub mod clock;
pub mod tickets;

#[cfg(test)]
pub use clock::ManualClock;
pub use clock::{Clock, SystemClock};
pub use tickets::{ExitQuote, TicketStore};
