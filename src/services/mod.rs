//! Service layer for the parking tracker
//!
//! Stateless business rules used by the store and the reports.

pub mod fee;

pub use fee::{charge, elapsed_hours, HOURLY_RATE};
