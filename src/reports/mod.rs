//! Reports module for the parking tracker
//!
//! Read-only aggregations over completed tickets.

pub mod revenue;

pub use revenue::{RevenueReport, RevenueRow};
