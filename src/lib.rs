//! Parking - terminal-based parking ticket tracker
//!
//! This library provides the core functionality for tracking vehicles that
//! enter and leave a parking facility, charging them by the hour, and
//! reporting the revenue collected.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Command-line driven settings
//! - `error`: Custom error types
//! - `models`: Core data models (tickets, ids, amounts)
//! - `storage`: In-memory ticket store and clock
//! - `services`: Fee calculation
//! - `reports`: Revenue report
//! - `display`: Text formatting helpers
//! - `cli`: Interactive menu shell
//!
//! # Example
//!
//! ```rust
//! use parking::storage::TicketStore;
//!
//! let mut store = TicketStore::new();
//! let id = store.create_ticket("ABC123");
//! let ticket = store.complete_ticket(id, true).unwrap();
//! assert!(ticket.paid);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ParkingError, ParkingResult};
