//! Configuration module for the parking tracker
//!
//! Settings come from command-line flags only; there are no config files or
//! environment variables.

pub mod settings;

pub use settings::{LogLevel, Settings};
