//! CLI shell
//!
//! This module contains the interactive operator menu, bridging console
//! input with the ticket store and the revenue report.

pub mod menu;
pub mod shell;

pub use menu::{MenuChoice, MENU_TEXT};
pub use shell::Shell;
