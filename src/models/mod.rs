//! Core data models for the parking tracker
//!
//! This module contains the data structures that represent the parking
//! domain: tickets, their ids, and charged amounts.

pub mod ids;
pub mod money;
pub mod ticket;

pub use ids::TicketId;
pub use money::Amount;
pub use ticket::Ticket;
