//! Parking ticket model
//!
//! A ticket records one vehicle's stay: it is issued on entry and finalized
//! once on exit, after which it never changes again.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::TicketId;
use super::money::Amount;
use crate::services::fee;

/// One parking session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique id, never reused
    pub id: TicketId,

    /// Plate as typed by the operator (not validated)
    pub license_plate: String,

    /// When the vehicle entered
    pub entry_time: DateTime<Utc>,

    /// When the vehicle left; `None` while the ticket is active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_time: Option<DateTime<Utc>>,

    /// Whether the charge was paid on exit
    #[serde(default)]
    pub paid: bool,
}

impl Ticket {
    /// Issue a new, active ticket
    pub fn new(id: TicketId, license_plate: impl Into<String>, entry_time: DateTime<Utc>) -> Self {
        Self {
            id,
            license_plate: license_plate.into(),
            entry_time,
            exit_time: None,
            paid: false,
        }
    }

    /// Check if the vehicle is still parked
    pub fn is_active(&self) -> bool {
        self.exit_time.is_none()
    }

    /// Elapsed hours between entry and exit, if completed
    pub fn duration_hours(&self) -> Option<f64> {
        self.exit_time
            .map(|exit| fee::elapsed_hours(self.entry_time, exit))
    }

    /// Charge for the stay, if completed
    pub fn charge(&self) -> Option<Amount> {
        self.exit_time.map(|exit| fee::charge(self.entry_time, exit))
    }

    /// Record the exit. Only the ticket store calls this, exactly once.
    pub(crate) fn complete(&mut self, exit_time: DateTime<Utc>, paid: bool) {
        debug_assert!(self.is_active(), "ticket {} completed twice", self.id);
        self.exit_time = Some(exit_time);
        self.paid = paid;
    }
}
