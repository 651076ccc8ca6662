//! In-memory ticket store
//!
//! Holds the active tickets keyed by id and the completed tickets in the
//! order they were completed. Ids come from a counter that only moves
//! forward, so they are never reused even after a ticket completes.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::clock::{Clock, SystemClock};
use crate::error::{ParkingError, ParkingResult};
use crate::models::{Amount, Ticket, TicketId};
use crate::services::fee;

/// What a vehicle owes if it leaves at `exit_time`
#[derive(Debug, Clone, PartialEq)]
pub struct ExitQuote {
    pub id: TicketId,
    pub license_plate: String,
    pub entry_time: DateTime<Utc>,
    pub exit_time: DateTime<Utc>,
    /// Elapsed hours at `exit_time`
    pub hours: f64,
    pub charge: Amount,
}

/// Authoritative holder of ticket state
pub struct TicketStore<C: Clock = SystemClock> {
    active: HashMap<TicketId, Ticket>,
    completed: Vec<Ticket>,
    next_id: TicketId,
    clock: C,
}

impl TicketStore<SystemClock> {
    /// Create an empty store on the wall clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TicketStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TicketStore<C> {
    /// Create an empty store reading time from `clock`
    pub fn with_clock(clock: C) -> Self {
        Self {
            active: HashMap::new(),
            completed: Vec::new(),
            next_id: TicketId::FIRST,
            clock,
        }
    }

    /// The store's time source
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Issue a ticket for a vehicle entering now. Always succeeds.
    pub fn create_ticket(&mut self, license_plate: impl Into<String>) -> TicketId {
        let id = self.next_id;
        self.next_id = id.next();

        let ticket = Ticket::new(id, license_plate, self.clock.now());
        tracing::info!(ticket_id = %id, plate = %ticket.license_plate, "Ticket issued");
        self.active.insert(id, ticket);

        id
    }

    /// Look up an active ticket
    pub fn get_active(&self, id: TicketId) -> Option<&Ticket> {
        self.active.get(&id)
    }

    /// Price an exit happening now without changing any state
    pub fn quote_exit(&self, id: TicketId) -> ParkingResult<ExitQuote> {
        let ticket = self
            .active
            .get(&id)
            .ok_or_else(|| ParkingError::ticket_not_found(id))?;

        let exit_time = self.clock.now();
        Ok(ExitQuote {
            id,
            license_plate: ticket.license_plate.clone(),
            entry_time: ticket.entry_time,
            exit_time,
            hours: fee::elapsed_hours(ticket.entry_time, exit_time),
            charge: fee::charge(ticket.entry_time, exit_time),
        })
    }

    /// Finalize a quoted exit at the quote's exit time.
    ///
    /// Moves the ticket from the active set to the end of the completed set.
    pub fn complete_quote(&mut self, quote: &ExitQuote, paid: bool) -> ParkingResult<&Ticket> {
        self.finish(quote.id, quote.exit_time, paid)
    }

    /// Finalize the exit of an active ticket now.
    ///
    /// Fails with `NotFound` if `id` is not active; nothing changes in that case.
    pub fn complete_ticket(&mut self, id: TicketId, paid: bool) -> ParkingResult<&Ticket> {
        let now = self.clock.now();
        self.finish(id, now, paid)
    }

    fn finish(
        &mut self,
        id: TicketId,
        exit_time: DateTime<Utc>,
        paid: bool,
    ) -> ParkingResult<&Ticket> {
        let Some(mut ticket) = self.active.remove(&id) else {
            tracing::warn!(ticket_id = %id, "Exit requested for unknown ticket");
            return Err(ParkingError::ticket_not_found(id));
        };

        ticket.complete(exit_time, paid);
        tracing::info!(
            ticket_id = %id,
            plate = %ticket.license_plate,
            paid,
            charge = ticket.charge().unwrap_or_default().value(),
            "Vehicle exited"
        );

        let index = self.completed.len();
        self.completed.push(ticket);
        Ok(&self.completed[index])
    }

    /// Check if any vehicle is currently parked
    pub fn has_active_tickets(&self) -> bool {
        !self.active.is_empty()
    }

    /// Number of vehicles currently parked
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Completed tickets in completion order
    pub fn completed_tickets(&self) -> &[Ticket] {
        &self.completed
    }
}
