//! Interactive menu shell
//!
//! Runs the operator dialogue over any line-oriented input and any output,
//! so the same loop serves the real console and in-memory tests. Malformed
//! numbers are re-prompted locally; end of input ends the session.

use std::io::{BufRead, Write};

use super::menu::{MenuChoice, MENU_TEXT};
use crate::config::Settings;
use crate::display::format_exit_quote;
use crate::error::{ParkingError, ParkingResult};
use crate::models::TicketId;
use crate::reports::RevenueReport;
use crate::storage::{Clock, SystemClock, TicketStore};

/// Whether the menu loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// The operator console
pub struct Shell<R, W, C: Clock = SystemClock> {
    store: TicketStore<C>,
    settings: Settings,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write, C: Clock> Shell<R, W, C> {
    /// Create a shell around an existing store
    pub fn new(store: TicketStore<C>, settings: Settings, input: R, output: W) -> Self {
        Self {
            store,
            settings,
            input,
            output,
        }
    }

    /// Give back the store and output, e.g. to inspect them after a run
    pub fn into_parts(self) -> (TicketStore<C>, W) {
        (self.store, self.output)
    }

    /// Show the menu until the operator chooses Exit or input ends
    pub fn run(&mut self) -> ParkingResult<()> {
        loop {
            self.prompt(MENU_TEXT)?;

            let Some(line) = self.read_line()? else {
                tracing::debug!("Input closed at main menu");
                return Ok(());
            };

            let number = match line.trim().parse::<i64>() {
                Ok(n) => n,
                Err(_) => {
                    tracing::debug!(input = %line, "Rejected menu input");
                    writeln!(self.output, "Enter a number!")?;
                    continue;
                }
            };

            let Some(choice) = MenuChoice::from_number(number) else {
                writeln!(self.output, "Invalid choice!")?;
                continue;
            };
            tracing::debug!(?choice, "Menu selection");

            let flow = match choice {
                MenuChoice::Entry => self.vehicle_entry()?,
                MenuChoice::Exit => self.vehicle_exit()?,
                MenuChoice::Report => self.daily_report()?,
                MenuChoice::Quit => Flow::Quit,
            };

            if flow == Flow::Quit {
                self.output.flush()?;
                return Ok(());
            }
        }
    }

    fn vehicle_entry(&mut self) -> ParkingResult<Flow> {
        self.prompt("\nEnter license plate: ")?;
        let Some(plate) = self.read_line()? else {
            return Ok(Flow::Quit);
        };

        let id = self.store.create_ticket(plate);
        writeln!(self.output, "Ticket issued. ID: {}", id)?;
        Ok(Flow::Continue)
    }

    fn vehicle_exit(&mut self) -> ParkingResult<Flow> {
        if !self.store.has_active_tickets() {
            writeln!(self.output, "\nNo active vehicles!")?;
            return Ok(Flow::Continue);
        }

        self.prompt("\nEnter ticket ID: ")?;
        let Some(number) = self.read_number("Invalid ID. Try again: ")? else {
            return Ok(Flow::Quit);
        };

        // Negative numbers parse fine but can never name a ticket
        let quote = match u64::try_from(number) {
            Ok(raw) => self.store.quote_exit(TicketId::new(raw)),
            Err(_) => Err(ParkingError::ticket_not_found(number)),
        };
        let quote = match quote {
            Ok(quote) => quote,
            Err(e) if e.is_not_found() => {
                writeln!(self.output, "Ticket ID not found!")?;
                return Ok(Flow::Continue);
            }
            Err(e) => return Err(e),
        };

        let summary = format_exit_quote(&quote, &self.settings.currency_symbol);
        write!(self.output, "{}", summary)?;

        self.prompt("Mark as paid? (1=Yes, 0=No): ")?;
        let Some(answer) = self.read_number("Invalid input. Try again: ")? else {
            return Ok(Flow::Quit);
        };

        self.store.complete_quote(&quote, answer == 1)?;
        writeln!(self.output, "Vehicle exited.")?;
        Ok(Flow::Continue)
    }

    fn daily_report(&mut self) -> ParkingResult<Flow> {
        let report = RevenueReport::generate(&self.store);
        write!(
            self.output,
            "\n{}",
            report.format_terminal(&self.settings.currency_symbol)
        )?;
        Ok(Flow::Continue)
    }

    /// Read integers until one parses, re-prompting with `retry` otherwise
    fn read_number(&mut self, retry: &str) -> ParkingResult<Option<i64>> {
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.trim().parse::<i64>() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => {
                    tracing::debug!(input = %line, "Rejected numeric input");
                    self.prompt(retry)?;
                }
            }
        }
    }

    /// Read one line without its terminator; `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    fn read_line(&mut self) -> ParkingResult<Option<String>> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        let line = bytes.strip_suffix(b"\n").unwrap_or(bytes.as_slice());
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        Ok(Some(String::from_utf8_lossy(line).into_owned()))
    }

    fn prompt(&mut self, text: &str) -> ParkingResult<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }
}
