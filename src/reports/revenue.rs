//! Revenue Report
//!
//! Lists every completed ticket in completion order and totals the charges
//! that were actually paid.

use crate::display::{format_hours, format_paid, right_align};
use crate::models::{Amount, TicketId};
use crate::storage::{Clock, TicketStore};

const TICKET_WIDTH: usize = 8;
const LICENSE_WIDTH: usize = 12;
const HOURS_WIDTH: usize = 10;
const PAID_WIDTH: usize = 8;
const AMOUNT_WIDTH: usize = 10;

/// One completed ticket in the report
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueRow {
    /// The ticket's own id
    pub ticket_id: TicketId,
    pub license_plate: String,
    /// Elapsed hours, full precision
    pub hours: f64,
    pub paid: bool,
    /// Computed charge, whether or not it was paid
    pub charge: Amount,
}

/// Revenue Report
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueReport {
    /// Rows in completion order
    pub rows: Vec<RevenueRow>,
    /// Sum of charges over paid tickets only
    pub total_revenue: Amount,
}

impl RevenueReport {
    /// Generate the report from the store's completed tickets
    pub fn generate<C: Clock>(store: &TicketStore<C>) -> Self {
        let rows: Vec<RevenueRow> = store
            .completed_tickets()
            .iter()
            .map(|ticket| RevenueRow {
                ticket_id: ticket.id,
                license_plate: ticket.license_plate.clone(),
                hours: ticket.duration_hours().unwrap_or_default(),
                paid: ticket.paid,
                charge: ticket.charge().unwrap_or_default(),
            })
            .collect();

        let total_revenue = rows.iter().filter(|r| r.paid).map(|r| r.charge).sum();

        Self {
            rows,
            total_revenue,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("PARKING REPORT\n");
        output.push_str(&format!(
            "{}{}{}{}{}\n",
            right_align("Ticket", TICKET_WIDTH),
            right_align("License", LICENSE_WIDTH),
            right_align("Hours", HOURS_WIDTH),
            right_align("Paid", PAID_WIDTH),
            right_align("Amount", AMOUNT_WIDTH),
        ));

        for row in &self.rows {
            output.push_str(&format!(
                "{}{}{}{}{}\n",
                right_align(&row.ticket_id.to_string(), TICKET_WIDTH),
                right_align(&row.license_plate, LICENSE_WIDTH),
                right_align(&format_hours(row.hours), HOURS_WIDTH),
                right_align(format_paid(row.paid), PAID_WIDTH),
                right_align(&row.charge.format_with_symbol(currency_symbol), AMOUNT_WIDTH),
            ));
        }

        output.push('\n');
        output.push_str(&format!(
            "TOTAL REVENUE: {}\n",
            self.total_revenue.format_with_symbol(currency_symbol)
        ));

        output
    }
}
