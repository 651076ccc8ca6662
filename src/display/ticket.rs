//! Ticket display formatting
//!
//! Formats what the operator sees when a vehicle leaves.

use super::report::format_hours;
use crate::storage::ExitQuote;

/// Format the exit summary shown before asking for payment
pub fn format_exit_quote(quote: &ExitQuote, currency_symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("License: {}\n", quote.license_plate));
    output.push_str(&format!(
        "Parking duration: {} hours\n",
        format_hours(quote.hours)
    ));
    output.push_str(&format!(
        "Amount due: {}\n",
        quote.charge.format_with_symbol(currency_symbol)
    ));
    output
}
