//! Fee calculation
//!
//! Parking is charged linearly by elapsed time at a fixed hourly rate. There
//! is no grace period, minimum, or rounding to whole hours.

use chrono::{DateTime, Utc};

use crate::models::Amount;

/// Price of one hour of parking, in currency units
pub const HOURLY_RATE: f64 = 2.50;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Elapsed time between entry and exit in fractional hours.
///
/// An exit earlier than the entry (clock skew) counts as zero elapsed time.
pub fn elapsed_hours(entry: DateTime<Utc>, exit: DateTime<Utc>) -> f64 {
    let millis = (exit - entry).num_milliseconds().max(0);
    (millis as f64 / 1000.0) / SECONDS_PER_HOUR
}

/// Charge for a stay from `entry` to `exit`
pub fn charge(entry: DateTime<Utc>, exit: DateTime<Utc>) -> Amount {
    Amount::new(elapsed_hours(entry, exit) * HOURLY_RATE)
}
