//! Session settings for the parking tracker
//!
//! Nothing is read from disk or the environment: settings are assembled
//! from command-line flags at startup and live for one session.

use serde::{Deserialize, Serialize};

use crate::error::ParkingError;

/// Diagnostic log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only warnings and errors (default)
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Map a repeated `-v` count to a level
    pub fn from_verbosity(count: u8) -> Self {
        match count {
            0 => LogLevel::Warn,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }

    /// Directive string for a tracing filter
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Settings for one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Symbol printed in front of every amount
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Diagnostic log verbosity (logs go to stderr)
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            log_level: LogLevel::default(),
        }
    }
}

impl Settings {
    /// Check that the settings can be used for display
    pub fn validate(&self) -> Result<(), ParkingError> {
        if self.currency_symbol.is_empty() {
            return Err(ParkingError::Config(
                "Currency symbol cannot be empty".into(),
            ));
        }
        if self
            .currency_symbol
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(ParkingError::Config(format!(
                "Currency symbol cannot contain whitespace: {:?}",
                self.currency_symbol
            )));
        }
        Ok(())
    }

    /// Render the settings as pretty JSON
    pub fn to_json(&self) -> Result<String, ParkingError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
