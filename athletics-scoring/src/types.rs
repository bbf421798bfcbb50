//! Core types for the athletics scoring library
//!
//! This module defines the error taxonomy shared by every component and the
//! event kind that decides which direction counts as "better".

use serde::Serialize;
use std::fmt;

/// Result type for library operations
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Errors that can occur while recording, scoring or persisting results
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("Unknown event: {0}")]
    UnknownEvent(String),

    #[error("Invalid value for {event}: {value} (expected a finite, non-negative number)")]
    InvalidValue { event: String, value: f64 },

    #[error("Corrupt record on line {line}{}: {reason}", event_suffix(.event))]
    CorruptRecord {
        /// 1-based line number in the persisted file
        line: usize,
        /// Event name on that line, if it could be read
        event: Option<String>,
        /// What failed to parse
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

fn event_suffix(event: &Option<String>) -> String {
    match event {
        Some(name) => format!(" ({})", name),
        None => String::new(),
    }
}

/// How an event is judged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventKind {
    /// Scored by elapsed time in seconds; lower is better
    Timed,
    /// Scored by distance or height in meters; higher is better
    Measured,
}

impl EventKind {
    /// Unit the core expects for raw values of this kind
    pub fn unit(&self) -> &'static str {
        match self {
            EventKind::Timed => "seconds",
            EventKind::Measured => "meters",
        }
    }

    /// Pick the more favourable of two performances
    pub fn better(&self, a: f64, b: f64) -> f64 {
        match self {
            EventKind::Timed => a.min(b),
            EventKind::Measured => a.max(b),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::Timed => "Timed",
            EventKind::Measured => "Measured",
        };
        f.pad(name)
    }
}

/// True if `value` may be stored as a performance
pub fn is_valid_performance(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
