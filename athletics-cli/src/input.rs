//! Performance input parsing
//!
//! Timed events accept either plain seconds (`11.84`) or `minutes:seconds`
//! (`3:45.20`). Measured events accept meters only. Range checks are left to
//! the result store.

use anyhow::{bail, Context, Result};
use athletics_scoring::EventKind;

/// Parse a performance typed on the command line into seconds or meters
pub fn parse_performance(text: &str, kind: EventKind) -> Result<f64> {
    let text = text.trim();

    match (kind, text.split_once(':')) {
        (EventKind::Timed, Some((minutes, seconds))) => {
            let minutes: u32 = minutes
                .trim()
                .parse()
                .with_context(|| format!("Invalid minutes in '{}'", text))?;
            let seconds: f64 = seconds
                .trim()
                .parse()
                .with_context(|| format!("Invalid seconds in '{}'", text))?;
            if !(0.0..60.0).contains(&seconds) {
                bail!("Seconds in '{}' must be at least 0 and below 60", text);
            }
            Ok(f64::from(minutes) * 60.0 + seconds)
        }
        (EventKind::Measured, Some(_)) => {
            bail!("'{}' looks like a time, but this event is measured in meters", text)
        }
        (_, None) => text
            .parse::<f64>()
            .with_context(|| format!("Please enter a valid number for the result, got '{}'", text)),
    }
}
