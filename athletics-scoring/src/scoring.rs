//! Scoring function
//!
//! Converts a raw performance into integer points using the event's
//! coefficients. Timed events use `A * (B - P)^C`, measured events use
//! `A * (P - B)^C`, and the result is always rounded down.

use crate::catalog::{Catalog, Coefficients, EventDefinition};
use crate::types::{is_valid_performance, EventKind, Result};

/// Compute points for a performance on the given event
///
/// Returns 0 when:
/// * the event is a combined event without a scoring table
/// * the performance is worse than the formula breakpoint `B` and `C` is
///   fractional, so the power is undefined over the reals
/// * the performance itself is negative or non-finite
pub fn score(definition: &EventDefinition, performance: f64) -> i64 {
    let Some(Coefficients { a, b, c }) = definition.coefficients() else {
        log::warn!("{} is a combined event and is not scored", definition.name);
        return 0;
    };

    if !is_valid_performance(performance) {
        log::warn!(
            "Cannot score {} for {}: not a finite, non-negative value",
            performance,
            definition.name
        );
        return 0;
    }

    let p = scaled_performance(definition, performance);
    let base = match definition.kind {
        EventKind::Timed => b - p,
        EventKind::Measured => p - b,
    };

    if base < 0.0 && c.fract() != 0.0 {
        log::debug!(
            "{} performance {} is beyond the breakpoint {}, scoring 0",
            definition.name,
            performance,
            b
        );
        return 0;
    }

    (a * base.powf(c)).floor() as i64
}

/// Look up `event` in the catalog and score `performance`
pub fn score_event(catalog: &Catalog, event: &str, performance: f64) -> Result<i64> {
    let definition = catalog.lookup(event)?;
    Ok(score(definition, performance))
}

/// Performance in the unit the coefficients expect
pub fn scaled_performance(definition: &EventDefinition, performance: f64) -> f64 {
    if definition.unit_scale {
        performance * 100.0
    } else {
        performance
    }
}
