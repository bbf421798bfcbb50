//! Event catalog
//!
//! A fixed table of event definitions with their scoring coefficients. The
//! table is built into the binary and never changes at runtime; unknown names
//! are reported as [`TrackerError::UnknownEvent`] rather than defaulted.

use crate::types::{EventKind, Result, TrackerError};
use serde::Serialize;

/// Formula parameters for `A * (B - P)^C` (timed) or `A * (P - B)^C` (measured)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// How points are obtained for an event
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Scoring {
    /// Points come from the empirical formula
    Table(Coefficients),
    /// Combined events: results can be recorded but are never scored
    Custom,
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventDefinition {
    /// Unique event name, as used in the results file
    pub name: &'static str,
    /// Whether lower (timed) or higher (measured) is better
    pub kind: EventKind,
    /// Scoring mode and coefficients
    pub scoring: Scoring,
    /// Raw meters must be converted to centimeters before scoring
    pub unit_scale: bool,
}

impl EventDefinition {
    /// Formula coefficients, or `None` for unscored combined events
    pub fn coefficients(&self) -> Option<Coefficients> {
        match self.scoring {
            Scoring::Table(coefficients) => Some(coefficients),
            Scoring::Custom => None,
        }
    }

    /// True if the event can be converted to points
    pub fn is_scored(&self) -> bool {
        matches!(self.scoring, Scoring::Table(_))
    }
}

const fn timed(name: &'static str, a: f64, b: f64, c: f64) -> EventDefinition {
    EventDefinition {
        name,
        kind: EventKind::Timed,
        scoring: Scoring::Table(Coefficients { a, b, c }),
        unit_scale: false,
    }
}

const fn jump(name: &'static str, a: f64, b: f64, c: f64) -> EventDefinition {
    EventDefinition {
        name,
        kind: EventKind::Measured,
        scoring: Scoring::Table(Coefficients { a, b, c }),
        unit_scale: true,
    }
}

const fn throw(name: &'static str, a: f64, b: f64, c: f64) -> EventDefinition {
    EventDefinition {
        name,
        kind: EventKind::Measured,
        scoring: Scoring::Table(Coefficients { a, b, c }),
        unit_scale: false,
    }
}

const fn combined(name: &'static str) -> EventDefinition {
    EventDefinition {
        name,
        kind: EventKind::Measured,
        scoring: Scoring::Custom,
        unit_scale: false,
    }
}

/// Standard event table, in display order
static STANDARD_EVENTS: [EventDefinition; 20] = [
    timed("100m", 25.4347, 18.0, 1.81),
    timed("200m", 5.8425, 38.0, 1.81),
    timed("400m", 1.53775, 82.0, 1.81),
    timed("800m", 0.13279, 345.0, 1.85),
    timed("1500m", 0.03768, 480.0, 1.85),
    timed("5000m", 0.00914, 1250.0, 1.85),
    timed("10000m", 0.00213, 3050.0, 1.85),
    timed("110mH", 5.74352, 28.5, 1.92),
    timed("400mH", 1.13757, 92.0, 1.81),
    timed("3000mSC", 0.092, 600.0, 1.85),
    jump("LongJump", 0.14354, 220.0, 1.4),
    jump("TripleJump", 0.188807, 210.0, 1.41),
    jump("HighJump", 0.8465, 75.0, 1.42),
    jump("PoleVault", 0.2797, 100.0, 1.35),
    throw("ShotPut", 51.39, 1.5, 1.05),
    throw("Discus", 12.91, 4.0, 1.1),
    throw("Javelin", 10.14, 7.0, 1.08),
    throw("HammerThrow", 13.407, 7.0, 1.05),
    combined("Decathlon"),
    combined("Heptathlon"),
];

/// Read-only view over an event table
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    events: &'static [EventDefinition],
}

impl Catalog {
    /// The built-in catalog of standard events
    pub fn standard() -> Self {
        Self {
            events: &STANDARD_EVENTS,
        }
    }

    /// Look up an event by exact name
    pub fn lookup(&self, name: &str) -> Result<&'static EventDefinition> {
        self.events
            .iter()
            .find(|def| def.name == name)
            .ok_or_else(|| TrackerError::UnknownEvent(name.to_string()))
    }

    /// Position of an event in catalog order
    pub(crate) fn index_of(&self, name: &str) -> Result<usize> {
        self.events
            .iter()
            .position(|def| def.name == name)
            .ok_or_else(|| TrackerError::UnknownEvent(name.to_string()))
    }

    /// All definitions in catalog order
    pub fn events(&self) -> &'static [EventDefinition] {
        self.events
    }

    /// Iterate over event names in catalog order
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.events.iter().map(|def| def.name)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
