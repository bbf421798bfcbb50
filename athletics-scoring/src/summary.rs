//! Performance summary
//!
//! Best value and points for every event that has results, plus the total.

use crate::scoring;
use crate::store::{best_of, ResultStore};
use crate::types::EventKind;
use serde::Serialize;

/// One row of the summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryEntry {
    pub event: &'static str,
    pub kind: EventKind,
    /// Best recorded value (seconds or meters)
    pub best: f64,
    /// Points for `best`; 0 for unscored events
    pub points: i64,
    /// False for combined events that have no scoring table
    pub scored: bool,
    /// Number of recorded attempts
    pub attempts: usize,
}

/// Summary across all events with at least one result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceSummary {
    pub entries: Vec<SummaryEntry>,
    pub total_points: i64,
}

impl PerformanceSummary {
    /// Build a summary in catalog order
    pub fn from_store(store: &ResultStore) -> Self {
        let entries: Vec<SummaryEntry> = store
            .all_events()
            .filter_map(|(definition, values)| {
                let best = best_of(definition, values)?;
                Some(SummaryEntry {
                    event: definition.name,
                    kind: definition.kind,
                    best,
                    points: scoring::score(definition, best),
                    scored: definition.is_scored(),
                    attempts: values.len(),
                })
            })
            .collect();

        let total_points = entries.iter().map(|entry| entry.points).sum();

        Self {
            entries,
            total_points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
