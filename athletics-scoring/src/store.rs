//! Result store
//!
//! Holds the ordered list of recorded performances for every catalog event.
//! Sequences are append-only and kept in entry order; the store itself is a
//! plain owned value with no interior mutability.

use crate::catalog::{Catalog, EventDefinition};
use crate::scoring;
use crate::types::{is_valid_performance, Result, TrackerError};

/// Recorded results for every event in a catalog
#[derive(Debug, Clone)]
pub struct ResultStore {
    catalog: Catalog,
    /// One sequence per catalog event, indexed in catalog order
    results: Vec<Vec<f64>>,
}

impl ResultStore {
    /// Create an empty store over the standard catalog
    pub fn new() -> Self {
        Self::with_catalog(Catalog::standard())
    }

    /// Create an empty store with one sequence per event in `catalog`
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            results: vec![Vec::new(); catalog.len()],
        }
    }

    /// Catalog this store was built over
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Append a performance to an event's sequence
    ///
    /// The store is left untouched if the event is unknown or the value is
    /// negative or non-finite. Duplicate values are kept.
    pub fn add_result(&mut self, event: &str, value: f64) -> Result<()> {
        let index = self.catalog.index_of(event)?;

        if !is_valid_performance(value) {
            return Err(TrackerError::InvalidValue {
                event: event.to_string(),
                value,
            });
        }

        self.results[index].push(value);
        log::debug!("Recorded {} for {} (#{})", value, event, self.results[index].len());
        Ok(())
    }

    /// Most favourable recorded value, or `None` if nothing is recorded yet
    ///
    /// Timed events return the minimum, measured events the maximum.
    pub fn best(&self, event: &str) -> Result<Option<f64>> {
        let index = self.catalog.index_of(event)?;
        let definition = &self.catalog.events()[index];
        Ok(best_of(definition, &self.results[index]))
    }

    /// Best value together with its points
    pub fn best_score(&self, event: &str) -> Result<Option<(f64, i64)>> {
        let definition = self.catalog.lookup(event)?;
        Ok(self
            .best(event)?
            .map(|best| (best, scoring::score(definition, best))))
    }

    /// Recorded values for one event, in entry order
    pub fn results(&self, event: &str) -> Result<&[f64]> {
        let index = self.catalog.index_of(event)?;
        Ok(&self.results[index])
    }

    /// Snapshot of every event and its values, in catalog order
    pub fn all_events(&self) -> impl Iterator<Item = (&'static EventDefinition, &[f64])> + '_ {
        self.catalog
            .events()
            .iter()
            .zip(self.results.iter())
            .map(|(definition, values)| (definition, values.as_slice()))
    }

    /// Number of values recorded across all events
    pub fn total_results(&self) -> usize {
        self.results.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_results() == 0
    }
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ResultStore {
    /// Stores are equal when they hold the same values for the same events
    fn eq(&self, other: &Self) -> bool {
        self.all_events()
            .filter(|(_, values)| !values.is_empty())
            .map(|(definition, values)| (definition.name, values))
            .eq(other
                .all_events()
                .filter(|(_, values)| !values.is_empty())
                .map(|(definition, values)| (definition.name, values)))
    }
}

pub(crate) fn best_of(definition: &EventDefinition, values: &[f64]) -> Option<f64> {
    values
        .iter()
        .copied()
        .reduce(|best, value| definition.kind.better(best, value))
}
