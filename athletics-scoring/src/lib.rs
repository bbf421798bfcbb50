//! Athletics Scoring Library
//!
//! Records track and field results and converts them into points with the
//! empirical scoring formula `A * (B - P)^C` (timed) or `A * (P - B)^C`
//! (measured).
//!
//! # Architecture
//!
//! - [`Catalog`]: fixed table of events and their coefficients
//! - [`score`]: pure scoring function
//! - [`ResultStore`]: per-event, append-only result lists with best-value lookup
//! - [`persistence`]: flat `name:v1,v2,...` text file round-trip
//! - [`PerformanceSummary`]: best value and points per event plus the total
//!
//! The library does NOT:
//! - Format times or marks for display
//! - Draw charts or prompt for input
//!
//! Presentation lives in the application layer (athletics-cli).
//!
//! # Example Usage
//!
//! ```
//! use athletics_scoring::{persistence, Catalog, ResultStore};
//!
//! let mut store = ResultStore::new();
//! store.add_result("100m", 12.3).unwrap();
//! store.add_result("100m", 11.8).unwrap();
//! store.add_result("LongJump", 6.2).unwrap();
//!
//! assert_eq!(store.best("100m").unwrap(), Some(11.8));
//!
//! let text = persistence::save_to_string(&store);
//! let reloaded = persistence::load_from_str(&text, Catalog::standard()).unwrap();
//! assert_eq!(reloaded, store);
//! ```

// Public modules
pub mod catalog;
pub mod persistence;
pub mod scoring;
pub mod store;
pub mod summary;
pub mod types;

// Re-export main types for convenience
pub use catalog::{Catalog, Coefficients, EventDefinition, Scoring};
pub use scoring::{score, score_event};
pub use store::ResultStore;
pub use summary::{PerformanceSummary, SummaryEntry};
pub use types::{EventKind, Result, TrackerError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: a fresh store knows the whole catalog and holds nothing
        let store = ResultStore::new();
        assert_eq!(store.catalog().len(), Catalog::standard().len());
        assert!(store.is_empty());
    }
}
