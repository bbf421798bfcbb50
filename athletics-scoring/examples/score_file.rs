//! Standalone results file scorer
//!
//! Loads a results file, prints every event's attempts, best value and
//! points, and the season total.
//!
//! Usage:
//!   score_file <results.txt>
//!
//! Example:
//!   cargo run --example score_file -- results.txt

use athletics_scoring::{persistence, score, Catalog, TrackerError};
use std::env;
use std::path::PathBuf;

fn main() {
    env_logger::init();

    let Some(path) = env::args().nth(1).map(PathBuf::from) else {
        eprintln!("Usage: score_file <results.txt>");
        std::process::exit(2);
    };

    let store = match persistence::load_file(&path, Catalog::standard()) {
        Ok(store) => store,
        Err(TrackerError::CorruptRecord { line, event, reason }) => {
            eprintln!("{:?} line {}: {} ({})", path, line, reason, event.unwrap_or_default());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to load {:?}: {}", path, e);
            std::process::exit(1);
        }
    };

    println!("=== {} results in {:?} ===", store.total_results(), path);

    let mut total = 0;
    for (definition, values) in store.all_events() {
        if values.is_empty() {
            continue;
        }
        println!("\n{} ({}, {})", definition.name, definition.kind, definition.kind.unit());
        for (attempt, value) in values.iter().enumerate() {
            println!("  #{:<3} {:>10.2}  {:>5} pts", attempt + 1, value, score(definition, *value));
        }

        if let Ok(Some((best, points))) = store.best_score(definition.name) {
            total += points;
            println!("  best {:.2} -> {} pts", best, points);
        }
    }

    println!("\nTotal Points: {}", total);
}
