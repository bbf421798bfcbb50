//! Flat-file persistence for the result store
//!
//! One line per event with at least one result:
//!
//! ```text
//! 100m:12.3,11.8,12
//! LongJump:5.1,5.45
//! ```
//!
//! Loading is all-or-nothing: the first bad line fails the whole load and no
//! partially filled store is returned.

use crate::catalog::Catalog;
use crate::store::ResultStore;
use crate::types::{is_valid_performance, Result, TrackerError};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Write every event with results to `writer`
pub fn save<W: Write>(store: &ResultStore, mut writer: W) -> Result<()> {
    for (definition, values) in store.all_events() {
        if values.is_empty() {
            continue;
        }
        let joined = values
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(",");
        writeln!(writer, "{}:{}", definition.name, joined)?;
    }
    writer.flush()?;
    Ok(())
}

/// Serialize the store to a string
pub fn save_to_string(store: &ResultStore) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail
    let _ = save(store, &mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Replace the file at `path` with the store contents
pub fn save_file(store: &ResultStore, path: &Path) -> Result<()> {
    log::info!("Saving {} results to {:?}", store.total_results(), path);
    let mut file = io::BufWriter::new(fs::File::create(path)?);
    save(store, &mut file)?;
    Ok(())
}

/// Read a store from `reader`, validating every line against `catalog`
pub fn load<R: BufRead>(mut reader: R, catalog: Catalog) -> Result<ResultStore> {
    let mut store = ResultStore::with_catalog(catalog);
    let mut buffer = Vec::new();
    let mut line_number = 0;

    loop {
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        line_number += 1;

        let line = std::str::from_utf8(&buffer).map_err(|e| TrackerError::CorruptRecord {
            line: line_number,
            event: None,
            reason: format!("invalid UTF-8: {}", e),
        })?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        load_line(&mut store, line, line_number)?;
    }

    log::debug!("Loaded {} results", store.total_results());
    Ok(store)
}

/// Parse a store from a string
pub fn load_from_str(content: &str, catalog: Catalog) -> Result<ResultStore> {
    load(content.as_bytes(), catalog)
}

/// Load the file at `path`; a missing file gives an empty store
pub fn load_file(path: &Path, catalog: Catalog) -> Result<ResultStore> {
    let file = match fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::info!("No results file at {:?}, starting empty", path);
            return Ok(ResultStore::with_catalog(catalog));
        }
        Err(e) => return Err(e.into()),
    };

    log::info!("Loading results from {:?}", path);
    load(io::BufReader::new(file), catalog)
}

fn load_line(store: &mut ResultStore, line: &str, line_number: usize) -> Result<()> {
    let corrupt = |event: Option<&str>, reason: String| TrackerError::CorruptRecord {
        line: line_number,
        event: event.map(str::to_string),
        reason,
    };

    let (name, data) = line
        .split_once(':')
        .ok_or_else(|| corrupt(None, "missing ':' delimiter".to_string()))?;
    let name = name.trim();

    if store.catalog().lookup(name).is_err() {
        return Err(corrupt(Some(name), "event is not in the catalog".to_string()));
    }

    // An event written with no values at all carries no results
    if data.trim().is_empty() {
        log::trace!("Line {}: {} has no values", line_number, name);
        return Ok(());
    }

    for token in data.split(',') {
        let token = token.trim();
        if token.is_empty() {
            return Err(corrupt(Some(name), "empty value".to_string()));
        }
        let value: f64 = token
            .parse()
            .map_err(|e| corrupt(Some(name), format!("invalid number '{}': {}", token, e)))?;
        if !is_valid_performance(value) {
            return Err(corrupt(
                Some(name),
                format!("'{}' is not a finite, non-negative value", token),
            ));
        }
        log::trace!("Line {}: {} += {}", line_number, name, value);
        store.add_result(name, value)?;
    }

    Ok(())
}
