//! Tracking session
//!
//! Owns the result store for one run of the tool: loads the results file on
//! open and writes it back on close if anything was recorded.

use anyhow::{Context, Result};
use athletics_scoring::{persistence, Catalog, ResultStore};
use std::path::{Path, PathBuf};

pub struct Session {
    store: ResultStore,
    path: PathBuf,
    dirty: bool,
}

impl Session {
    /// Load results from `path`; a missing file starts an empty session
    pub fn open(path: &Path) -> Result<Self> {
        let store = persistence::load_file(path, Catalog::standard())
            .with_context(|| format!("Failed to load results file: {:?}", path))?;

        log::info!(
            "Session opened with {} recorded results from {:?}",
            store.total_results(),
            path
        );

        Ok(Self {
            store,
            path: path.to_path_buf(),
            dirty: false,
        })
    }

    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    /// Record a result; the store rejects unknown events and invalid values
    pub fn record(&mut self, event: &str, value: f64) -> Result<()> {
        self.store.add_result(event, value)?;
        self.dirty = true;
        Ok(())
    }

    /// Persist the store if it changed during the session
    pub fn close(self) -> Result<()> {
        if !self.dirty {
            log::debug!("No changes to save");
            return Ok(());
        }

        persistence::save_file(&self.store, &self.path)
            .with_context(|| format!("Failed to save results file: {:?}", self.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_record_and_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.txt");

        let mut session = Session::open(&path).unwrap();
        assert!(session.store().is_empty());
        session.record("100m", 11.9).unwrap();
        session.record("100m", 11.7).unwrap();
        session.close().unwrap();

        let session = Session::open(&path).unwrap();
        assert_eq!(session.store().best("100m").unwrap(), Some(11.7));
    }

    #[test]
    fn test_unchanged_session_does_not_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.txt");

        Session::open(&path).unwrap().close().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_rejected_record_keeps_session_clean() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.txt");

        let mut session = Session::open(&path).unwrap();
        assert!(session.record("Marathon", 10800.0).is_err());
        assert!(session.record("100m", -1.0).is_err());
        session.close().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_corrupt_file_fails_open() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.txt");
        fs::write(&path, "100m:12.3,,11.8\n").unwrap();

        let err = Session::open(&path).err().unwrap();
        let message = format!("{:#}", err);
        assert!(message.contains("Corrupt record on line 1 (100m)"), "{}", message);
    }
}
