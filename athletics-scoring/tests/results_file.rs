// File-backed persistence through the public API
use athletics_scoring::{persistence, Catalog, ResultStore, TrackerError};
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

#[test]
fn missing_file_loads_empty_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.txt");

    let store = persistence::load_file(&path, Catalog::standard()).unwrap();
    assert!(store.is_empty());
    assert!(!path.exists());
}

#[test]
fn save_then_load_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.txt");

    let mut store = ResultStore::new();
    for value in [12.3, 11.8, 12.0] {
        store.add_result("100m", value).unwrap();
    }
    for value in [5.10, 5.45, 5.02] {
        store.add_result("LongJump", value).unwrap();
    }
    store.add_result("1500m", 245.67).unwrap();

    persistence::save_file(&store, &path).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "100m:12.3,11.8,12\n1500m:245.67\nLongJump:5.1,5.45,5.02\n"
    );

    let reloaded = persistence::load_file(&path, Catalog::standard()).unwrap();
    assert_eq!(reloaded, store);
    assert_eq!(reloaded.best("100m").unwrap(), Some(11.8));
    assert_eq!(reloaded.best("LongJump").unwrap(), Some(5.45));
}

#[test]
fn save_replaces_previous_contents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.txt");
    fs::write(&path, "200m:25.0,24.0\nShotPut:12.0\n").unwrap();

    let mut store = ResultStore::new();
    store.add_result("400m", 55.0).unwrap();
    persistence::save_file(&store, &path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "400m:55\n");
}

#[test]
fn loads_file_written_by_legacy_tracker() {
    // Older files list every event, including the ones without results
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "100m:12.5,12.1\n200m:\n400m:\nLongJump:5.5\nShotPut:\nDecathlon:\n"
    )
    .unwrap();
    file.flush().unwrap();

    let store = persistence::load_file(file.path(), Catalog::standard()).unwrap();
    assert_eq!(store.total_results(), 3);
    assert_eq!(store.best("100m").unwrap(), Some(12.1));
    assert_eq!(store.best("ShotPut").unwrap(), None);
}

#[test]
fn corrupt_file_fails_whole_load() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "100m:12.3,11.8\nLongJump:6.1\nFooEvent:1.0\n").unwrap();
    file.flush().unwrap();

    let err = persistence::load_file(file.path(), Catalog::standard()).unwrap_err();
    match err {
        TrackerError::CorruptRecord { line, event, .. } => {
            assert_eq!(line, 3);
            assert_eq!(event.as_deref(), Some("FooEvent"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn unreadable_path_is_io_error() {
    let dir = tempdir().unwrap();
    // A directory cannot be opened as a results file
    let err = persistence::load_file(dir.path(), Catalog::standard());
    assert!(err.is_err());
}
