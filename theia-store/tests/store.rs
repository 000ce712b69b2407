//! Open/get/put behavior against a real on-disk store.

use std::path::Path;

use tempfile::tempdir;
use theia_store::{LocalStore, StoreError, StoreKey};

const BOARD: &str = "esp32:esp32:esp32";

/// Creates a store directory and fills it with raw key/value pairs, the way
/// the IDE would have left it behind.
fn seed(dir: &Path, pairs: &[(&[u8], &[u8])]) {
    let mut db =
        rusty_leveldb::DB::open(dir, rusty_leveldb::Options::default()).expect("create store");
    for (key, value) in pairs {
        db.put(key, value).expect("seed key");
    }
    db.flush().expect("flush store");
}

#[test]
fn open_rejects_missing_path() {
    let err = LocalStore::open("/no/such/store").unwrap_err();
    assert!(matches!(err, StoreError::Path { .. }), "got {err:?}");
}

#[test]
fn open_rejects_plain_file() {
    let dir = tempdir().expect("tempdir");
    let file = dir.path().join("leveldb");
    std::fs::write(&file, b"not a database").expect("write file");

    let err = LocalStore::open(&file).unwrap_err();
    assert!(matches!(err, StoreError::Path { .. }), "got {err:?}");
}

#[test]
fn open_never_creates_a_store() {
    let dir = tempdir().expect("tempdir");
    let err = LocalStore::open(dir.path()).unwrap_err();
    assert!(matches!(err, StoreError::Open { .. }), "got {err:?}");
}

#[test]
fn absent_key_reads_as_none() {
    let dir = tempdir().expect("tempdir");
    seed(dir.path(), &[]);

    let mut store = LocalStore::open(dir.path()).expect("open store");
    let key = StoreKey::for_board(BOARD);
    assert_eq!(store.get(&key).expect("get"), None);
}

#[test]
fn document_round_trip_survives_reopen() {
    let dir = tempdir().expect("tempdir");
    let key = StoreKey::for_board(BOARD);
    seed(
        dir.path(),
        &[(key.as_bytes(), b"\x01{\"configOptions\":[]}".as_slice())],
    );

    let mut doc = {
        let mut store = LocalStore::open(dir.path()).expect("open store");
        store.get(&key).expect("get").expect("document present")
    };

    doc.insert("touched".to_string(), serde_json::json!(true));
    {
        let mut store = LocalStore::open(dir.path()).expect("reopen store");
        store.put(&key, &doc).expect("put");
    }

    let mut store = LocalStore::open(dir.path()).expect("reopen store again");
    let read_back = store.get(&key).expect("get").expect("document present");
    assert_eq!(read_back, doc);
}

#[test]
fn malformed_value_reports_decode_error() {
    let dir = tempdir().expect("tempdir");
    let key = StoreKey::for_board(BOARD);
    seed(dir.path(), &[(key.as_bytes(), b"\x01{truncated".as_slice())]);

    let mut store = LocalStore::open(dir.path()).expect("open store");
    let err = store.get(&key).unwrap_err();
    assert!(matches!(err, StoreError::Decode { .. }), "got {err:?}");
}

#[test]
fn keys_lists_the_whole_keyspace() {
    let dir = tempdir().expect("tempdir");
    let global = StoreKey::for_board(BOARD);
    let sketch = StoreKey::for_sketch(BOARD, "file:///home/user/Arduino/Blink");
    seed(
        dir.path(),
        &[
            (global.as_bytes(), b"\x01{}".as_slice()),
            (sketch.as_bytes(), b"\x01{}".as_slice()),
            (b"_file://\x00\x01theia:unrelated".as_slice(), b"\x01\"x\"".as_slice()),
        ],
    );

    let mut store = LocalStore::open(dir.path()).expect("open store");
    let keys = store.keys().expect("keys");
    assert_eq!(keys.len(), 3);
    assert!(keys.contains(&global));
    assert!(keys.contains(&sketch));
}
