use std::fs;
use std::path::PathBuf;
use taskdesk_core::{JsonTaskStore, PersistenceError, StoreError};

fn backing_file(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("tasks.json")
}

#[test]
fn open_on_missing_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();

    let store = JsonTaskStore::open(backing_file(&dir)).unwrap();
    assert!(store.list().is_empty());
    assert_eq!(store.next_id(), 1);
}

#[test]
fn save_then_reload_round_trips_collection_and_counter() {
    let dir = tempfile::tempdir().unwrap();
    let path = backing_file(&dir);

    let mut store = JsonTaskStore::open(&path).unwrap();
    store.add("buy milk").unwrap();
    let done = store.add("water plants").unwrap();
    store.add("call the bank").unwrap();
    store.complete(done.id).unwrap();
    drop(store);

    let reloaded = JsonTaskStore::open(&path).unwrap();
    let texts: Vec<&str> = reloaded
        .list()
        .iter()
        .map(|task| task.text.as_str())
        .collect();
    assert_eq!(texts, vec!["buy milk", "water plants", "call the bank"]);
    assert!(reloaded.get(done.id).unwrap().completed);
    assert_eq!(reloaded.next_id(), 4);
}

#[test]
fn every_mutation_reaches_the_backing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = backing_file(&dir);

    let mut store = JsonTaskStore::open(&path).unwrap();
    let task = store.add("persist me").unwrap();
    assert_eq!(JsonTaskStore::open(&path).unwrap().list().len(), 1);

    store.complete(task.id).unwrap();
    assert!(JsonTaskStore::open(&path).unwrap().get(task.id).unwrap().completed);

    store.delete(task.id).unwrap();
    assert!(JsonTaskStore::open(&path).unwrap().list().is_empty());
}

#[test]
fn counter_survives_delete_then_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = backing_file(&dir);

    let mut store = JsonTaskStore::open(&path).unwrap();
    for text in ["a", "b", "c"] {
        store.add(text).unwrap();
    }
    store.delete(3).unwrap();
    drop(store);

    let mut reloaded = JsonTaskStore::open(&path).unwrap();
    let next = reloaded.add("d").unwrap();
    assert_eq!(next.id, 4, "deleted trailing id must not be reassigned");
}

#[test]
fn persisted_file_uses_the_documented_wire_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = backing_file(&dir);

    let mut store = JsonTaskStore::open(&path).unwrap();
    store.add("check format").unwrap();

    let document: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(document["next_id"], 2);
    assert_eq!(document["tasks"][0]["id"], 1);
    assert_eq!(document["tasks"][0]["text"], "check format");
    assert_eq!(document["tasks"][0]["completed"], false);
}

#[test]
fn malformed_backing_file_fails_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = backing_file(&dir);
    fs::write(&path, "{ this is not json").unwrap();

    let err = JsonTaskStore::open(&path).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Persistence(PersistenceError::Malformed { .. })
    ));
    // The corrupt file must survive for inspection, not be overwritten.
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ this is not json");
}

#[test]
fn snapshot_with_duplicate_ids_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = backing_file(&dir);
    fs::write(
        &path,
        r#"{"tasks":[{"id":1,"text":"a","completed":false},{"id":1,"text":"b","completed":false}],"next_id":2}"#,
    )
    .unwrap();

    let err = JsonTaskStore::open(&path).unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(message) if message.contains("duplicate")));
}

#[test]
fn snapshot_with_stale_counter_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = backing_file(&dir);
    fs::write(
        &path,
        r#"{"tasks":[{"id":5,"text":"a","completed":false}],"next_id":3}"#,
    )
    .unwrap();

    let err = JsonTaskStore::open(&path).unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(_)));
}

#[test]
fn snapshot_with_blank_task_text_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = backing_file(&dir);
    fs::write(
        &path,
        r#"{"tasks":[{"id":1,"text":"  ","completed":false}],"next_id":2}"#,
    )
    .unwrap();

    let err = JsonTaskStore::open(&path).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
}
