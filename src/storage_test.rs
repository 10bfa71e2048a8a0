use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert_eq!(store.get("theme").unwrap(), None);
}

#[test]
fn memory_store_round_trips_value() {
    let mut store = MemoryStore::new();
    store.set("theme", "dark").unwrap();
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn memory_store_overwrites() {
    let mut store = MemoryStore::with("theme", "dark");
    store.set("theme", "light").unwrap();
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
}

#[test]
fn storage_error_messages_name_the_key() {
    let err = StorageError::Rejected {
        op: "write",
        key: "theme".to_owned(),
        reason: "QuotaExceededError".to_owned(),
    };
    let msg = err.to_string();
    assert!(msg.contains("\"theme\""));
    assert!(msg.contains("QuotaExceededError"));

    let err = StorageError::Unavailable("no window".to_owned());
    assert_eq!(err.to_string(), "preference storage unavailable: no window");
}
