//! End-to-end tests of the store façade over both backends.

use edgekv_core::{FileBackend, KvBackend, MemoryBackend, Payload, QueryMode, Store};
use serde::{Deserialize, Serialize};
use tempfile::tempdir;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Edge {
    to: String,
    weight: i64,
}

#[test]
fn memory_backed_store_roundtrip() {
    let mut backend = MemoryBackend::new();
    let mut store = Store::new(&mut backend);

    let edge = Edge {
        to: "carmelo".to_string(),
        weight: 1,
    };
    store.add("carlo", &Payload::from_value(&edge).unwrap()).unwrap();

    let decoded: Edge = store.get("carlo").unwrap().decode().unwrap();
    assert_eq!(decoded, edge);
}

#[test]
fn file_backed_store_roundtrip() {
    let dir = tempdir().unwrap();
    let mut backend = FileBackend::open(dir.path().join("edges.redb")).unwrap();
    let mut store = Store::new(&mut backend);

    let edge = Edge {
        to: "carmelo".to_string(),
        weight: 1,
    };
    store.add("carlo", &Payload::from_value(&edge).unwrap()).unwrap();

    let decoded: Edge = store.get("carlo").unwrap().decode().unwrap();
    assert_eq!(decoded, edge);
}

#[test]
fn raw_records_are_invisible_to_decode_but_retrievable() {
    let dir = tempdir().unwrap();
    let mut backend = FileBackend::open(dir.path().join("edges.redb")).unwrap();
    backend.put(b"stovari", b"miao").unwrap();

    let mut store = Store::new(&mut backend);
    store.add_raw("carlo", b"ciao").unwrap();

    // Raw bytes written below the store come back as-is.
    assert_eq!(store.get("stovari").unwrap().data(), b"miao");
    // But they are not valid CBOR for a typed decode.
    let result: Result<Edge, _> = store.get("stovari").unwrap().decode();
    assert!(result.is_err());

    assert!(store.get("storie").unwrap_err().is_not_found());
}

#[test]
fn delete_through_store_updates_backend_len() {
    let dir = tempdir().unwrap();
    let mut backend = FileBackend::open(dir.path().join("edges.redb")).unwrap();
    let mut store = Store::new(&mut backend);

    store.add_raw("carlo", b"ciao").unwrap();
    store.del("carlo");
    store.del("carlo"); // absent, still silent

    assert_eq!(store.backend().len().unwrap(), 0);
}

#[test]
fn prefix_query_through_backend_accessor() {
    let dir = tempdir().unwrap();
    let mut backend = FileBackend::open(dir.path().join("edges.redb")).unwrap();
    let mut store = Store::new(&mut backend);

    store.add_raw("carlo", b"locci").unwrap();
    store.add_raw("carmelo", b"locci").unwrap();

    let matches = store.backend().query(b"car", QueryMode::Prefix).unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[b"carlo".as_slice()], b"locci");
    assert_eq!(matches[b"carmelo".as_slice()], b"locci");

    // Both keys end in "lo"; the suffix scan finds them even though
    // "carmela"-style neighbors would break up a contiguous run.
    let matches = store.backend().query(b"lo", QueryMode::Suffix).unwrap();
    assert_eq!(matches.len(), 2);
}

#[test]
fn close_and_reopen_preserves_store_records() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("edges.redb");

    {
        let mut backend = FileBackend::open(&path).unwrap();
        let mut store = Store::new(&mut backend);
        store.add_raw("carlo", b"locci").unwrap();
        store.backend().close().unwrap();
    }

    let mut backend = FileBackend::open(&path).unwrap();
    let store = Store::new(&mut backend);
    assert_eq!(store.get("carlo").unwrap().data(), b"locci");
}

#[test]
fn store_is_backend_agnostic() {
    fn put_and_count<B: KvBackend>(backend: &mut B) -> usize {
        let mut store = Store::new(backend);
        for key in ["a", "b", "c"] {
            store.add_raw(key, b"v").unwrap();
        }
        store.del("b");

        let mut present = 0;
        for key in ["a", "b", "c"] {
            if store.get(key).is_ok() {
                present += 1;
            }
        }
        present
    }

    let mut memory = MemoryBackend::new();
    assert_eq!(put_and_count(&mut memory), 2);

    let dir = tempdir().unwrap();
    let mut file = FileBackend::open(dir.path().join("edges.redb")).unwrap();
    assert_eq!(put_and_count(&mut file), 2);
}
