use super::*;

#[test]
fn mem_insert_and_scan_in_order() {
    let mut storage = MemStorage::new();
    storage.create_table("t");
    storage.insert_row("t", names(&["1", "a"])).unwrap();
    storage.insert_row("t", names(&["2", "b"])).unwrap();

    let rows = storage.scan("t").unwrap();
    assert_eq!(rows, &[names(&["1", "a"]), names(&["2", "b"])]);
    assert_eq!(storage.row_count("t"), Some(2));
}

#[test]
fn mem_missing_table_errors() {
    let mut storage = MemStorage::new();
    assert_eq!(
        storage.insert_row("ghost", names(&["1"])).unwrap_err(),
        EngineError::TableNotFound("ghost".to_string())
    );
    assert!(storage.scan("ghost").is_err());
    assert_eq!(storage.row_count("ghost"), None);
}

#[test]
fn mem_create_table_discards_existing_rows() {
    let mut storage = MemStorage::new();
    storage.create_table("t");
    storage.insert_row("t", names(&["1"])).unwrap();
    storage.create_table("t");
    assert!(storage.scan("t").unwrap().is_empty());
}

#[test]
fn mem_clear_drops_tables() {
    let mut storage = MemStorage::new();
    storage.create_table("t");
    storage.clear();
    assert!(storage.scan("t").is_err());
}

#[test]
fn storage_through_trait_object() {
    let mut storage = MemStorage::new();
    let engine: &mut dyn StorageEngine = &mut storage;
    engine.create_table("t");
    engine.insert_row("t", names(&["x"])).unwrap();
    assert_eq!(engine.scan("t").unwrap().len(), 1);
}
