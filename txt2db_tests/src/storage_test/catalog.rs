use super::*;

#[test]
fn catalog_create_and_lookup() {
    let mut catalog = Catalog::new();
    assert!(!catalog.create_or_replace("users", names(&["id", "name"])));
    assert!(catalog.exists("users"));
    assert!(!catalog.exists("Users"));

    let schema = catalog.schema("users").unwrap();
    assert_eq!(schema.column_count(), 2);
    assert_eq!(schema.column_names(), vec!["id", "name"]);
}

#[test]
fn catalog_replace_keeps_position() {
    let mut catalog = Catalog::new();
    catalog.create_or_replace("a", names(&["x"]));
    catalog.create_or_replace("b", names(&["x"]));
    assert!(catalog.create_or_replace("a", names(&["y", "z"])));

    assert_eq!(catalog.table_names(), vec!["a", "b"]);
    assert_eq!(catalog.schema("a").unwrap().column_names(), vec!["y", "z"]);
}

#[test]
fn catalog_missing_table() {
    let catalog = Catalog::new();
    assert_eq!(
        catalog.schema("ghost").unwrap_err(),
        EngineError::TableNotFound("ghost".to_string())
    );
    assert!(catalog.get("ghost").is_none());
}

#[test]
fn catalog_snapshot_and_clear() {
    let mut catalog = Catalog::new();
    catalog.create_or_replace("t", names(&["a"]));
    let snapshot = catalog.snapshot_tables();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].name, "t");
    assert_eq!(snapshot[0].columns[0].dtype, "TEXT");

    catalog.clear();
    assert!(catalog.table_names().is_empty());
    assert!(catalog.snapshot_tables().is_empty());
}

#[test]
fn schema_find_column_ignores_case() {
    let schema = Schema::from_names(names(&["fname", "Age"]));
    assert_eq!(schema.find_column("FNAME"), Some(0));
    assert_eq!(schema.find_column("age"), Some(1));
    assert_eq!(schema.find_column("gpa"), None);
}
