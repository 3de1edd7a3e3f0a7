use super::*;

#[test]
fn test_table_names_in_creation_order() {
    let mut db = test_db();
    db.execute("make table zeta fields a").unwrap();
    db.execute("make table alpha fields a").unwrap();
    db.execute("make table mid fields a").unwrap();
    assert_eq!(db.table_names(), vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_schema_reports_text_columns() {
    let db = student_db();
    let schema = db.schema("student").unwrap();
    assert_eq!(schema.name, "student");
    let names: Vec<&str> = schema.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["fname", "lname", "major", "age"]);
    assert!(schema.columns.iter().all(|c| c.dtype == "TEXT"));

    assert!(db.schema("ghost").is_none());
}

#[test]
fn test_schemas_serialize_like_schema_tree() {
    let mut db = test_db();
    db.execute("make table t fields a, b").unwrap();
    let json = serde_json::to_value(db.schemas()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"name": "t", "columns": [
                {"name": "a", "type": "TEXT"},
                {"name": "b", "type": "TEXT"}
            ]}
        ])
    );
}

#[test]
fn test_reset_drops_everything() {
    let mut db = student_db();
    db.reset();
    assert!(db.table_names().is_empty());
    assert!(db.table("student").is_none());
    assert!(matches!(
        db.execute("select * from student").unwrap_err(),
        EngineError::TableNotFound(_)
    ));

    // usable again after reset
    db.execute("make table student fields a").unwrap();
    assert_eq!(db.table_names(), vec!["student"]);
}

#[test]
fn test_select_response_json() -> anyhow::Result<()> {
    let mut db = student_db();
    let response = db.execute_response("select * from student where fname = Bo");
    assert!(!response.is_error());

    let json: serde_json::Value = serde_json::from_str(&response.to_json())?;
    assert_eq!(json["type"], "select");
    assert_eq!(json["table"], "student");
    assert_eq!(json["output"], "fname\tlname\tmajor\tage\nBo\tKim\tMath\t20");
    assert_eq!(json["row_count"], 1);
    assert_eq!(json["message"], "1 row(s) selected from student");
    assert!(json.get("error").is_none());
    Ok(())
}

#[test]
fn test_create_and_insert_response_json() -> anyhow::Result<()> {
    let mut db = test_db();
    let created: serde_json::Value =
        serde_json::from_str(&db.execute_response("make table t fields a").to_json())?;
    assert_eq!(created["type"], "create");
    assert!(created.get("output").is_none());

    let inserted: serde_json::Value =
        serde_json::from_str(&db.execute_response("insert into t values 1").to_json())?;
    assert_eq!(inserted["type"], "insert");
    assert_eq!(inserted["message"], "1 row inserted into t");
    Ok(())
}

#[test]
fn test_error_response_json() {
    let mut db = test_db();
    let response = db.execute_response("select * from ghost");
    assert!(response.is_error());
    assert_eq!(response.to_json(), r#"{"error":"Table ghost does not exist"}"#);
}
