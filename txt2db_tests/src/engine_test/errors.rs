use super::*;

#[test]
fn test_select_from_missing_table() {
    let mut db = student_db();
    let err = db.execute("select * from ghost").unwrap_err();
    assert_eq!(err, EngineError::TableNotFound("ghost".to_string()));
    assert_eq!(err.to_string(), "Table ghost does not exist");

    // existing tables are untouched
    assert_eq!(db.table_names(), vec!["student"]);
    assert_eq!(db.table("student").unwrap().rows.len(), 3);
}

#[test]
fn test_insert_into_missing_table() {
    let mut db = test_db();
    let err = db.execute("insert into ghost values 1").unwrap_err();
    assert_eq!(err, EngineError::TableNotFound("ghost".to_string()));
    assert!(db.table_names().is_empty());
}

#[test]
fn test_insert_arity_mismatch_leaves_table_unchanged() {
    let mut db = student_db();

    let err = db
        .execute("insert into student values Cy, Xu, Art")
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::ArityMismatch {
            table: "student".to_string(),
            expected: 4,
            got: 3,
        }
    );
    assert_eq!(err.to_string(), "Table student expects 4 values but got 3");

    let err = db
        .execute("insert into student values Cy, Xu, Art, 19, extra")
        .unwrap_err();
    assert!(matches!(err, EngineError::ArityMismatch { got: 5, .. }));

    assert_eq!(db.table("student").unwrap().rows.len(), 3);
}

#[test]
fn test_unrecognized_command() {
    let mut db = test_db();
    let err = db.execute("drop table student").unwrap_err();
    assert_eq!(
        err,
        EngineError::UnrecognizedCommand("drop table student".to_string())
    );
    assert_eq!(err.to_string(), "Unsupported command: drop table student");
    assert_eq!(err.kind(), "unrecognized_command");
}

#[test]
fn test_unrecognized_command_truncated_to_50_chars() {
    let mut db = test_db();
    let input = format!("update {}", "x".repeat(100));
    let err = db.execute(&input).unwrap_err();
    match err {
        EngineError::UnrecognizedCommand(snippet) => {
            assert_eq!(snippet.chars().count(), 50);
            assert!(input.starts_with(&snippet));
        }
        other => panic!("expected UnrecognizedCommand, got {other:?}"),
    }
}

#[test]
fn test_empty_input_is_unrecognized() {
    let mut db = test_db();
    let err = db.execute("   ").unwrap_err();
    assert_eq!(err, EngineError::UnrecognizedCommand(String::new()));
}

#[test]
fn test_verb_prefix_without_second_keyword_is_unrecognized() {
    let mut db = test_db();
    assert!(matches!(
        db.execute("insert t values 1").unwrap_err(),
        EngineError::UnrecognizedCommand(_)
    ));
    assert!(matches!(
        db.execute("make t fields a").unwrap_err(),
        EngineError::UnrecognizedCommand(_)
    ));
}

#[test]
fn test_malformed_commands() {
    let mut db = test_db();
    db.execute("make table t fields a").unwrap();

    for input in [
        "make table t",
        "make table t fields",
        "make table t columns a, b",
        "make table t fields a,, b",
        "make table 'bad name' fields a",
        "insert into t",
        "insert into t values",
        "insert into t 1, 2",
        "select * from",
        "select a from t",
        "select * t",
        "select * from t limit 5",
        "select * from t where",
    ] {
        let err = db.execute(input).unwrap_err();
        assert!(
            matches!(err, EngineError::MalformedCommand(_)),
            "expected MalformedCommand for {input:?}, got {err:?}"
        );
        assert_eq!(err.kind(), "malformed_command");
    }
    // nothing above touched the table
    assert_eq!(db.table("t").unwrap().rows.len(), 0);
}

#[test]
fn test_malformed_message_names_the_form() {
    let mut db = test_db();
    let err = db.execute("insert into t").unwrap_err();
    assert!(err.to_string().starts_with("Invalid INSERT syntax"));
    let err = db.execute("select * from t where").unwrap_err();
    assert!(err.to_string().starts_with("Invalid WHERE syntax"));
}

#[test]
fn test_unclosed_quote_is_malformed() {
    let mut db = test_db();
    db.execute("make table t fields a").unwrap();
    let err = db.execute(r#"insert into t values "abc"#).unwrap_err();
    assert!(matches!(err, EngineError::MalformedCommand(_)));
    assert!(err.to_string().to_lowercase().contains("unclosed quote"));
}

#[test]
fn test_failed_create_keeps_existing_table() {
    let mut db = student_db();
    db.execute("make table student fields").unwrap_err();
    assert_eq!(db.table("student").unwrap().rows.len(), 3);
}
