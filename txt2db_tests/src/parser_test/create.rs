use super::*;

#[test]
fn parse_create_basic() {
    let cmd = parse("make table student fields fname, lname, major, age").unwrap();

    match cmd {
        Command::Create { table, columns } => {
            assert_eq!(table, "student");
            assert_eq!(columns, vec!["fname", "lname", "major", "age"]);
        }
        _ => panic!("Expected Create command"),
    }
}

#[test]
fn parse_create_field_names_keep_inner_spaces() {
    let cmd = parse("make table t fields first name ,  last name").unwrap();
    match cmd {
        Command::Create { columns, .. } => assert_eq!(columns, vec!["first name", "last name"]),
        _ => panic!("Expected Create command"),
    }
}

#[test]
fn parse_create_without_spaces_after_commas() {
    let cmd = parse("make table t fields a,b,c").unwrap();
    assert_eq!(
        cmd,
        Command::Create {
            table: "t".to_string(),
            columns: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        }
    );
}

#[test]
fn parse_create_synonym_and_case() {
    let cmd = parse("CREATE Table People FIELDS Name").unwrap();
    assert_eq!(cmd.table(), "People");
}

#[test]
fn parse_create_rejects_non_identifier_name() {
    let err = parse("make table my-table fields a").unwrap_err();
    assert!(matches!(err, EngineError::MalformedCommand(_)));
    assert!(err.to_string().contains("bad table name"));
}

#[test]
fn parse_create_rejects_trailing_comma() {
    let err = parse("make table t fields a, b,").unwrap_err();
    assert!(err.to_string().contains("field names cannot be empty"));
}
