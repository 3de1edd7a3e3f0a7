use super::*;

#[test]
fn parse_select_basic() {
    let cmd = parse("select * from users").unwrap();

    match cmd {
        Command::Select { table, filter } => {
            assert_eq!(table, "users");
            assert!(filter.is_none());
        }
        _ => panic!("Expected Select command"),
    }
}

#[test]
fn parse_select_where_eq() {
    let cmd = parse(r#"select * from users where name = "ram""#).unwrap();
    match cmd {
        Command::Select { table, filter } => {
            assert_eq!(table, "users");
            assert_eq!(filter.unwrap(), pred("name", CompareOp::Eq, "ram"));
        }
        _ => panic!("Expected Select command"),
    }
}

#[test]
fn parse_select_repeated_where_keyword() {
    let cmd = parse("select * from people where where age > 25").unwrap();
    match cmd {
        Command::Select { filter, .. } => {
            assert_eq!(filter.unwrap(), pred("age", CompareOp::Gt, "25"));
        }
        _ => panic!("Expected Select command"),
    }
    assert!(matches!(
        parse("select * from people where where").unwrap_err(),
        EngineError::MalformedCommand(_)
    ));
}

#[test]
fn parse_select_star_without_spaces() {
    let cmd = parse("select*from users").unwrap();
    assert_eq!(cmd.table(), "users");
}

#[test]
fn classify_by_leading_keywords() {
    assert_eq!(classify("make table t fields a"), Some(CommandKind::Create));
    assert_eq!(classify("Create   TABLE t"), Some(CommandKind::Create));
    assert_eq!(classify("insert into t"), Some(CommandKind::Insert));
    assert_eq!(classify("SELECT"), Some(CommandKind::Select));
    assert_eq!(classify("insert t"), None);
    assert_eq!(classify("selection * from t"), None);
    assert_eq!(classify("delete from t"), None);
    assert_eq!(classify(""), None);
}

#[test]
fn parse_unknown_command_errors() {
    let err = parse("delete from users").unwrap_err();
    assert_eq!(
        err,
        EngineError::UnrecognizedCommand("delete from users".to_string())
    );
}
