use super::*;

#[test]
fn parse_insert_basic() {
    let cmd = parse("insert into student values Flo, Yao, CS, 20").unwrap();

    match cmd {
        Command::Insert { table, values } => {
            assert_eq!(table, "student");
            assert_eq!(values, vec!["Flo", "Yao", "CS", "20"]);
        }
        _ => panic!("Expected Insert command"),
    }
}

#[test]
fn parse_insert_strips_one_quote_pair() {
    let cmd = parse(r#"insert into t values "Flo", 'Yao', "it's""#).unwrap();
    match cmd {
        Command::Insert { values, .. } => assert_eq!(values, vec!["Flo", "Yao", "it's"]),
        _ => panic!("Expected Insert command"),
    }
}

#[test]
fn parse_insert_quoted_comma_is_one_value() {
    let cmd = parse(r#"insert into t values "a, b", c"#).unwrap();
    match cmd {
        Command::Insert { values, .. } => assert_eq!(values, vec!["a, b", "c"]),
        _ => panic!("Expected Insert command"),
    }
}

#[test]
fn parse_insert_keeps_other_quote_kind_inside() {
    let cmd = parse(r#"insert into t values 'say "hi"'"#).unwrap();
    match cmd {
        Command::Insert { values, .. } => assert_eq!(values, vec![r#"say "hi""#]),
        _ => panic!("Expected Insert command"),
    }
}

#[test]
fn parse_insert_operator_characters_survive_in_values() {
    let cmd = parse("insert into t values a=b, 3*4, x<y").unwrap();
    match cmd {
        Command::Insert { values, .. } => assert_eq!(values, vec!["a=b", "3*4", "x<y"]),
        _ => panic!("Expected Insert command"),
    }
}

#[test]
fn parse_insert_empty_items() {
    let cmd = parse("insert into t values ,x,").unwrap();
    match cmd {
        Command::Insert { values, .. } => assert_eq!(values, vec!["", "x", ""]),
        _ => panic!("Expected Insert command"),
    }
}

#[test]
fn parse_insert_requires_values_keyword() {
    let err = parse("insert into t vals 1").unwrap_err();
    assert!(err.to_string().contains("insert into <table> values"));
}
