use super::*;

#[test]
fn where_single_predicate() {
    assert_eq!(
        parse_where("age > 25").unwrap(),
        pred("age", CompareOp::Gt, "25")
    );
}

#[test]
fn where_leading_keyword_is_optional() {
    assert_eq!(
        parse_where("WHERE age > 25").unwrap(),
        parse_where("age > 25").unwrap()
    );
}

#[test]
fn where_two_char_operators_are_not_split() {
    assert_eq!(
        parse_where("age >= 25").unwrap(),
        pred("age", CompareOp::Gte, "25")
    );
    assert_eq!(
        parse_where("age<=25").unwrap(),
        pred("age", CompareOp::Lte, "25")
    );
    assert_eq!(
        parse_where("age != 25").unwrap(),
        pred("age", CompareOp::NotEq, "25")
    );
    assert_eq!(
        parse_where("age < 25").unwrap(),
        pred("age", CompareOp::Lt, "25")
    );
}

#[test]
fn where_or_is_outermost() {
    let clause = parse_where("a = 1 and b = 2 or c = 3").unwrap();
    assert_eq!(
        clause,
        binary(
            binary(
                pred("a", CompareOp::Eq, "1"),
                LogicalOp::And,
                pred("b", CompareOp::Eq, "2")
            ),
            LogicalOp::Or,
            pred("c", CompareOp::Eq, "3")
        )
    );

    let clause = parse_where("a = 1 or b = 2 and c = 3").unwrap();
    assert_eq!(
        clause,
        binary(
            pred("a", CompareOp::Eq, "1"),
            LogicalOp::Or,
            binary(
                pred("b", CompareOp::Eq, "2"),
                LogicalOp::And,
                pred("c", CompareOp::Eq, "3")
            )
        )
    );
}

#[test]
fn where_chains_fold_left() {
    let clause = parse_where("a = 1 or b = 2 or c = 3").unwrap();
    assert_eq!(
        clause,
        binary(
            binary(
                pred("a", CompareOp::Eq, "1"),
                LogicalOp::Or,
                pred("b", CompareOp::Eq, "2")
            ),
            LogicalOp::Or,
            pred("c", CompareOp::Eq, "3")
        )
    );
}

#[test]
fn where_literal_is_unquoted() {
    assert_eq!(
        parse_where(r#"major = "CS""#).unwrap(),
        pred("major", CompareOp::Eq, "CS")
    );
    assert_eq!(
        parse_where("major = 'CS'").unwrap(),
        pred("major", CompareOp::Eq, "CS")
    );
}

#[test]
fn where_literal_runs_to_next_connective() {
    assert_eq!(
        parse_where("name = Flo Yao and age = 20").unwrap(),
        binary(
            pred("name", CompareOp::Eq, "Flo Yao"),
            LogicalOp::And,
            pred("age", CompareOp::Eq, "20")
        )
    );
}

#[test]
fn where_quoted_connectives_are_literal() {
    assert_eq!(
        parse_where(r#"title = "war and peace""#).unwrap(),
        pred("title", CompareOp::Eq, "war and peace")
    );
}

#[test]
fn where_unparseable_atom_is_kept_as_unmatched() {
    assert_eq!(
        parse_where("just words").unwrap(),
        WhereClause::Unmatched("just words".to_string())
    );
    assert_eq!(
        parse_where("age >").unwrap(),
        WhereClause::Unmatched("age >".to_string())
    );
    assert_eq!(
        parse_where("'age' = 3").unwrap(),
        WhereClause::Unmatched("'age' = 3".to_string())
    );
}

#[test]
fn where_qualified_column_uses_last_segment() {
    assert_eq!(
        parse_where("people.age > 25").unwrap(),
        pred("age", CompareOp::Gt, "25")
    );
}

#[test]
fn where_column_is_the_word_before_the_operator() {
    assert_eq!(
        parse_where("first name = Flo").unwrap(),
        pred("name", CompareOp::Eq, "Flo")
    );
    assert_eq!(
        parse_where("first name = Flo and t.age<=3").unwrap(),
        binary(
            pred("name", CompareOp::Eq, "Flo"),
            LogicalOp::And,
            pred("age", CompareOp::Lte, "3"),
        )
    );
}

#[test]
fn where_repeated_keyword_is_skipped_once() {
    assert_eq!(
        parse_where("where where age > 25").unwrap(),
        pred("age", CompareOp::Gt, "25")
    );
}

#[test]
fn where_empty_is_malformed() {
    assert!(matches!(
        parse_where("").unwrap_err(),
        EngineError::MalformedCommand(_)
    ));
    assert!(matches!(
        parse_where("  where  ").unwrap_err(),
        EngineError::MalformedCommand(_)
    ));
}
