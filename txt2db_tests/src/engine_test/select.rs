use super::*;

#[test]
fn test_numeric_comparison_not_lexical() {
    let mut db = test_db();
    seed_ages(&mut db);
    let rows = select_rows(&mut db, "select * from people where age > 25");
    assert_eq!(first_names(&rows), vec!["Ben", "Cid"]);
}

#[test]
fn test_numeric_ordering_across_digit_counts() {
    let mut db = test_db();
    db.execute("make table t fields n").unwrap();
    db.execute("insert into t values 9").unwrap();
    db.execute("insert into t values 10").unwrap();
    db.execute("insert into t values 100").unwrap();

    let rows = select_rows(&mut db, "select * from t where n < 50");
    assert_eq!(first_names(&rows), vec!["9", "10"]);
}

#[test]
fn test_numeric_equality_ignores_formatting() {
    let mut db = test_db();
    seed_ages(&mut db);
    let rows = select_rows(&mut db, "select * from people where age = 20.0");
    assert_eq!(first_names(&rows), vec!["Ann"]);
}

#[test]
fn test_lexical_comparison_for_text() {
    let mut db = test_db();
    db.execute("make table fruit fields name").unwrap();
    db.execute("insert into fruit values apple").unwrap();
    db.execute("insert into fruit values banana").unwrap();
    db.execute("insert into fruit values cherry").unwrap();

    let rows = select_rows(&mut db, r#"select * from fruit where name > "apple""#);
    assert_eq!(first_names(&rows), vec!["banana", "cherry"]);

    let rows = select_rows(&mut db, "select * from fruit where name <= banana");
    assert_eq!(first_names(&rows), vec!["apple", "banana"]);
}

#[test]
fn test_mixed_number_and_text_compares_lexically() {
    let mut db = test_db();
    db.execute("make table t fields v").unwrap();
    db.execute("insert into t values 10").unwrap();
    db.execute("insert into t values zebra").unwrap();

    // "10" < "abc" as strings; "zebra" is not.
    let rows = select_rows(&mut db, "select * from t where v < abc");
    assert_eq!(first_names(&rows), vec!["10"]);
}

#[test]
fn test_and_binds_tighter_than_or() {
    let mut db = student_db();

    let rows = select_rows(
        &mut db,
        r#"select * from student where major = "CS" and age < 25"#,
    );
    assert_eq!(first_names(&rows), vec!["Flo"]);

    let rows = select_rows(
        &mut db,
        r#"select * from student where major = "CS" or age < 25"#,
    );
    assert_eq!(first_names(&rows), vec!["Flo", "Ada", "Bo"]);
}

#[test]
fn test_or_splits_before_and() {
    let mut db = student_db();
    // (major = CS and age > 25) or (major = Math)
    let rows = select_rows(
        &mut db,
        "select * from student where major = CS and age > 25 or major = Math",
    );
    assert_eq!(first_names(&rows), vec!["Ada", "Bo"]);

    // (major = Math) or (major = CS and age > 25)
    let rows = select_rows(
        &mut db,
        "select * from student where major = Math OR major = CS AND age > 25",
    );
    assert_eq!(first_names(&rows), vec!["Ada", "Bo"]);
}

#[test]
fn test_not_equal() {
    let mut db = student_db();
    let rows = select_rows(&mut db, "select * from student where major != CS");
    assert_eq!(first_names(&rows), vec!["Bo"]);
}

#[test]
fn test_two_char_operators_without_spaces() {
    let mut db = test_db();
    seed_ages(&mut db);

    let rows = select_rows(&mut db, "select * from people where age>=28");
    assert_eq!(first_names(&rows), vec!["Ben", "Cid"]);

    let rows = select_rows(&mut db, "select * from people where age<=28");
    assert_eq!(first_names(&rows), vec!["Ann", "Ben"]);
}

#[test]
fn test_where_column_is_case_insensitive() {
    let mut db = student_db();
    let rows = select_rows(&mut db, "select * from student where MAJOR = Math");
    assert_eq!(first_names(&rows), vec!["Bo"]);
}

#[test]
fn test_where_value_is_case_sensitive() {
    let mut db = student_db();
    let rows = select_rows(&mut db, "select * from student where major = cs");
    assert!(rows.is_empty());
}

#[test]
fn test_unknown_column_matches_nothing() {
    let mut db = student_db();
    let rows = select_rows(&mut db, "select * from student where gpa > 1");
    assert!(rows.is_empty());

    // Fails closed inside an OR too, without hiding the other side.
    let rows = select_rows(&mut db, "select * from student where gpa > 1 or fname = Bo");
    assert_eq!(first_names(&rows), vec!["Bo"]);
}

#[test]
fn test_unparseable_clause_matches_every_row() {
    let mut db = student_db();
    let rows = select_rows(&mut db, "select * from student where nonsense");
    assert_eq!(rows.len(), 3);

    let rows = select_rows(
        &mut db,
        "select * from student where age > 25 and whatever",
    );
    assert_eq!(first_names(&rows), vec!["Ada"]);
}

#[test]
fn test_quoted_literal_with_keywords_inside() {
    let mut db = test_db();
    db.execute("make table songs fields title").unwrap();
    db.execute(r#"insert into songs values "rock or roll""#)
        .unwrap();
    db.execute("insert into songs values ballad").unwrap();

    let rows = select_rows(
        &mut db,
        r#"select * from songs where title = "rock or roll""#,
    );
    assert_eq!(first_names(&rows), vec!["rock or roll"]);
}

#[test]
fn test_unquoted_literal_with_spaces() {
    let mut db = test_db();
    db.execute("make table t fields name").unwrap();
    db.execute(r#"insert into t values "Flo Yao""#).unwrap();
    let rows = select_rows(&mut db, "select * from t where name = Flo Yao");
    assert_eq!(rows.len(), 1);
}

#[test]
fn test_empty_cells_compare_as_text() {
    let mut db = test_db();
    db.execute("make table t fields a, b").unwrap();
    db.execute("insert into t values x, ").unwrap();
    db.execute("insert into t values y, 0").unwrap();

    let rows = select_rows(&mut db, r#"select * from t where b = """#);
    assert_eq!(first_names(&rows), vec!["x"]);
    let rows = select_rows(&mut db, "select * from t where b = 0");
    assert_eq!(first_names(&rows), vec!["y"]);
}

#[test]
fn test_select_output_keeps_filtered_order() {
    let mut db = student_db();
    let result = db.execute("select * from student where age = 20").unwrap();
    assert_eq!(
        result.output().unwrap(),
        "fname\tlname\tmajor\tage\nFlo\tYao\tCS\t20\nBo\tKim\tMath\t20"
    );
    assert_eq!(result.message(), "2 row(s) selected from student");
}

#[test]
fn test_select_does_not_modify_table() {
    let mut db = student_db();
    select_rows(&mut db, "select * from student where major = Math");
    assert_eq!(db.table("student").unwrap().rows.len(), 3);
}

#[test]
fn test_qualified_column_filters_on_last_segment() {
    let mut db = test_db();
    seed_ages(&mut db);
    let rows = select_rows(&mut db, "select * from people where people.age > 25");
    assert_eq!(first_names(&rows), vec!["Ben", "Cid"]);
}

#[test]
fn test_spaced_column_filters_on_word_before_operator() {
    let mut db = student_db();
    let rows = select_rows(&mut db, "select * from student where first fname = Ada");
    assert_eq!(first_names(&rows), vec!["Ada"]);
}

#[test]
fn test_repeated_where_keyword_still_filters() {
    let mut db = test_db();
    seed_ages(&mut db);
    let rows = select_rows(&mut db, "select * from people where where age > 25");
    assert_eq!(first_names(&rows), vec!["Ben", "Cid"]);
}

#[test]
fn test_row_of_empty_cells_survives_output_parse() {
    let mut db = test_db();
    db.execute("make table t fields a, b").unwrap();
    db.execute("insert into t values , ").unwrap();

    let result = db.execute("select * from t").unwrap();
    assert_eq!(result.row_count(), Some(1));
    let output = result.output().unwrap();
    assert_eq!(output, "a\tb\n\t");
    let parsed = txt2db_core::engine::parse_select_output(&output);
    assert_eq!(parsed.rows, vec![vec![String::new(), String::new()]]);
}
