use txt2db_core::engine::{format_select, parse_select_output, TabularData};
use txt2db_core::engine::execute::matches_predicate;
use txt2db_core::types::value::{compare_values, normalize_value, parse_number, values_equal};
use std::cmp::Ordering;

fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn format_header_only_when_no_rows() {
    assert_eq!(format_select(&strings(&["a", "b"]), &[]), "a\tb");
}

#[test]
fn format_rows_tab_separated() {
    let out = format_select(
        &strings(&["fname", "age"]),
        &[strings(&["Flo", "20"]), strings(&["Ada", "28"])],
    );
    assert_eq!(out, "fname\tage\nFlo\t20\nAda\t28");
}

#[test]
fn parse_output_is_inverse_of_format() {
    let columns = strings(&["fname", "lname", "major", "age"]);
    let rows = vec![
        strings(&["Flo", "Yao", "CS", "20"]),
        strings(&["Ada", "", "Math, Applied", "28"]),
        strings(&["Bo", "Kim", "Art", ""]),
        strings(&["Zoë", "O'Brien", "\"quoted\"", "1e3"]),
        strings(&["", "", "", ""]),
    ];
    let parsed = parse_select_output(&format_select(&columns, &rows));
    assert_eq!(parsed.columns, columns);
    assert_eq!(parsed.rows, rows);

    let empty = parse_select_output(&format_select(&columns, &[]));
    assert_eq!(empty.columns, columns);
    assert!(empty.rows.is_empty());
}

#[test]
fn parse_output_keeps_rows_of_empty_cells() {
    let columns = strings(&["a", "b"]);
    let rows = vec![strings(&["", ""]), strings(&["1", ""])];
    let parsed = parse_select_output(&format_select(&columns, &rows));
    assert_eq!(parsed.columns, columns);
    assert_eq!(parsed.rows, rows);
}

#[test]
fn parse_output_skips_blank_lines_and_trims_cells() {
    let parsed = parse_select_output("\n a \t b\n\n 1 \t 2 \n   \n3\t4\n");
    assert_eq!(parsed.columns, strings(&["a", "b"]));
    assert_eq!(parsed.rows, vec![strings(&["1", "2"]), strings(&["3", "4"])]);
}

#[test]
fn parse_output_short_and_long_rows() {
    let parsed = parse_select_output("a\tb\tc\n1\n1\t2\t3\t4");
    assert_eq!(parsed.rows[0], strings(&["1"]));
    assert_eq!(parsed.rows[1], strings(&["1", "2", "3"]));
    assert_eq!(parsed.get(0, "a"), Some("1"));
    assert_eq!(parsed.get(0, "b"), None);
    assert_eq!(parsed.get(1, "c"), Some("3"));
    assert_eq!(parsed.get(1, "zzz"), None);
    assert_eq!(parsed.record(0).unwrap(), vec![("a", "1")]);
    assert!(parsed.record(2).is_none());
}

#[test]
fn parse_output_empty_text() {
    assert_eq!(parse_select_output(""), TabularData::default());
    assert_eq!(parse_select_output("\n\n"), TabularData::default());
}

#[test]
fn normalize_strips_one_matching_pair() {
    assert_eq!(normalize_value(r#""Flo""#), "Flo");
    assert_eq!(normalize_value("'Flo'"), "Flo");
    assert_eq!(normalize_value(r#"""Flo"""#), r#""Flo""#);
    assert_eq!(normalize_value("Flo"), "Flo");
    assert_eq!(normalize_value(r#""Flo'"#), r#""Flo'"#);
    assert_eq!(normalize_value(r#""Flo"#), r#""Flo"#);
    assert_eq!(normalize_value("\""), "\"");
    assert_eq!(normalize_value("''"), "");
}

#[test]
fn parse_number_rules() {
    assert_eq!(parse_number("20"), Some(20.0));
    assert_eq!(parse_number("-3.5"), Some(-3.5));
    assert_eq!(parse_number("1e3"), Some(1000.0));
    assert_eq!(parse_number(""), None);
    assert_eq!(parse_number("CS"), None);
    assert_eq!(parse_number("nan"), None);
    assert_eq!(parse_number("inf"), None);
    assert_eq!(parse_number("12abc"), None);
}

#[test]
fn compare_numeric_or_lexical() {
    assert_eq!(compare_values("9", "10"), Ordering::Less);
    assert_eq!(compare_values("9", "10x"), Ordering::Greater);
    assert_eq!(compare_values("apple", "banana"), Ordering::Less);
    assert!(values_equal("20", "20.00"));
    assert!(!values_equal("CS", "cs"));
}

#[test]
fn predicate_evaluates_directly_against_a_row() {
    let columns = strings(&["major", "age"]);
    let row = strings(&["CS", "20"]);
    assert!(matches_predicate(&row, &columns, "where major = CS and age < 25").unwrap());
    assert!(!matches_predicate(&row, &columns, "major = Math").unwrap());
    assert!(matches_predicate(&row, &columns, "major = Math or Age = 20").unwrap());
    assert!(!matches_predicate(&row, &columns, "gpa = 4").unwrap());
    assert!(matches_predicate(&row, &columns, "gibberish").unwrap());
    assert!(matches_predicate(&row, &columns, "").is_err());
}
