//! Shared fixtures for the txt2db integration tests.

use txt2db_core::Database;

/// The student table used throughout the tests:
/// (Flo, Yao, CS, 20), (Ada, Lee, CS, 28), (Bo, Kim, Math, 20).
pub fn student_db() -> Database {
    let mut db = Database::new();
    db.execute("make table student fields fname, lname, major, age")
        .unwrap();
    db.execute("insert into student values Flo, Yao, CS, 20")
        .unwrap();
    db.execute("insert into student values Ada, Lee, CS, 28")
        .unwrap();
    db.execute("insert into student values Bo, Kim, Math, 20")
        .unwrap();
    db
}

/// Runs a select and returns its rows.
pub fn select_rows(db: &mut Database, query: &str) -> Vec<Vec<String>> {
    match db.execute(query).unwrap() {
        txt2db_core::QueryResult::Selected { rows, .. } => rows,
        other => panic!("expected Selected result, got {other:?}"),
    }
}

/// First column of each row, handy for asserting which rows matched.
pub fn first_names(rows: &[Vec<String>]) -> Vec<&str> {
    rows.iter().map(|r| r[0].as_str()).collect()
}
