use txt2db_core::{Database, EngineError, QueryResult};
use txt2db_tests::{first_names, select_rows, student_db};

fn test_db() -> Database {
    Database::new()
}

fn seed_ages(db: &mut Database) {
    db.execute("make table people fields name, age").unwrap();
    db.execute("insert into people values Ann, 20").unwrap();
    db.execute("insert into people values Ben, 28").unwrap();
    db.execute("insert into people values Cid, 40").unwrap();
}

mod basic;
mod catalog;
mod errors;
mod select;
