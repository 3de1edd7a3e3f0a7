use super::*;

#[test]
fn test_student_scenario_end_to_end() {
    let mut db = test_db();

    let created = db
        .execute("make table student fields fname, lname, major, age")
        .unwrap();
    assert_eq!(
        created,
        QueryResult::Created {
            table: "student".to_string(),
            columns: vec![
                "fname".to_string(),
                "lname".to_string(),
                "major".to_string(),
                "age".to_string()
            ],
        }
    );

    let inserted = db
        .execute("insert into student values Flo, Yao, CS, 20")
        .unwrap();
    assert_eq!(
        inserted,
        QueryResult::Inserted {
            table: "student".to_string()
        }
    );
    assert_eq!(
        db.table("student").unwrap().rows,
        &[vec![
            "Flo".to_string(),
            "Yao".to_string(),
            "CS".to_string(),
            "20".to_string()
        ]]
    );

    let selected = db.execute("select * from student where major = CS").unwrap();
    assert_eq!(
        selected.output().unwrap(),
        "fname\tlname\tmajor\tage\nFlo\tYao\tCS\t20"
    );
    assert_eq!(selected.row_count(), Some(1));
}

#[test]
fn test_status_messages() {
    let mut db = test_db();
    let created = db.execute("make table t fields a, b").unwrap();
    assert_eq!(created.message(), "Table t created with fields: a, b");

    let inserted = db.execute("insert into t values 1, 2").unwrap();
    assert_eq!(inserted.message(), "1 row inserted into t");
    assert!(inserted.output().is_none());

    let selected = db.execute("select * from t").unwrap();
    assert_eq!(selected.message(), "1 row(s) selected from t");
}

#[test]
fn test_create_fields_are_trimmed_and_ordered() {
    let mut db = test_db();
    db.execute("make table t fields   zeta ,alpha,  mid   ")
        .unwrap();
    let table = db.table("t").unwrap();
    assert_eq!(table.schema.column_names(), vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_keywords_case_insensitive_names_preserved() {
    let mut db = test_db();
    db.execute("MAKE TABLE Users FIELDS Name, Age").unwrap();
    db.execute("INSERT INTO Users VALUES Flo, 20").unwrap();

    let result = db.execute("SeLeCt * FrOm Users WhErE name = Flo").unwrap();
    assert_eq!(result.output().unwrap(), "Name\tAge\nFlo\t20");

    let err = db.execute("select * from users").unwrap_err();
    assert_eq!(err, EngineError::TableNotFound("users".to_string()));
}

#[test]
fn test_create_table_synonym() {
    let mut db = test_db();
    db.execute("create table t fields a").unwrap();
    assert_eq!(db.table_names(), vec!["t"]);
}

#[test]
fn test_select_empty_table_returns_header_only() {
    let mut db = test_db();
    db.execute("make table t fields a, b").unwrap();
    let result = db.execute("select * from t").unwrap();
    assert_eq!(result.output().unwrap(), "a\tb");
    assert_eq!(result.row_count(), Some(0));
    assert_eq!(result.message(), "0 row(s) selected from t");
}

#[test]
fn test_rows_kept_in_insertion_order() {
    let mut db = test_db();
    seed_ages(&mut db);
    let rows = select_rows(&mut db, "select * from people");
    assert_eq!(first_names(&rows), vec!["Ann", "Ben", "Cid"]);
}

#[test]
fn test_quoted_and_unquoted_values_store_the_same() {
    let mut db = test_db();
    db.execute("make table t fields name").unwrap();
    db.execute(r#"insert into t values "Flo""#).unwrap();
    db.execute("insert into t values Flo").unwrap();
    db.execute("insert into t values 'Flo'").unwrap();

    let rows = db.table("t").unwrap().rows;
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r == &vec!["Flo".to_string()]));
}

#[test]
fn test_quoted_value_keeps_commas_and_spaces() {
    let mut db = test_db();
    db.execute("make table t fields name, city").unwrap();
    db.execute(r#"insert into t values "Yao, Flo", 'New York'"#)
        .unwrap();
    assert_eq!(
        db.table("t").unwrap().rows[0],
        vec!["Yao, Flo".to_string(), "New York".to_string()]
    );
}

#[test]
fn test_unquoted_value_with_spaces() {
    let mut db = test_db();
    db.execute("make table t fields name, age").unwrap();
    db.execute("insert into t values Flo   Yao , 20").unwrap();
    assert_eq!(
        db.table("t").unwrap().rows[0],
        vec!["Flo   Yao".to_string(), "20".to_string()]
    );
}

#[test]
fn test_empty_value_is_empty_string() {
    let mut db = test_db();
    db.execute("make table t fields a, b, c").unwrap();
    db.execute("insert into t values x, , z").unwrap();
    let result = db.execute("select * from t").unwrap();
    assert_eq!(result.output().unwrap(), "a\tb\tc\nx\t\tz");
}

#[test]
fn test_apostrophe_inside_word_is_literal() {
    let mut db = test_db();
    db.execute("make table t fields name").unwrap();
    db.execute("insert into t values O'Brien").unwrap();
    assert_eq!(db.table("t").unwrap().rows[0], vec!["O'Brien".to_string()]);
}

#[test]
fn test_recreate_table_discards_rows() {
    let mut db = test_db();
    seed_ages(&mut db);
    db.execute("make table other fields x").unwrap();
    db.execute("make table people fields name, age, city")
        .unwrap();

    let result = db.execute("select * from people").unwrap();
    assert_eq!(result.output().unwrap(), "name\tage\tcity");
    assert_eq!(db.table_names(), vec!["people", "other"]);

    let err = db.execute("insert into people values Ann, 20").unwrap_err();
    assert!(matches!(err, EngineError::ArityMismatch { expected: 3, got: 2, .. }));
}

#[test]
fn test_multiple_tables_are_independent() {
    let mut db = test_db();
    db.execute("make table users fields id, name").unwrap();
    db.execute("make table products fields name, price")
        .unwrap();
    db.execute("insert into users values 1, ram").unwrap();
    db.execute("insert into products values laptop, 1000")
        .unwrap();

    let users = db.execute("select * from users").unwrap();
    assert_eq!(users.output().unwrap(), "id\tname\n1\tram");
    let products = db.execute("select * from products").unwrap();
    assert_eq!(products.output().unwrap(), "name\tprice\nlaptop\t1000");
}

#[test]
fn test_instances_do_not_share_tables() {
    let mut a = test_db();
    let b = test_db();
    a.execute("make table t fields x").unwrap();
    assert_eq!(a.table_names(), vec!["t"]);
    assert!(b.table_names().is_empty());
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    let mut db = test_db();
    db.execute("   make table t fields a   \n").unwrap();
    db.execute("\tinsert into t values 1  ").unwrap();
    assert_eq!(select_rows(&mut db, "  select * from t  ").len(), 1);
}

#[test]
fn test_student_fixture() {
    let db = student_db();
    assert_eq!(db.table("student").unwrap().rows.len(), 3);
}
