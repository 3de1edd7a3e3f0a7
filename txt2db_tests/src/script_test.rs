use txt2db_core::script::{run_commands, run_script, split_script, ScriptLine};
use txt2db_core::{Database, EngineError, QueryResult};

const SCRIPT: &str = "\
// students demo
make table student fields fname, lname, major, age
insert into student values Flo, Yao, CS, 20

insert into ghost values 1
* a note
insert into student values Ada, Lee, CS, 28
select * from student where age > 25
";

#[test]
fn split_script_classifies_lines() {
    let lines = split_script(SCRIPT);
    assert_eq!(lines[0], ScriptLine::Comment("// students demo".to_string()));
    assert_eq!(
        lines[1],
        ScriptLine::Command("make table student fields fname, lname, major, age".to_string())
    );
    assert_eq!(lines[3], ScriptLine::Comment(String::new()));
    assert_eq!(lines[5], ScriptLine::Comment("* a note".to_string()));

    let commands = lines
        .iter()
        .filter(|l| matches!(l, ScriptLine::Command(_)))
        .count();
    assert_eq!(commands, 5);
}

#[test]
fn split_script_treats_free_text_as_comment() {
    let lines = split_script("Expected output below:\n/* block */\n  SELECT * from t");
    assert!(matches!(lines[0], ScriptLine::Comment(_)));
    assert!(matches!(lines[1], ScriptLine::Comment(_)));
    assert_eq!(lines[2], ScriptLine::Command("SELECT * from t".to_string()));
}

#[test]
fn run_script_continues_after_failure() {
    let mut db = Database::new();
    let report = run_script(&mut db, SCRIPT);

    assert_eq!(report.entries.len(), 5);
    assert_eq!(report.succeeded(), 4);
    assert_eq!(report.failed(), 1);

    let failed: Vec<_> = report.errors().collect();
    assert_eq!(failed[0].index, 3);
    assert_eq!(
        failed[0].outcome,
        Err(EngineError::TableNotFound("ghost".to_string()))
    );

    let last = report.entries.last().unwrap();
    assert_eq!(last.index, 5);
    match &last.outcome {
        Ok(QueryResult::Selected { rows, .. }) => assert_eq!(rows.len(), 1),
        other => panic!("expected selection, got {other:?}"),
    }
    assert_eq!(db.table("student").unwrap().rows.len(), 2);
}

#[test]
fn batch_entry_response() {
    let mut db = Database::new();
    let report = run_commands(&mut db, ["make table t fields a", "bogus"]);
    assert!(!report.entries[0].response().is_error());
    assert_eq!(
        report.entries[1].response().error.as_deref(),
        Some("Unsupported command: bogus")
    );
}
