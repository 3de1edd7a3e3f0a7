use criterion::{black_box, criterion_group, criterion_main, Criterion};
use txt2db_core::Database;

fn seeded_db(rows: usize) -> Database {
    let mut db = Database::new();
    db.execute("make table student fields fname, lname, major, age")
        .unwrap();
    for i in 0..rows {
        let major = if i % 3 == 0 { "CS" } else { "Math" };
        db.execute(&format!(
            "insert into student values f{i}, l{i}, {major}, {}",
            18 + i % 40
        ))
        .unwrap();
    }
    db
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("insert_1000_rows", |b| {
        b.iter(|| black_box(seeded_db(1000)))
    });
}

fn bench_filtered_select(c: &mut Criterion) {
    let mut db = seeded_db(5000);
    c.bench_function("select_where_and_or_5000_rows", |b| {
        b.iter(|| {
            let result = db
                .execute(r#"select * from student where major = "CS" and age < 25 or age >= 50"#)
                .unwrap();
            black_box(result.output())
        })
    });
}

criterion_group!(benches, bench_insert, bench_filtered_select);
criterion_main!(benches);
