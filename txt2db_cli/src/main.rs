mod backend;
mod batch;
mod config;
mod remote;
mod render;

use std::io::{self, Write};
use std::str::FromStr;

use anyhow::Result;
use backend::{Backend, EmbeddedBackend};
use config::CliConfig;
use remote::RemoteBackend;
use txt2db_core::parser::parser::parse;

fn init_tracing(level: &str) {
    let level = tracing::Level::from_str(level).unwrap_or(tracing::Level::WARN);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn print_help() {
    println!("Commands:");
    println!("  make table <name> fields <a>, <b>, ...");
    println!("  insert into <name> values <v1>, <v2>, ...");
    println!("  select * from <name> [where <col> <op> <value> [and|or ...]]");
    println!("  tables        -> list tables");
    println!("  schema <name> -> show a table's fields");
    println!("  parse <cmd>   -> show parsed Command (debug)");
    println!("  batch <file>  -> run a script file and save a transcript");
    println!("  reset         -> drop every table");
    println!("  exit|quit     -> quit");
    println!("  help          -> help");
    println!("  (anything else is executed)");
}

fn main() -> Result<()> {
    let config = CliConfig::from_env();
    init_tracing(&config.log_level);

    let mut backend: Box<dyn Backend> = match &config.server {
        Some(url) => {
            println!("txt2db_cli connected to {url} (type 'help' or 'exit')");
            Box::new(RemoteBackend::new(url)?)
        }
        None => {
            println!("txt2db_cli (type 'help' or 'exit')");
            Box::new(EmbeddedBackend::default())
        }
    };

    loop {
        print!("txt2db> ");
        io::stdout().flush()?;

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => {
                println!("Failed to read input");
                continue;
            }
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        if input.eq_ignore_ascii_case("help") {
            print_help();
            continue;
        }

        if let Err(err) = handle_line(backend.as_mut(), &config, input) {
            eprintln!("{err:#}");
        }
    }
    Ok(())
}

/// Argument of a `<keyword> <arg>` meta command; the keyword is matched
/// case-insensitively.
fn meta_arg<'a>(input: &'a str, keyword: &str) -> Option<&'a str> {
    let (head, rest) = input.split_once(char::is_whitespace)?;
    head.eq_ignore_ascii_case(keyword).then(|| rest.trim())
}

fn handle_line(backend: &mut dyn Backend, config: &CliConfig, input: &str) -> Result<()> {
    if input.eq_ignore_ascii_case("tables") {
        let tables = backend.tables()?;
        if tables.is_empty() {
            println!("(no tables)");
        } else {
            for name in tables {
                println!("{name}");
            }
        }
        return Ok(());
    }

    if input.eq_ignore_ascii_case("reset") {
        backend.reset()?;
        println!("All tables dropped");
        return Ok(());
    }

    if let Some(name) = meta_arg(input, "schema") {
        match backend.schema(name)? {
            Some(schema) => {
                for col in schema.columns {
                    println!("  {} {}", col.name, col.dtype);
                }
            }
            None => println!("Table {name} does not exist"),
        }
        return Ok(());
    }

    // ---- PARSE DEBUG MODE ----
    if let Some(rest) = meta_arg(input, "parse") {
        match parse(rest) {
            Ok(cmd) => println!("Parsed as: {cmd:?}"),
            Err(e) => eprintln!("Parse error: {e}"),
        }
        return Ok(());
    }

    if let Some(rest) = meta_arg(input, "batch") {
        let summary = batch::run_batch_file(backend, rest, &config.output_dir)?;
        println!(
            "Batch done: {} succeeded, {} failed. Transcript: {}",
            summary.succeeded,
            summary.failed,
            summary.transcript.display()
        );
        return Ok(());
    }

    // ---- NORMAL EXECUTION MODE ----
    let response = backend.execute(input)?;
    println!("{}", render::render_response(&response));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::meta_arg;

    #[test]
    fn meta_commands_ignore_keyword_case() {
        assert_eq!(meta_arg("schema people", "schema"), Some("people"));
        assert_eq!(meta_arg("SCHEMA people", "schema"), Some("people"));
        assert_eq!(meta_arg("Batch  demo.txt ", "batch"), Some("demo.txt"));
        assert_eq!(meta_arg("PARSE select * from t", "parse"), Some("select * from t"));
    }

    #[test]
    fn meta_arg_needs_the_whole_keyword() {
        assert_eq!(meta_arg("schemas people", "schema"), None);
        assert_eq!(meta_arg("schema", "schema"), None);
        assert_eq!(meta_arg("select * from t", "schema"), None);
    }
}
