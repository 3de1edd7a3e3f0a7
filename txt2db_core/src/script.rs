//! Line-oriented command scripts.
//!
//! A script is plain text with one command per line. Lines that cannot start
//! a command (blank lines, `//` or `/*` comments, free-form notes) are kept
//! as comments so a transcript can echo them. Commands run strictly one after
//! another and a failure never stops the rest of the script.

use tracing::{debug, warn};

use crate::engine::{CommandResponse, QueryResult};
use crate::error::EngineError;
use crate::Database;

#[derive(Debug, Clone, PartialEq)]
pub enum ScriptLine {
    Command(String),
    Comment(String),
}

/// Classifies every line of `text`, in order.
pub fn split_script(text: &str) -> Vec<ScriptLine> {
    text.lines()
        .map(|line| {
            let trimmed = line.trim();
            if is_command_line(trimmed) {
                ScriptLine::Command(trimmed.to_string())
            } else {
                ScriptLine::Comment(line.trim_end().to_string())
            }
        })
        .collect()
}

fn is_command_line(trimmed: &str) -> bool {
    if trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*') {
        return false;
    }
    matches!(
        trimmed.chars().next().map(|c| c.to_ascii_lowercase()),
        Some('m' | 'c' | 'i' | 's')
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    /// 1-based position among the script's commands.
    pub index: usize,
    pub command: String,
    pub outcome: Result<QueryResult, EngineError>,
}

impl BatchEntry {
    pub fn response(&self) -> CommandResponse {
        CommandResponse::from(&self.outcome)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.entries.len() - self.succeeded()
    }

    pub fn errors(&self) -> impl Iterator<Item = &BatchEntry> {
        self.entries.iter().filter(|e| e.outcome.is_err())
    }
}

/// Runs the given commands in order against `db`, recording every outcome.
pub fn run_commands<I, S>(db: &mut Database, commands: I) -> BatchReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = BatchReport::default();
    for (i, command) in commands.into_iter().enumerate() {
        let command = command.as_ref().trim().to_string();
        let outcome = db.execute(&command);
        if let Err(e) = &outcome {
            warn!(index = i + 1, error = %e, "batch command failed");
        }
        report.entries.push(BatchEntry {
            index: i + 1,
            command,
            outcome,
        });
    }
    debug!(
        succeeded = report.succeeded(),
        failed = report.failed(),
        "batch finished"
    );
    report
}

/// Splits `text` into lines and runs its command lines.
pub fn run_script(db: &mut Database, text: &str) -> BatchReport {
    let commands = split_script(text).into_iter().filter_map(|line| match line {
        ScriptLine::Command(cmd) => Some(cmd),
        ScriptLine::Comment(_) => None,
    });
    run_commands(db, commands)
}
