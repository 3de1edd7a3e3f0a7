use tracing::debug;

use crate::error::EngineError;
use crate::parser::command::Command;

mod common;
mod create;
mod dml;
mod select;
mod tokenizer;
mod where_clause;

pub use tokenizer::{tokenize, Token, TokenKind};
pub use where_clause::parse_where;

/// The three command forms, recognized from the leading keywords.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommandKind {
    Create,
    Insert,
    Select,
}

/// Classifies a command by its case-insensitive leading keywords, trying
/// `make table` (or `create table`), then `insert into`, then `select`.
pub fn classify(input: &str) -> Option<CommandKind> {
    let words = common::leading_words(input, 2);
    let first = words.first().map(String::as_str);
    let second = words.get(1).map(String::as_str);
    match (first, second) {
        (Some("make" | "create"), Some("table")) => Some(CommandKind::Create),
        (Some("insert"), Some("into")) => Some(CommandKind::Insert),
        (Some("select"), _) => Some(CommandKind::Select),
        _ => None,
    }
}

pub fn parse(input: &str) -> Result<Command, EngineError> {
    let input = input.trim();
    let cmd = match classify(input) {
        Some(CommandKind::Create) => create::parse_create(input),
        Some(CommandKind::Insert) => dml::parse_insert(input),
        Some(CommandKind::Select) => select::parse_select(input),
        None => Err(EngineError::unrecognized(input)),
    }?;
    debug!(?cmd, "parsed command");
    Ok(cmd)
}
