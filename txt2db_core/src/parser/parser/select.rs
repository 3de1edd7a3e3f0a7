use crate::error::EngineError;
use crate::parser::command::Command;
use super::common::identifier;
use super::tokenizer::{tokenize, TokenKind};
use super::where_clause::parse_where_tokens;

const SELECT_USAGE: &str = "use select * from <table> [where <predicate>]";

pub(super) fn parse_select(input: &str) -> Result<Command, EngineError> {
    // select * from <table> [where <predicate>]
    let tokens = tokenize(input).map_err(|e| EngineError::malformed("SELECT", e))?;
    if tokens.len() < 4 || tokens[1].kind != TokenKind::Star || !tokens[2].is_keyword("from") {
        return Err(EngineError::malformed("SELECT", SELECT_USAGE));
    }
    let table = identifier(&tokens[3]).ok_or_else(|| {
        EngineError::malformed("SELECT", format!("bad table name '{}'", tokens[3].text))
    })?;

    if tokens.len() == 4 {
        return Ok(Command::Select {
            table,
            filter: None,
        });
    }

    if !tokens[4].is_keyword("where") {
        return Err(EngineError::malformed("SELECT", SELECT_USAGE));
    }
    let filter = parse_where_tokens(input, &tokens[5..])?;

    Ok(Command::Select {
        table,
        filter: Some(filter),
    })
}
