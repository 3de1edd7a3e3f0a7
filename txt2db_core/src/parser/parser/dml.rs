use crate::error::EngineError;
use crate::parser::command::Command;
use crate::types::value::normalize_value;
use super::common::{identifier, split_list};
use super::tokenizer::tokenize;

const INSERT_USAGE: &str = "use insert into <table> values <v1>, <v2>, ...";

pub(super) fn parse_insert(input: &str) -> Result<Command, EngineError> {
    // insert into <table> values <v1>, <v2>, ...
    let tokens = tokenize(input).map_err(|e| EngineError::malformed("INSERT", e))?;
    if tokens.len() < 5 || !tokens[1].is_keyword("into") {
        return Err(EngineError::malformed("INSERT", INSERT_USAGE));
    }
    let table = identifier(&tokens[2]).ok_or_else(|| {
        EngineError::malformed("INSERT", format!("bad table name '{}'", tokens[2].text))
    })?;
    if !tokens[3].is_keyword("values") {
        return Err(EngineError::malformed("INSERT", INSERT_USAGE));
    }

    let values = split_list(input, &tokens[4..])
        .iter()
        .map(|v| normalize_value(v))
        .collect();

    Ok(Command::Insert { table, values })
}
