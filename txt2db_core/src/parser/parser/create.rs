use crate::error::EngineError;
use crate::parser::command::Command;
use super::common::{identifier, split_list};
use super::tokenizer::tokenize;

const CREATE_USAGE: &str = "use make table <name> fields <field1>, <field2>, ...";

pub(super) fn parse_create(input: &str) -> Result<Command, EngineError> {
    // make table <table> fields <f1>, <f2>, ...
    let tokens = tokenize(input).map_err(|e| EngineError::malformed("MAKE TABLE", e))?;
    if tokens.len() < 5 || !tokens[1].is_keyword("table") {
        return Err(EngineError::malformed("MAKE TABLE", CREATE_USAGE));
    }
    let table = identifier(&tokens[2]).ok_or_else(|| {
        EngineError::malformed("MAKE TABLE", format!("bad table name '{}'", tokens[2].text))
    })?;
    if !tokens[3].is_keyword("fields") {
        return Err(EngineError::malformed("MAKE TABLE", CREATE_USAGE));
    }

    let columns = split_list(input, &tokens[4..]);
    if columns.iter().any(String::is_empty) {
        return Err(EngineError::malformed(
            "MAKE TABLE",
            "field names cannot be empty",
        ));
    }

    Ok(Command::Create { table, columns })
}
