use txt2db_core::error::EngineError;
use txt2db_core::parser::command::{Command, CompareOp, LogicalOp, Predicate, WhereClause};
use txt2db_core::parser::parser::{classify, parse, parse_where, tokenize, CommandKind, TokenKind};

fn pred(column: &str, op: CompareOp, value: &str) -> WhereClause {
    WhereClause::Predicate(Predicate {
        column: column.to_string(),
        op,
        value: value.to_string(),
    })
}

fn binary(left: WhereClause, op: LogicalOp, right: WhereClause) -> WhereClause {
    WhereClause::Binary {
        left: Box::new(left),
        op,
        right: Box::new(right),
    }
}

mod create;
mod dml;
mod select;
mod tokenizer;
mod where_clause;
