use tracing::warn;

use crate::error::EngineError;
use crate::parser::command::{CompareOp, LogicalOp, Predicate, WhereClause};
use crate::types::value::normalize_value;
use super::common::raw_slice;
use super::tokenizer::{tokenize, Token, TokenKind};

pub(super) fn parse_compare_op(raw: &str) -> Option<CompareOp> {
    match raw {
        "=" => Some(CompareOp::Eq),
        "!=" => Some(CompareOp::NotEq),
        ">" => Some(CompareOp::Gt),
        "<" => Some(CompareOp::Lt),
        ">=" => Some(CompareOp::Gte),
        "<=" => Some(CompareOp::Lte),
        _ => None,
    }
}

/// Parses predicate text, with or without a leading `where` keyword.
pub fn parse_where(raw: &str) -> Result<WhereClause, EngineError> {
    let tokens = tokenize(raw).map_err(|e| EngineError::malformed("WHERE", e))?;
    parse_where_tokens(raw, &tokens)
}

/// OR binds loosest: the token run is split on `or` first and each part on
/// `and`. There is no grouping with parentheses. One leading `where` is
/// skipped.
pub(super) fn parse_where_tokens(
    input: &str,
    tokens: &[Token],
) -> Result<WhereClause, EngineError> {
    let tokens = match tokens.first() {
        Some(t) if t.is_keyword("where") => &tokens[1..],
        _ => tokens,
    };
    if tokens.is_empty() {
        return Err(EngineError::malformed("WHERE", "missing predicate after WHERE"));
    }
    let mut idx = 0usize;
    Ok(parse_or_expr(input, tokens, &mut idx))
}

fn parse_or_expr(input: &str, tokens: &[Token], idx: &mut usize) -> WhereClause {
    let mut left = parse_and_expr(input, tokens, idx);
    while *idx < tokens.len() && tokens[*idx].is_keyword("or") {
        *idx += 1;
        let right = parse_and_expr(input, tokens, idx);
        left = WhereClause::Binary {
            left: Box::new(left),
            op: LogicalOp::Or,
            right: Box::new(right),
        };
    }
    left
}

fn parse_and_expr(input: &str, tokens: &[Token], idx: &mut usize) -> WhereClause {
    let mut left = parse_atom(input, tokens, idx);
    while *idx < tokens.len() && tokens[*idx].is_keyword("and") {
        *idx += 1;
        let right = parse_atom(input, tokens, idx);
        left = WhereClause::Binary {
            left: Box::new(left),
            op: LogicalOp::And,
            right: Box::new(right),
        };
    }
    left
}

fn parse_atom(input: &str, tokens: &[Token], idx: &mut usize) -> WhereClause {
    let start = *idx;
    while *idx < tokens.len() && !tokens[*idx].is_keyword("and") && !tokens[*idx].is_keyword("or")
    {
        *idx += 1;
    }
    let run = &tokens[start..*idx];

    // The comparison is the first operator with a column word before it and
    // a value after it. Only the trailing word segment of the column token
    // counts, so `people.age` compares `age`.
    if let Some(op_at) = run.iter().position(|t| t.kind == TokenKind::Op) {
        let column = op_at
            .checked_sub(1)
            .and_then(|i| trailing_identifier(&run[i]));
        let op = parse_compare_op(&run[op_at].text);
        if let (Some(column), Some(op)) = (column, op) {
            if op_at + 1 < run.len() {
                let value = normalize_value(raw_slice(input, &run[op_at + 1..]).trim());
                return WhereClause::Predicate(Predicate { column, op, value });
            }
        }
    }

    let text = raw_slice(input, run).to_string();
    warn!(clause = %text, "unparseable predicate, matching every row");
    WhereClause::Unmatched(text)
}

fn trailing_identifier(token: &Token) -> Option<String> {
    if token.kind != TokenKind::Word {
        return None;
    }
    let tail: Vec<char> = token
        .text
        .chars()
        .rev()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    if tail.is_empty() {
        return None;
    }
    Some(tail.into_iter().rev().collect())
}
