use std::cmp::Ordering;

use crate::error::EngineError;
use crate::parser::command::{CompareOp, LogicalOp, Predicate, WhereClause};
use crate::parser::parser::parse_where;
use crate::storage::Schema;
use crate::types::value::{compare_values, values_equal};

/// Evaluates a parsed WHERE clause against one row.
pub fn eval_where_row(row: &[String], schema: &Schema, clause: &WhereClause) -> bool {
    match clause {
        WhereClause::Predicate(p) => predicate_matches(row, schema, p),
        WhereClause::Unmatched(_) => true,
        WhereClause::Binary { left, op, right } => match op {
            LogicalOp::And => eval_where_row(row, schema, left) && eval_where_row(row, schema, right),
            LogicalOp::Or => eval_where_row(row, schema, left) || eval_where_row(row, schema, right),
        },
    }
}

/// Parses `raw` (with or without a leading `where`) and evaluates it against
/// a row laid out by `columns`.
pub fn matches_predicate(
    row: &[String],
    columns: &[String],
    raw: &str,
) -> Result<bool, EngineError> {
    let clause = parse_where(raw)?;
    let schema = Schema::from_names(columns.to_vec());
    Ok(eval_where_row(row, &schema, &clause))
}

fn predicate_matches(row: &[String], schema: &Schema, p: &Predicate) -> bool {
    // Unknown columns never match.
    let Some(idx) = schema.find_column(&p.column) else {
        return false;
    };
    let cell = row.get(idx).map(String::as_str).unwrap_or("");
    compare_cell(cell, p.op, &p.value)
}

fn compare_cell(cell: &str, op: CompareOp, literal: &str) -> bool {
    match op {
        CompareOp::Eq => values_equal(cell, literal),
        CompareOp::NotEq => !values_equal(cell, literal),
        CompareOp::Gt => compare_values(cell, literal) == Ordering::Greater,
        CompareOp::Lt => compare_values(cell, literal) == Ordering::Less,
        CompareOp::Gte => compare_values(cell, literal) != Ordering::Less,
        CompareOp::Lte => compare_values(cell, literal) != Ordering::Greater,
    }
}
