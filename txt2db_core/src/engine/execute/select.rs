use tracing::debug;

use crate::engine::result::QueryResult;
use crate::error::EngineError;
use crate::parser::command::WhereClause;
use crate::storage::{Catalog, StorageEngine};
use crate::types::Row;
use super::filter::eval_where_row;

pub(super) fn handle_select(
    table: String,
    filter: Option<WhereClause>,
    catalog: &Catalog,
    storage: &dyn StorageEngine,
) -> Result<QueryResult, EngineError> {
    let schema = catalog.schema(&table)?;
    let rows = storage.scan(&table)?;

    let selected: Vec<Row> = match &filter {
        Some(clause) => rows
            .iter()
            .filter(|row| eval_where_row(row, schema, clause))
            .cloned()
            .collect(),
        None => rows.to_vec(),
    };
    debug!(table = %table, scanned = rows.len(), matched = selected.len(), "select");

    Ok(QueryResult::Selected {
        table,
        columns: schema.column_names(),
        rows: selected,
    })
}
