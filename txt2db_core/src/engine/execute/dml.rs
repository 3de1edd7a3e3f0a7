use tracing::info;

use crate::engine::result::QueryResult;
use crate::error::EngineError;
use crate::storage::{Catalog, StorageEngine};

pub(super) fn handle_insert(
    table: String,
    values: Vec<String>,
    catalog: &mut Catalog,
    storage: &mut dyn StorageEngine,
) -> Result<QueryResult, EngineError> {
    let schema = catalog.schema(&table)?;

    if values.len() != schema.column_count() {
        return Err(EngineError::ArityMismatch {
            table,
            expected: schema.column_count(),
            got: values.len(),
        });
    }

    storage.insert_row(&table, values)?;
    info!(table = %table, "inserted 1 row");
    Ok(QueryResult::Inserted { table })
}
