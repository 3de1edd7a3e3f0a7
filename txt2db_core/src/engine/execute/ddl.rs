use crate::engine::result::QueryResult;
use crate::error::EngineError;
use crate::storage::{Catalog, StorageEngine};

pub(super) fn handle_create(
    table: String,
    columns: Vec<String>,
    catalog: &mut Catalog,
    storage: &mut dyn StorageEngine,
) -> Result<QueryResult, EngineError> {
    // Re-creating a table drops its rows; there is no migration.
    catalog.create_or_replace(&table, columns.clone());
    storage.create_table(&table);
    Ok(QueryResult::Created { table, columns })
}
