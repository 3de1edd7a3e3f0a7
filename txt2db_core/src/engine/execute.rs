use crate::engine::result::QueryResult;
use crate::error::EngineError;
use crate::parser::command::Command;
use crate::storage::{Catalog, StorageEngine};

mod ddl;
mod dml;
mod filter;
mod select;

pub use filter::{eval_where_row, matches_predicate};

/// Executes a parsed command against the catalog and storage engine
pub fn execute_command(
    cmd: Command,
    catalog: &mut Catalog,
    storage: &mut dyn StorageEngine,
) -> Result<QueryResult, EngineError> {
    match cmd {
        Command::Create { table, columns } => ddl::handle_create(table, columns, catalog, storage),
        Command::Insert { table, values } => dml::handle_insert(table, values, catalog, storage),
        Command::Select { table, filter } => select::handle_select(table, filter, catalog, storage),
    }
}
