pub mod error;
pub mod types;
pub mod parser;
pub mod storage;
pub mod engine;
pub mod script;

pub use engine::{CommandResponse, QueryResult, TabularData};
pub use error::EngineError;
pub use storage::TableSchema;

use storage::{Catalog, MemStorage, Schema, StorageEngine};
use types::Row;

/// Read-only view of one stored table.
#[derive(Debug, Clone, Copy)]
pub struct TableRef<'a> {
    pub name: &'a str,
    pub schema: &'a Schema,
    pub rows: &'a [Row],
}

/// One in-memory database. Each instance owns its tables; nothing is shared
/// between instances and nothing outlives the process.
#[derive(Debug, Default)]
pub struct Database {
    catalog: Catalog,
    storage: MemStorage,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and runs one command. A failed command leaves every table as
    /// it was.
    pub fn execute(&mut self, input: &str) -> Result<QueryResult, EngineError> {
        let cmd = parser::parser::parse(input)?;
        engine::execute_command(cmd, &mut self.catalog, &mut self.storage)
    }

    /// Runs a command and wraps the outcome in the JSON response shape.
    pub fn execute_response(&mut self, input: &str) -> CommandResponse {
        CommandResponse::from(&self.execute(input))
    }

    pub fn table<'a>(&'a self, name: &'a str) -> Option<TableRef<'a>> {
        let schema = self.catalog.get(name)?;
        let rows = self.storage.scan(name).ok()?;
        Some(TableRef { name, schema, rows })
    }

    /// Table names in creation order.
    pub fn table_names(&self) -> Vec<String> {
        self.catalog.table_names()
    }

    pub fn schema(&self, name: &str) -> Option<TableSchema> {
        self.catalog.get(name).map(|s| TableSchema::new(name, s))
    }

    pub fn schemas(&self) -> Vec<TableSchema> {
        self.catalog.snapshot_tables()
    }

    /// Drops every table.
    pub fn reset(&mut self) {
        self.catalog.clear();
        self.storage.clear();
        tracing::info!("database reset");
    }
}
