use std::collections::HashMap;
use tracing::info;

use crate::error::EngineError;
use crate::storage::schema::{Schema, TableSchema};

/// Manages table schemas (metadata catalog). Names are case-sensitive keys
/// and keep the order in which they were first created.
#[derive(Debug, Default)]
pub struct Catalog {
    order: Vec<String>,
    tables: HashMap<String, Schema>,
}

impl Catalog {
    /// Creates a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if a table exists in the catalog
    pub fn exists(&self, table: &str) -> bool {
        self.tables.contains_key(table)
    }

    /// Stores the schema for `table`, replacing any previous definition.
    /// Returns true when an existing table was replaced.
    pub fn create_or_replace(&mut self, table: &str, columns: Vec<String>) -> bool {
        let replaced = self
            .tables
            .insert(table.to_string(), Schema::from_names(columns))
            .is_some();
        if replaced {
            info!(table, "replaced table schema");
        } else {
            self.order.push(table.to_string());
            info!(table, "created table schema");
        }
        replaced
    }

    pub fn get(&self, table: &str) -> Option<&Schema> {
        self.tables.get(table)
    }

    /// Retrieves the schema for a given table
    /// Returns an error if the table does not exist
    pub fn schema(&self, table: &str) -> Result<&Schema, EngineError> {
        self.tables
            .get(table)
            .ok_or_else(|| EngineError::TableNotFound(table.to_string()))
    }

    /// Table names in creation order
    pub fn table_names(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Returns cloned table names and schemas in creation order.
    pub fn snapshot_tables(&self) -> Vec<TableSchema> {
        self.order
            .iter()
            .filter_map(|name| self.tables.get(name).map(|s| TableSchema::new(name, s)))
            .collect()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.tables.clear();
    }
}
