use std::collections::HashMap;
use crate::error::EngineError;
use crate::types::Row;
use crate::storage::engine::StorageEngine;

/// In-memory storage implementation using HashMap
#[derive(Debug, Default)]
pub struct MemStorage {
    tables: HashMap<String, Vec<Row>>,
}

impl MemStorage {
    /// Creates a new empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_count(&self, table: &str) -> Option<usize> {
        self.tables.get(table).map(Vec::len)
    }
}

impl StorageEngine for MemStorage {
    fn create_table(&mut self, table: &str) {
        self.tables.insert(table.to_string(), Vec::new());
    }

    fn insert_row(&mut self, table: &str, row: Row) -> Result<(), EngineError> {
        let rows = self
            .tables
            .get_mut(table)
            .ok_or_else(|| EngineError::TableNotFound(table.to_string()))?;
        rows.push(row);
        Ok(())
    }

    fn scan(&self, table: &str) -> Result<&[Row], EngineError> {
        let rows = self
            .tables
            .get(table)
            .ok_or_else(|| EngineError::TableNotFound(table.to_string()))?;
        Ok(rows.as_slice())
    }

    fn clear(&mut self) {
        self.tables.clear();
    }
}
