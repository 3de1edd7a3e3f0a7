use crate::error::EngineError;
use crate::types::Row;

/// Storage engine trait - abstraction over where rows live
pub trait StorageEngine {
    /// Allocates an empty row list for a table, discarding any rows it held
    fn create_table(&mut self, table: &str);

    /// Appends a row to the specified table
    fn insert_row(&mut self, table: &str, row: Row) -> Result<(), EngineError>;

    /// Scans all rows from the specified table in insertion order
    fn scan(&self, table: &str) -> Result<&[Row], EngineError>;

    /// Drops every table and row
    fn clear(&mut self);
}
