pub mod schema;
pub mod catalog;
pub mod engine;
pub mod mem;

// Re-export main types for convenience
pub use schema::{Column, ColumnInfo, Schema, TableSchema};
pub use catalog::Catalog;
pub use engine::StorageEngine;
pub use mem::MemStorage;
