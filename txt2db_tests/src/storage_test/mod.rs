use txt2db_core::error::EngineError;
use txt2db_core::storage::{Catalog, MemStorage, Schema, StorageEngine};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

mod catalog;
mod mem;
