use serde::{Deserialize, Serialize};

/// Represents a single column in a table schema. Every column holds text.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
}

/// Represents the schema of a table (list of columns)
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub columns: Vec<Column>,
}

impl Schema {
    /// Creates a schema from column names, keeping their order
    pub fn from_names(names: Vec<String>) -> Self {
        Self {
            columns: names.into_iter().map(|name| Column { name }).collect(),
        }
    }

    /// Returns the number of columns in this schema
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Position of a column, matched case-insensitively.
    pub fn find_column(&self, name: &str) -> Option<usize> {
        let wanted = name.to_lowercase();
        self.columns
            .iter()
            .position(|c| c.name.to_lowercase() == wanted)
    }
}

/// Column descriptor handed to callers that render a schema tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub dtype: String,
}

/// Table descriptor: name plus its columns in positional order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<ColumnInfo>,
}

impl TableSchema {
    pub fn new(name: &str, schema: &Schema) -> Self {
        Self {
            name: name.to_string(),
            columns: schema
                .columns
                .iter()
                .map(|c| ColumnInfo {
                    name: c.name.clone(),
                    dtype: "TEXT".to_string(),
                })
                .collect(),
        }
    }
}
