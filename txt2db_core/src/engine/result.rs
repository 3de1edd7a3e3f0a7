use serde::{Deserialize, Serialize};

use crate::engine::format::format_select;
use crate::error::EngineError;
use crate::types::Row;

/// Outcome of one successfully executed command.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    Created {
        table: String,
        columns: Vec<String>,
    },
    Inserted {
        table: String,
    },
    Selected {
        table: String,
        columns: Vec<String>,
        rows: Vec<Row>,
    },
}

impl QueryResult {
    pub fn table(&self) -> &str {
        match self {
            QueryResult::Created { table, .. }
            | QueryResult::Inserted { table }
            | QueryResult::Selected { table, .. } => table,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            QueryResult::Created { .. } => "create",
            QueryResult::Inserted { .. } => "insert",
            QueryResult::Selected { .. } => "select",
        }
    }

    /// Human-readable status line.
    pub fn message(&self) -> String {
        match self {
            QueryResult::Created { table, columns } => {
                format!("Table {} created with fields: {}", table, columns.join(", "))
            }
            QueryResult::Inserted { table } => format!("1 row inserted into {}", table),
            QueryResult::Selected { table, rows, .. } => {
                format!("{} row(s) selected from {}", rows.len(), table)
            }
        }
    }

    /// Tab-separated payload; only selections have one.
    pub fn output(&self) -> Option<String> {
        match self {
            QueryResult::Selected { columns, rows, .. } => Some(format_select(columns, rows)),
            _ => None,
        }
    }

    pub fn row_count(&self) -> Option<usize> {
        match self {
            QueryResult::Selected { rows, .. } => Some(rows.len()),
            _ => None,
        }
    }
}

/// JSON shape returned to callers: either the result fields or `error`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandResponse {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommandResponse {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!("{{\"error\": \"failed to serialize response: {e}\"}}")
        })
    }
}

impl From<&QueryResult> for CommandResponse {
    fn from(result: &QueryResult) -> Self {
        Self {
            kind: Some(result.kind().to_string()),
            table: Some(result.table().to_string()),
            message: Some(result.message()),
            output: result.output(),
            row_count: result.row_count(),
            error: None,
        }
    }
}

impl From<&EngineError> for CommandResponse {
    fn from(err: &EngineError) -> Self {
        Self {
            error: Some(err.to_string()),
            ..Self::default()
        }
    }
}

impl From<&Result<QueryResult, EngineError>> for CommandResponse {
    fn from(outcome: &Result<QueryResult, EngineError>) -> Self {
        match outcome {
            Ok(result) => result.into(),
            Err(err) => err.into(),
        }
    }
}
