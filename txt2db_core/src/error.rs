use thiserror::Error;

/// Every way a single command can fail. A failed command never leaves the
/// store partially modified.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Input starts with none of the known command verbs. Carries at most the
    /// first 50 characters of the input.
    #[error("Unsupported command: {0}")]
    UnrecognizedCommand(String),

    #[error("{0}")]
    MalformedCommand(String),

    #[error("Table {0} does not exist")]
    TableNotFound(String),

    #[error("Table {table} expects {expected} values but got {got}")]
    ArityMismatch {
        table: String,
        expected: usize,
        got: usize,
    },
}

impl EngineError {
    pub(crate) fn unrecognized(input: &str) -> Self {
        EngineError::UnrecognizedCommand(input.chars().take(50).collect())
    }

    pub(crate) fn malformed(form: &str, detail: impl AsRef<str>) -> Self {
        EngineError::MalformedCommand(format!("Invalid {form} syntax: {}", detail.as_ref()))
    }

    /// Short machine-friendly name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::UnrecognizedCommand(_) => "unrecognized_command",
            EngineError::MalformedCommand(_) => "malformed_command",
            EngineError::TableNotFound(_) => "table_not_found",
            EngineError::ArityMismatch { .. } => "arity_mismatch",
        }
    }
}
