#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CompareOp {
    Eq,
    NotEq,
    Gt,
    Lt,
    Gte,
    Lte,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogicalOp {
    And,
    Or,
}

/// `<column> <op> <value>`; `value` has already been unquoted.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: String,
    pub op: CompareOp,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WhereClause {
    Predicate(Predicate),
    /// A clause that is not `<column> <op> <value>`. Matches every row.
    Unmatched(String),
    Binary {
        left: Box<WhereClause>,
        op: LogicalOp,
        right: Box<WhereClause>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Create {
        table: String,
        columns: Vec<String>,
    },

    Insert {
        table: String,
        values: Vec<String>,
    },

    Select {
        table: String,
        filter: Option<WhereClause>,
    },
}

impl Command {
    pub fn table(&self) -> &str {
        match self {
            Command::Create { table, .. }
            | Command::Insert { table, .. }
            | Command::Select { table, .. } => table,
        }
    }
}
