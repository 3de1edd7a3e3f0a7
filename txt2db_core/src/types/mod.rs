pub mod value;

/// A row is a vector of text values, one per column
pub type Row = Vec<String>;
