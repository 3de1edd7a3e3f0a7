use serde::{Deserialize, Serialize};

use crate::types::Row;

/// Formats a SELECT result as a tab-separated table
pub fn format_select(columns: &[String], rows: &[Row]) -> String {
    // Build header line with column names
    let header = columns.join("\t");

    // If no rows, return just the header
    if rows.is_empty() {
        return header;
    }

    // Build row lines
    let row_lines = rows
        .iter()
        .map(|row| row.join("\t"))
        .collect::<Vec<_>>()
        .join("\n");

    // Combine header and rows
    format!("{}\n{}", header, row_lines)
}

/// Columns and rows recovered from the tab-separated wire format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabularData {
    pub columns: Vec<String>,
    /// Positionally aligned to `columns`; a short row simply lacks its
    /// trailing columns.
    pub rows: Vec<Row>,
}

impl TabularData {
    /// Cell of `row` under `column`, if that row has a value there.
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(idx).map(String::as_str)
    }

    /// One row as `(column, value)` pairs in column order.
    pub fn record(&self, row: usize) -> Option<Vec<(&str, &str)>> {
        let values = self.rows.get(row)?;
        Some(
            self.columns
                .iter()
                .zip(values.iter())
                .map(|(c, v)| (c.as_str(), v.as_str()))
                .collect(),
        )
    }
}

/// Inverse of [`format_select`]. Lines that are empty or hold only spaces are
/// skipped (a lone tab is a row of empty cells), the first line is the
/// header, and every cell is trimmed. Values beyond the header width are
/// dropped.
pub fn parse_select_output(output: &str) -> TabularData {
    let mut lines = output
        .split('\n')
        .filter(|line| !line.chars().all(|c| c == ' ' || c == '\r'));

    let Some(header) = lines.next() else {
        return TabularData::default();
    };
    let columns: Vec<String> = header.split('\t').map(|c| c.trim().to_string()).collect();

    let rows = lines
        .map(|line| {
            line.split('\t')
                .take(columns.len())
                .map(|v| v.trim().to_string())
                .collect::<Row>()
        })
        .collect();

    TabularData { columns, rows }
}
