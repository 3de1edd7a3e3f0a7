use txt2db_core::engine::{parse_select_output, TabularData};
use txt2db_core::CommandResponse;

/// Text shown to the user for one command response.
pub fn render_response(response: &CommandResponse) -> String {
    if let Some(err) = &response.error {
        return format!("Error: {err}");
    }
    let message = response.message.clone().unwrap_or_default();
    match &response.output {
        Some(output) => format!("{}\n{}", render_table(&parse_select_output(output)), message),
        None => message,
    }
}

/// Pads every column to its widest cell.
pub fn render_table(data: &TabularData) -> String {
    let mut widths: Vec<usize> = data.columns.iter().map(|c| c.chars().count()).collect();
    for row in &data.rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let line = |cells: &[String]| -> String {
        widths
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                format!("{:<width$}", cell, width = *w)
            })
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let rule = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-");

    let mut out = vec![line(&data.columns), rule];
    out.extend(data.rows.iter().map(|r| line(r)));
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_columns_to_widest_cell() {
        let data = parse_select_output("a\tbb\nxyz\t1");
        assert_eq!(render_table(&data), "a   | bb\n----+---\nxyz | 1");
    }

    #[test]
    fn errors_render_with_prefix() {
        let response = CommandResponse {
            error: Some("Table t does not exist".into()),
            ..Default::default()
        };
        assert_eq!(render_response(&response), "Error: Table t does not exist");
    }
}
