use crate::common::constants::TABLE_HEADERS;
use crate::common::types::LinkRecord;

fn row(record: &LinkRecord) -> [&str; 4] {
    [
        record.kind.type_label(),
        record.identifier.as_str(),
        record.base.as_str(),
        record.url.as_str(),
    ]
}

/// Plain-text table with the `Tipo | Identificador | Base | Link Final`
/// columns, padded to the widest cell. The last column is never padded.
pub fn render_table(records: &[LinkRecord]) -> String {
    let mut widths = TABLE_HEADERS.map(|h| h.chars().count());
    for record in records {
        for (width, cell) in widths.iter_mut().zip(row(record)) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: [&str; 4]| -> String {
        let mut line = String::new();
        for (i, cell) in cells.iter().enumerate() {
            if i == cells.len() - 1 {
                line.push_str(cell);
            } else {
                line.push_str(&format!("{:<width$} | ", cell, width = widths[i]));
            }
        }
        line.trim_end().to_string()
    };

    let mut lines = Vec::with_capacity(records.len() + 2);
    lines.push(format_line(TABLE_HEADERS));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for record in records {
        lines.push(format_line(row(record)));
    }

    lines.join("\n")
}
