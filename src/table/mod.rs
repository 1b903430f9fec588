use crate::error::{Error, Result};


/// Render a bordered, fixed-width text table.
///
/// ```text
/// +--------------+
/// | Extension ID |
/// +--------------+
/// | foo.bar      |
/// +--------------+
/// ```
///
/// Every row must have exactly as many cells as `headers`. Lines are joined
/// with `\n` and the result has no trailing newline.
pub fn render_table<S: AsRef<str>>(headers: &[S], rows: &[Vec<S>]) -> Result<String> {
    if let Some((row, cells)) = rows
        .iter()
        .enumerate()
        .find(|(_, cells)| cells.len() != headers.len())
    {
        return Err(Error::RaggedTable {
            row,
            expected: headers.len(),
            found: cells.len(),
        });
    }

    let widths: Vec<usize> = (0..headers.len())
        .map(|col| {
            std::iter::once(&headers[col])
                .chain(rows.iter().map(|cells| &cells[col]))
                .map(|cell| cell.as_ref().chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let separator = separator_line(&widths);

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(separator.clone());
    lines.push(format_row(headers, &widths));
    lines.push(separator.clone());
    lines.extend(rows.iter().map(|cells| format_row(cells, &widths)));
    // with no rows, the header separator doubles as the closing one
    if !rows.is_empty() {
        lines.push(separator);
    }
    Ok(lines.join("\n"))
}

/// Render a one-column table, the shape every listing command prints.
pub fn render_list<S: AsRef<str>>(header: &str, items: &[S]) -> String {
    let width = items
        .iter()
        .map(|item| item.as_ref().chars().count())
        .fold(header.chars().count(), usize::max);
    let widths = [width];
    let separator = separator_line(&widths);

    let mut lines = Vec::with_capacity(items.len() + 4);
    lines.push(separator.clone());
    lines.push(format_row(&[header], &widths));
    lines.push(separator.clone());
    lines.extend(items.iter().map(|item| format_row(&[item.as_ref()], &widths)));
    if !items.is_empty() {
        lines.push(separator);
    }
    lines.join("\n")
}

fn separator_line(widths: &[usize]) -> String {
    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    format!("+{}+", dashes.join("+"))
}

fn format_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell.as_ref()))
        .collect();
    format!("| {} |", padded.join(" | "))
}
