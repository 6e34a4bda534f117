//! Fixed-width text helpers for terminal tables.

/// Pads `text` with spaces to `width` characters.
pub fn pad_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    format!("{text}{}", " ".repeat(width - len))
}

/// Truncates `text` to `width` characters, marking the cut with an ellipsis.
pub fn ellipsize(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept = text.chars().take(width.saturating_sub(1)).collect::<String>();
    format!("{kept}…")
}

/// Builds a header row, a dashed rule, and the body rows for fixed-width columns.
///
/// The last column is left unpadded.
pub fn table(headers: &[(&str, usize)], rows: &[Vec<String>]) -> Vec<String> {
    let render = |cells: &[String]| {
        cells
            .iter()
            .zip(headers)
            .enumerate()
            .map(|(idx, (cell, (_, width)))| {
                let cell = ellipsize(cell, *width);
                if idx + 1 == headers.len() {
                    cell
                } else {
                    pad_right(&cell, *width)
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    };

    let header = headers
        .iter()
        .map(|(label, _)| label.to_string())
        .collect::<Vec<_>>();
    let rule = headers
        .iter()
        .map(|(_, width)| "-".repeat(*width))
        .collect::<Vec<_>>();

    let mut out = vec![render(&header), render(&rule)];
    out.extend(rows.iter().map(|row| render(row)));
    out
}
