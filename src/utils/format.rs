//! Formatting utilities for terminal display.

/// Lay out `items` in `columns` column-major columns.
///
/// Every cell is left-aligned and padded to the longest item plus two
/// spaces, so rows keep their trailing padding. Returns one string per row.
pub fn format_columns(items: &[&str], columns: usize) -> Vec<String> {
    if items.is_empty() || columns == 0 {
        return Vec::new();
    }

    let width = items.iter().map(|s| s.chars().count()).max().unwrap_or(0) + 2;
    let rows = items.len().div_ceil(columns);

    (0..rows)
        .map(|row| {
            (0..columns)
                .filter_map(|col| items.get(row + col * rows))
                .map(|item| format!("{:<width$}", item, width = width))
                .collect()
        })
        .collect()
}

/// Format a byte count right-aligned in a field of eight, as `ls -l` does.
pub fn format_size(bytes: u64) -> String {
    format!("{:>8}", bytes)
}
