//! Display-width measurement and column sizing.
//!
//! Widths are terminal display columns, not char counts: East-Asian
//! wide characters and emoji occupy two columns, combining marks and
//! control characters occupy none. A char count would misalign any
//! table containing CJK text.

use unicode_width::UnicodeWidthStr;

use crate::grid::Table;

/// Minimum output width of a padded column.
///
/// Three columns leave room for the widest delimiter cell (`:-:`).
pub const MIN_COLUMN_WIDTH: usize = 3;

/// Number of display columns `text` occupies.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Compute the output width of every column.
///
/// In compact mode all widths are zero and cells keep their natural
/// width. Otherwise each column is as wide as its widest cell, floored
/// at [`MIN_COLUMN_WIDTH`]. The header row fixes the column count;
/// shorter rows contribute nothing for their missing columns and
/// longer rows are ignored past the header.
pub fn column_widths(table: &Table, compact: bool) -> Vec<usize> {
    let Some(header) = table.header() else {
        return Vec::new();
    };

    if compact {
        return vec![0; header.len()];
    }

    (0..header.len())
        .map(|col| {
            let widest = table
                .rows()
                .iter()
                .filter_map(|row| row.cell(col))
                .map(|cell| display_width(cell.content()))
                .max()
                .unwrap_or(0);
            widest.max(MIN_COLUMN_WIDTH)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::Alignment;
    use crate::grid::{Cell, Row};

    fn row(cells: &[&str]) -> Row {
        Row::new(
            cells
                .iter()
                .map(|c| Cell::new(*c, Alignment::Unspecified))
                .collect(),
        )
    }

    #[test]
    fn test_display_width_ascii() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn test_display_width_wide_chars() {
        // Two CJK glyphs: two chars, four display columns.
        assert_eq!(display_width("\u{4f60}\u{597d}"), 4);
        assert_eq!(display_width("\u{3053}\u{3093}\u{306b}\u{3061}\u{306f}"), 10);
    }

    #[test]
    fn test_display_width_combining_marks() {
        // "e" followed by a combining acute accent is one column.
        assert_eq!(display_width("e\u{0301}"), 1);
    }

    #[test]
    fn test_column_widths_floor() {
        let table = Table::new(vec![row(&["a", "bb"]), row(&["c", "d"])]);
        assert_eq!(column_widths(&table, false), vec![3, 3]);
    }

    #[test]
    fn test_column_widths_widest_cell_wins() {
        let table = Table::new(vec![row(&["a", "bb"]), row(&["wider", "d"])]);
        assert_eq!(column_widths(&table, false), vec![5, 3]);
    }

    #[test]
    fn test_column_widths_measures_display_columns() {
        let table = Table::new(vec![row(&["h", "x"]), row(&["\u{4f60}\u{597d}", "y"])]);
        assert_eq!(column_widths(&table, false), vec![4, 3]);
    }

    #[test]
    fn test_column_widths_compact() {
        let table = Table::new(vec![row(&["a", "bb"]), row(&["ccc", "d"])]);
        assert_eq!(column_widths(&table, true), vec![0, 0]);
    }

    #[test]
    fn test_column_widths_short_rows_ignored_where_missing() {
        let table = Table::new(vec![row(&["a", "bb"]), row(&["only"])]);
        assert_eq!(column_widths(&table, false), vec![4, 3]);
    }

    #[test]
    fn test_column_widths_long_rows_truncated() {
        let table = Table::new(vec![row(&["a", "b"]), row(&["c", "d", "ignored-extra"])]);
        assert_eq!(column_widths(&table, false), vec![3, 3]);
    }

    #[test]
    fn test_column_widths_empty_table() {
        assert!(column_widths(&Table::default(), false).is_empty());
        assert!(column_widths(&Table::default(), true).is_empty());
    }
}
