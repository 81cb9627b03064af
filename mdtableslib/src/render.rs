//! Table serialization: padding, delimiter cells, and line assembly.
//!
//! Every line follows the `| cell | cell |` template with single
//! mandatory spaces around each cell. Padding is measured in display
//! columns so wide characters line up.

use crate::align::Alignment;
use crate::grid::{Cell, Row, Table};
use crate::options::FormatOptions;
use crate::width::{column_widths, display_width};

/// Pad `text` on the left to `width` display columns.
fn lpad(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(text));
    format!("{}{}", " ".repeat(pad), text)
}

/// Pad `text` on the right to `width` display columns.
fn rpad(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(text));
    format!("{}{}", text, " ".repeat(pad))
}

/// Center `text` in `width` display columns; odd padding goes right.
fn center(text: &str, width: usize) -> String {
    let text_width = display_width(text);
    let indent = width.saturating_sub(text_width) / 2 + text_width;
    rpad(&lpad(text, indent), width)
}

fn pad_cell(text: &str, alignment: Alignment, width: usize) -> String {
    match alignment {
        Alignment::Unspecified | Alignment::Left => rpad(text, width),
        Alignment::Right => lpad(text, width),
        Alignment::Center => center(text, width),
    }
}

/// Delimiter cell for one column (`---`, `:--`, `--:`, `:-:`).
///
/// The dash run shrinks with the column width, down to the fixed
/// two-character compact forms; a center cell that would collapse to
/// `::` becomes `:-:` to stay valid GFM.
fn delimiter_cell(alignment: Alignment, width: usize) -> String {
    let left = if alignment.colon_left() { ':' } else { '-' };
    let right = if alignment.colon_right() { ':' } else { '-' };
    let cell = format!("{}{}{}", left, "-".repeat(width.saturating_sub(2)), right);

    if cell == "::" {
        ":-:".to_string()
    } else {
        cell
    }
}

fn render_row(row: &Row, widths: &[usize]) -> String {
    let cells: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(col, &width)| match row.cell(col) {
            Some(cell) => pad_cell(cell.content(), cell.alignment(), width),
            None => pad_cell("", Alignment::Unspecified, width),
        })
        .collect();
    format!("| {} |", cells.join(" | "))
}

fn delimiter_row(header: &Row, widths: &[usize]) -> String {
    let cells: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(col, &width)| {
            let alignment = header.cell(col).map_or(Alignment::Unspecified, Cell::alignment);
            delimiter_cell(alignment, width)
        })
        .collect();
    format!("| {} |", cells.join(" | "))
}

/// Serialize a table into output lines: header, delimiter, body.
///
/// Pure; the grid is never mutated and an empty grid yields no lines.
/// `widths` fixes the column count, so body rows longer than the
/// header are truncated and shorter ones are padded with empty cells.
pub fn render_table(table: &Table, widths: &[usize]) -> Vec<String> {
    let Some(header) = table.header() else {
        return Vec::new();
    };

    let mut lines = Vec::with_capacity(table.rows().len() + 1);
    lines.push(render_row(header, widths));
    lines.push(delimiter_row(header, widths));
    for row in table.body() {
        lines.push(render_row(row, widths));
    }
    lines
}

/// Format a table with freshly computed column widths.
pub fn format_table(table: &Table, options: &FormatOptions) -> String {
    let widths = column_widths(table, options.compact_tables);
    render_table(table, &widths).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(text: &str, alignment: Alignment) -> Cell {
        Cell::new(text, alignment)
    }

    fn two_column_table() -> Table {
        Table::new(vec![
            Row::new(vec![
                cell("a", Alignment::Left),
                cell("bb", Alignment::Right),
            ]),
            Row::new(vec![
                cell("ccc", Alignment::Left),
                cell("d", Alignment::Right),
            ]),
        ])
    }

    #[test]
    fn test_padding_counts_display_columns() {
        assert_eq!(lpad("ab", 4), "  ab");
        assert_eq!(rpad("ab", 4), "ab  ");
        // Two CJK glyphs already fill four columns.
        assert_eq!(lpad("\u{4f60}\u{597d}", 4), "\u{4f60}\u{597d}");
        assert_eq!(rpad("\u{4f60}\u{597d}", 5), "\u{4f60}\u{597d} ");
    }

    #[test]
    fn test_center_odd_padding_goes_right() {
        assert_eq!(center("ab", 5), " ab  ");
        assert_eq!(center("ab", 4), " ab ");
        assert_eq!(center("ab", 2), "ab");
    }

    #[test]
    fn test_overlong_content_is_never_cut() {
        assert_eq!(lpad("abcdef", 3), "abcdef");
        assert_eq!(rpad("abcdef", 3), "abcdef");
        assert_eq!(center("abcdef", 3), "abcdef");
    }

    #[test]
    fn test_delimiter_cells() {
        assert_eq!(delimiter_cell(Alignment::Unspecified, 3), "---");
        assert_eq!(delimiter_cell(Alignment::Left, 3), ":--");
        assert_eq!(delimiter_cell(Alignment::Right, 3), "--:");
        assert_eq!(delimiter_cell(Alignment::Center, 3), ":-:");
        assert_eq!(delimiter_cell(Alignment::Right, 6), "-----:");
    }

    #[test]
    fn test_compact_delimiter_cells() {
        assert_eq!(delimiter_cell(Alignment::Unspecified, 0), "--");
        assert_eq!(delimiter_cell(Alignment::Left, 0), ":-");
        assert_eq!(delimiter_cell(Alignment::Right, 0), "-:");
        // The center form would be "::", which GFM does not accept.
        assert_eq!(delimiter_cell(Alignment::Center, 0), ":-:");
    }

    #[test]
    fn test_render_left_right_table() {
        let table = two_column_table();
        let widths = column_widths(&table, false);
        let lines = render_table(&table, &widths);

        assert_eq!(
            lines,
            vec!["| a   |  bb |", "| :-- | --: |", "| ccc |   d |"]
        );
    }

    #[test]
    fn test_render_line_count() {
        let table = two_column_table();
        let widths = column_widths(&table, false);
        // Header line, delimiter line, one line per body row.
        assert_eq!(render_table(&table, &widths).len(), 1 + 1 + 1);
    }

    #[test]
    fn test_every_line_same_width() {
        let table = two_column_table();
        let formatted = format_table(&table, &FormatOptions::new());
        let widths: Vec<usize> = formatted.lines().map(display_width).collect();
        assert_eq!(widths, vec![widths[0]; widths.len()]);
    }

    #[test]
    fn test_format_compact() {
        let table = two_column_table();
        let formatted = format_table(&table, &FormatOptions::new().compact_tables(true));

        assert_eq!(formatted, "| a | bb |\n| :- | -: |\n| ccc | d |");
    }

    #[test]
    fn test_center_column() {
        let table = Table::new(vec![
            Row::new(vec![cell("head", Alignment::Center)]),
            Row::new(vec![cell("x", Alignment::Center)]),
        ]);
        let formatted = format_table(&table, &FormatOptions::new());

        assert_eq!(formatted, "| head |\n| :--: |\n|  x   |");
    }

    #[test]
    fn test_wide_character_cells_align() {
        let table = Table::new(vec![
            Row::new(vec![
                cell("name", Alignment::Unspecified),
                cell("n", Alignment::Unspecified),
            ]),
            Row::new(vec![
                cell("\u{4f60}\u{597d}", Alignment::Unspecified),
                cell("1", Alignment::Unspecified),
            ]),
        ]);
        let formatted = format_table(&table, &FormatOptions::new());

        assert_eq!(
            formatted,
            "| name | n   |\n| ---- | --- |\n| \u{4f60}\u{597d} | 1   |"
        );
    }

    #[test]
    fn test_short_row_pads_missing_cells() {
        let table = Table::new(vec![
            Row::new(vec![
                cell("a", Alignment::Unspecified),
                cell("b", Alignment::Unspecified),
            ]),
            Row::new(vec![cell("c", Alignment::Unspecified)]),
        ]);
        let widths = column_widths(&table, false);
        let lines = render_table(&table, &widths);

        assert_eq!(lines[2], "| c   |     |");
    }

    #[test]
    fn test_long_row_truncated_at_header_width() {
        let table = Table::new(vec![
            Row::new(vec![cell("a", Alignment::Unspecified)]),
            Row::new(vec![
                cell("b", Alignment::Unspecified),
                cell("extra", Alignment::Unspecified),
            ]),
        ]);
        let widths = column_widths(&table, false);
        let lines = render_table(&table, &widths);

        assert_eq!(lines[2], "| b   |");
    }

    #[test]
    fn test_empty_table_renders_nothing() {
        assert!(render_table(&Table::default(), &[]).is_empty());
        assert_eq!(format_table(&Table::default(), &FormatOptions::new()), "");
    }

    #[test]
    fn test_pipe_in_cell_stays_escaped() {
        let table = Table::new(vec![
            Row::new(vec![cell("a|b", Alignment::Unspecified)]),
            Row::new(vec![cell("c", Alignment::Unspecified)]),
        ]);
        let formatted = format_table(&table, &FormatOptions::new());

        assert_eq!(formatted, "| a\\|b |\n| ---- |\n| c    |");
    }
}
