//! Escaping guards for table syntax.
//!
//! Two hazards live here. A literal pipe inside cell text would split
//! the cell on reparse, so pipes are escaped before cell text enters a
//! grid. And a paragraph line made only of spaces, pipes, dashes, and
//! colons is indistinguishable from a delimiter row, so such lines get
//! a backslash before their first dash.

/// Characters a table delimiter row may consist of.
const DELIMITER_CHARS: [char; 4] = [' ', '|', '-', ':'];

/// Escape literal pipes so cell text survives between row pipes.
pub fn escape_pipes(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Undo [`escape_pipes`] when recovering rendered text from source.
pub fn unescape_pipes(text: &str) -> String {
    text.replace("\\|", "|")
}

/// Escape lines that a reparse could mistake for a delimiter row.
///
/// Operates on a whole rendered block, line by line. A line consisting
/// only of spaces, pipes, dashes, and colons gets a backslash before
/// its first dash; every other line passes through untouched. The
/// backslash is outside the delimiter character set, so an escaped
/// line never matches again and the transform is idempotent.
pub fn escape_ambiguous(text: &str) -> String {
    text.split('\n')
        .map(escape_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_line(line: &str) -> String {
    if line.chars().all(|c| DELIMITER_CHARS.contains(&c)) {
        line.replacen('-', "\\-", 1)
    } else {
        line.to_string()
    }
}
