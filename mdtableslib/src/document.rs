//! Document-level reformatting.
//!
//! The engine parses a document with the table extension enabled and
//! splices the source: table spans are rebuilt through the serializer,
//! paragraph spans run through the ambiguity escaper, and every other
//! byte is copied through untouched. Inline content is never
//! reformatted, so the transform is total and cannot fail on any
//! input string.

use std::fs;
use std::ops::Range;
use std::path::Path;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use crate::align::Alignment;
use crate::error::MdtablesError;
use crate::escape::{escape_ambiguous, unescape_pipes};
use crate::filter::is_markdown_file;
use crate::grid::Table;
use crate::options::FormatOptions;
use crate::render::format_table;
use crate::Result;

/// Reformat every table in a markdown document.
///
/// Tables are rewritten in canonical padded (or compact) form and
/// paragraph lines that could reparse as a delimiter row are escaped.
/// Everything else is copied through byte for byte. Idempotent:
/// running the result through again changes nothing.
///
/// Tables behind a list or blockquote marker are left untouched;
/// plain whitespace indentation is preserved on every output line.
pub fn reformat_str(input: &str, options: &FormatOptions) -> String {
    let mut events = Parser::new_ext(input, Options::ENABLE_TABLES).into_offset_iter();

    let mut output = String::with_capacity(input.len());
    let mut cursor = 0;

    while let Some((event, range)) = events.next() {
        match event {
            Event::Start(Tag::Table(alignments)) => {
                let table = collect_table(&mut events, input, &alignments);

                let head = line_head(input, range.start);
                if !head.trim().is_empty() {
                    // Embedded behind a marker; leave the span as-is.
                    continue;
                }

                let formatted = format_table(&table, options);
                if formatted.is_empty() {
                    continue;
                }

                let span = &input[range.start..range.end];
                let span_indent = leading_whitespace(span);
                let indent = format!("{head}{span_indent}");

                output.push_str(&input[cursor..range.start]);
                output.push_str(span_indent);
                if indent.is_empty() {
                    output.push_str(&formatted);
                } else {
                    output.push_str(&formatted.replace('\n', &format!("\n{indent}")));
                }
                if span.ends_with('\n') {
                    output.push('\n');
                }
                cursor = range.end;
            }
            Event::Start(Tag::Paragraph) => {
                let span = &input[range.start..range.end];
                let escaped = escape_ambiguous(span);
                if escaped != span {
                    output.push_str(&input[cursor..range.start]);
                    output.push_str(&escaped);
                    cursor = range.end;
                }
            }
            _ => {}
        }
    }

    output.push_str(&input[cursor..]);
    output
}

/// Reformat a markdown file in place.
///
/// Returns `true` when the contents changed. The file is only written
/// when the formatted output differs, so timestamps survive no-op runs.
pub fn reformat_file(path: impl AsRef<Path>, options: &FormatOptions) -> Result<bool> {
    let path = path.as_ref();
    let input = read_markdown(path)?;
    let output = reformat_str(&input, options);

    if output == input {
        return Ok(false);
    }

    fs::write(path, &output).map_err(|e| MdtablesError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(true)
}

/// Check whether a markdown file is already formatted.
pub fn check_file(path: impl AsRef<Path>, options: &FormatOptions) -> Result<bool> {
    let path = path.as_ref();
    let input = read_markdown(path)?;
    Ok(reformat_str(&input, options) == input)
}

fn read_markdown(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(MdtablesError::PathNotFound(path.to_path_buf()));
    }
    if !is_markdown_file(path) {
        return Err(MdtablesError::NotMarkdownFile(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|e| MdtablesError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Drain a table's events into a grid, pairing each cell with its
/// column alignment at construction.
///
/// Cell text is the cell's source slice, trimmed, with `\|` folded
/// back to `|`; the grid re-escapes on entry. The source slice is its
/// own rendered form, which keeps inline markup untouched.
fn collect_table<'a, I>(
    events: &mut I,
    source: &str,
    alignments: &[pulldown_cmark::Alignment],
) -> Table
where
    I: Iterator<Item = (Event<'a>, Range<usize>)>,
{
    let mut builder = Table::builder();
    let mut column = 0;

    for (event, range) in events.by_ref() {
        match event {
            Event::Start(Tag::TableCell) => {
                let alignment = alignments
                    .get(column)
                    .copied()
                    .map_or(Alignment::Unspecified, Alignment::from);
                let text = unescape_pipes(source[range].trim());
                builder.push_cell(text, alignment);
                column += 1;
            }
            Event::End(TagEnd::TableHead | TagEnd::TableRow) => {
                builder.end_row();
                column = 0;
            }
            Event::End(TagEnd::Table) => break,
            _ => {}
        }
    }

    builder.build()
}

/// Text between the start of its line and byte `start`.
fn line_head(input: &str, start: usize) -> &str {
    let line_start = input[..start].rfind('\n').map_or(0, |i| i + 1);
    &input[line_start..start]
}

/// Leading spaces and tabs of `text`.
fn leading_whitespace(text: &str) -> &str {
    let trimmed = text.trim_start_matches([' ', '\t']);
    &text[..text.len() - trimmed.len()]
}
