//! # mdtableslib
//!
//! A GFM table formatter library that pads and aligns markdown tables
//! by display width.
//!
//! ## Overview
//!
//! Unlike whole-document formatters, this library rewrites only what
//! table syntax needs: table blocks are replaced with a canonical
//! padded form and paragraph lines that could reparse as a table
//! delimiter row are escaped. Every other byte of a document passes
//! through untouched.
//!
//! - **Display-width aware**: columns are measured in terminal
//!   columns, so CJK text and emoji line up
//! - **Alignment preserving**: `:--`, `--:`, and `:-:` delimiter
//!   markers survive reformatting exactly
//! - **Idempotent**: formatting a formatted document is a no-op
//! - **Glob filtering**: discover markdown files with include/exclude
//!   patterns
//!
//! ## Example
//!
//! ```rust
//! use mdtableslib::{format_table, reformat_str, Alignment, Cell, FormatOptions, Row, Table};
//!
//! // Format a grid directly
//! let table = Table::new(vec![
//!     Row::new(vec![
//!         Cell::new("a", Alignment::Left),
//!         Cell::new("bb", Alignment::Right),
//!     ]),
//!     Row::new(vec![
//!         Cell::new("ccc", Alignment::Left),
//!         Cell::new("d", Alignment::Right),
//!     ]),
//! ]);
//! let formatted = format_table(&table, &FormatOptions::new());
//! assert_eq!(formatted, "| a   |  bb |\n| :-- | --: |\n| ccc |   d |");
//!
//! // Or reformat a whole document; only tables change
//! let doc = "# Title\n\n|a|b|\n|-|-|\n|1|2|\n";
//! let formatted = reformat_str(doc, &FormatOptions::new());
//! assert_eq!(
//!     formatted,
//!     "# Title\n\n| a   | b   |\n| --- | --- |\n| 1   | 2   |\n"
//! );
//! ```

pub mod align;
pub mod config;
pub mod document;
pub mod error;
pub mod escape;
pub mod filter;
pub mod grid;
pub mod options;
pub mod render;
pub mod width;

pub use align::Alignment;
pub use config::Config;
pub use document::{check_file, reformat_file, reformat_str};
pub use error::MdtablesError;
pub use escape::escape_ambiguous;
pub use filter::{discover_files, discover_files_in_dirs, FilterConfig};
pub use grid::{Cell, Row, Table, TableBuilder};
pub use options::FormatOptions;
pub use render::{format_table, render_table};
pub use width::{column_widths, display_width};

/// Result type for mdtableslib operations
pub type Result<T> = std::result::Result<T, MdtablesError>;
