//! Markdown file discovery with glob pattern filtering.
//!
//! Walks directory trees for `.md`/`.markdown` files, narrowing the
//! set with include/exclude globs. Excludes always win over includes.

use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::error::MdtablesError;
use crate::Result;

/// Extensions recognized as markdown.
const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "markdown"];

/// Check whether a path has a markdown extension.
pub fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| MARKDOWN_EXTENSIONS.contains(&ext))
}

fn compile_glob(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(|e| MdtablesError::InvalidGlob {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

/// Include/exclude glob filter over markdown paths.
///
/// With no include patterns every markdown file passes; exclude
/// patterns always win.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
}

impl FilterConfig {
    /// A filter that passes every markdown file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an include pattern.
    pub fn include(mut self, pattern: &str) -> Result<Self> {
        self.include.push(compile_glob(pattern)?);
        Ok(self)
    }

    /// Add an exclude pattern.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        self.exclude.push(compile_glob(pattern)?);
        Ok(self)
    }

    /// Add multiple include patterns.
    pub fn include_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.include(pattern)?;
        }
        Ok(self)
    }

    /// Add multiple exclude patterns.
    pub fn exclude_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.exclude(pattern)?;
        }
        Ok(self)
    }

    /// Whether `path` is a markdown file accepted by this filter.
    pub fn matches(&self, path: &Path) -> bool {
        if !is_markdown_file(path) {
            return false;
        }

        let path_str = path.to_string_lossy();

        if self.exclude.iter().any(|p| p.matches(&path_str)) {
            return false;
        }

        self.include.is_empty() || self.include.iter().any(|p| p.matches(&path_str))
    }
}

/// Directories never descended into during a walk.
fn skip_dir(name: &str) -> bool {
    name.starts_with('.') || name == "node_modules" || name == "target"
}

/// Discover markdown files under `root`, sorted.
///
/// A direct file path is accepted as-is when it matches the filter.
/// Hidden directories, `node_modules/`, and `target/` are never
/// entered; unreadable entries are skipped silently.
pub fn discover_files(root: impl AsRef<Path>, filter: &FilterConfig) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(MdtablesError::PathNotFound(root.to_path_buf()));
    }

    if root.is_file() {
        return Ok(if filter.matches(root) {
            vec![root.to_path_buf()]
        } else {
            Vec::new()
        });
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0
                || !e.file_type().is_dir()
                || !skip_dir(e.file_name().to_str().unwrap_or(""))
        })
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && filter.matches(entry.path()))
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    Ok(files)
}

/// Discover markdown files under multiple roots, deduplicated.
pub fn discover_files_in_dirs(dirs: &[&Path], filter: &FilterConfig) -> Result<Vec<PathBuf>> {
    let mut all_files = Vec::new();

    for dir in dirs {
        all_files.extend(discover_files(dir, filter)?);
    }

    all_files.sort();
    all_files.dedup();
    Ok(all_files)
}
