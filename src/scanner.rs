//! Walks the schema root and groups files into categories.
//!
//! Every directory below the root is a candidate category. Excluded names are
//! pruned before descending, so example payloads and the generator's own
//! folder never show up as schema input.

use crate::loader::{EXAMPLES_DIR, load_subcategory_files};
use crate::model::{CategoryDirectory, Subcategory, SubcategoryKind};
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Folder holding the generator itself; skipped alongside `examples`.
pub const TOOL_DIR: &str = "compiler";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Knobs for a tree scan.
pub struct ScanOptions {
    /// Directory names that are never descended into.
    pub excluded_dirs: BTreeSet<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            excluded_dirs: [EXAMPLES_DIR, TOOL_DIR]
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

impl ScanOptions {
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded_dirs.contains(name)
    }
}

/// Scan `root` and return every category with at least one non-empty
/// subcategory.
///
/// An unreadable root is an error. Unreadable directories further down are
/// logged and skipped. Entries are visited in file-name order and symlinked
/// directories are not followed.
pub fn scan_tree(root: &Path, options: &ScanOptions) -> Result<Vec<CategoryDirectory>> {
    let children = child_dirs(root, options)
        .with_context(|| format!("reading schema root {}", root.display()))?;

    let mut categories = Vec::new();
    for child in children {
        walk(root, &child, options, &mut categories);
    }
    debug!(count = categories.len(), "scan complete");
    Ok(categories)
}

fn walk(root: &Path, dir: &Path, options: &ScanOptions, acc: &mut Vec<CategoryDirectory>) {
    if let Some(category) = load_category(root, dir) {
        acc.push(category);
    }

    match child_dirs(dir, options) {
        Ok(children) => {
            for child in children {
                walk(root, &child, options, acc);
            }
        }
        Err(err) => warn!(dir = %dir.display(), "skipping unreadable directory: {err}"),
    }
}

/// Probe the fixed subcategory folders of `dir`.
pub fn load_category(root: &Path, dir: &Path) -> Option<CategoryDirectory> {
    let subcategories: Vec<Subcategory> = SubcategoryKind::ALL
        .into_iter()
        .filter_map(|kind| Subcategory::new(kind, load_subcategory_files(&dir.join(kind.label()))))
        .collect();
    CategoryDirectory::new(relative_path(root, dir), subcategories)
}

/// List the subdirectories of `dir` worth descending into. Only failing to
/// open `dir` is an error; a bad individual entry is logged and skipped.
fn child_dirs(dir: &Path, options: &ScanOptions) -> std::io::Result<Vec<PathBuf>> {
    let mut children = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(dir = %dir.display(), "skipping unreadable entry: {err}");
                continue;
            }
        };
        match entry.file_type() {
            Ok(file_type) if file_type.is_dir() => {}
            Ok(_) => continue,
            Err(err) => {
                warn!(path = %entry.path().display(), "skipping entry of unknown type: {err}");
                continue;
            }
        }
        let name = entry.file_name();
        if options.is_excluded(&name.to_string_lossy()) {
            debug!(dir = %entry.path().display(), "pruned excluded directory");
            continue;
        }
        children.push(entry.path());
    }
    children.sort();
    Ok(children)
}

fn relative_path(root: &Path, dir: &Path) -> String {
    let relative = dir.strip_prefix(root).unwrap_or(dir);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
