//! Shared library for the schema documentation generator.
//!
//! The crate turns a directory tree of JSON schemas into one HTML page. The
//! pipeline is strictly sequential: [`scan_tree`] walks the root and loads each
//! category's `In Topic`/`Out Topic` files, [`render_fragment`] folds the tree
//! into nested list markup, and [`Template`] drops that fragment into the page
//! at the `{content}` placeholder. Problems with individual schema files are
//! recorded on the file's record and rendered; only template and output I/O
//! abort a run.

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

pub mod config;
pub mod loader;
pub mod logging;
pub mod model;
pub mod render;
pub mod scanner;

pub use config::{GeneratorConfig, Invocation, parse_args};
pub use loader::{EXAMPLES_DIR, LoadError, load_example, load_schema_file, load_subcategory_files};
pub use model::{CategoryDirectory, EMPTY_OBJECT, SchemaFile, Subcategory, SubcategoryKind};
pub use render::{PLACEHOLDER, Template, render_fragment, write_document};
pub use scanner::{ScanOptions, TOOL_DIR, scan_tree};

/// Human-readable form of a path or file stem: hyphens become spaces.
pub fn display_name(raw: &str) -> String {
    raw.replace('-', " ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Counts from one generator run.
pub struct GenerationReport {
    pub output_file: PathBuf,
    pub categories: usize,
    pub subcategories: usize,
    pub files: usize,
    pub files_with_errors: usize,
}

impl GenerationReport {
    fn from_categories(output_file: PathBuf, categories: &[CategoryDirectory]) -> Self {
        Self {
            output_file,
            categories: categories.len(),
            subcategories: categories.iter().map(|c| c.subcategories.len()).sum(),
            files: categories.iter().map(|c| c.files().count()).sum(),
            files_with_errors: categories
                .iter()
                .flat_map(CategoryDirectory::files)
                .filter(|f| f.has_error())
                .count(),
        }
    }
}

/// Run a full rebuild: scan, render, substitute, write.
///
/// The template is loaded before the scan so a bad template path fails fast.
pub fn generate(config: &GeneratorConfig) -> Result<GenerationReport> {
    let template = Template::load(&config.template_file)?;
    let categories = scan_tree(&config.root_dir, &config.scan)?;
    let fragment = render_fragment(&categories);
    write_document(&config.output_file, &template.render(&fragment))?;

    let report = GenerationReport::from_categories(config.output_file.clone(), &categories);
    info!(
        categories = report.categories,
        files = report.files,
        errors = report.files_with_errors,
        "rendered schema documentation"
    );
    Ok(report)
}
