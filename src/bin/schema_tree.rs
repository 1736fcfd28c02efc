//! Dump the scanned schema tree as JSON.
//!
//! Runs the same scan as `schema-docs` (default exclusions) and prints the
//! categories, subcategories, and per-file records without rendering HTML.

use anyhow::{Context, Result};
use schema_docs::config::{DEFAULT_ROOT_DIR, parse_root_arg};
use schema_docs::logging::init_logging;
use schema_docs::{ScanOptions, scan_tree};
use std::env;
use std::path::PathBuf;

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let root = parse_root_arg(env::args_os().skip(1))?
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT_DIR));
    let categories = scan_tree(&root, &ScanOptions::default())?;
    let json = serde_json::to_string_pretty(&categories).context("serializing schema tree")?;
    println!("{json}");
    Ok(())
}
