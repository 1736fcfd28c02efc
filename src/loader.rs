//! Reads schema files and their companion examples from a subcategory folder.
//!
//! Every failure here is local to one file: the loader records it on the
//! [`SchemaFile`] and moves on. Only the caller decides what is fatal.

use crate::model::{EMPTY_OBJECT, SchemaFile, has_json_suffix};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{Formatter, Serializer};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Folder next to the schemas that holds same-named example payloads.
pub const EXAMPLES_DIR: &str = "examples";

#[derive(Debug, thiserror::Error)]
/// Why a single JSON file could not be loaded.
///
/// Messages name only the file, since they end up in the published page.
/// Use [`LoadError::path`] for the full location.
pub enum LoadError {
    #[error("file not found: {}", file_label(path))]
    NotFound { path: PathBuf },

    #[error("invalid JSON in {}: {source}", file_label(path))]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error reading {}: {source}", file_label(path))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound { .. })
    }

    pub fn path(&self) -> &Path {
        match self {
            LoadError::NotFound { path }
            | LoadError::InvalidJson { path, .. }
            | LoadError::Io { path, .. } => path,
        }
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read and parse one JSON document.
///
/// The file handle lives only for the duration of `fs::read`.
pub fn read_json_file(path: &Path) -> Result<Value, LoadError> {
    let bytes = fs::read(path).map_err(|err| LoadError::from_io(path, err))?;
    serde_json::from_slice(&bytes).map_err(|source| LoadError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Single-line JSON with `", "` and `": "` separators.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }
}

/// Re-serialize a parsed document on one line.
pub fn to_json_text(value: &Value) -> String {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, SpacedFormatter);
    // Writing a `Value` into a Vec cannot fail and always yields UTF-8.
    match value.serialize(&mut serializer) {
        Ok(()) => String::from_utf8(buf).unwrap_or_else(|_| EMPTY_OBJECT.to_string()),
        Err(_) => EMPTY_OBJECT.to_string(),
    }
}

/// Load the example payload at `path`, falling back to `{}`.
///
/// A missing example is the common case and is not reported; anything else
/// is logged but still never fatal.
pub fn load_example(path: &Path) -> String {
    match read_json_file(path) {
        Ok(value) => to_json_text(&value),
        Err(err) if err.is_not_found() => {
            debug!(path = %path.display(), "no example payload");
            EMPTY_OBJECT.to_string()
        }
        Err(err) => {
            warn!(path = %err.path().display(), "ignoring example: {err}");
            EMPTY_OBJECT.to_string()
        }
    }
}

/// Build the record for one schema file and its example.
///
/// Parse and read failures are kept on the record with `{}` content; the
/// file is never dropped.
pub fn load_schema_file(path: &Path, example_path: &Path) -> SchemaFile {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let (content, error) = match read_json_file(path) {
        Ok(value) => (to_json_text(&value), None),
        Err(err) => {
            warn!(path = %err.path().display(), "{err}");
            (EMPTY_OBJECT.to_string(), Some(err.to_string()))
        }
    };

    SchemaFile {
        name,
        content,
        example: load_example(example_path),
        error,
    }
}

/// Load every `*.json` file directly inside `dir`, sorted by file name.
///
/// Returns an empty list when `dir` is missing or unreadable so the caller
/// simply omits the subcategory.
pub fn load_subcategory_files(dir: &Path) -> Vec<SchemaFile> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            if err.kind() != io::ErrorKind::NotFound {
                warn!(dir = %dir.display(), "unable to list subcategory: {err}");
            }
            return Vec::new();
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(err) => {
                warn!(dir = %dir.display(), "skipping unreadable entry: {err}");
                None
            }
        })
        .filter(|path| !path.is_dir())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(has_json_suffix)
        })
        .collect();
    paths.sort();

    let examples = dir.join(EXAMPLES_DIR);
    paths
        .iter()
        .map(|path| {
            // file_name is present: the filter above already required it.
            let example_path = examples.join(path.file_name().unwrap_or_default());
            load_schema_file(path, &example_path)
        })
        .collect()
}
