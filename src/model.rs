//! In-memory representation of a scanned schema tree.
//!
//! Records are built once by the scanner and loader, handed to the renderer,
//! and dropped. Nothing here is mutated after construction.

use serde::Serialize;
use std::fmt;

/// Placeholder stored in `content`/`example` when nothing could be loaded.
pub const EMPTY_OBJECT: &str = "{}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
/// The two fixed roles a schema can play inside a category.
pub enum SubcategoryKind {
    #[serde(rename = "In Topic")]
    InTopic,
    #[serde(rename = "Out Topic")]
    OutTopic,
}

impl SubcategoryKind {
    /// Every subcategory in probe order.
    pub const ALL: [SubcategoryKind; 2] = [SubcategoryKind::InTopic, SubcategoryKind::OutTopic];

    /// Folder name on disk, also used as the rendered heading.
    pub fn label(self) -> &'static str {
        match self {
            SubcategoryKind::InTopic => "In Topic",
            SubcategoryKind::OutTopic => "Out Topic",
        }
    }
}

impl fmt::Display for SubcategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One schema file plus its companion example.
///
/// `content` and `example` are always valid compact JSON; load failures are
/// recorded in `error` and the content falls back to [`EMPTY_OBJECT`].
pub struct SchemaFile {
    pub name: String,
    pub content: String,
    pub example: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SchemaFile {
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// File name without the `.json` suffix, hyphens shown as spaces.
    pub fn display_name(&self) -> String {
        crate::display_name(strip_json_suffix(&self.name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A non-empty `In Topic`/`Out Topic` folder.
pub struct Subcategory {
    pub kind: SubcategoryKind,
    pub files: Vec<SchemaFile>,
}

impl Subcategory {
    /// Returns `None` for an empty file list so empty folders never reach the
    /// rendered output.
    pub fn new(kind: SubcategoryKind, files: Vec<SchemaFile>) -> Option<Self> {
        if files.is_empty() {
            None
        } else {
            Some(Self { kind, files })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A directory under the root holding at least one subcategory.
pub struct CategoryDirectory {
    /// Path relative to the scan root, `/`-separated.
    pub path: String,
    pub subcategories: Vec<Subcategory>,
}

impl CategoryDirectory {
    pub fn new(path: String, subcategories: Vec<Subcategory>) -> Option<Self> {
        if subcategories.is_empty() {
            None
        } else {
            Some(Self {
                path,
                subcategories,
            })
        }
    }

    pub fn display_name(&self) -> String {
        crate::display_name(&self.path)
    }

    pub fn files(&self) -> impl Iterator<Item = &SchemaFile> {
        self.subcategories.iter().flat_map(|sub| sub.files.iter())
    }
}

/// Returns true when `name` ends in `.json`, ignoring case.
pub fn has_json_suffix(name: &str) -> bool {
    name.len() >= 5
        && name.is_char_boundary(name.len() - 5)
        && name[name.len() - 5..].eq_ignore_ascii_case(".json")
}

fn strip_json_suffix(name: &str) -> &str {
    if has_json_suffix(name) {
        &name[..name.len() - 5]
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> SchemaFile {
        SchemaFile {
            name: name.to_string(),
            content: EMPTY_OBJECT.to_string(),
            example: EMPTY_OBJECT.to_string(),
            error: None,
        }
    }

    #[test]
    fn json_suffix_is_case_insensitive() {
        assert!(has_json_suffix("order-created.json"));
        assert!(has_json_suffix("ORDER.JSON"));
        assert!(has_json_suffix("x.Json"));
        assert!(!has_json_suffix("notes.txt"));
        assert!(!has_json_suffix("json"));
        assert!(!has_json_suffix("é.jsonx"));
    }

    #[test]
    fn file_display_name_strips_suffix_and_hyphens() {
        assert_eq!(file("order-created.json").display_name(), "order created");
        assert_eq!(file("Upper.JSON").display_name(), "Upper");
    }

    #[test]
    fn empty_collections_are_not_constructed() {
        assert!(Subcategory::new(SubcategoryKind::InTopic, Vec::new()).is_none());
        assert!(CategoryDirectory::new("alpha".into(), Vec::new()).is_none());

        let sub = Subcategory::new(SubcategoryKind::OutTopic, vec![file("a.json")])
            .expect("non-empty subcategory");
        let category = CategoryDirectory::new("billing-events".into(), vec![sub])
            .expect("non-empty category");
        assert_eq!(category.display_name(), "billing events");
        assert_eq!(category.files().count(), 1);
    }

    #[test]
    fn subcategory_serializes_with_folder_label() {
        let value = serde_json::to_value(SubcategoryKind::OutTopic).unwrap();
        assert_eq!(value, serde_json::json!("Out Topic"));
    }
}
