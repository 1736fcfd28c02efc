//! HTML fragment generation and template substitution.
//!
//! JSON payloads go into single-quoted attributes verbatim. A `'` inside a
//! schema or example therefore ends the attribute early; consumers that need
//! exact payloads must keep quotes out of their JSON strings.

use crate::model::{CategoryDirectory, SchemaFile, Subcategory};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Token in the template replaced by the generated fragment.
pub const PLACEHOLDER: &str = "{content}";

/// Render the nested list markup for every category, one tag group per line.
pub fn render_fragment(categories: &[CategoryDirectory]) -> String {
    let mut lines = Vec::new();
    for category in categories {
        lines.push(format!("<li><h2>{}</h2>", category.display_name()));
        lines.push("<ul>".to_string());
        for subcategory in &category.subcategories {
            render_subcategory(subcategory, &mut lines);
        }
        lines.push("</ul></li>".to_string());
    }
    lines.join("\n")
}

fn render_subcategory(subcategory: &Subcategory, lines: &mut Vec<String>) {
    lines.push(format!("<li><h3>{}</h3>", subcategory.kind.label()));
    lines.push("<ul>".to_string());
    for file in &subcategory.files {
        lines.push(render_file(file));
    }
    lines.push("</ul></li>".to_string());
}

fn render_file(file: &SchemaFile) -> String {
    match &file.error {
        None => format!(
            "<li><div class=\"json-file\" data-content='{}' data-example='{}'>{}</div></li>",
            file.content,
            file.example,
            file.display_name()
        ),
        Some(error) => {
            let error = escape_html(error);
            format!(
                "<li><div class=\"json-file json-file-error\" data-content='{}' data-example='{}' data-error='{error}'>{} <span class=\"json-error\">{error}</span></div></li>",
                file.content,
                file.example,
                file.display_name()
            )
        }
    }
}

/// Escape text produced by this tool (error messages) for use in attributes
/// and element bodies.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[derive(Debug, Clone)]
/// A page template with a [`PLACEHOLDER`] to fill.
pub struct Template {
    text: String,
}

impl Template {
    /// Read a template from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading template {}", path.display()))?;
        Ok(Self::from_text(path, text))
    }

    /// A template without the placeholder is kept as-is; the page is still
    /// written, just without the schema list.
    pub fn from_text(source: &Path, text: String) -> Self {
        if !text.contains(PLACEHOLDER) {
            warn!(
                template = %source.display(),
                "template has no {PLACEHOLDER} placeholder; output will not list any schemas"
            );
        }
        Self { text }
    }

    /// Substitute `fragment` for the first placeholder occurrence only.
    pub fn render(&self, fragment: &str) -> String {
        self.text.replacen(PLACEHOLDER, fragment, 1)
    }
}

/// Write the finished page to `path`.
pub fn write_document(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html).with_context(|| format!("writing output {}", path.display()))
}
