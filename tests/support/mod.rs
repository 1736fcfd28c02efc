use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub const TEMPLATE: &str = "<html><body><ul>{content}</ul></body></html>";

/// A throwaway schema root plus template and output paths next to it.
pub struct Fixture {
    pub temp: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("temp dir");
        fs::create_dir_all(temp.path().join("schemas")).expect("schema root");
        fs::write(temp.path().join("template.html"), TEMPLATE).expect("template");
        Self { temp }
    }

    pub fn root(&self) -> PathBuf {
        self.temp.path().join("schemas")
    }

    pub fn template(&self) -> PathBuf {
        self.temp.path().join("template.html")
    }

    pub fn output(&self) -> PathBuf {
        self.temp.path().join("schema.html")
    }

    /// Write `contents` to `relative` under the schema root.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.root().join(relative);
        write_file(&path, contents);
        path
    }
}

pub fn write_file(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().expect("parent dir")).expect("create parent");
    fs::write(path, contents).expect("write fixture");
}

pub fn binary(name: &str) -> PathBuf {
    let path = match name {
        "schema-docs" => env!("CARGO_BIN_EXE_schema-docs"),
        "schema-tree" => env!("CARGO_BIN_EXE_schema-tree"),
        other => panic!("unknown binary {other}"),
    };
    PathBuf::from(path)
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

/// Pull the value of a single-quoted attribute from the `<div>` whose text
/// starts with `display_name`.
pub fn attribute_for(html: &str, display_name: &str, attribute: &str) -> Option<String> {
    let plain = format!(">{display_name}</div>");
    let flagged = format!(">{display_name} <span");
    let line = html
        .lines()
        .find(|line| line.contains(&plain) || line.contains(&flagged))?;
    let marker = format!("{attribute}='");
    let start = line.find(&marker)? + marker.len();
    let end = start + line[start..].find('\'')?;
    Some(line[start..end].to_string())
}

pub fn json_attribute(html: &str, display_name: &str, attribute: &str) -> Value {
    let raw = attribute_for(html, display_name, attribute)
        .unwrap_or_else(|| panic!("missing {attribute} for {display_name}"));
    serde_json::from_str(&raw)
        .unwrap_or_else(|err| panic!("{attribute} is not JSON ({err}): {raw}"))
}
