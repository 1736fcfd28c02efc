//! Generator configuration and the positional command line that fills it.

use crate::scanner::ScanOptions;
use anyhow::{Result, bail};
use std::ffi::OsString;
use std::path::PathBuf;

pub const DEFAULT_ROOT_DIR: &str = "../";
pub const DEFAULT_OUTPUT_FILE: &str = "schema.html";
pub const DEFAULT_TEMPLATE_FILE: &str = "template.html";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Everything one generator run needs.
pub struct GeneratorConfig {
    pub root_dir: PathBuf,
    pub output_file: PathBuf,
    pub template_file: PathBuf,
    pub scan: ScanOptions,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from(DEFAULT_ROOT_DIR),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            template_file: PathBuf::from(DEFAULT_TEMPLATE_FILE),
            scan: ScanOptions::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn new(
        root_dir: impl Into<PathBuf>,
        output_file: impl Into<PathBuf>,
        template_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            root_dir: root_dir.into(),
            output_file: output_file.into(),
            template_file: template_file.into(),
            scan: ScanOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of parsing the command line.
pub enum Invocation {
    Run(GeneratorConfig),
    Help,
}

/// Parse `[ROOT] [OUTPUT] [TEMPLATE]`; omitted values keep their defaults.
pub fn parse_args(args: impl IntoIterator<Item = OsString>) -> Result<Invocation> {
    let mut positional: Vec<PathBuf> = Vec::new();
    for arg in args {
        if let Some(text) = arg.to_str() {
            if text == "-h" || text == "--help" {
                return Ok(Invocation::Help);
            }
            if text.starts_with('-') && text.len() > 1 {
                bail!("unknown flag: {text}");
            }
        }
        positional.push(PathBuf::from(arg));
    }
    if positional.len() > 3 {
        bail!("expected at most 3 arguments, got {}", positional.len());
    }

    let mut values = positional.into_iter();
    let mut config = GeneratorConfig::default();
    if let Some(root) = values.next() {
        config.root_dir = root;
    }
    if let Some(output) = values.next() {
        config.output_file = output;
    }
    if let Some(template) = values.next() {
        config.template_file = template;
    }
    Ok(Invocation::Run(config))
}

/// Parse a single optional root argument, as taken by `schema-tree`.
pub fn parse_root_arg(args: impl IntoIterator<Item = OsString>) -> Result<Option<PathBuf>> {
    let mut args = args.into_iter();
    let root = args.next().map(PathBuf::from);
    if let Some(extra) = args.next() {
        bail!("unexpected argument: {}", extra.to_string_lossy());
    }
    Ok(root)
}

pub fn usage() -> &'static str {
    "Usage: schema-docs [ROOT] [OUTPUT] [TEMPLATE]\n\
Scans ROOT (default ../) for category folders containing 'In Topic'/'Out Topic' JSON schemas,\n\
renders them into TEMPLATE (default template.html) at the {content} placeholder, and writes OUTPUT (default schema.html).\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<OsString> {
        values.iter().map(OsString::from).collect()
    }

    #[test]
    fn no_arguments_use_defaults() {
        let parsed = parse_args(args(&[])).expect("parse");
        assert_eq!(parsed, Invocation::Run(GeneratorConfig::default()));
    }

    #[test]
    fn positional_arguments_fill_in_order() {
        let parsed = parse_args(args(&["schemas", "out/index.html"])).expect("parse");
        let Invocation::Run(config) = parsed else {
            panic!("expected run");
        };
        assert_eq!(config.root_dir, PathBuf::from("schemas"));
        assert_eq!(config.output_file, PathBuf::from("out/index.html"));
        assert_eq!(config.template_file, PathBuf::from(DEFAULT_TEMPLATE_FILE));
    }

    #[test]
    fn help_and_bad_flags() {
        assert_eq!(parse_args(args(&["--help"])).unwrap(), Invocation::Help);
        assert_eq!(parse_args(args(&["a", "-h"])).unwrap(), Invocation::Help);
        assert!(parse_args(args(&["--verbose"])).is_err());
        assert!(parse_args(args(&["a", "b", "c", "d"])).is_err());
    }

    #[test]
    fn dash_alone_is_a_path() {
        let Invocation::Run(config) = parse_args(args(&["-"])).unwrap() else {
            panic!("expected run");
        };
        assert_eq!(config.root_dir, PathBuf::from("-"));
    }

    #[test]
    fn root_arg_is_optional_and_single() {
        assert_eq!(parse_root_arg(args(&[])).unwrap(), None);
        assert_eq!(
            parse_root_arg(args(&["schemas"])).unwrap(),
            Some(PathBuf::from("schemas"))
        );
        assert!(parse_root_arg(args(&["a", "b"])).is_err());
    }
}
