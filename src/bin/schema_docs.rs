//! Entrypoint for the schema documentation generator.
//!
//! Takes up to three positional values (root, output, template), rebuilds the
//! HTML page from scratch, and prints a completion line. Per-file schema
//! problems are logged to stderr and do not change the exit status.

use anyhow::Result;
use schema_docs::config::{Invocation, parse_args, usage};
use schema_docs::generate;
use schema_docs::logging::init_logging;
use std::env;

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = match parse_args(env::args_os().skip(1)) {
        Ok(Invocation::Run(config)) => config,
        Ok(Invocation::Help) => {
            print!("{}", usage());
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err:#}");
            eprint!("{}", usage());
            std::process::exit(2);
        }
    };

    let report = generate(&config)?;
    println!(
        "HTML file '{}' has been generated.",
        report.output_file.display()
    );
    Ok(())
}
