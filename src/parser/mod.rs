// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! IPPcode23 parser - main entry point.
//!
//! Ties together the CLI, the source reader, the validation core, and the
//! XML emitter. Any failure terminates the run with its category's exit
//! code; there is no partial output.

pub mod cli;


use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use clap::error::ErrorKind;
use clap::Parser;

use crate::core::error::{ParseError, ParseErrorKind, ParseRunError};
use crate::core::parser::parse_source;
use crate::core::xml::write_program;

use cli::Cli;

// Re-export public types
pub use crate::core::error::{ParseError as Error, ParseRunError as RunError};
pub use cli::VERSION;

/// Run the parser with command-line arguments.
pub fn run() -> Result<(), ParseRunError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => {
            return Err(ParseRunError::bare(ParseError::new(
                ParseErrorKind::Cli,
                &err.to_string(),
                None,
            )))
        }
    };
    run_with(&cli)
}

/// Run one translation with a validated CLI configuration.
pub fn run_with(cli: &Cli) -> Result<(), ParseRunError> {
    let source = read_source(cli.source.as_deref())?;
    let lines: Vec<String> = source.lines().map(str::to_string).collect();

    let program =
        parse_source(&lines).map_err(|err| ParseRunError::new(err, lines.clone()))?;

    let document = write_program(&program);
    write_output(cli.outfile.as_deref(), &document)?;
    Ok(())
}

fn read_source(path: Option<&Path>) -> Result<String, ParseRunError> {
    let result = match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).map(|_| buf)
        }
    };
    result.map_err(|err| {
        let name = path.map(|p| p.to_string_lossy().to_string());
        ParseRunError::bare(ParseError::new(
            ParseErrorKind::InputIo,
            &format!("Error opening input: {err}"),
            name.as_deref(),
        ))
    })
}

fn write_output(path: Option<&Path>, document: &str) -> Result<(), ParseRunError> {
    let result = match path {
        Some(path) => fs::write(path, document),
        None => io::stdout().write_all(document.as_bytes()),
    };
    result.map_err(|err| {
        let name = path.map(|p| p.to_string_lossy().to_string());
        ParseRunError::bare(ParseError::new(
            ParseErrorKind::OutputIo,
            &format!("Error opening output: {err}"),
            name.as_deref(),
        ))
    })
}
