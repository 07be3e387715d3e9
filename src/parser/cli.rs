// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Command-line interface parsing.

use std::path::PathBuf;

use clap::Parser;

pub const VERSION: &str = "1.0";

const LONG_ABOUT: &str = "Filter-type parser for IPPcode23.

Reads IPPcode23 source code from standard input (or -s/--source), checks the
lexical and syntactic correctness of the code, and writes the XML program
representation to standard output (or -o/--outfile).";

#[derive(Parser, Debug)]
#[command(
    name = "ippforge",
    version = VERSION,
    about = "IPPcode23 parser: validates source and emits the XML program representation",
    long_about = LONG_ABOUT
)]
pub struct Cli {
    #[arg(
        short = 's',
        long = "source",
        value_name = "FILE",
        long_help = "Input IPPcode23 source file. When omitted, source is read from standard input."
    )]
    pub source: Option<PathBuf>,
    #[arg(
        short = 'o',
        long = "outfile",
        value_name = "FILE",
        long_help = "Output file for the XML document. When omitted, the document is written to standard output."
    )]
    pub outfile: Option<PathBuf>,
}
