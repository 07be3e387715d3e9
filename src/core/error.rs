// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Error types, exit codes, and diagnostic reporting for the parser.

use std::fmt;

/// Categories of parser failures, one exit code per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    Cli,
    InputIo,
    OutputIo,
    Header,
    Opcode,
    Lexical,
    Internal,
}

impl ParseErrorKind {
    /// Process exit code for this failure category.
    pub fn exit_code(self) -> i32 {
        match self {
            ParseErrorKind::Cli => 10,
            ParseErrorKind::InputIo => 11,
            ParseErrorKind::OutputIo => 12,
            ParseErrorKind::Header => 21,
            ParseErrorKind::Opcode => 22,
            ParseErrorKind::Lexical => 23,
            ParseErrorKind::Internal => 99,
        }
    }
}

/// A parser error with a kind, message, and optional source location.
///
/// The line is the 0-based index of the source line at which the violation
/// was detected; argument and header-absence failures carry no line.
#[derive(Debug, Clone)]
pub struct ParseError {
    kind: ParseErrorKind,
    message: String,
    line: Option<u32>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, msg: &str, param: Option<&str>) -> Self {
        Self {
            kind,
            message: format_error(msg, param),
            line: None,
        }
    }

    pub fn at_line(kind: ParseErrorKind, msg: &str, param: Option<&str>, line: u32) -> Self {
        Self {
            kind,
            message: format_error(msg, param),
            line: Some(line),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    pub fn line(&self) -> Option<u32> {
        self.line
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Error from a failed parser run, carrying the source for context display.
#[derive(Debug)]
pub struct ParseRunError {
    error: ParseError,
    source_lines: Vec<String>,
}

impl ParseRunError {
    pub fn new(error: ParseError, source_lines: Vec<String>) -> Self {
        Self {
            error,
            source_lines,
        }
    }

    /// A run error with no source context (CLI and I/O setup failures).
    pub fn bare(error: ParseError) -> Self {
        Self {
            error,
            source_lines: Vec::new(),
        }
    }

    pub fn error(&self) -> &ParseError {
        &self.error
    }

    pub fn exit_code(&self) -> i32 {
        self.error.kind().exit_code()
    }

    pub fn source_lines(&self) -> &[String] {
        &self.source_lines
    }

    /// Format the error with an excerpt of the offending source line.
    ///
    /// Lines are displayed 1-based. The severity marker is colored red unless
    /// color is disabled.
    pub fn format_with_context(&self, use_color: bool) -> String {
        let sev = if use_color {
            "\x1b[31mERROR\x1b[0m"
        } else {
            "ERROR"
        };

        let mut out = String::new();
        if let Some(line_idx) = self.error.line() {
            let line_num = line_idx + 1;
            out.push_str(&format!("Error in line {line_num}:\n"));
            let text = self
                .source_lines
                .get(line_idx as usize)
                .map(|s| s.as_str())
                .unwrap_or("<source unavailable>");
            out.push_str(&format!("{line_num:>5} | {text}\n"));
        }
        out.push_str(&format!("{sev}: {}", self.error.message()));
        out
    }
}

impl fmt::Display for ParseRunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ParseRunError {}

/// Format an error message with an optional parameter.
pub fn format_error(msg: &str, param: Option<&str>) -> String {
    match param {
        Some(p) => format!("{msg}: {p}"),
        None => msg.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_cover_the_taxonomy() {
        assert_eq!(ParseErrorKind::Cli.exit_code(), 10);
        assert_eq!(ParseErrorKind::InputIo.exit_code(), 11);
        assert_eq!(ParseErrorKind::OutputIo.exit_code(), 12);
        assert_eq!(ParseErrorKind::Header.exit_code(), 21);
        assert_eq!(ParseErrorKind::Opcode.exit_code(), 22);
        assert_eq!(ParseErrorKind::Lexical.exit_code(), 23);
        assert_eq!(ParseErrorKind::Internal.exit_code(), 99);
    }

    #[test]
    fn format_includes_line_and_source_context() {
        let err = ParseError::at_line(ParseErrorKind::Lexical, "Invalid variable operand", Some("GF@1"), 1);
        let run = ParseRunError::new(
            err,
            vec![".IPPcode23".to_string(), "DEFVAR GF@1".to_string()],
        );
        let out = run.format_with_context(false);
        assert_eq!(
            out,
            "Error in line 2:\n    2 | DEFVAR GF@1\nERROR: Invalid variable operand: GF@1"
        );
    }

    #[test]
    fn format_without_line_omits_context() {
        let err = ParseError::new(ParseErrorKind::Header, "At the beginning expected the language identifier", None);
        let run = ParseRunError::bare(err);
        assert_eq!(
            run.format_with_context(false),
            "ERROR: At the beginning expected the language identifier"
        );
    }
}
