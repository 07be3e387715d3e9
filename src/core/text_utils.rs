// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Shared text utilities for line normalization and identifier grammar.

/// Punctuation accepted anywhere in an IPPcode23 identifier.
const IDENT_PUNCT: &[u8] = b"_-$&%*!?";

/// Check if a byte starts an identifier (letter or allowed punctuation).
#[inline]
pub fn is_ident_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || IDENT_PUNCT.contains(&c)
}

/// Check if a byte continues an identifier (alphanumeric or allowed punctuation).
#[inline]
pub fn is_ident_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || IDENT_PUNCT.contains(&c)
}

/// Check that a token is a well-formed identifier (label or variable name).
pub fn is_identifier(s: &str) -> bool {
    let bytes = s.as_bytes();
    match bytes.first() {
        Some(&first) if is_ident_start(first) => bytes[1..].iter().all(|&c| is_ident_char(c)),
        _ => false,
    }
}

/// Split a line into code and comment parts at the first `#`.
pub fn split_comment(line: &str) -> (&str, &str) {
    match line.find('#') {
        Some(idx) => (&line[..idx], &line[idx..]),
        None => (line, ""),
    }
}
