// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Line normalization: comment stripping and whitespace tokenization.
//!
//! IPPcode23 has a flat token model; a normalized line is just a run of
//! whitespace-separated tokens. Blank and comment-only lines yield no tokens
//! and are skipped by later stages.

use crate::core::text_utils::split_comment;

/// Strip the `#` comment and surrounding whitespace from a raw line.
pub fn normalize(line: &str) -> &str {
    let (code, _comment) = split_comment(line);
    code.trim()
}

/// Split a raw line into its tokens. Never fails; may be empty.
pub fn tokenize(line: &str) -> Vec<&str> {
    normalize(line).split_whitespace().collect()
}
