// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! IPPcode23 parser core.
//!
//! This module provides the validation-and-classification engine shared by
//! the driver: line normalization, the header gate, the opcode table, the
//! operand classifier, and the XML emitter boundary.
//!
//! # Components
//!
//! - [`text_utils`] - Text processing utilities (comments, identifiers)
//! - [`tokenizer`] - Line normalization and whitespace tokenization
//! - [`opcode`] - The fixed opcode table with operand contracts
//! - [`operand`] - Operand validation, classification and escaping
//! - [`program`] - Instruction records and the program store
//! - [`parser`] - The per-line parsing state machine
//! - [`xml`] - XML document generation
//! - [`error`] - Error kinds, exit codes and diagnostics

pub mod error;
pub mod opcode;
pub mod operand;
pub mod parser;
pub mod program;
pub mod text_utils;
pub mod tokenizer;
pub mod xml;

// Re-exports for convenience
pub use error::{ParseError, ParseErrorKind, ParseRunError};
pub use opcode::Opcode;
pub use operand::{Arg, ArgType, OperandKind};
pub use parser::{parse_source, ParserState};
pub use program::{Instruction, Program};
