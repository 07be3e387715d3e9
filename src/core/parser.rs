// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! The per-line parsing state machine.
//!
//! Parsing is a fold over the source lines: each step takes the current
//! state and one raw line and yields the next state plus at most one
//! accepted instruction. The state is just the header gate and the order
//! counter; there is no other mutable context.

use crate::core::error::{ParseError, ParseErrorKind};
use crate::core::opcode::Opcode;
use crate::core::program::{Instruction, Program};
use crate::core::tokenizer::tokenize;

/// The header gate. `HeaderSeen` is terminal; there is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    AwaitingHeader,
    HeaderSeen,
}

/// State threaded through the line fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserState {
    pub header: HeaderState,
    pub order: u32,
}

impl Default for ParserState {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserState {
    pub fn new() -> Self {
        Self {
            header: HeaderState::AwaitingHeader,
            order: 0,
        }
    }
}

/// The single mandatory token opening every IPPcode23 source.
pub const HEADER: &str = ".IPPcode23";

/// Process one raw source line.
///
/// `line_idx` is the 0-based source line index, used for error reporting.
/// Returns the successor state and the accepted instruction, if the line
/// held one. Blank and comment-only lines pass through unchanged.
pub fn process_line(
    state: ParserState,
    line: &str,
    line_idx: u32,
) -> Result<(ParserState, Option<Instruction>), ParseError> {
    let tokens = tokenize(line);
    if tokens.is_empty() {
        return Ok((state, None));
    }

    match state.header {
        HeaderState::AwaitingHeader => {
            if !tokens[0].eq_ignore_ascii_case(HEADER) {
                return Err(ParseError::at_line(
                    ParseErrorKind::Header,
                    "At the beginning, instead of the instruction, expected the language identifier",
                    Some(tokens[0]),
                    line_idx,
                ));
            }
            if tokens.len() != 1 {
                return Err(ParseError::at_line(
                    ParseErrorKind::Header,
                    "At the beginning, instead of the instruction, has to be only the language identifier",
                    None,
                    line_idx,
                ));
            }
            Ok((
                ParserState {
                    header: HeaderState::HeaderSeen,
                    order: state.order,
                },
                None,
            ))
        }
        HeaderState::HeaderSeen => {
            let opcode = Opcode::lookup(tokens[0]).ok_or_else(|| {
                ParseError::at_line(
                    ParseErrorKind::Opcode,
                    "Invalid or missing instruction",
                    Some(tokens[0]),
                    line_idx,
                )
            })?;
            let order = state.order + 1;
            let instruction = Instruction::assemble(opcode, &tokens[1..], order)
                .map_err(|msg| ParseError::at_line(ParseErrorKind::Lexical, &msg, None, line_idx))?;
            Ok((
                ParserState {
                    header: HeaderState::HeaderSeen,
                    order,
                },
                Some(instruction),
            ))
        }
    }
}

/// Parse a whole source, line by line, into a validated program.
///
/// Fail-fast: the first violation aborts the run. An input that never
/// produces a token is a header failure.
pub fn parse_source(lines: &[String]) -> Result<Program, ParseError> {
    let mut state = ParserState::new();
    let mut program = Program::new();
    for (idx, line) in lines.iter().enumerate() {
        let (next, instruction) = process_line(state, line, idx as u32)?;
        state = next;
        if let Some(instruction) = instruction {
            program.push(instruction);
        }
    }
    if state.header == HeaderState::AwaitingHeader {
        return Err(ParseError::new(
            ParseErrorKind::Header,
            "At the beginning expected the language identifier",
            None,
        ));
    }
    Ok(program)
}
