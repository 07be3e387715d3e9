// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Instruction records and the program store.

use crate::core::opcode::Opcode;
use crate::core::operand::{classify, Arg};

/// One accepted instruction: 1-based sequence order, opcode, and 0-3
/// validated operands in argument position order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub order: u32,
    pub opcode: Opcode,
    pub args: Vec<Arg>,
}

impl Instruction {
    /// Validate raw operand tokens against the opcode contract and assemble
    /// the record. Fails on arity mismatch or any operand grammar violation;
    /// operands are checked in position order and the first violation wins.
    pub fn assemble(opcode: Opcode, raw_args: &[&str], order: u32) -> Result<Instruction, String> {
        let expected = opcode.operands();
        if raw_args.len() != expected.len() {
            return Err(format!("Invalid instruction operand count: {}", opcode.name()));
        }
        let mut args = Vec::with_capacity(expected.len());
        for (&token, &kind) in raw_args.iter().zip(expected) {
            args.push(classify(token, kind)?);
        }
        Ok(Instruction {
            order,
            opcode,
            args,
        })
    }
}

/// The validated program: an append-only ordered sequence of instructions.
#[derive(Debug, Default)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}
