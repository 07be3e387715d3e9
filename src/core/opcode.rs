// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! The fixed IPPcode23 opcode table.
//!
//! Every opcode carries exactly one operand contract: an ordered list of the
//! operand kinds it requires. The table is a closed enum with an exhaustive
//! match, so a missing or duplicated contract is a compile error rather than
//! a runtime property.

use crate::core::operand::OperandKind;

/// The closed set of IPPcode23 instruction mnemonics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    // Frame and call-stack control
    CreateFrame,
    PushFrame,
    PopFrame,
    Call,
    Return,
    // Data-stack operations
    Pushs,
    Pops,
    // Arithmetic, relational, boolean and conversion
    Add,
    Sub,
    Mul,
    Idiv,
    Lt,
    Gt,
    Eq,
    And,
    Or,
    Not,
    Int2Char,
    Stri2Int,
    // Input/output
    Read,
    Write,
    // Strings
    Concat,
    Strlen,
    GetChar,
    SetChar,
    // Types
    Type,
    // Flow control
    Label,
    Jump,
    JumpIfEq,
    JumpIfNeq,
    Exit,
    // Debugging
    Dprint,
    Break,
    // Variables
    Move,
    DefVar,
}

impl Opcode {
    /// Look up a mnemonic, case-insensitively. Returns `None` for anything
    /// outside the fixed table.
    pub fn lookup(token: &str) -> Option<Opcode> {
        let opcode = match token.to_ascii_uppercase().as_str() {
            "CREATEFRAME" => Opcode::CreateFrame,
            "PUSHFRAME" => Opcode::PushFrame,
            "POPFRAME" => Opcode::PopFrame,
            "CALL" => Opcode::Call,
            "RETURN" => Opcode::Return,
            "PUSHS" => Opcode::Pushs,
            "POPS" => Opcode::Pops,
            "ADD" => Opcode::Add,
            "SUB" => Opcode::Sub,
            "MUL" => Opcode::Mul,
            "IDIV" => Opcode::Idiv,
            "LT" => Opcode::Lt,
            "GT" => Opcode::Gt,
            "EQ" => Opcode::Eq,
            "AND" => Opcode::And,
            "OR" => Opcode::Or,
            "NOT" => Opcode::Not,
            "INT2CHAR" => Opcode::Int2Char,
            "STRI2INT" => Opcode::Stri2Int,
            "READ" => Opcode::Read,
            "WRITE" => Opcode::Write,
            "CONCAT" => Opcode::Concat,
            "STRLEN" => Opcode::Strlen,
            "GETCHAR" => Opcode::GetChar,
            "SETCHAR" => Opcode::SetChar,
            "TYPE" => Opcode::Type,
            "LABEL" => Opcode::Label,
            "JUMP" => Opcode::Jump,
            "JUMPIFEQ" => Opcode::JumpIfEq,
            "JUMPIFNEQ" => Opcode::JumpIfNeq,
            "EXIT" => Opcode::Exit,
            "DPRINT" => Opcode::Dprint,
            "BREAK" => Opcode::Break,
            "MOVE" => Opcode::Move,
            "DEFVAR" => Opcode::DefVar,
            _ => return None,
        };
        Some(opcode)
    }

    /// The uppercase mnemonic emitted in the output document.
    pub fn name(self) -> &'static str {
        match self {
            Opcode::CreateFrame => "CREATEFRAME",
            Opcode::PushFrame => "PUSHFRAME",
            Opcode::PopFrame => "POPFRAME",
            Opcode::Call => "CALL",
            Opcode::Return => "RETURN",
            Opcode::Pushs => "PUSHS",
            Opcode::Pops => "POPS",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mul => "MUL",
            Opcode::Idiv => "IDIV",
            Opcode::Lt => "LT",
            Opcode::Gt => "GT",
            Opcode::Eq => "EQ",
            Opcode::And => "AND",
            Opcode::Or => "OR",
            Opcode::Not => "NOT",
            Opcode::Int2Char => "INT2CHAR",
            Opcode::Stri2Int => "STRI2INT",
            Opcode::Read => "READ",
            Opcode::Write => "WRITE",
            Opcode::Concat => "CONCAT",
            Opcode::Strlen => "STRLEN",
            Opcode::GetChar => "GETCHAR",
            Opcode::SetChar => "SETCHAR",
            Opcode::Type => "TYPE",
            Opcode::Label => "LABEL",
            Opcode::Jump => "JUMP",
            Opcode::JumpIfEq => "JUMPIFEQ",
            Opcode::JumpIfNeq => "JUMPIFNEQ",
            Opcode::Exit => "EXIT",
            Opcode::Dprint => "DPRINT",
            Opcode::Break => "BREAK",
            Opcode::Move => "MOVE",
            Opcode::DefVar => "DEFVAR",
        }
    }

    /// The ordered operand kinds this opcode requires.
    pub fn operands(self) -> &'static [OperandKind] {
        use OperandKind::{Label, Symb, Type, Var};
        match self {
            Opcode::CreateFrame
            | Opcode::PushFrame
            | Opcode::PopFrame
            | Opcode::Return
            | Opcode::Break => &[],
            Opcode::DefVar | Opcode::Pops => &[Var],
            Opcode::Call | Opcode::Label | Opcode::Jump => &[Label],
            Opcode::Pushs | Opcode::Write | Opcode::Exit | Opcode::Dprint => &[Symb],
            Opcode::Move | Opcode::Not | Opcode::Int2Char | Opcode::Strlen | Opcode::Type => {
                &[Var, Symb]
            }
            Opcode::Read => &[Var, Type],
            Opcode::Add
            | Opcode::Sub
            | Opcode::Mul
            | Opcode::Idiv
            | Opcode::Lt
            | Opcode::Gt
            | Opcode::Eq
            | Opcode::And
            | Opcode::Or
            | Opcode::Stri2Int
            | Opcode::GetChar
            | Opcode::SetChar
            | Opcode::Concat => &[Var, Symb, Symb],
            Opcode::JumpIfEq | Opcode::JumpIfNeq => &[Label, Symb, Symb],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::operand::OperandKind;

    const ALL: &[Opcode] = &[
        Opcode::CreateFrame,
        Opcode::PushFrame,
        Opcode::PopFrame,
        Opcode::Call,
        Opcode::Return,
        Opcode::Pushs,
        Opcode::Pops,
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mul,
        Opcode::Idiv,
        Opcode::Lt,
        Opcode::Gt,
        Opcode::Eq,
        Opcode::And,
        Opcode::Or,
        Opcode::Not,
        Opcode::Int2Char,
        Opcode::Stri2Int,
        Opcode::Read,
        Opcode::Write,
        Opcode::Concat,
        Opcode::Strlen,
        Opcode::GetChar,
        Opcode::SetChar,
        Opcode::Type,
        Opcode::Label,
        Opcode::Jump,
        Opcode::JumpIfEq,
        Opcode::JumpIfNeq,
        Opcode::Exit,
        Opcode::Dprint,
        Opcode::Break,
        Opcode::Move,
        Opcode::DefVar,
    ];

    #[test]
    fn every_name_round_trips_through_lookup() {
        for &op in ALL {
            assert_eq!(Opcode::lookup(op.name()), Some(op));
            assert_eq!(Opcode::lookup(&op.name().to_ascii_lowercase()), Some(op));
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Opcode::lookup("move"), Some(Opcode::Move));
        assert_eq!(Opcode::lookup("Move"), Some(Opcode::Move));
        assert_eq!(Opcode::lookup("jumpifneq"), Some(Opcode::JumpIfNeq));
    }

    #[test]
    fn lookup_rejects_unknown_mnemonics() {
        assert_eq!(Opcode::lookup("NOP"), None);
        assert_eq!(Opcode::lookup(""), None);
        assert_eq!(Opcode::lookup("MOVE2"), None);
    }

    #[test]
    fn arity_never_exceeds_three() {
        for &op in ALL {
            assert!(op.operands().len() <= 3, "{} has arity > 3", op.name());
        }
    }

    #[test]
    fn contracts_match_the_language_definition() {
        assert_eq!(Opcode::Break.operands(), &[] as &[OperandKind]);
        assert_eq!(Opcode::DefVar.operands(), &[OperandKind::Var]);
        assert_eq!(Opcode::Jump.operands(), &[OperandKind::Label]);
        assert_eq!(Opcode::Write.operands(), &[OperandKind::Symb]);
        assert_eq!(Opcode::Move.operands(), &[OperandKind::Var, OperandKind::Symb]);
        assert_eq!(Opcode::Read.operands(), &[OperandKind::Var, OperandKind::Type]);
        assert_eq!(
            Opcode::Concat.operands(),
            &[OperandKind::Var, OperandKind::Symb, OperandKind::Symb]
        );
        assert_eq!(
            Opcode::JumpIfEq.operands(),
            &[OperandKind::Label, OperandKind::Symb, OperandKind::Symb]
        );
    }
}
