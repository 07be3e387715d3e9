// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Operand validation, classification, and escaping.
//!
//! Each declared operand kind has its own lexical grammar. Classification
//! takes the raw token and produces the resolved type tag plus the escaped
//! text to emit, or a message describing the first violation. A `symb` token
//! resolves at validation time to either a frame-qualified variable or a
//! typed constant; nothing is ever defaulted.

use crate::core::text_utils::is_identifier;

/// Operand kind declared by an opcode contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    Var,
    Label,
    Symb,
    Type,
}

/// Resolved type tag of a validated operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    Var,
    Label,
    Type,
    Nil,
    Bool,
    Int,
    String,
}

impl ArgType {
    /// The tag emitted as the `type` attribute.
    pub fn tag(self) -> &'static str {
        match self {
            ArgType::Var => "var",
            ArgType::Label => "label",
            ArgType::Type => "type",
            ArgType::Nil => "nil",
            ArgType::Bool => "bool",
            ArgType::Int => "int",
            ArgType::String => "string",
        }
    }
}

/// A validated operand: resolved type tag plus the escaped text to emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arg {
    pub arg_type: ArgType,
    pub value: String,
}

/// Validate and classify a raw operand token against its declared kind.
///
/// On failure returns the violation message; the caller attaches the source
/// line and failure category.
pub fn classify(token: &str, kind: OperandKind) -> Result<Arg, String> {
    match kind {
        OperandKind::Var => classify_var(token),
        OperandKind::Label => classify_label(token),
        OperandKind::Symb => classify_symb(token),
        OperandKind::Type => classify_type(token),
    }
}

fn classify_var(token: &str) -> Result<Arg, String> {
    if !is_var(token) {
        return Err(format!("Invalid variable operand: {token}"));
    }
    Ok(Arg {
        arg_type: ArgType::Var,
        value: escape_amp(token),
    })
}

fn classify_label(token: &str) -> Result<Arg, String> {
    if !is_identifier(token) {
        return Err(format!("Invalid label operand: {token}"));
    }
    Ok(Arg {
        arg_type: ArgType::Label,
        value: escape_markup(token),
    })
}

fn classify_symb(token: &str) -> Result<Arg, String> {
    let Some((prefix, value)) = token.split_once('@') else {
        return Err(format!("Invalid symbol operand: {token}"));
    };
    match prefix {
        "GF" | "LF" | "TF" => classify_var(token),
        "nil" => {
            if value != "nil" {
                return Err(format!("Invalid nil constant: {token}"));
            }
            Ok(Arg {
                arg_type: ArgType::Nil,
                value: value.to_string(),
            })
        }
        "bool" => {
            if value != "true" && value != "false" {
                return Err(format!("Invalid bool constant: {token}"));
            }
            Ok(Arg {
                arg_type: ArgType::Bool,
                value: value.to_string(),
            })
        }
        "int" => {
            if !is_int_const(value) {
                return Err(format!("Invalid int constant: {token}"));
            }
            Ok(Arg {
                arg_type: ArgType::Int,
                value: value.to_string(),
            })
        }
        "string" => {
            if !is_string_const(value) {
                return Err(format!("Invalid string constant: {token}"));
            }
            Ok(Arg {
                arg_type: ArgType::String,
                value: escape_amp(value),
            })
        }
        _ => Err(format!("Invalid symbol operand: {token}")),
    }
}

fn classify_type(token: &str) -> Result<Arg, String> {
    match token {
        "nil" | "bool" | "int" | "string" => Ok(Arg {
            arg_type: ArgType::Type,
            value: token.to_string(),
        }),
        _ => Err(format!("Invalid type operand: {token}")),
    }
}

/// A frame-qualified variable: `GF@`/`LF@`/`TF@` followed by an identifier.
fn is_var(token: &str) -> bool {
    match token.split_once('@') {
        Some(("GF" | "LF" | "TF", name)) => is_identifier(name),
        _ => false,
    }
}

/// Integer constant: optional sign, then decimal, `0x`/`0X` hex, or octal
/// optionally marked `0o`/`0O`.
fn is_int_const(s: &str) -> bool {
    let body = s.strip_prefix(['+', '-']).unwrap_or(s);
    if body.is_empty() {
        return false;
    }
    if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        return !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit());
    }
    if body == "0" {
        return true;
    }
    if let Some(oct) = body.strip_prefix("0o").or_else(|| body.strip_prefix("0O")) {
        return !oct.is_empty() && oct.bytes().all(is_octal_digit);
    }
    if let Some(oct) = body.strip_prefix('0') {
        // Bare leading zero marks an octal run: 007, 010.
        return oct.bytes().all(is_octal_digit);
    }
    body.bytes().all(|b| b.is_ascii_digit())
}

fn is_octal_digit(b: u8) -> bool {
    (b'0'..=b'7').contains(&b)
}

/// String constant: a backslash may appear only as the start of a 3-digit
/// escape. Escapes are removed before the no-backslash check only; the digits
/// are not range-checked and the emitted text keeps them verbatim.
fn is_string_const(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut idx = 0usize;
    while idx < bytes.len() {
        if bytes[idx] == b'\\' {
            if idx + 3 >= bytes.len() {
                return false;
            }
            if !bytes[idx + 1..idx + 4].iter().all(u8::is_ascii_digit) {
                return false;
            }
            idx += 4;
        } else {
            idx += 1;
        }
    }
    true
}

/// Escape `&` to its entity form.
fn escape_amp(s: &str) -> String {
    s.replace('&', "&amp;")
}

/// Escape `&`, `<`, and `>` to their entity forms (ampersand first).
fn escape_markup(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(token: &str, kind: OperandKind) -> Arg {
        classify(token, kind).expect(token)
    }

    fn rejected(token: &str, kind: OperandKind) -> bool {
        classify(token, kind).is_err()
    }

    #[test]
    fn var_round_trips_unescaped() {
        let arg = ok("GF@x", OperandKind::Var);
        assert_eq!(arg.arg_type, ArgType::Var);
        assert_eq!(arg.value, "GF@x");
    }

    #[test]
    fn var_accepts_all_frames_and_punctuation_names() {
        assert_eq!(ok("LF@_tmp", OperandKind::Var).arg_type, ArgType::Var);
        assert_eq!(ok("TF@-", OperandKind::Var).arg_type, ArgType::Var);
        assert_eq!(ok("GF@a$b%c*d!e?f", OperandKind::Var).arg_type, ArgType::Var);
    }

    #[test]
    fn var_escapes_ampersand() {
        assert_eq!(ok("GF@a&b", OperandKind::Var).value, "GF@a&amp;b");
    }

    #[test]
    fn var_rejects_bad_forms() {
        assert!(rejected("gf@x", OperandKind::Var)); // frame is case-sensitive
        assert!(rejected("GF@1x", OperandKind::Var)); // digit start
        assert!(rejected("GF@", OperandKind::Var)); // empty name
        assert!(rejected("GF@x y", OperandKind::Var));
        assert!(rejected("x", OperandKind::Var)); // no frame
        assert!(rejected("XF@x", OperandKind::Var)); // unknown frame
    }

    #[test]
    fn label_escapes_ampersand() {
        let arg = ok("He&llo", OperandKind::Label);
        assert_eq!(arg.arg_type, ArgType::Label);
        assert_eq!(arg.value, "He&amp;llo");
    }

    #[test]
    fn label_rejects_frame_prefix_form() {
        // `@` is not an identifier character.
        assert!(rejected("GF@x", OperandKind::Label));
        assert!(rejected("1st", OperandKind::Label));
        assert!(rejected("", OperandKind::Label));
    }

    #[test]
    fn symb_resolves_frame_prefix_to_var() {
        let arg = ok("TF@val", OperandKind::Symb);
        assert_eq!(arg.arg_type, ArgType::Var);
        assert_eq!(arg.value, "TF@val");
    }

    #[test]
    fn symb_with_invalid_var_name_is_rejected() {
        // A bad frame-qualified name must fail, not be silently dropped.
        assert!(rejected("GF@2bad", OperandKind::Symb));
        assert!(rejected("LF@", OperandKind::Symb));
    }

    #[test]
    fn symb_without_separator_is_rejected() {
        assert!(rejected("int5", OperandKind::Symb));
        assert!(rejected("nil", OperandKind::Symb));
    }

    #[test]
    fn symb_unknown_prefix_never_defaults() {
        assert!(rejected("foo@bar", OperandKind::Symb));
        assert!(rejected("INT@5", OperandKind::Symb));
        assert!(rejected("@5", OperandKind::Symb));
    }

    #[test]
    fn nil_and_bool_constants() {
        assert_eq!(ok("nil@nil", OperandKind::Symb).arg_type, ArgType::Nil);
        assert_eq!(ok("nil@nil", OperandKind::Symb).value, "nil");
        assert_eq!(ok("bool@true", OperandKind::Symb).value, "true");
        assert_eq!(ok("bool@false", OperandKind::Symb).value, "false");
        assert!(rejected("nil@null", OperandKind::Symb));
        assert!(rejected("bool@TRUE", OperandKind::Symb));
        assert!(rejected("bool@1", OperandKind::Symb));
    }

    #[test]
    fn int_constant_forms() {
        for token in ["int@0", "int@5", "int@-5", "int@+42", "int@123456789", "int@0x1A", "int@0XFF", "int@-0xff", "int@007", "int@0o17", "int@0O17", "int@-0o7"] {
            assert_eq!(ok(token, OperandKind::Symb).arg_type, ArgType::Int, "{token}");
        }
    }

    #[test]
    fn int_constant_rejections() {
        for token in ["int@", "int@1.5", "int@08", "int@0x", "int@0o8", "int@+", "int@5a", "int@ 5", "int@5@6"] {
            assert!(rejected(token, OperandKind::Symb), "{token}");
        }
    }

    #[test]
    fn int_value_emitted_verbatim() {
        assert_eq!(ok("int@0x1A", OperandKind::Symb).value, "0x1A");
        assert_eq!(ok("int@-5", OperandKind::Symb).value, "-5");
    }

    #[test]
    fn string_constants() {
        assert_eq!(ok("string@hello", OperandKind::Symb).arg_type, ArgType::String);
        // Empty string is valid.
        assert_eq!(ok("string@", OperandKind::Symb).value, "");
        // Embedded @ is part of the value.
        assert_eq!(ok("string@a@b", OperandKind::Symb).value, "a@b");
    }

    #[test]
    fn string_escape_sequences_gate_validity_only() {
        let arg = ok(r"string@a\064b", OperandKind::Symb);
        assert_eq!(arg.value, r"a\064b");
        // Any 3 digits count as an escape, defined character or not.
        assert!(classify(r"string@\999", OperandKind::Symb).is_ok());
        assert!(rejected(r"string@a\64b", OperandKind::Symb));
        assert!(rejected(r"string@trailing\", OperandKind::Symb));
        assert!(rejected(r"string@a\06", OperandKind::Symb));
        assert!(rejected(r"string@a\x41", OperandKind::Symb));
    }

    #[test]
    fn string_value_escapes_ampersand() {
        assert_eq!(ok("string@a&b", OperandKind::Symb).value, "a&amp;b");
    }

    #[test]
    fn type_operand_is_exact() {
        for token in ["nil", "bool", "int", "string"] {
            let arg = ok(token, OperandKind::Type);
            assert_eq!(arg.arg_type, ArgType::Type);
            assert_eq!(arg.value, token);
        }
        assert!(rejected("Int", OperandKind::Type));
        assert!(rejected("float", OperandKind::Type));
        assert!(rejected("", OperandKind::Type));
    }
}
