// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! XML generation for the validated program.
//!
//! One `<instruction>` element per record with `order` and `opcode`
//! attributes and `arg1`..`arg3` children. Operand values were already
//! entity-escaped by the classifier and are emitted verbatim.

use crate::core::program::Program;

/// The language name declared on the root element.
pub const LANGUAGE: &str = "IPPcode23";

const INDENT: &str = "  ";

/// Generate the pretty-printed XML document for a program.
pub fn write_program(program: &Program) -> String {
    let mut output = String::new();
    output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");

    if program.is_empty() {
        output.push_str(&format!("<program language=\"{LANGUAGE}\"/>\n"));
        return output;
    }

    output.push_str(&format!("<program language=\"{LANGUAGE}\">\n"));
    for instruction in program.instructions() {
        output.push_str(&format!(
            "{INDENT}<instruction order=\"{}\" opcode=\"{}\">\n",
            instruction.order,
            instruction.opcode.name()
        ));
        for (position, arg) in instruction.args.iter().enumerate() {
            output.push_str(&format!(
                "{INDENT}{INDENT}<arg{} type=\"{}\">{}</arg{}>\n",
                position + 1,
                arg.arg_type.tag(),
                arg.value,
                position + 1
            ));
        }
        output.push_str(&format!("{INDENT}</instruction>\n"));
    }
    output.push_str("</program>\n");
    output
}
