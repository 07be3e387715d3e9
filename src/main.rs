// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

// CLI entrypoint for ippforge.

fn main() {
    let use_color = std::env::var("NO_COLOR").is_err();
    match ippforge::parser::run() {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{}", err.format_with_context(use_color));
            std::process::exit(err.exit_code());
        }
    }
}
