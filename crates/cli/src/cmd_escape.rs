// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Escape-like command implementation.

use std::io::Write;

use tagsearch::cli::EscapeLikeArgs;
use tagsearch::error::ExitCode;
use tagsearch::pattern::escape_like;

/// Run the escape-like command.
pub fn run(args: &EscapeLikeArgs) -> anyhow::Result<ExitCode> {
    let mut stdout = std::io::stdout().lock();
    for value in &args.values {
        writeln!(stdout, "{}", escape_like(value))?;
    }
    stdout.flush()?;
    Ok(ExitCode::Success)
}
