// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line input for commands that accept values on stdin.

use std::io::BufRead;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Read every line from `reader`, dropping line terminators (`\n` or `\r\n`).
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    reader
        .lines()
        .map(|line| {
            line.map(|mut l| {
                if l.ends_with('\r') {
                    l.pop();
                }
                l
            })
            .map_err(|e| Error::Io {
                path: PathBuf::from("<stdin>"),
                source: e,
            })
        })
        .collect()
}

/// Use explicit arguments, or fall back to stdin lines when none were given.
pub fn args_or_stdin(args: &[String]) -> Result<Vec<String>> {
    if args.is_empty() {
        tracing::debug!("no arguments, reading lines from stdin");
        read_lines(std::io::stdin().lock())
    } else {
        Ok(args.to_vec())
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
