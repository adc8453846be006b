// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use serde::Serialize;

use crate::pattern::MatchOptions;
use crate::query::QueryComponent;

/// One parsed query for JSON output.
#[derive(Debug, Serialize)]
pub struct ParsedQueryOutput<'a> {
    pub query: &'a str,
    pub components: &'a [QueryComponent],
}

/// Result of a match run for JSON output.
#[derive(Debug, Serialize)]
pub struct MatchOutput<'a> {
    pub pattern: &'a str,
    pub ignore_case: bool,
    pub wildcard: bool,
    pub matched: Vec<&'a str>,
}

impl<'a> MatchOutput<'a> {
    pub fn new(pattern: &'a str, options: MatchOptions, matched: Vec<&'a str>) -> Self {
        Self {
            pattern,
            ignore_case: options.ignore_case,
            wildcard: options.enable_wildcard,
            matched,
        }
    }
}

/// Write a value as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(
    mut writer: W,
    value: &T,
) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
