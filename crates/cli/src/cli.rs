// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::pattern::MatchOptions;

/// Parse tag search queries and evaluate wildcard patterns
#[derive(Parser)]
#[command(name = "tagsearch")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "TAGSEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Split search queries into structured components
    Parse(ParseArgs),
    /// Print the haystacks a wildcard pattern matches
    Match(MatchArgs),
    /// Escape values for a SQL LIKE pattern
    EscapeLike(EscapeLikeArgs),
}

#[derive(clap::Args)]
pub struct ParseArgs {
    /// Queries to parse (reads one per line from stdin when omitted)
    #[arg(value_name = "QUERY")]
    pub queries: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct MatchArgs {
    /// Pattern; `$*` matches any run of characters, `$?` exactly one
    pub pattern: String,

    /// Candidates to test (reads one per line from stdin when omitted)
    #[arg(value_name = "HAYSTACK")]
    pub haystacks: Vec<String>,

    /// Compare case-insensitively (overrides config)
    #[arg(long, short = 'i', overrides_with = "case_sensitive")]
    pub ignore_case: bool,

    /// Compare case-sensitively
    #[arg(long, short = 's', overrides_with = "ignore_case")]
    pub case_sensitive: bool,

    /// Honor `$*` and `$?` (overrides config)
    #[arg(long, overrides_with = "no_wildcard")]
    pub wildcard: bool,

    /// Treat `$*` and `$?` literally
    #[arg(long, overrides_with = "wildcard")]
    pub no_wildcard: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct EscapeLikeArgs {
    /// Values to escape
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl MatchArgs {
    /// Flags override config defaults in either direction.
    ///
    /// Within a pair the last flag given wins.
    pub fn options(&self, defaults: MatchOptions) -> MatchOptions {
        MatchOptions {
            ignore_case: flag_pair(self.ignore_case, self.case_sensitive)
                .unwrap_or(defaults.ignore_case),
            enable_wildcard: flag_pair(self.wildcard, self.no_wildcard)
                .unwrap_or(defaults.enable_wildcard),
        }
    }
}

fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
