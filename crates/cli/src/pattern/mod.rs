// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wildcard matching and SQL `LIKE` escaping.
//!
//! Pattern syntax:
//! - `$*`: any sequence of characters (including none)
//! - `$?`: exactly one character
//! - everything else, including bare `*` and `?`, is literal
//!
//! Matching is a contained match, never anchored to the whole haystack.

pub mod matcher;

pub use matcher::{
    LiteralMatcher, MatchOptions, PatternError, RegexMatcher, WildcardPattern, escape_like,
    has_wildcard_marker, is_match, wildcard_to_regex,
};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
