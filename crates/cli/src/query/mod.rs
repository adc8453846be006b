// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search query language.
//!
//! A query such as `"spy x family" -romance artist:$okayado` becomes an
//! ordered list of [`QueryComponent`]s:
//! - free text: a word or quoted phrase, optionally excluded (`-`) or exact (`$`)
//! - namespace: `category:value`, with shorthand categories (`a:` for `artist:`)
//!
//! Executors apply components in the order returned.

pub mod component;
pub mod engine;
pub mod parser;

pub use component::{Namespace, QueryComponent, StringTextComponent, Text, TextComponent};
pub use engine::{CacheStats, ParsedQuery, SearchEngine};
pub use parser::{canonical_namespace, parse_query_uncached};
