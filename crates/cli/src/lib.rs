//! Structured search queries for tag-based catalogs.
//!
//! - [`query`]: parse `"spy x family" -romance a:okayado` into components
//! - [`pattern`]: `$*` / `$?` wildcard matching and `LIKE` escaping

pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod pattern;
pub mod query;

pub use cli::{Cli, Command, EscapeLikeArgs, MatchArgs, OutputFormat, ParseArgs};
pub use config::{Config, ConfigSource, MatchConfig};
pub use error::{Error, ExitCode, Result};
pub use pattern::{
    MatchOptions, PatternError, WildcardPattern, escape_like, is_match, wildcard_to_regex,
};
pub use query::{
    CacheStats, Namespace, ParsedQuery, QueryComponent, SearchEngine, StringTextComponent, Text,
    TextComponent,
};
