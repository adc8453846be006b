//! Compiled wildcard matchers with automatic optimization.

use memchr::memmem::Finder;
use regex::{Regex, RegexBuilder};

/// Marker matching any sequence of characters (including none).
pub const MULTI_WILDCARD: &str = "$*";

/// Marker matching exactly one character.
pub const SINGLE_WILDCARD: &str = "$?";

/// Regex for one character of a single line.
///
/// `.` in the regex crate only stops at `\n`. The other line terminators are
/// excluded too so `$?` never spans a line break.
const ANY_CHAR: &str = r"[^\n\r\x{85}\x{2028}\x{2029}]";

/// Characters escaped inside literal fragments, in replacement order.
///
/// The backslash comes first so escapes added later are not escaped again.
const REGEX_SPECIALS: [char; 14] = [
    '\\', '.', '^', '$', '*', '?', '{', '}', '(', ')', '[', ']', '|', '+',
];

/// How a haystack is compared against a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Compare case-insensitively (default: true).
    pub ignore_case: bool,
    /// Honor `$*` and `$?` markers (default: true).
    pub enable_wildcard: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            ignore_case: true,
            enable_wildcard: true,
        }
    }
}

/// A compiled pattern optimized for its structure.
pub enum WildcardPattern {
    /// Substring search (no wildcard markers to honor).
    Literal(LiteralMatcher),
    /// Wildcard pattern compiled to a regex.
    Regex(RegexMatcher),
}

/// Matcher for plain substrings using SIMD-optimized memchr.
pub struct LiteralMatcher {
    finder: Finder<'static>,
    fold_case: bool,
}

/// Matcher for wildcard patterns.
pub struct RegexMatcher {
    regex: Regex,
    fold_case: bool,
}

/// Error during pattern compilation.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid pattern: {0}")]
    InvalidRegex(#[from] regex::Error),
}

impl WildcardPattern {
    /// Compile a user pattern into a reusable matcher.
    ///
    /// - No markers to honor -> LiteralMatcher
    /// - Everything else -> RegexMatcher built from [`wildcard_to_regex`]
    ///
    /// Both matchers fold case the same way: pattern and haystack are
    /// lower-cased before comparison, so the choice never changes a result.
    pub fn compile(pattern: &str, options: MatchOptions) -> Result<Self, PatternError> {
        if !options.enable_wildcard || !has_wildcard_marker(pattern) {
            let literal = LiteralMatcher::new(pattern, options.ignore_case);
            return Ok(WildcardPattern::Literal(literal));
        }
        let regex = RegexMatcher::new(pattern, options.ignore_case)?;
        Ok(WildcardPattern::Regex(regex))
    }

    /// True if any part of `haystack` matches.
    pub fn is_match(&self, haystack: &str) -> bool {
        match self {
            WildcardPattern::Literal(m) => m.is_match(haystack),
            WildcardPattern::Regex(m) => m.is_match(haystack),
        }
    }
}

/// Match `haystack` against a one-off pattern.
///
/// Callers matching many haystacks against the same pattern should compile a
/// [`WildcardPattern`] once instead.
pub fn is_match(
    haystack: &str,
    pattern: &str,
    options: MatchOptions,
) -> Result<bool, PatternError> {
    Ok(WildcardPattern::compile(pattern, options)?.is_match(haystack))
}

/// Check if a pattern contains either wildcard marker.
pub fn has_wildcard_marker(pattern: &str) -> bool {
    pattern.contains(MULTI_WILDCARD) || pattern.contains(SINGLE_WILDCARD)
}

/// Convert the `$*` / `$?` wildcard syntax into regex source.
///
/// Bare `*` and `?` are literals and come out escaped. Neither marker
/// matches a line terminator.
pub fn wildcard_to_regex(pattern: &str) -> String {
    let any_run = format!("{ANY_CHAR}*");
    pattern
        .split(MULTI_WILDCARD)
        .map(|piece| {
            piece
                .split(SINGLE_WILDCARD)
                .map(escape_fragment)
                .collect::<Vec<_>>()
                .join(ANY_CHAR)
        })
        .collect::<Vec<_>>()
        .join(&any_run)
}

fn escape_fragment(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if REGEX_SPECIALS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Escape a value for embedding in a SQL `LIKE` pattern.
///
/// Assumes the statement declares `ESCAPE '\'`.
pub fn escape_like(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('_', "\\_")
        .replace('%', "\\%")
}

impl LiteralMatcher {
    /// Create a new literal matcher.
    ///
    /// With `fold_case`, needle and haystack are both lower-cased before
    /// searching.
    pub fn new(pattern: &str, fold_case: bool) -> Self {
        let needle = if fold_case {
            pattern.to_lowercase()
        } else {
            pattern.to_string()
        };
        Self {
            finder: Finder::new(needle.as_bytes()).into_owned(),
            fold_case,
        }
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        if self.fold_case {
            self.finder.find(haystack.to_lowercase().as_bytes()).is_some()
        } else {
            self.finder.find(haystack.as_bytes()).is_some()
        }
    }
}

impl RegexMatcher {
    /// Compile a `$*` / `$?` pattern.
    ///
    /// With `fold_case`, the pattern is lower-cased before translation and
    /// each haystack is lower-cased before matching, like [`LiteralMatcher`].
    pub fn new(pattern: &str, fold_case: bool) -> Result<Self, PatternError> {
        let source = if fold_case {
            wildcard_to_regex(&pattern.to_lowercase())
        } else {
            wildcard_to_regex(pattern)
        };
        let regex = RegexBuilder::new(&source).build()?;
        Ok(Self { regex, fold_case })
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        if self.fold_case {
            self.regex.is_match(&haystack.to_lowercase())
        } else {
            self.regex.is_match(haystack)
        }
    }

    /// The compiled regex source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
