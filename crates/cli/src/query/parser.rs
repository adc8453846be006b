// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-pass query tokenizer.
//!
//! Grammar, one character at a time (after lower-casing):
//! - `"` toggles quoting; spaces and commas inside quotes stay in the word
//! - `-` at the start of a word excludes the keyword
//! - `$` outside quotes marks the keyword exact
//! - `:` turns the text so far into a namespace name (quotes do not protect it)
//! - space or `,` outside quotes ends the keyword

use std::mem;

use super::component::{Namespace, QueryComponent, Text, TextComponent};

/// Resolve a namespace shorthand to its canonical name.
pub fn canonical_namespace(name: &str) -> &str {
    match name {
        "a" => "artist",
        "c" | "char" => "character",
        "f" => "female",
        "g" | "creator" | "circle" => "group",
        "l" | "lang" => "language",
        "m" => "male",
        "p" | "series" => "parody",
        "r" => "reclass",
        other => other,
    }
}

/// Parse a query without memoization.
///
/// Total over all inputs: malformed queries yield best-effort components.
pub fn parse_query_uncached(query: &str) -> Vec<QueryComponent> {
    let mut scanner = Scanner::default();
    for c in query.to_lowercase().chars() {
        scanner.push(c);
    }
    scanner.finish()
}

/// Scan state for one parse call.
#[derive(Default)]
struct Scanner {
    output: Vec<QueryComponent>,
    in_quotes: bool,
    /// Characters of the word being read.
    raw: String,
    /// Finished words of the current keyword.
    queued: Vec<TextComponent>,
    /// Namespace opened by `:` and awaiting its value.
    namespace: Option<String>,
    next_is_excluded: bool,
    next_is_exact: bool,
}

impl Scanner {
    fn push(&mut self, c: char) {
        match c {
            '"' => self.in_quotes = !self.in_quotes,
            '-' if !self.in_quotes && self.at_word_start() => self.next_is_excluded = true,
            '$' if !self.in_quotes => self.next_is_exact = true,
            ':' => self.open_namespace(),
            ' ' | ',' if !self.in_quotes => self.flush_all(),
            _ => self.raw.push(c),
        }
    }

    fn finish(mut self) -> Vec<QueryComponent> {
        self.flush_all();
        self.output
    }

    fn at_word_start(&self) -> bool {
        self.raw.chars().all(char::is_whitespace) || self.raw.ends_with(' ')
    }

    /// Move the current word into the queue.
    fn flush_text(&mut self) {
        if !self.raw.is_empty() {
            self.queued.push(TextComponent::string(mem::take(&mut self.raw)));
        }
    }

    /// Drain every queued word into a new [`Text`].
    fn take_text(&mut self) -> Text {
        Text::new(mem::take(&mut self.queued))
    }

    fn open_namespace(&mut self) {
        self.flush_text();
        let name = self.take_text().raw_text_only();
        self.namespace = Some(canonical_namespace(&name).to_string());
    }

    /// Complete the current keyword and emit it.
    ///
    /// Pending modifiers carry over when nothing is emitted.
    fn flush_all(&mut self) {
        self.flush_text();
        if self.queued.is_empty() && self.namespace.is_none() {
            return;
        }

        let tag = self.take_text();
        let mut component = match self.namespace.take() {
            Some(name) => QueryComponent::from(Namespace::new(name, tag)),
            None => QueryComponent::from(tag),
        };
        component.set_modifiers(
            mem::take(&mut self.next_is_excluded),
            mem::take(&mut self.next_is_exact),
        );
        self.output.push(component);
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
