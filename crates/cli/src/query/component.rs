// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parsed query data model.

use std::borrow::Cow;

use serde::Serialize;

use crate::pattern::escape_like;

/// One parsed keyword of a search query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QueryComponent {
    /// Free-text term (word or quoted phrase).
    Text(Text),
    /// `category:value` tag filter.
    Namespace(Namespace),
}

/// Atomic piece of free text inside a [`Text`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextComponent {
    /// Literal word or quoted phrase.
    String(StringTextComponent),
}

/// A literal, already lower-cased word or phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringTextComponent {
    pub value: String,
}

/// Ordered text components plus match modifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Text {
    pub components: Vec<TextComponent>,
    /// Term must NOT match.
    pub excluded: bool,
    /// Term must match exactly rather than partially.
    pub exact: bool,
}

/// Tag filter: an alias-resolved category name and its value.
///
/// Modifiers apply to the whole tag filter and live here, not on `tag`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Namespace {
    pub namespace: String,
    pub tag: Text,
    pub excluded: bool,
    pub exact: bool,
}

impl QueryComponent {
    pub fn excluded(&self) -> bool {
        match self {
            QueryComponent::Text(t) => t.excluded,
            QueryComponent::Namespace(n) => n.excluded,
        }
    }

    pub fn exact(&self) -> bool {
        match self {
            QueryComponent::Text(t) => t.exact,
            QueryComponent::Namespace(n) => n.exact,
        }
    }

    pub(crate) fn set_modifiers(&mut self, excluded: bool, exact: bool) {
        match self {
            QueryComponent::Text(t) => {
                t.excluded = excluded;
                t.exact = exact;
            }
            QueryComponent::Namespace(n) => {
                n.excluded = excluded;
                n.exact = exact;
            }
        }
    }
}

impl TextComponent {
    /// Shorthand for a [`TextComponent::String`].
    pub fn string(value: impl Into<String>) -> Self {
        TextComponent::String(StringTextComponent {
            value: value.into(),
        })
    }

    /// Text as the user typed it (after lower-casing).
    pub fn raw_text(&self) -> &str {
        match self {
            TextComponent::String(s) => &s.value,
        }
    }

    /// Fragment of a SQL `LIKE` pattern matching this component.
    pub fn like_fragment(&self) -> Cow<'_, str> {
        match self {
            TextComponent::String(s) => Cow::Owned(escape_like(&s.value)),
        }
    }
}

impl Text {
    pub fn new(components: Vec<TextComponent>) -> Self {
        Self {
            components,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Concatenated raw text of every component.
    pub fn raw_text_only(&self) -> String {
        self.components.iter().map(TextComponent::raw_text).collect()
    }

    pub fn raw_text_escaped_for_like(&self) -> String {
        escape_like(&self.raw_text_only())
    }

    /// `LIKE` pattern for an exact match on this text.
    pub fn as_like_query(&self) -> String {
        self.components
            .iter()
            .map(TextComponent::like_fragment)
            .collect()
    }

    /// `LIKE` pattern matching this text anywhere in a title.
    pub fn as_lenient_title_query(&self) -> String {
        format!("%{}%", self.as_like_query())
    }

    /// `LIKE` patterns matching this text as a tag prefix or as a whole word
    /// within a multi-word tag.
    pub fn as_lenient_tag_queries(&self) -> Vec<String> {
        let escaped = self.raw_text_escaped_for_like();
        vec![
            format!("{escaped}%"),
            format!(" {escaped} "),
            format!(" {escaped}"),
            format!("{escaped} "),
        ]
    }
}

impl Namespace {
    pub fn new(namespace: impl Into<String>, tag: Text) -> Self {
        Self {
            namespace: namespace.into(),
            tag,
            excluded: false,
            exact: false,
        }
    }
}

impl From<Text> for QueryComponent {
    fn from(text: Text) -> Self {
        QueryComponent::Text(text)
    }
}

impl From<Namespace> for QueryComponent {
    fn from(namespace: Namespace) -> Self {
        QueryComponent::Namespace(namespace)
    }
}

#[cfg(test)]
#[path = "component_tests.rs"]
mod tests;
