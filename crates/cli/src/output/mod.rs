//! Output formatting for parse and match results.

pub mod json;
pub mod text;

use std::fmt;

use crate::query::{QueryComponent, Text};

/// A component split into the pieces of its query syntax.
///
/// Displays as `-$artist:"okayado"`, which parses back to the same component
/// (lower-cased). Formatters color the pieces individually.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedComponent<'a> {
    pub excluded: bool,
    pub exact: bool,
    pub namespace: Option<&'a str>,
    /// Quoted value; an empty text renders as `""`.
    pub value: String,
}

pub fn render_component(component: &QueryComponent) -> RenderedComponent<'_> {
    let (namespace, text) = match component {
        QueryComponent::Text(text) => (None, text),
        QueryComponent::Namespace(ns) => (Some(ns.namespace.as_str()), &ns.tag),
    };
    RenderedComponent {
        excluded: component.excluded(),
        exact: component.exact(),
        namespace,
        value: quote(text),
    }
}

fn quote(text: &Text) -> String {
    format!("\"{}\"", text.raw_text_only())
}

impl fmt::Display for RenderedComponent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.excluded {
            f.write_str("-")?;
        }
        if self.exact {
            f.write_str("$")?;
        }
        if let Some(namespace) = self.namespace {
            write!(f, "{}:", namespace)?;
        }
        f.write_str(&self.value)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
