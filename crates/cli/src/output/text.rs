//! Text output formatter.
//!
//! Parse format, one block per query:
//! ```text
//! <query>
//!   <component>
//! ```

use std::io::Write;
use termcolor::WriteColor;

use super::render_component;
use crate::color::scheme;
use crate::query::QueryComponent;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write a query followed by its components, one per line.
    pub fn write_parsed(
        &mut self,
        query: &str,
        components: &[QueryComponent],
    ) -> std::io::Result<()> {
        self.out.set_color(&scheme::query())?;
        write!(self.out, "{}", query)?;
        self.out.reset()?;
        writeln!(self.out)?;

        if components.is_empty() {
            write!(self.out, "  ")?;
            self.out.set_color(&scheme::note())?;
            write!(self.out, "(no components)")?;
            self.out.reset()?;
            writeln!(self.out)?;
            return Ok(());
        }

        for component in components {
            self.write_component(component)?;
        }
        Ok(())
    }

    fn write_component(&mut self, component: &QueryComponent) -> std::io::Result<()> {
        let rendered = render_component(component);
        write!(self.out, "  ")?;

        if rendered.excluded {
            self.out.set_color(&scheme::excluded())?;
            write!(self.out, "-")?;
            self.out.reset()?;
        }
        if rendered.exact {
            self.out.set_color(&scheme::exact())?;
            write!(self.out, "$")?;
            self.out.reset()?;
        }
        if let Some(namespace) = rendered.namespace {
            self.out.set_color(&scheme::namespace())?;
            write!(self.out, "{}:", namespace)?;
            self.out.reset()?;
        }
        writeln!(self.out, "{}", rendered.value)
    }

    /// Write one plain result line (matched haystack, escaped value).
    pub fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        writeln!(self.out, "{}", line)
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
