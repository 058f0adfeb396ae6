//! Named output formats
//!
//!     Formatters are kept in registration order, which is also the order `docmark
//!     list-formats` prints them in. Registering a name twice replaces the earlier formatter
//!     in place, so a caller can swap the html renderer without reordering the listing.

use crate::docmark::ast::Node;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("unknown format `{name}` (available: {})", .available.join(", "))]
    UnknownFormat {
        name: String,
        available: Vec<&'static str>,
    },
    #[error("failed to render {format}: {message}")]
    Render {
        format: &'static str,
        message: String,
    },
}

/// Renders a compiled page into one output format.
pub trait Formatter: Send + Sync {
    /// Name used on the command line (`--format <name>`).
    fn name(&self) -> &'static str;

    /// One line for `list-formats`.
    fn description(&self) -> &'static str;

    fn render(&self, nodes: &[Node]) -> Result<String, FormatError>;
}

pub struct FormatRegistry {
    formatters: Vec<Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        Self {
            formatters: Vec::new(),
        }
    }

    /// html, json, plaintext and treeviz.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::HtmlFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::PlaintextFormatter);
        registry.register(super::TreevizFormatter);
        registry
    }

    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        let formatter: Box<dyn Formatter> = Box::new(formatter);
        let name = formatter.name();
        match self.formatters.iter().position(|existing| existing.name() == name) {
            Some(index) => self.formatters[index] = formatter,
            None => self.formatters.push(formatter),
        }
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters
            .iter()
            .find(|formatter| formatter.name() == name)
            .map(|formatter| formatter.as_ref())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.formatters.iter().map(|formatter| formatter.name()).collect()
    }

    /// `(name, description)` pairs in registration order.
    pub fn describe(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.formatters
            .iter()
            .map(|formatter| (formatter.name(), formatter.description()))
    }

    /// Render `nodes` with the formatter called `name`.
    pub fn render(&self, nodes: &[Node], name: &str) -> Result<String, FormatError> {
        match self.get(name) {
            Some(formatter) => formatter.render(nodes),
            None => Err(FormatError::UnknownFormat {
                name: name.to_string(),
                available: self.names(),
            }),
        }
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docmark::ast::{Paragraph, Text};

    /// Counts top-level blocks.
    struct BlockCount;

    impl Formatter for BlockCount {
        fn name(&self) -> &'static str {
            "blocks"
        }

        fn description(&self) -> &'static str {
            "Number of top-level blocks"
        }

        fn render(&self, nodes: &[Node]) -> Result<String, FormatError> {
            Ok(nodes.len().to_string())
        }
    }

    /// Shadows the built-in html renderer.
    struct BareHtml;

    impl Formatter for BareHtml {
        fn name(&self) -> &'static str {
            "html"
        }

        fn description(&self) -> &'static str {
            "Replacement html"
        }

        fn render(&self, _nodes: &[Node]) -> Result<String, FormatError> {
            Ok("<!-- bare -->".to_string())
        }
    }

    fn page() -> Vec<Node> {
        vec![Node::from(Paragraph::new(vec![Node::from(Text::new("Hello"))]))]
    }

    #[test]
    fn test_defaults_in_registration_order() {
        assert_eq!(
            FormatRegistry::default().names(),
            vec!["html", "json", "plaintext", "treeviz"]
        );
    }

    #[test]
    fn test_custom_formatter_is_appended() {
        let mut registry = FormatRegistry::with_defaults();
        registry.register(BlockCount);
        assert_eq!(registry.names().last(), Some(&"blocks"));
        assert_eq!(registry.render(&page(), "blocks").unwrap(), "1");
    }

    #[test]
    fn test_same_name_replaces_in_place() {
        let mut registry = FormatRegistry::with_defaults();
        registry.register(BareHtml);
        assert_eq!(registry.names(), vec!["html", "json", "plaintext", "treeviz"]);
        assert_eq!(registry.render(&page(), "html").unwrap(), "<!-- bare -->");
        assert_eq!(
            registry.describe().next(),
            Some(("html", "Replacement html"))
        );
    }

    #[test]
    fn test_unknown_format_lists_the_available_ones() {
        let err = FormatRegistry::with_defaults()
            .render(&page(), "pdf")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown format `pdf` (available: html, json, plaintext, treeviz)"
        );
    }
}
