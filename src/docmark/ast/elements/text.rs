//! Text-level elements
//!
//!     Text is the leaf of most inline content. It holds either a literal string or, for tight
//!     list items, the inline nodes lexed from the item's text.
//!
//!     Strong and Em keep their raw inner text: nested markup inside emphasis is not parsed.

use super::super::node::{concat_plaintext, Node};
use super::super::traits::AstNode;
use serde::Serialize;

const LABEL_WIDTH: usize = 40;

/// Shorten `text` to `max_chars` for labels.
pub(crate) fn label(text: &str, max_chars: usize) -> String {
    let flat = text.replace('\n', "↵");
    if flat.chars().count() > max_chars {
        let mut truncated: String = flat.chars().take(max_chars).collect();
        truncated.push('…');
        truncated
    } else {
        flat
    }
}

/// Plain or nested inline text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
    #[serde(skip)]
    plaintext: String,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            plaintext: content.clone(),
            content: Some(content),
            children: Vec::new(),
        }
    }

    pub fn with_children(children: Vec<Node>) -> Self {
        Self {
            plaintext: concat_plaintext(&children),
            content: None,
            children,
        }
    }

    /// The literal content, when this text has no nested nodes.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

impl AstNode for Text {
    fn node_type(&self) -> &'static str {
        "Text"
    }

    fn display_label(&self) -> String {
        label(&self.plaintext, LABEL_WIDTH)
    }

    fn plaintext(&self) -> &str {
        &self.plaintext
    }
}

/// `**strong**` text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Strong {
    content: String,
}

impl Strong {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl AstNode for Strong {
    fn node_type(&self) -> &'static str {
        "Strong"
    }

    fn display_label(&self) -> String {
        label(&self.content, LABEL_WIDTH)
    }

    fn plaintext(&self) -> &str {
        &self.content
    }
}

/// `*emphasized*` text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Em {
    content: String,
}

impl Em {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl AstNode for Em {
    fn node_type(&self) -> &'static str {
        "Em"
    }

    fn display_label(&self) -> String {
        label(&self.content, LABEL_WIDTH)
    }

    fn plaintext(&self) -> &str {
        &self.content
    }
}

/// Raw HTML passed through untouched, block or inline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawHtml {
    html: String,
}

impl RawHtml {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

impl AstNode for RawHtml {
    fn node_type(&self) -> &'static str {
        "RawHtml"
    }

    fn display_label(&self) -> String {
        label(&self.html, LABEL_WIDTH)
    }

    fn plaintext(&self) -> &str {
        &self.html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_plaintext() {
        let text = Text::new("plain");
        assert_eq!(text.plaintext(), "plain");
        assert_eq!(text.content(), Some("plain"));
        assert!(text.children().is_empty());
    }

    #[test]
    fn test_nested_text_concatenates_children() {
        let text = Text::with_children(vec![
            Node::from(Text::new("a ")),
            Node::from(Strong::new("bold")),
            Node::from(Em::new("")),
        ]);
        assert_eq!(text.plaintext(), "a bold");
        assert_eq!(text.content(), None);
    }

    #[test]
    fn test_label_truncates_and_flattens() {
        assert_eq!(label("a\nb", 10), "a↵b");
        assert_eq!(label("abcdef", 3), "abc…");
    }
}
