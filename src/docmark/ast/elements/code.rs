//! Code elements
//!
//!     Highlighting happens once, at construction. A code block is highlighted only when its
//!     language tag equals the highlighter's language; a code span always is, since spans carry
//!     no language of their own. Plaintext is always the raw code.

use super::super::traits::AstNode;
use super::text::label;
use crate::docmark::highlight::Highlighter;
use serde::Serialize;

/// Fenced or indented code block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeBlock {
    language: Option<String>,
    /// Highlighted HTML when `highlighted`, raw code otherwise.
    content: String,
    highlighted: bool,
    #[serde(skip)]
    plaintext: String,
}

impl CodeBlock {
    pub fn new(
        language: Option<String>,
        code: impl Into<String>,
        highlighter: &dyn Highlighter,
    ) -> Self {
        let code = code.into();
        let highlighted = language.as_deref() == Some(highlighter.language());
        let content = if highlighted {
            highlighter.highlight(&code)
        } else {
            code.clone()
        };
        Self {
            language,
            content,
            highlighted,
            plaintext: code,
        }
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// The code as written.
    pub fn code(&self) -> &str {
        &self.plaintext
    }
}

impl AstNode for CodeBlock {
    fn node_type(&self) -> &'static str {
        "CodeBlock"
    }

    fn display_label(&self) -> String {
        let lines = self.plaintext.lines().count();
        match &self.language {
            Some(language) => format!("{language}, {lines} lines"),
            None => format!("{lines} lines"),
        }
    }

    fn plaintext(&self) -> &str {
        &self.plaintext
    }
}

/// Inline `code`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeSpan {
    /// Highlighted HTML.
    content: String,
    #[serde(skip)]
    plaintext: String,
}

impl CodeSpan {
    pub fn new(code: impl Into<String>, highlighter: &dyn Highlighter) -> Self {
        let code = code.into();
        Self {
            content: highlighter.highlight(&code),
            plaintext: code,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn code(&self) -> &str {
        &self.plaintext
    }
}

impl AstNode for CodeSpan {
    fn node_type(&self) -> &'static str {
        "CodeSpan"
    }

    fn display_label(&self) -> String {
        label(&self.plaintext, 40)
    }

    fn plaintext(&self) -> &str {
        &self.plaintext
    }
}
