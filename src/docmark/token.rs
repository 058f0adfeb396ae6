//! Token tree
//!
//!     Lexing produces a tree of [`Token`]s: block tokens own their nested blocks or their inline
//!     tokens, inline tokens are leaves (or hold already-lexed inline children). Strong,
//!     emphasis and link labels keep only their joined text. The tree is a
//!     plain, unresolved view of the source; only the two reference tokens carry data from the
//!     knowledge base, because resolution happens while scanning.
//!
//!     The token tree is an intermediate structure. Consumers should work with the semantic
//!     tree in [ast](super::ast) instead.

use serde::Serialize;

/// Column alignment of a table, from the delimiter row (`:---`, `:---:`, `---:`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    None,
    Left,
    Center,
    Right,
}

/// A table cell: its raw text and the inline tokens lexed from it.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub text: String,
    pub tokens: Vec<Token>,
}

/// One token of the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Blocks
    Heading {
        depth: u8,
        text: String,
        tokens: Vec<Token>,
    },
    Paragraph {
        text: String,
        tokens: Vec<Token>,
    },
    Blockquote {
        tokens: Vec<Token>,
    },
    List {
        ordered: bool,
        start: Option<u64>,
        loose: bool,
        items: Vec<Token>,
    },
    ListItem {
        tokens: Vec<Token>,
    },
    Table {
        header: Vec<TableCell>,
        align: Vec<Alignment>,
        rows: Vec<Vec<TableCell>>,
    },
    Hr,
    Code {
        lang: Option<String>,
        text: String,
    },
    Html {
        text: String,
    },

    // Inlines
    /// Plain text. Block-level text (tight list items) carries lexed inline tokens.
    Text {
        text: String,
        tokens: Option<Vec<Token>>,
    },
    Strong {
        text: String,
    },
    Em {
        text: String,
    },
    Codespan {
        text: String,
    },
    Link {
        href: String,
        title: Option<String>,
        text: String,
    },
    Image {
        href: String,
        title: Option<String>,
        text: String,
    },
    Br,
    DocsLink {
        path: String,
        url: String,
    },
    GlossaryLink {
        term: String,
        link_text: String,
        name: String,
        url: String,
        desc: String,
    },
}

impl Token {
    /// Stable snake_case name of the token kind, used in errors and debug output.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Heading { .. } => "heading",
            Token::Paragraph { .. } => "paragraph",
            Token::Blockquote { .. } => "blockquote",
            Token::List { .. } => "list",
            Token::ListItem { .. } => "list_item",
            Token::Table { .. } => "table",
            Token::Hr => "hr",
            Token::Code { .. } => "code",
            Token::Html { .. } => "html",
            Token::Text { .. } => "text",
            Token::Strong { .. } => "strong",
            Token::Em { .. } => "em",
            Token::Codespan { .. } => "codespan",
            Token::Link { .. } => "link",
            Token::Image { .. } => "image",
            Token::Br => "br",
            Token::DocsLink { .. } => "docs_link",
            Token::GlossaryLink { .. } => "glossary_link",
        }
    }

    /// Whether this token may appear inside inline content.
    ///
    /// Raw HTML is both: a block when it starts a line, an inline tag otherwise.
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            Token::Text { .. }
                | Token::Strong { .. }
                | Token::Em { .. }
                | Token::Codespan { .. }
                | Token::Link { .. }
                | Token::Image { .. }
                | Token::Br
                | Token::DocsLink { .. }
                | Token::GlossaryLink { .. }
                | Token::Html { .. }
        )
    }

    /// Plain text token without inline children.
    pub fn text(text: impl Into<String>) -> Self {
        Token::Text {
            text: text.into(),
            tokens: None,
        }
    }

    /// What the token reads as inside running text. References read as their path or link
    /// text; containers without a text field read as nothing.
    pub fn display_text(&self) -> &str {
        match self {
            Token::Heading { text, .. }
            | Token::Paragraph { text, .. }
            | Token::Code { text, .. }
            | Token::Html { text }
            | Token::Text { text, .. }
            | Token::Strong { text }
            | Token::Em { text }
            | Token::Codespan { text }
            | Token::Link { text, .. }
            | Token::Image { text, .. } => text.as_str(),
            Token::Br => "\n",
            Token::DocsLink { path, .. } => path.as_str(),
            Token::GlossaryLink { link_text, .. } => link_text.as_str(),
            Token::Blockquote { .. }
            | Token::List { .. }
            | Token::ListItem { .. }
            | Token::Table { .. }
            | Token::Hr => "",
        }
    }

    /// Display text of a run of inline tokens.
    pub fn joined_text(tokens: &[Token]) -> String {
        tokens.iter().map(Token::display_text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_snake_case() {
        assert_eq!(Token::Hr.kind(), "hr");
        assert_eq!(Token::ListItem { tokens: vec![] }.kind(), "list_item");
        assert_eq!(
            Token::DocsLink {
                path: "a".into(),
                url: "#".into()
            }
            .kind(),
            "docs_link"
        );
    }

    #[test]
    fn joined_text_reads_references_as_displayed() {
        let tokens = vec![
            Token::text("see "),
            Token::DocsLink {
                path: "a::b".into(),
                url: "#".into(),
            },
            Token::Br,
            Token::Em { text: "x".into() },
        ];
        assert_eq!(Token::joined_text(&tokens), "see a::b\nx");
    }

    #[test]
    fn block_tokens_are_not_inline() {
        assert!(!Token::Hr.is_inline());
        assert!(!Token::Blockquote { tokens: vec![] }.is_inline());
        assert!(Token::text("x").is_inline());
        assert!(Token::Html { text: "<b>".into() }.is_inline());
    }
}
