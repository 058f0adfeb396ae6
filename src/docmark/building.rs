//! Semantic tree building
//!
//!     This module turns the [token tree](super::token) into [`Node`]s. It is the single place
//!     where token kinds meet node variants: one exhaustive match, so a new token kind cannot
//!     be added without deciding what it builds.
//!
//!     Building happens bottom-up. Children are built first and handed to the element
//!     constructors, which compute plaintext (and heading ids, and highlighted code) from them.
//!
//! Contexts
//!
//!     Tokens are built inside a [`Context`]. Block contexts (the document, blockquotes, list
//!     items) accept any token. Inline contexts (paragraphs, headings, nested text, table
//!     cells) accept inline tokens only, and a list accepts list items only. Anything else
//!     fails the whole document with [`CompileError::UnsupportedTokenKind`].

use crate::docmark::ast::{
    AstNode, BlockQuote, CodeBlock, CodeSpan, DocsLink, Em, GlossaryLink, Heading, Image, Link,
    List, ListItem, Node, Paragraph, RawHtml, Strong, Table, TableCell, Text,
};
use crate::docmark::error::{CompileError, CompileResult};
use crate::docmark::highlight::Highlighter;
use crate::docmark::token::{self, Token};

/// Where a token is being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    Document,
    BlockQuote,
    ListItem,
    List,
    Paragraph,
    Heading,
    Text,
    TableCell,
}

impl Context {
    pub fn name(self) -> &'static str {
        match self {
            Context::Document => "document",
            Context::BlockQuote => "blockquote",
            Context::ListItem => "list item",
            Context::List => "list",
            Context::Paragraph => "paragraph",
            Context::Heading => "heading",
            Context::Text => "text",
            Context::TableCell => "table cell",
        }
    }

    /// Whether `token` has a node mapping in this context.
    pub fn accepts(self, token: &Token) -> bool {
        match self {
            Context::Document | Context::BlockQuote | Context::ListItem => true,
            Context::List => matches!(token, Token::ListItem { .. }),
            Context::Paragraph | Context::Heading | Context::Text | Context::TableCell => {
                token.is_inline()
            }
        }
    }
}

/// Builds nodes, highlighting code with the given highlighter.
pub struct TreeBuilder<'a> {
    highlighter: &'a dyn Highlighter,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(highlighter: &'a dyn Highlighter) -> Self {
        Self { highlighter }
    }

    /// Build top-level document tokens.
    pub fn build(&self, tokens: Vec<Token>) -> CompileResult<Vec<Node>> {
        self.nodes(tokens, Context::Document)
    }

    fn nodes(&self, tokens: Vec<Token>, context: Context) -> CompileResult<Vec<Node>> {
        tokens
            .into_iter()
            .map(|token| self.node(token, context))
            .collect()
    }

    fn node(&self, token: Token, context: Context) -> CompileResult<Node> {
        if !context.accepts(&token) {
            return Err(CompileError::unsupported(token.kind(), context.name()));
        }

        let node = match token {
            Token::Heading { depth, tokens, .. } => {
                Node::from(Heading::new(depth, self.nodes(tokens, Context::Heading)?))
            }
            Token::Paragraph { tokens, .. } => {
                Node::from(Paragraph::new(self.nodes(tokens, Context::Paragraph)?))
            }
            Token::Blockquote { tokens } => Node::from(self.blockquote(tokens)?),
            Token::List {
                ordered,
                start,
                items,
                ..
            } => {
                let items = items
                    .into_iter()
                    .map(|item| self.list_item(item))
                    .collect::<CompileResult<Vec<_>>>()?;
                Node::from(List::new(ordered, start, items))
            }
            Token::ListItem { tokens } => {
                Node::from(ListItem::new(self.nodes(tokens, Context::ListItem)?))
            }
            Token::Table { header, align, rows } => {
                let headers = self.cells(header)?;
                let rows = rows
                    .into_iter()
                    .map(|row| self.cells(row))
                    .collect::<CompileResult<Vec<_>>>()?;
                Node::from(Table::new(headers, align, rows))
            }
            Token::Hr => Node::HorizontalRule,
            Token::Code { lang, text } => Node::from(CodeBlock::new(lang, text, self.highlighter)),
            Token::Html { text } => Node::from(RawHtml::new(text)),
            Token::Text {
                tokens: Some(tokens),
                ..
            } => Node::from(Text::with_children(self.nodes(tokens, Context::Text)?)),
            Token::Text { text, tokens: None } => Node::from(Text::new(text)),
            Token::Strong { text } => Node::from(Strong::new(text)),
            Token::Em { text } => Node::from(Em::new(text)),
            Token::Codespan { text } => Node::from(CodeSpan::new(text, self.highlighter)),
            Token::Link { href, title, text } => Node::from(Link::new(&href, text, title)),
            Token::Image { href, title, text } => Node::from(Image::new(href, text, title)),
            Token::Br => Node::LineBreak,
            Token::DocsLink { path, url } => Node::from(DocsLink::new(path, url)),
            Token::GlossaryLink {
                term,
                link_text,
                name,
                url,
                desc,
            } => Node::from(GlossaryLink::new(term, link_text, name, url, desc)),
        };
        Ok(node)
    }

    fn blockquote(&self, mut tokens: Vec<Token>) -> CompileResult<BlockQuote> {
        let heading = if matches!(tokens.first(), Some(Token::Heading { .. })) {
            match tokens.remove(0) {
                Token::Heading { depth, tokens, .. } => {
                    let heading = Heading::new(depth, self.nodes(tokens, Context::Heading)?);
                    Some(heading.plaintext().to_string())
                }
                _ => None,
            }
        } else {
            None
        };
        let children = self.nodes(tokens, Context::BlockQuote)?;
        Ok(BlockQuote::new(heading, children))
    }

    fn list_item(&self, token: Token) -> CompileResult<ListItem> {
        match token {
            Token::ListItem { tokens } => Ok(ListItem::new(self.nodes(tokens, Context::ListItem)?)),
            other => Err(CompileError::unsupported(other.kind(), Context::List.name())),
        }
    }

    fn cells(&self, cells: Vec<token::TableCell>) -> CompileResult<Vec<TableCell>> {
        cells
            .into_iter()
            .map(|cell| Ok(TableCell::new(self.nodes(cell.tokens, Context::TableCell)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docmark::highlight::RustHighlighter;
    use crate::docmark::token::Alignment;

    fn build(tokens: Vec<Token>, highlighter: &dyn Highlighter) -> CompileResult<Vec<Node>> {
        TreeBuilder::new(highlighter).build(tokens)
    }

    fn paragraph(tokens: Vec<Token>) -> Token {
        Token::Paragraph {
            text: String::new(),
            tokens,
        }
    }

    fn unsupported(result: CompileResult<Vec<Node>>) -> (&'static str, &'static str) {
        match result {
            Err(CompileError::UnsupportedTokenKind { kind, context }) => (kind, context),
            other => panic!("Expected UnsupportedTokenKind, got {:?}", other),
        }
    }

    #[test]
    fn test_builds_paragraph_plaintext() {
        let nodes = build(
            vec![paragraph(vec![
                Token::text("a "),
                Token::Strong { text: "b".into() },
                Token::Br,
                Token::Codespan { text: "c".into() },
            ])],
            &RustHighlighter,
        )
        .unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].plaintext(), "a b\nc");
    }

    #[test]
    fn test_block_token_in_paragraph_is_rejected() {
        let result = build(vec![paragraph(vec![Token::Hr])], &RustHighlighter);
        assert_eq!(unsupported(result), ("hr", "paragraph"));
    }

    #[test]
    fn test_list_accepts_only_items() {
        let list = Token::List {
            ordered: false,
            start: None,
            loose: false,
            items: vec![paragraph(vec![])],
        };
        assert_eq!(
            unsupported(build(vec![list], &RustHighlighter)),
            ("paragraph", "list")
        );
    }

    #[test]
    fn test_table_cell_rejects_blocks() {
        let table = Token::Table {
            header: vec![token::TableCell {
                text: "x".into(),
                tokens: vec![Token::Code {
                    lang: None,
                    text: "x".into(),
                }],
            }],
            align: vec![Alignment::None],
            rows: vec![],
        };
        assert_eq!(
            unsupported(build(vec![table], &RustHighlighter)),
            ("code", "table cell")
        );
    }

    #[test]
    fn test_blockquote_lifts_leading_heading() {
        let quote = Token::Blockquote {
            tokens: vec![
                Token::Heading {
                    depth: 3,
                    text: "Note".into(),
                    tokens: vec![Token::text("Note")],
                },
                paragraph(vec![Token::text("Careful.")]),
            ],
        };
        let nodes = build(vec![quote], &RustHighlighter).unwrap();
        match &nodes[0] {
            Node::BlockQuote(quote) => {
                assert_eq!(quote.heading(), Some("Note"));
                assert_eq!(quote.children().len(), 1);
                assert_eq!(quote.plaintext(), "Note\nCareful.");
            }
            other => panic!("Expected BlockQuote, got {:?}", other),
        }
    }

    #[test]
    fn test_link_urls_are_normalized() {
        let nodes = build(
            vec![paragraph(vec![Token::Link {
                href: "relative/path".into(),
                title: None,
                text: "text".into(),
            }])],
            &RustHighlighter,
        )
        .unwrap();
        match nodes[0].children() {
            [Node::Link(link)] => assert_eq!(link.url(), "/relative/path"),
            other => panic!("Expected a link, got {:?}", other),
        }
    }

    #[test]
    fn test_tight_text_builds_children() {
        let item = Token::ListItem {
            tokens: vec![Token::Text {
                text: "a *b*".into(),
                tokens: Some(vec![Token::text("a "), Token::Em { text: "b".into() }]),
            }],
        };
        let list = Token::List {
            ordered: true,
            start: Some(2),
            loose: false,
            items: vec![item],
        };
        let nodes = build(vec![list], &RustHighlighter).unwrap();
        match &nodes[0] {
            Node::List(list) => {
                assert_eq!(list.start(), Some(2));
                assert_eq!(list.plaintext(), "a b");
                assert_eq!(list.items()[0].children()[0].children().len(), 2);
            }
            other => panic!("Expected List, got {:?}", other),
        }
    }
}
