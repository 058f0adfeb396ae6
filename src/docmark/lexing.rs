//! Lexer
//!
//! This module turns source text into the [token tree](super::token).
//!
//! Structure:
//!     Standard markdown is parsed by comrak (CommonMark plus GFM tables and autolinks). The
//!     lexer then walks comrak's AST and lowers it into tokens:
//!
//!     1. Block lowering (./block.rs) maps comrak's block nodes onto block tokens: headings,
//!        paragraphs, lists, tables, blockquotes, code, raw html, rules. Paragraphs of tight
//!        list items become text tokens carrying their inline tokens.
//!     2. Inline lowering (./inline.rs) maps inline nodes onto inline tokens. Adjacent text
//!        literals (and soft breaks) are merged first, then the
//!        [extension registry](super::inlines::ExtensionRegistry) scans the merged text, so
//!        `[[path]]` and `@[term]{text}` are found wherever plain text is: paragraphs,
//!        headings, table cells, emphasis and link labels. Code spans and raw html are never
//!        scanned.
//!
//!     A comrak node the token tree has no kind for fails the document with
//!     [`CompileError::UnsupportedTokenKind`](super::error::CompileError). With the options
//!     used here, comrak only produces nodes that do have one.
//!
//! State
//!
//!     A [`Lexer`] lives for exactly one document. It borrows the registry and the knowledge
//!     base, and owns the diagnostics recorded while resolving references, which the caller
//!     takes back with [`Lexer::finish`].

mod block;
mod inline;

use crate::docmark::diagnostics::{Diagnostic, Diagnostics};
use crate::docmark::error::CompileResult;
use crate::docmark::inlines::{ExtensionRegistry, LinkSettings, Resolution};
use crate::docmark::resolvers::KnowledgeBase;
use crate::docmark::token::Token;
use comrak::nodes::NodeValue;
use comrak::{parse_document, Arena, Options};

/// Kind name for a comrak node, mirroring comrak 0.29's crate-private
/// `NodeValue::xml_node_name`.
fn node_kind(value: &NodeValue) -> &'static str {
    match *value {
        NodeValue::Document => "document",
        NodeValue::BlockQuote => "block_quote",
        NodeValue::FootnoteDefinition(_) => "footnote_definition",
        NodeValue::List(..) => "list",
        NodeValue::DescriptionList => "description_list",
        NodeValue::DescriptionItem(_) => "description_item",
        NodeValue::DescriptionTerm => "description_term",
        NodeValue::DescriptionDetails => "description_details",
        NodeValue::Item(..) => "item",
        NodeValue::CodeBlock(..) => "code_block",
        NodeValue::HtmlBlock(..) => "html_block",
        NodeValue::Paragraph => "paragraph",
        NodeValue::Heading(..) => "heading",
        NodeValue::ThematicBreak => "thematic_break",
        NodeValue::Table(..) => "table",
        NodeValue::TableRow(..) => "table_row",
        NodeValue::TableCell => "table_cell",
        NodeValue::Text(..) => "text",
        NodeValue::SoftBreak => "softbreak",
        NodeValue::LineBreak => "linebreak",
        NodeValue::Image(..) => "image",
        NodeValue::Link(..) => "link",
        NodeValue::Emph => "emph",
        NodeValue::Strong => "strong",
        NodeValue::Code(..) => "code",
        NodeValue::HtmlInline(..) => "html_inline",
        NodeValue::Strikethrough => "strikethrough",
        NodeValue::FrontMatter(_) => "frontmatter",
        NodeValue::TaskItem { .. } => "taskitem",
        NodeValue::Superscript => "superscript",
        NodeValue::FootnoteReference(..) => "footnote_reference",
        NodeValue::MultilineBlockQuote(_) => "multiline_block_quote",
        NodeValue::Escaped => "escaped",
        NodeValue::Math(..) => "math",
        NodeValue::WikiLink(..) => "wikilink",
        NodeValue::Underline => "underline",
        NodeValue::SpoileredText => "spoiler",
        NodeValue::EscapedTag(_) => "escaped_tag",
    }
}

/// Single-document lexer.
pub struct Lexer<'a> {
    registry: &'a ExtensionRegistry,
    knowledge: &'a KnowledgeBase,
    links: &'a LinkSettings,
    diagnostics: Diagnostics,
}

impl<'a> Lexer<'a> {
    pub fn new(
        registry: &'a ExtensionRegistry,
        knowledge: &'a KnowledgeBase,
        links: &'a LinkSettings,
    ) -> Self {
        Self {
            registry,
            knowledge,
            links,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Lex a whole document into top-level block tokens.
    pub fn lex(&mut self, source: &str) -> CompileResult<Vec<Token>> {
        let arena = Arena::new();
        let options = markdown_options();
        let root = parse_document(&arena, source, &options);
        self.blocks(root, "document")
    }

    /// Consume the lexer, returning the diagnostics recorded so far.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics.into_vec()
    }

    fn resolution(&mut self) -> Resolution<'_> {
        Resolution {
            knowledge: self.knowledge,
            links: self.links,
            diagnostics: &mut self.diagnostics,
        }
    }
}

/// CommonMark with GFM tables and autolinks. Everything else stays off: the token tree has
/// no kind for strikethrough, task items or footnotes.
fn markdown_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.autolink = true;
    options
}
