//! The node sum type
//!
//!     [`Node`] is closed: every element kind is a variant, and the builder maps tokens onto it
//!     with a single exhaustive match. Serialized nodes carry a `kind` tag naming the variant,
//!     the element's own fields and, last, the node's plaintext.

use super::elements::{
    BlockQuote, CodeBlock, CodeSpan, DocsLink, Em, GlossaryLink, Heading, Image, Link, List,
    ListItem, Paragraph, RawHtml, Strong, Table, Text,
};
use super::traits::AstNode;
use serde::{Serialize, Serializer};
use std::fmt;

/// One element of the semantic tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(Text),
    Strong(Strong),
    Em(Em),
    BlockQuote(BlockQuote),
    Table(Table),
    HorizontalRule,
    List(List),
    ListItem(ListItem),
    Image(Image),
    CodeBlock(CodeBlock),
    CodeSpan(CodeSpan),
    Heading(Heading),
    Paragraph(Paragraph),
    Link(Link),
    DocsLink(DocsLink),
    GlossaryLink(GlossaryLink),
    LineBreak,
    RawHtml(RawHtml),
}

impl Node {
    /// Nodes nested directly under this one, in order.
    ///
    /// Tables and lists expose their structure through [`Table::rows`] and [`List::items`];
    /// they have no flat child sequence.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Text(text) => text.children(),
            Node::BlockQuote(quote) => quote.children(),
            Node::ListItem(item) => item.children(),
            Node::Heading(heading) => heading.children(),
            Node::Paragraph(paragraph) => paragraph.children(),
            Node::Strong(_)
            | Node::Em(_)
            | Node::Table(_)
            | Node::HorizontalRule
            | Node::List(_)
            | Node::Image(_)
            | Node::CodeBlock(_)
            | Node::CodeSpan(_)
            | Node::Link(_)
            | Node::DocsLink(_)
            | Node::GlossaryLink(_)
            | Node::LineBreak
            | Node::RawHtml(_) => &[],
        }
    }

    fn element(&self) -> Option<&dyn AstNode> {
        let element: &dyn AstNode = match self {
            Node::Text(n) => n,
            Node::Strong(n) => n,
            Node::Em(n) => n,
            Node::BlockQuote(n) => n,
            Node::Table(n) => n,
            Node::List(n) => n,
            Node::ListItem(n) => n,
            Node::Image(n) => n,
            Node::CodeBlock(n) => n,
            Node::CodeSpan(n) => n,
            Node::Heading(n) => n,
            Node::Paragraph(n) => n,
            Node::Link(n) => n,
            Node::DocsLink(n) => n,
            Node::GlossaryLink(n) => n,
            Node::RawHtml(n) => n,
            Node::HorizontalRule | Node::LineBreak => return None,
        };
        Some(element)
    }
}

impl AstNode for Node {
    fn node_type(&self) -> &'static str {
        match self {
            Node::HorizontalRule => "HorizontalRule",
            Node::LineBreak => "LineBreak",
            other => other.element().map_or("", |e| e.node_type()),
        }
    }

    fn display_label(&self) -> String {
        match self.element() {
            Some(element) => element.display_label(),
            None => self.plaintext().escape_default().to_string(),
        }
    }

    fn plaintext(&self) -> &str {
        match self {
            Node::HorizontalRule => "---",
            Node::LineBreak => "\n",
            other => other.element().map_or("", |e| e.plaintext()),
        }
    }
}

#[derive(Serialize)]
struct Tagged<'a, T: Serialize> {
    kind: &'static str,
    #[serde(flatten)]
    fields: &'a T,
    plaintext: &'a str,
}

/// Field set of the unit variants.
#[derive(Serialize)]
struct NoFields {}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        fn tagged<S: Serializer, T: Serialize>(
            serializer: S,
            node: &Node,
            fields: &T,
        ) -> Result<S::Ok, S::Error> {
            Tagged {
                kind: node.node_type(),
                fields,
                plaintext: node.plaintext(),
            }
            .serialize(serializer)
        }

        match self {
            Node::Text(n) => tagged(serializer, self, n),
            Node::Strong(n) => tagged(serializer, self, n),
            Node::Em(n) => tagged(serializer, self, n),
            Node::BlockQuote(n) => tagged(serializer, self, n),
            Node::Table(n) => tagged(serializer, self, n),
            Node::List(n) => tagged(serializer, self, n),
            Node::ListItem(n) => tagged(serializer, self, n),
            Node::Image(n) => tagged(serializer, self, n),
            Node::CodeBlock(n) => tagged(serializer, self, n),
            Node::CodeSpan(n) => tagged(serializer, self, n),
            Node::Heading(n) => tagged(serializer, self, n),
            Node::Paragraph(n) => tagged(serializer, self, n),
            Node::Link(n) => tagged(serializer, self, n),
            Node::DocsLink(n) => tagged(serializer, self, n),
            Node::GlossaryLink(n) => tagged(serializer, self, n),
            Node::RawHtml(n) => tagged(serializer, self, n),
            Node::HorizontalRule | Node::LineBreak => tagged(serializer, self, &NoFields {}),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.node_type(), self.display_label())
    }
}

macro_rules! impl_from_element {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Node {
                fn from(element: $variant) -> Self {
                    Node::$variant(element)
                }
            }
        )*
    };
}

impl_from_element!(
    Text,
    Strong,
    Em,
    BlockQuote,
    Table,
    List,
    ListItem,
    Image,
    CodeBlock,
    CodeSpan,
    Heading,
    Paragraph,
    Link,
    DocsLink,
    GlossaryLink,
    RawHtml,
);

/// Concatenate the plaintext of `nodes`.
pub(crate) fn concat_plaintext(nodes: &[Node]) -> String {
    nodes.iter().map(AstNode::plaintext).collect()
}

/// Join the plaintext of `nodes` with `separator`.
pub(crate) fn join_plaintext(nodes: &[Node], separator: &str) -> String {
    nodes
        .iter()
        .map(AstNode::plaintext)
        .collect::<Vec<_>>()
        .join(separator)
}
