//! Semantic tree
//!
//!     The compiler's output is a sequence of [`Node`]s. Unlike the token tree, nodes are typed,
//!     resolved and immutable: each element is built through a constructor that computes its
//!     plaintext once, fields are private, and everything is read through accessors.
//!
//!     Renderers (HTML, plaintext, search indexing) consume the tree as-is; no node needs
//!     another lookup to be rendered.
//!
//! Layout
//!
//!     - elements/: one file per element family (text, code, links, containers, tables).
//!     - node.rs: the [`Node`] sum type and child navigation.
//!     - slug.rs: [`slugify`], used for heading ids and exposed for page titles.
//!     - traits.rs: [`AstNode`], the uniform interface every element implements.

pub mod elements;
mod node;
mod slug;
mod traits;

pub use elements::{
    normalize_url, BlockQuote, CodeBlock, CodeSpan, DocsLink, Em, GlossaryLink, Heading, Image,
    Link, List, ListItem, Paragraph, RawHtml, Strong, Table, TableCell, Text,
};
pub use node::Node;
pub use slug::slugify;
pub use traits::AstNode;
