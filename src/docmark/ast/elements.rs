//! AST element definitions
//!
//! Elements are grouped by family:
//!     - text: Text, Strong, Em, RawHtml
//!     - code: CodeBlock, CodeSpan
//!     - links: Link, Image, DocsLink, GlossaryLink
//!     - containers: Heading, Paragraph, BlockQuote, List, ListItem
//!     - table: Table, TableCell
//!
//! Horizontal rules and line breaks carry no data and live directly on [`Node`](super::Node).

pub mod code;
pub mod containers;
pub mod links;
pub mod table;
pub mod text;

pub use code::{CodeBlock, CodeSpan};
pub use containers::{BlockQuote, Heading, List, ListItem, Paragraph};
pub use links::{normalize_url, DocsLink, GlossaryLink, Image, Link};
pub use table::{Table, TableCell};
pub use text::{Em, RawHtml, Strong, Text};
