//! Output formats for compiled documents
//!
//! Each format turns a node sequence into a string:
//!     - html: the page body, ready for a template.
//!     - plaintext: markup-free text, one block per line, for search indexing.
//!     - treeviz: one line per node, for inspecting the tree.
//!     - json: the serde serialization of the nodes.
//!
//! Formats implement [`Formatter`] and are looked up by name in a [`FormatRegistry`].

pub mod html;
pub mod json;
pub mod plaintext;
pub mod registry;
pub mod treeviz;

pub use html::{escape_html, render_html, HtmlFormatter};
pub use json::JsonFormatter;
pub use plaintext::{to_plaintext, PlaintextFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
