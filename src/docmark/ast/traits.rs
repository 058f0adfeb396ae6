//! AST traits - Common interface for uniform node access

/// Common interface for all AST nodes
pub trait AstNode {
    /// Element name, e.g. `Paragraph` or `GlossaryLink`.
    fn node_type(&self) -> &'static str;

    /// Short one-line label used by debug renderings such as treeviz.
    fn display_label(&self) -> String;

    /// Text content with all markup removed, computed when the node was built.
    fn plaintext(&self) -> &str;
}
