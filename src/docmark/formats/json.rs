//! JSON output
//!
//! Nodes serialize through serde with a `kind` tag per node, plus every node's plaintext.

use super::registry::{FormatError, Formatter};
use crate::docmark::ast::Node;

/// Formatter for the `json` format: pretty-printed node array.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn render(&self, nodes: &[Node]) -> Result<String, FormatError> {
        serde_json::to_string_pretty(nodes).map_err(|err| FormatError::Render {
            format: "json",
            message: err.to_string(),
        })
    }

    fn description(&self) -> &'static str {
        "Nodes as JSON"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docmark::ast::{DocsLink, Paragraph};

    #[test]
    fn test_json_shape() {
        let nodes = vec![Node::from(Paragraph::new(vec![Node::from(DocsLink::new(
            "mod::fn",
            "#",
        ))]))];
        let json = JsonFormatter.render(&nodes).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["kind"], "Paragraph");
        assert_eq!(value[0]["plaintext"], "mod::fn");
        assert_eq!(value[0]["children"][0]["kind"], "DocsLink");
        assert_eq!(value[0]["children"][0]["url"], "#");
        assert_eq!(value[0]["children"][0]["plaintext"], "mod::fn");
    }
}
