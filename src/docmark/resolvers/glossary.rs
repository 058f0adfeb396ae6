//! Glossary lookups for `@[term]` links.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A glossary term as shown in link tooltips.
///
/// Glossary files carry more (long descriptions, related items, external refs); only the
/// fields needed to render a link are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    pub name: String,
    pub short_desc: String,
}

pub trait GlossaryResolver: Send + Sync {
    fn resolve_term(&self, term: &str) -> Option<GlossaryEntry>;
}

/// Glossary keyed by term.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlossaryTable {
    entries: HashMap<String, GlossaryEntry>,
}

impl GlossaryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        term: impl Into<String>,
        name: impl Into<String>,
        short_desc: impl Into<String>,
    ) {
        self.entries.insert(
            term.into(),
            GlossaryEntry {
                name: name.into(),
                short_desc: short_desc.into(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl GlossaryResolver for GlossaryTable {
    fn resolve_term(&self, term: &str) -> Option<GlossaryEntry> {
        self.entries.get(term).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_extra_fields() {
        let json = r#"{
            "epsilon": {
                "name": "Epsilon",
                "short_desc": "small quantity",
                "desc": ["A long description."],
                "related": ["core::Tolerance"],
                "refs": { "wikipedia": "https://en.wikipedia.org/wiki/Epsilon" }
            }
        }"#;
        let table: GlossaryTable = serde_json::from_str(json).unwrap();
        let entry = table.resolve_term("epsilon").unwrap();

        assert_eq!(entry.name, "Epsilon");
        assert_eq!(entry.short_desc, "small quantity");
    }
}
