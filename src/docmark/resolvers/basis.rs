//! Basis dictionary lookups, the fallback for `@[term]` links.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Term prefix used by documents to point at basis entries explicitly.
pub const BASIS_PREFIX: &str = "basis-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasisEntry {
    #[serde(default)]
    pub name: Option<String>,
    pub desc: Vec<String>,
}

impl BasisEntry {
    /// Description paragraphs joined by a blank line.
    pub fn description(&self) -> String {
        self.desc.join("\n\n")
    }
}

pub trait BasisResolver: Send + Sync {
    fn resolve_basis(&self, term: &str) -> Option<BasisEntry>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BasisTable {
    entries: HashMap<String, BasisEntry>,
}

impl BasisTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<I, S>(&mut self, term: impl Into<String>, name: Option<&str>, desc: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.insert(
            term.into(),
            BasisEntry {
                name: name.map(str::to_string),
                desc: desc.into_iter().map(Into::into).collect(),
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

impl BasisResolver for BasisTable {
    fn resolve_basis(&self, term: &str) -> Option<BasisEntry> {
        self.entries.get(term).cloned()
    }
}
