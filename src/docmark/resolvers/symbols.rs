//! Symbol index lookups for `[[path]]` links.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A documented API item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolEntry {
    pub url: String,
}

/// Resolves an API path such as `core::module::func` to its documentation.
pub trait SymbolResolver: Send + Sync {
    fn resolve_symbol(&self, path: &str) -> Option<SymbolEntry>;
}

/// Symbol index keyed by full path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolTable {
    entries: HashMap<String, SymbolEntry>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, url: impl Into<String>) {
        self.entries
            .insert(path.into(), SymbolEntry { url: url.into() });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for SymbolTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = SymbolTable::new();
        for (path, url) in iter {
            table.insert(path, url);
        }
        table
    }
}

impl SymbolResolver for SymbolTable {
    fn resolve_symbol(&self, path: &str) -> Option<SymbolEntry> {
        self.entries.get(path).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_path_map() {
        let json = r#"{ "core::module::func": { "url": "/docs/core/module/fn.func.html" } }"#;
        let table: SymbolTable = serde_json::from_str(json).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(
            table.resolve_symbol("core::module::func").unwrap().url,
            "/docs/core/module/fn.func.html"
        );
    }

    #[test]
    fn lookup_is_exact() {
        let table = SymbolTable::from_iter([("core::Fit", "/docs/core/struct.Fit.html")]);
        assert!(table.resolve_symbol("core::fit").is_none());
        assert!(table.resolve_symbol("Fit").is_none());
    }
}
