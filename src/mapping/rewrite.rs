//! Literal outbound overrides.

use std::collections::HashMap;

/// Exact-match table of internal path -> literal outbound URL.
#[derive(Debug, Clone, Default)]
pub struct RewriteTable {
    rewrites: HashMap<String, String>,
}

impl RewriteTable {
    /// Build the table, dropping entries with an empty target.
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let rewrites = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(_, v)| !v.is_empty())
            .collect();
        Self { rewrites }
    }

    pub fn get(&self, internal_path: &str) -> Option<&str> {
        self.rewrites.get(internal_path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rewrites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rewrites.is_empty()
    }
}
