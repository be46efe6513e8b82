//! External path aliases.

use std::collections::HashMap;

/// Result of normalizing an external path through the alias table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasedPath {
    pub path: String,
    pub aliased: bool,
}

/// Exact-match table of external path -> canonical external path.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    aliases: HashMap<String, String>,
}

impl AliasTable {
    /// Build the table, dropping entries with an empty target.
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let aliases = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(_, v)| !v.is_empty())
            .collect();
        Self { aliases }
    }

    /// Strip one trailing slash, then replace the path with its alias target if any.
    pub fn normalize(&self, path: &str) -> AliasedPath {
        let path = path.strip_suffix('/').unwrap_or(path);

        match self.aliases.get(path) {
            Some(target) => AliasedPath {
                path: target.clone(),
                aliased: true,
            },
            None => AliasedPath {
                path: path.to_string(),
                aliased: false,
            },
        }
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
