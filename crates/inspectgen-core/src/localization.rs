//! Resolved message bundles.
//!
//! The index is assembled once through [`LocalizationIndexBuilder`] and is
//! immutable afterwards. It is passed by reference to the classifier; there is
//! no process-wide lookup table.

use std::collections::HashMap;

/// Read-only message key → localized string mapping.
#[derive(Debug, Clone, Default)]
pub struct LocalizationIndex {
    messages: HashMap<String, String>,
}

impl LocalizationIndex {
    pub fn builder() -> LocalizationIndexBuilder {
        LocalizationIndexBuilder::default()
    }

    /// Resolve a message key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocalizationIndex {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut builder = LocalizationIndexBuilder::default();
        builder.extend(iter);
        builder.build()
    }
}

/// Accumulates bundles in load order.
///
/// A later bundle overrides keys from an earlier one.
#[derive(Debug, Default)]
pub struct LocalizationIndexBuilder {
    messages: HashMap<String, String>,
    overridden: usize,
}

impl LocalizationIndexBuilder {
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        if self.messages.insert(key.into(), value.into()).is_some() {
            self.overridden += 1;
        }
    }

    /// Add one bundle's entries.
    pub fn extend<K, V>(&mut self, entries: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in entries {
            self.insert(key, value);
        }
    }

    /// Number of keys replaced by a later bundle so far.
    pub fn overridden(&self) -> usize {
        self.overridden
    }

    pub fn build(self) -> LocalizationIndex {
        tracing::debug!(
            messages = self.messages.len(),
            overridden = self.overridden,
            "localization index built"
        );
        LocalizationIndex {
            messages: self.messages,
        }
    }
}
