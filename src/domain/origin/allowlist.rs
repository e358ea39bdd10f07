//! Always-trusted origins

use serde::{Deserialize, Serialize};

use super::Origin;

/// Origins seeded into configuration on first use
pub const DEFAULT_ALLOWED_DOMAINS: &[&str] = &["http://localhost", "http://mozilla.github.com"];

/// Ordered list of origins that are granted access without consulting the
/// permission store or the user.
///
/// Entries are compared literally against the normalized origin string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowedDomains(Vec<String>);

impl AllowedDomains {
    /// Create from configured entries, dropping duplicates but keeping order
    pub fn new(entries: impl IntoIterator<Item = String>) -> Self {
        let mut list: Vec<String> = Vec::new();
        for entry in entries {
            if !list.contains(&entry) {
                list.push(entry);
            }
        }
        Self(list)
    }

    /// The built-in defaults
    pub fn defaults() -> Self {
        Self::new(DEFAULT_ALLOWED_DOMAINS.iter().map(|d| d.to_string()))
    }

    /// Check whether the origin is listed verbatim
    pub fn contains(&self, origin: &Origin) -> bool {
        self.0.iter().any(|entry| entry == origin.as_str())
    }

    /// Iterate over entries in configured order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert back into plain entries for storage
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl Default for AllowedDomains {
    fn default() -> Self {
        Self::defaults()
    }
}
