//! # Tag Filter
//!
//! Builds the set of required secret tags from prefixed environment variables.
//!
//! `SM_TAG_team=payments` contributes the requirement `team = payments`.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::config::process_vars;
use crate::error::ConfigError;

/// Required tag key/value pairs a secret must carry to be exported
///
/// Always holds at least one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFilter {
    tags: BTreeMap<String, String>,
}

impl TagFilter {
    /// Build a filter from the process environment
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoTagFilters`] when no variable carries the prefix.
    /// Variables that are not valid UTF-8 are skipped.
    pub fn from_env(prefix: &str) -> Result<Self, ConfigError> {
        Self::from_vars(process_vars(), prefix)
    }

    /// Build a filter from an explicit set of environment variables
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyTagPrefix`] for an empty prefix and
    /// [`ConfigError::NoTagFilters`] when no variable carries the prefix.
    pub fn from_vars<I, K, V>(vars: I, prefix: &str) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        if prefix.is_empty() {
            return Err(ConfigError::EmptyTagPrefix);
        }

        let mut tags = BTreeMap::new();
        for (key, value) in vars {
            let Some(tag_key) = key.as_ref().strip_prefix(prefix) else {
                continue;
            };
            if tag_key.is_empty() {
                warn!("Ignoring variable '{}' with no tag key after the prefix", prefix);
                continue;
            }
            let value = value.into();
            debug!(tag.key = tag_key, tag.value = %value, "tag filter entry");
            tags.insert(tag_key.to_string(), value);
        }

        Self::new(tags).ok_or_else(|| ConfigError::NoTagFilters {
            prefix: prefix.to_string(),
        })
    }

    /// Create a filter from explicit pairs, `None` when empty
    pub fn new(tags: BTreeMap<String, String>) -> Option<Self> {
        (!tags.is_empty()).then_some(Self { tags })
    }

    /// Iterate the required tags in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Required value for a tag key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Number of required tags
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether no tags are required; `false` for any constructed filter
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl std::fmt::Display for TagFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered: Vec<String> = self.iter().map(|(k, v)| format!("{k}={v}")).collect();
        write!(f, "{}", rendered.join(","))
    }
}
