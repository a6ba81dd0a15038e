//! # Secret Matcher
//!
//! Selects catalog entries whose tags satisfy a [`TagFilter`].

use tracing::debug;

use crate::filter::TagFilter;
use crate::provider::CatalogEntry;

/// Whether a single secret carries every required tag with the exact value
///
/// Untagged secrets never match. Extra tags are ignored.
pub fn matches(entry: &CatalogEntry, filter: &TagFilter) -> bool {
    if entry.tags.is_empty() {
        return false;
    }
    filter
        .iter()
        .all(|(key, value)| entry.tags.get(key).is_some_and(|v| v == value))
}

/// Names of the matching secrets, in catalog order
pub fn filter_secrets(catalog: &[CatalogEntry], filter: &TagFilter) -> Vec<String> {
    catalog
        .iter()
        .filter(|entry| {
            let selected = matches(entry, filter);
            debug!(secret.id = %entry.name, selected, "tag match");
            selected
        })
        .map(|entry| entry.name.clone())
        .collect()
}
