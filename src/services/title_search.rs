use std::sync::Arc;

use crate::{models::normalize_title, services::catalog::CatalogStore};

pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Case-insensitive substring search over catalog titles, for autocomplete
///
/// Results keep catalog order; there is no relevance ranking.
pub struct SearchIndex {
    catalog: Arc<CatalogStore>,
}

impl SearchIndex {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog }
    }

    /// Up to `limit` titles containing `query`; an empty query lists the first titles
    pub fn search(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = normalize_title(query);

        if needle.is_empty() {
            return self
                .catalog
                .titles_in_order()
                .take(limit)
                .map(|(_, title)| title.to_string())
                .collect();
        }

        self.catalog
            .normalized_titles()
            .filter(|(_, normalized)| normalized.contains(needle.as_str()))
            .take(limit)
            .map(|(title, _)| title.to_string())
            .collect()
    }
}
