use std::collections::HashMap;

use crate::{
    error::{AppError, AppResult},
    models::{normalize_title, MovieRecord},
};

/// Immutable movie catalog with a precomputed normalized-title index
///
/// Built once at startup. Records without a usable title stay addressable by
/// index but are invisible to `resolve`, search and browsing.
#[derive(Debug)]
pub struct CatalogStore {
    records: Vec<MovieRecord>,
    /// Normalized title per index, `None` for untitled records
    normalized: Vec<Option<String>>,
    by_title: HashMap<String, usize>,
    titled: Vec<usize>,
}

impl CatalogStore {
    /// Builds the catalog, validating that every record sits at its own index
    pub fn new(records: Vec<MovieRecord>) -> AppResult<Self> {
        if let Some((position, record)) = records
            .iter()
            .enumerate()
            .find(|(position, record)| record.index != *position)
        {
            return Err(AppError::InvalidCatalog(format!(
                "record at position {} has index {}",
                position, record.index
            )));
        }

        let normalized: Vec<Option<String>> = records
            .iter()
            .map(|r| r.display_title().map(normalize_title))
            .collect();

        let mut by_title = HashMap::with_capacity(records.len());
        let mut titled = Vec::with_capacity(records.len());
        let mut duplicates = 0usize;

        for (index, key) in normalized.iter().enumerate() {
            let Some(key) = key else { continue };
            titled.push(index);
            // First occurrence in catalog order wins
            if by_title.contains_key(key) {
                duplicates += 1;
            } else {
                by_title.insert(key.clone(), index);
            }
        }

        tracing::info!(
            movies = records.len(),
            titled = titled.len(),
            duplicate_titles = duplicates,
            "Catalog built"
        );

        Ok(Self {
            records,
            normalized,
            by_title,
            titled,
        })
    }

    /// Resolves a user-supplied title, ignoring case and surrounding whitespace
    pub fn resolve(&self, title: &str) -> AppResult<usize> {
        self.by_title
            .get(&normalize_title(title))
            .copied()
            .ok_or_else(|| AppError::not_found(title))
    }

    pub fn title_of(&self, index: usize) -> AppResult<Option<&str>> {
        self.record(index).map(MovieRecord::display_title)
    }

    fn record(&self, index: usize) -> AppResult<&MovieRecord> {
        self.records.get(index).ok_or(AppError::OutOfRange {
            index,
            size: self.size(),
        })
    }

    pub fn size(&self) -> usize {
        self.records.len()
    }

    /// Number of records with a usable title
    pub fn titled_count(&self) -> usize {
        self.titled.len()
    }

    /// `(index, title)` for every titled record, in catalog order
    pub fn titles_in_order(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.titled.iter().filter_map(move |&index| {
            self.records[index]
                .display_title()
                .map(|title| (index, title))
        })
    }

    /// `(title, normalized title)` for every titled record, in catalog order
    pub(crate) fn normalized_titles(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.titles_in_order().filter_map(move |(index, title)| {
            self.normalized[index]
                .as_deref()
                .map(|normalized| (title, normalized))
        })
    }

    /// Title at the given position of `titles_in_order`
    pub(crate) fn nth_titled(&self, n: usize) -> Option<&str> {
        self.titled
            .get(n)
            .and_then(|&index| self.records[index].display_title())
    }
}
