use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single catalog entry
///
/// `index` is the record's row and column in the similarity matrix. Every
/// field besides `index` and `title` is carried through untouched in `metadata`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieRecord {
    pub index: usize,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl MovieRecord {
    pub fn new(index: usize, title: Option<&str>) -> Self {
        Self {
            index,
            title: title.map(str::to_string),
            metadata: Map::new(),
        }
    }

    /// Title usable for lookup, search and browsing; blank titles count as missing
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.trim().is_empty())
    }
}

/// Case-folded, trimmed projection of a title used for lookups
pub fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}
