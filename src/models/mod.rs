use serde::{Deserialize, Serialize};

pub mod movie;

pub use movie::{normalize_title, MovieRecord};

/// Top-K recommendation result for a resolved title
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    /// Catalog title of the movie the query resolved to
    #[serde(rename = "your_movie")]
    pub resolved_title: String,
    /// Most similar titles, best first. Untitled records surface as `null`.
    #[serde(rename = "recommendations")]
    pub results: Vec<Option<String>>,
}

/// One random browsing page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoviePage {
    pub data: Vec<String>,
    pub has_more: bool,
    pub total: usize,
}
