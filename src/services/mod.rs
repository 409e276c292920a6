pub mod catalog;
pub mod dataset;
pub mod pagination;
pub mod recommendations;
pub mod similarity;
pub mod title_search;

pub use catalog::CatalogStore;
pub use dataset::Dataset;
pub use pagination::PaginationSampler;
pub use recommendations::RecommendationEngine;
pub use similarity::SimilarityIndex;
pub use title_search::SearchIndex;
