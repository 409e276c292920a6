use std::sync::Arc;

use crate::{
    error::AppResult,
    models::MovieRecord,
    services::{
        catalog::CatalogStore, pagination::PaginationSampler, recommendations::RecommendationEngine,
        similarity::SimilarityIndex, title_search::SearchIndex,
    },
};

/// Every read-only query component, built once from the loaded artifacts
pub struct Dataset {
    pub catalog: Arc<CatalogStore>,
    pub recommender: RecommendationEngine,
    pub search: SearchIndex,
    pub sampler: PaginationSampler,
}

impl Dataset {
    /// Builds the catalog and validates the matrix against it
    ///
    /// Any error here is fatal; the service must not start serving.
    pub fn new(records: Vec<MovieRecord>, matrix: Vec<Vec<f64>>) -> AppResult<Self> {
        let catalog = Arc::new(CatalogStore::new(records)?);
        let similarity = SimilarityIndex::new(matrix, catalog.size())?;

        Ok(Self {
            recommender: RecommendationEngine::new(catalog.clone(), similarity),
            search: SearchIndex::new(catalog.clone()),
            sampler: PaginationSampler::new(catalog.clone()),
            catalog,
        })
    }
}
