use crate::{config::Config, services::Dataset};

/// Request-time defaults taken from configuration
#[derive(Debug, Clone, Copy)]
pub struct Defaults {
    pub recommendation_count: usize,
    pub search_limit: usize,
    pub page_size: i64,
}

impl From<&Config> for Defaults {
    fn from(config: &Config) -> Self {
        Self {
            recommendation_count: config.recommendation_count,
            search_limit: config.search_limit,
            page_size: config.page_size,
        }
    }
}

/// Shared application state, immutable once built
pub struct AppState {
    pub dataset: Dataset,
    pub defaults: Defaults,
}

impl AppState {
    pub fn new(dataset: Dataset, config: &Config) -> Self {
        Self {
            dataset,
            defaults: Defaults::from(config),
        }
    }
}
