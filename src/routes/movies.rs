use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{middleware::RequestId, models::MoviePage, state::AppState};

#[derive(Debug, Deserialize)]
pub struct BrowseQuery {
    /// Accepted for client compatibility; browsing is random so offsets are ignored
    #[serde(default)]
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

/// Handler for random browsing (infinite scroll)
pub async fn browse(
    State(state): State<Arc<AppState>>,
    request_id: RequestId,
    Query(params): Query<BrowseQuery>,
) -> Json<MoviePage> {
    let limit = params.limit.unwrap_or(state.defaults.page_size);
    let page = state.dataset.sampler.sample(limit);

    tracing::info!(
        request_id = %request_id,
        limit,
        skip = ?params.skip,
        returned = page.data.len(),
        has_more = page.has_more,
        "Sampled movies"
    );

    Json(page)
}

/// Handler for title autocomplete
pub async fn search(
    State(state): State<Arc<AppState>>,
    request_id: RequestId,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<String>> {
    let limit = params.limit.unwrap_or(state.defaults.search_limit);
    let titles = state.dataset.search.search(&params.q, limit);

    tracing::info!(
        request_id = %request_id,
        query = %params.q,
        limit,
        returned = titles.len(),
        "Searched titles"
    );

    Json(titles)
}
