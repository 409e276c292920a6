use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::Recommendation,
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    pub k: Option<usize>,
}

/// Handler for the "movies like this one" endpoint
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    request_id: RequestId,
    Path(movie_name): Path<String>,
    Query(params): Query<RecommendQuery>,
) -> AppResult<Json<Recommendation>> {
    let k = params.k.unwrap_or(state.defaults.recommendation_count);

    match state.dataset.recommender.recommend(&movie_name, k) {
        Ok(recommendation) => {
            tracing::info!(
                request_id = %request_id,
                movie = %recommendation.resolved_title,
                k,
                returned = recommendation.results.len(),
                "Recommendations served"
            );
            Ok(Json(recommendation))
        }
        Err(AppError::NotFound { title }) => {
            tracing::info!(request_id = %request_id, movie = %title, "Movie not found");
            Err(AppError::NotFound { title })
        }
        Err(e) => Err(e),
    }
}
