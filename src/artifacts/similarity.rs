use std::path::Path;

use crate::{
    artifacts::read_artifact,
    error::{AppError, AppResult},
};

/// Loads the similarity matrix from a JSON array of rows (optionally gzipped)
///
/// Shape is checked later, against the catalog.
pub async fn load_similarity(path: &Path) -> AppResult<Vec<Vec<f64>>> {
    let bytes = read_artifact(path).await?;
    let matrix: Vec<Vec<f64>> = serde_json::from_slice(&bytes)
        .map_err(|e| AppError::Artifact(format!("{}: {}", path.display(), e)))?;

    tracing::info!(path = %path.display(), rows = matrix.len(), "Similarity artifact loaded");
    Ok(matrix)
}
