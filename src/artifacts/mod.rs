use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::{AppError, AppResult};

pub mod catalog;
pub mod similarity;

pub use catalog::load_catalog;
pub use similarity::load_similarity;

/// Reads an artifact file, gunzipping it when the name ends in `.gz`
pub async fn read_artifact(path: &Path) -> AppResult<Vec<u8>> {
    let raw = tokio::fs::read(path)
        .await
        .map_err(|e| AppError::Artifact(format!("{}: {}", path.display(), e)))?;

    let compressed = path.extension().is_some_and(|ext| ext == "gz");
    if !compressed {
        return Ok(raw);
    }

    let mut bytes = Vec::new();
    GzDecoder::new(raw.as_slice())
        .read_to_end(&mut bytes)
        .map_err(|e| AppError::Artifact(format!("{}: gzip: {}", path.display(), e)))?;

    tracing::debug!(
        path = %path.display(),
        compressed = raw.len(),
        decompressed = bytes.len(),
        "Artifact decompressed"
    );

    Ok(bytes)
}
