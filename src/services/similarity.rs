use crate::error::{AppError, AppResult};

/// Immutable N×N similarity matrix, stored row-major
///
/// `score(i, j)` is the similarity of movie `i` to movie `j`. No symmetry is
/// assumed.
#[derive(Debug)]
pub struct SimilarityIndex {
    dimension: usize,
    scores: Vec<f64>,
}

impl SimilarityIndex {
    /// Validates that `matrix` is square with one row per catalog entry
    pub fn new(matrix: Vec<Vec<f64>>, catalog_size: usize) -> AppResult<Self> {
        if matrix.len() != catalog_size {
            return Err(AppError::ShapeMismatch {
                expected: format!("{} rows", catalog_size),
                actual: format!("{} rows", matrix.len()),
            });
        }

        let mut scores = Vec::with_capacity(catalog_size * catalog_size);
        for (row_index, row) in matrix.into_iter().enumerate() {
            if row.len() != catalog_size {
                return Err(AppError::ShapeMismatch {
                    expected: format!("{} columns in row {}", catalog_size, row_index),
                    actual: format!("{} columns", row.len()),
                });
            }
            scores.extend(row);
        }

        tracing::info!(dimension = catalog_size, "Similarity matrix loaded");

        Ok(Self {
            dimension: catalog_size,
            scores,
        })
    }

    /// Raw similarity row for `index`
    fn row(&self, index: usize) -> AppResult<&[f64]> {
        if index >= self.dimension {
            return Err(AppError::OutOfRange {
                index,
                size: self.dimension,
            });
        }
        let start = index * self.dimension;
        Ok(&self.scores[start..start + self.dimension])
    }

    /// `(other_index, score)` for every column of row `index`, in index order
    pub fn scores_for(
        &self,
        index: usize,
    ) -> AppResult<impl Iterator<Item = (usize, f64)> + '_> {
        Ok(self.row(index)?.iter().copied().enumerate())
    }
}
