use std::cmp::Ordering;
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::Recommendation,
    services::{catalog::CatalogStore, similarity::SimilarityIndex},
};

pub const DEFAULT_RECOMMENDATIONS: usize = 5;

#[derive(Debug, Clone, Copy)]
struct Scored {
    index: usize,
    score: f64,
}

/// Descending score; equal scores put the higher index first. NaN ranks lowest.
fn rank(a: &Scored, b: &Scored) -> Ordering {
    let by_score = match (a.score.is_nan(), b.score.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal),
    };
    by_score.then_with(|| b.index.cmp(&a.index))
}

/// Answers "most similar to X" from the catalog and similarity matrix
pub struct RecommendationEngine {
    catalog: Arc<CatalogStore>,
    similarity: SimilarityIndex,
}

impl RecommendationEngine {
    pub fn new(catalog: Arc<CatalogStore>, similarity: SimilarityIndex) -> Self {
        Self {
            catalog,
            similarity,
        }
    }

    /// Returns the `k` titles most similar to `title`
    ///
    /// Fails with `NotFound` when the title does not resolve. The movie itself
    /// is never part of the result.
    pub fn recommend(&self, title: &str, k: usize) -> AppResult<Recommendation> {
        let index = self.catalog.resolve(title)?;
        let top = self.top_k(index, k)?;

        let results = top
            .iter()
            .map(|s| self.catalog.title_of(s.index).map(|t| t.map(str::to_string)))
            .collect::<AppResult<Vec<_>>>()?;

        let resolved_title = self
            .catalog
            .title_of(index)?
            .unwrap_or_default()
            .to_string();

        tracing::debug!(
            query = %title,
            resolved = %resolved_title,
            index,
            returned = results.len(),
            "Recommendations computed"
        );

        Ok(Recommendation {
            resolved_title,
            results,
        })
    }

    fn top_k(&self, index: usize, k: usize) -> AppResult<Vec<Scored>> {
        let mut candidates: Vec<Scored> = self
            .similarity
            .scores_for(index)?
            .filter(|&(other, _)| other != index)
            .map(|(other, score)| Scored {
                index: other,
                score,
            })
            .collect();

        if k == 0 {
            return Ok(Vec::new());
        }
        if k < candidates.len() {
            candidates.select_nth_unstable_by(k - 1, rank);
            candidates.truncate(k);
        }
        candidates.sort_unstable_by(rank);

        Ok(candidates)
    }
}
