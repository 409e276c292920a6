use std::sync::Arc;

use rand::{seq::index, Rng};

use crate::{models::MoviePage, services::catalog::CatalogStore};

pub const DEFAULT_PAGE_SIZE: i64 = 50;

/// Random-sample browsing over titled catalog entries
///
/// Every call draws a fresh sample; there is no cursor, so `has_more` only
/// says whether the catalog holds more titles than were asked for.
pub struct PaginationSampler {
    catalog: Arc<CatalogStore>,
}

impl PaginationSampler {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog }
    }

    /// Samples with the thread-local RNG
    pub fn sample(&self, limit: i64) -> MoviePage {
        self.sample_with(&mut rand::rng(), limit)
    }

    /// Samples `min(limit, total)` distinct titles without replacement
    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R, limit: i64) -> MoviePage {
        let total = self.catalog.titled_count();
        let has_more = i64::try_from(total).map_or(true, |total| total > limit);

        let amount = usize::try_from(limit).unwrap_or(0).min(total);
        let data = index::sample(rng, total, amount)
            .into_iter()
            .filter_map(|n| self.catalog.nth_titled(n))
            .map(str::to_string)
            .collect();

        MoviePage {
            data,
            has_more,
            total,
        }
    }
}
