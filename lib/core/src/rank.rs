//! Brute-force category-filtered top-K similarity search.

use crate::features::FEATURE_DIM;
use crate::{Catalog, CatalogEntry, Category, Error, FeatureVector, Metric, Result};

/// A similarity query: category filter, query vector, maximum result count
#[derive(Debug, Clone)]
pub struct Query {
    pub category: Category,
    pub features: FeatureVector,
    pub k: usize,
}

impl Query {
    #[inline]
    #[must_use]
    pub fn new(category: Category, features: FeatureVector, k: usize) -> Self {
        Self {
            category,
            features,
            k,
        }
    }
}

/// One ranked neighbor: the matched entry and its distance to the query
#[derive(Debug, Clone)]
pub struct RankedResult {
    pub entry: CatalogEntry,
    pub distance: f32,
}

/// Exact top-K search over a catalog snapshot.
///
/// Every query rescans the filtered catalog: O(n * d) to score plus
/// O(n log n) to sort. The catalog is read-only, so any number of `rank`
/// calls may run in parallel against the same snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker {
    metric: Metric,
}

impl Ranker {
    #[must_use]
    pub fn new(metric: Metric) -> Self {
        Self { metric }
    }

    #[must_use]
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Rank catalog entries of the query's category by ascending distance
    /// and return the closest `query.k`.
    ///
    /// Entries whose distance to the query is undefined (a degenerate
    /// feature value on either side) are dropped from consideration.
    /// Fewer than `k` survivors, or none at all, is a valid short result.
    pub fn rank(&self, catalog: &Catalog, query: &Query) -> Result<Vec<RankedResult>> {
        if query.k == 0 {
            return Err(Error::InvalidK(query.k));
        }
        if query.features.dim() != FEATURE_DIM {
            return Err(Error::DimensionMismatch {
                expected: FEATURE_DIM,
                actual: query.features.dim(),
            });
        }

        let mut results: Vec<RankedResult> = catalog
            .iter()
            .filter(|entry| entry.category == query.category)
            .filter_map(|entry| {
                let distance = self.metric.distance(&entry.features, &query.features);
                distance.is_finite().then(|| RankedResult {
                    entry: entry.clone(),
                    distance,
                })
            })
            .collect();

        // Stable sort over a scan in catalog order: exact ties keep their
        // insertion order.
        results.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(query.k);

        Ok(results)
    }
}
