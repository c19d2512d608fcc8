use serde::{Deserialize, Serialize};

use crate::FeatureVector;

/// Dissimilarity measure between two equal-length vectors.
///
/// The ranker relies only on the total order a metric induces over
/// non-negative scores, so the variants are interchangeable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Euclidean,
    Manhattan,
}

impl Metric {
    /// Distance between `a` and `b`.
    ///
    /// Non-finite when either vector carries a degenerate component or
    /// the dimensions differ; such scores are undefined and never ranked.
    #[inline]
    pub fn distance(&self, a: &FeatureVector, b: &FeatureVector) -> f32 {
        match self {
            Metric::Euclidean => a.l2_distance(b),
            Metric::Manhattan => a.l1_distance(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(data: &[f32]) -> FeatureVector {
        FeatureVector::from_slice(data)
    }

    #[test]
    fn test_default_is_euclidean() {
        assert_eq!(Metric::default(), Metric::Euclidean);
    }

    #[test]
    fn test_symmetry() {
        let a = v(&[1.0, 2.0, 3.0]);
        let b = v(&[-4.0, 0.5, 9.0]);
        for metric in [Metric::Euclidean, Metric::Manhattan] {
            assert_eq!(metric.distance(&a, &b), metric.distance(&b, &a));
        }
    }

    #[test]
    fn test_zero_iff_identical() {
        let a = v(&[1.0, 2.0, 3.0]);
        let b = v(&[1.0, 2.0, 3.001]);
        for metric in [Metric::Euclidean, Metric::Manhattan] {
            assert_eq!(metric.distance(&a, &a), 0.0);
            assert!(metric.distance(&a, &b) > 0.0);
        }
    }

    #[test]
    fn test_increases_with_divergence() {
        let origin = v(&[0.0, 0.0]);
        let near = v(&[1.0, 1.0]);
        let far = v(&[2.0, 2.0]);
        for metric in [Metric::Euclidean, Metric::Manhattan] {
            assert!(metric.distance(&origin, &near) < metric.distance(&origin, &far));
        }
    }

    #[test]
    fn test_known_values() {
        let a = v(&[0.0, 0.0]);
        let b = v(&[3.0, 4.0]);
        assert!((Metric::Euclidean.distance(&a, &b) - 5.0).abs() < 1e-6);
        assert!((Metric::Manhattan.distance(&a, &b) - 7.0).abs() < 1e-6);
    }
}
