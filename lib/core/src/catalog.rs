use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::features::{FEATURE_DIM, FEATURE_NAMES};
use crate::{Error, FeatureVector, Result};

/// Object class of a catalog entry.
///
/// The set is closed; any other value in a source file is a load error.
/// Spellings match the source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "GALAXY")]
    Galaxy,
    #[serde(rename = "QSO")]
    Qso,
    #[serde(rename = "STAR")]
    Star,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Galaxy, Category::Qso, Category::Star];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Galaxy => "GALAXY",
            Category::Qso => "QSO",
            Category::Star => "STAR",
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "GALAXY" => Ok(Category::Galaxy),
            "QSO" => Ok(Category::Qso),
            "STAR" => Ok(Category::Star),
            other => Err(Error::InvalidCategory(other.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified object with its feature vector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub category: Category,
    pub features: FeatureVector,
}

impl CatalogEntry {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, category: Category, features: FeatureVector) -> Self {
        Self {
            id: id.into(),
            category,
            features,
        }
    }
}

/// Immutable, ordered snapshot of catalog entries.
///
/// Entry order is the source order. It carries no semantic meaning; it
/// only makes equal-distance results deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    #[must_use]
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Number of entries per category, in [`Category::ALL`] order.
    #[must_use]
    pub fn category_counts(&self) -> [(Category, usize); 3] {
        Category::ALL.map(|category| {
            let count = self
                .entries
                .iter()
                .filter(|entry| entry.category == category)
                .count();
            (category, count)
        })
    }

    /// Per-feature min/mean/max over the whole catalog.
    ///
    /// Only finite values are aggregated; a column with no finite values
    /// reports NaN.
    #[must_use]
    pub fn feature_summary(&self) -> Vec<FeatureSummary> {
        (0..FEATURE_DIM)
            .map(|i| {
                let mut min = f32::INFINITY;
                let mut max = f32::NEG_INFINITY;
                let mut sum = 0.0f64;
                let mut count = 0usize;

                for entry in &self.entries {
                    let Some(&value) = entry.features.as_slice().get(i) else {
                        continue;
                    };
                    if !value.is_finite() {
                        continue;
                    }
                    min = min.min(value);
                    max = max.max(value);
                    sum += f64::from(value);
                    count += 1;
                }

                if count == 0 {
                    FeatureSummary {
                        name: FEATURE_NAMES[i],
                        min: f32::NAN,
                        mean: f32::NAN,
                        max: f32::NAN,
                    }
                } else {
                    FeatureSummary {
                        name: FEATURE_NAMES[i],
                        min,
                        mean: (sum / count as f64) as f32,
                        max,
                    }
                }
            })
            .collect()
    }
}

/// Min/mean/max of one feature column
#[derive(Debug, Clone, Serialize)]
pub struct FeatureSummary {
    pub name: &'static str,
    pub min: f32,
    pub mean: f32,
    pub max: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, category: Category, features: Vec<f32>) -> CatalogEntry {
        CatalogEntry::new(id, category, FeatureVector::new(features))
    }

    #[test]
    fn test_category_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()).unwrap(), category);
        }
    }

    #[test]
    fn test_category_rejects_unknown() {
        match Category::from_str("NEBULA") {
            Err(Error::InvalidCategory(value)) => assert_eq!(value, "NEBULA"),
            other => panic!("expected InvalidCategory, got {:?}", other),
        }
        // Case matters: the closed set uses the source spellings.
        assert!(Category::from_str("star").is_err());
    }

    #[test]
    fn test_category_serde_uses_source_spelling() {
        assert_eq!(
            serde_json::to_string(&Category::Galaxy).unwrap(),
            "\"GALAXY\""
        );
        let parsed: Category = serde_json::from_str("\"QSO\"").unwrap();
        assert_eq!(parsed, Category::Qso);
    }

    #[test]
    fn test_category_counts() {
        let catalog = Catalog::new(vec![
            entry("1", Category::Star, vec![0.0; FEATURE_DIM]),
            entry("2", Category::Star, vec![0.0; FEATURE_DIM]),
            entry("3", Category::Galaxy, vec![0.0; FEATURE_DIM]),
        ]);

        let counts = catalog.category_counts();
        assert_eq!(counts[0], (Category::Galaxy, 1));
        assert_eq!(counts[1], (Category::Qso, 0));
        assert_eq!(counts[2], (Category::Star, 2));
    }

    #[test]
    fn test_feature_summary() {
        let catalog = Catalog::new(vec![
            entry("1", Category::Star, vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            entry("2", Category::Star, vec![3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
        ]);

        let summary = catalog.feature_summary();
        assert_eq!(summary.len(), FEATURE_DIM);
        assert_eq!(summary[0].name, "alpha");
        assert_eq!(summary[0].min, 1.0);
        assert_eq!(summary[0].mean, 2.0);
        assert_eq!(summary[0].max, 3.0);
    }

    #[test]
    fn test_feature_summary_skips_degenerate_values() {
        let catalog = Catalog::new(vec![
            entry("1", Category::Star, vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            entry(
                "2",
                Category::Star,
                vec![f32::NAN, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            ),
        ]);

        let summary = catalog.feature_summary();
        assert_eq!(summary[0].min, 1.0);
        assert_eq!(summary[0].max, 1.0);
    }

    #[test]
    fn test_feature_summary_empty_catalog() {
        let summary = Catalog::default().feature_summary();
        assert_eq!(summary.len(), FEATURE_DIM);
        assert!(summary[0].min.is_nan());
        assert!(summary[0].mean.is_nan());
    }
}
