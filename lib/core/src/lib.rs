//! # starmatch Core
//!
//! Core library for the starmatch similarity recommender.
//!
//! This crate provides the data model and the ranking algorithm:
//!
//! - [`FeatureVector`] - Fixed-order dense feature vector
//! - [`Catalog`] / [`CatalogEntry`] / [`Category`] - The immutable catalog snapshot
//! - [`extract`] - Projection of name/value mappings into canonical feature order
//! - [`Metric`] - Swappable distance metric (Euclidean by default)
//! - [`Ranker`] - Brute-force category-filtered top-K search
//!
//! ## Example
//!
//! ```rust
//! use starmatch_core::{Catalog, CatalogEntry, Category, FeatureVector, Query, Ranker};
//!
//! let catalog = Catalog::new(vec![
//!     CatalogEntry::new("1237660", Category::Star, FeatureVector::new(vec![0.0; 8])),
//!     CatalogEntry::new("1237661", Category::Star, FeatureVector::new(vec![1.0; 8])),
//! ]);
//!
//! let query = Query::new(Category::Star, FeatureVector::new(vec![0.0; 8]), 5);
//! let results = Ranker::default().rank(&catalog, &query).unwrap();
//!
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[0].entry.id, "1237660");
//! assert_eq!(results[0].distance, 0.0);
//! ```

pub mod catalog;
pub mod error;
pub mod features;
pub mod metric;
pub mod rank;
pub mod vector;

pub use catalog::{Catalog, CatalogEntry, Category, FeatureSummary};
pub use error::{Error, Result};
pub use features::{extract, FEATURE_DIM, FEATURE_NAMES};
pub use metric::Metric;
pub use rank::{Query, RankedResult, Ranker};
pub use vector::FeatureVector;
