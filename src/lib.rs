//! # starmatch
//!
//! A similarity recommender for astronomical catalogs: category-filtered,
//! exact top-K nearest-neighbor search over fixed-order feature vectors.
//!
//! Given a catalog of classified objects (GALAXY, QSO, STAR) and a query
//! vector of eight measurements (right ascension, declination, the five
//! photometric magnitudes, redshift), starmatch ranks the objects of the
//! requested class by ascending distance and returns the closest K. The
//! catalog is loaded once into an immutable in-memory snapshot; queries
//! run against it in parallel with no locking.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! starmatch similar --catalog star_classification.csv \
//!     --category STAR \
//!     --query '{"alpha":135.7,"delta":32.5,"u":23.9,"g":22.3,"r":20.4,"i":19.2,"z":18.8,"redshift":0.0009}' \
//!     -k 10
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use starmatch::prelude::*;
//!
//! # fn main() -> starmatch::Result<()> {
//! // Load once, share everywhere
//! let store = CatalogStore::new(CsvCatalogSource::new("star_classification.csv"));
//! let catalog = store.get()?;
//!
//! // Rank the closest STAR entries
//! let query = Query::new(
//!     Category::Star,
//!     FeatureVector::new(vec![135.7, 32.5, 23.9, 22.3, 20.4, 19.2, 18.8, 0.0009]),
//!     10,
//! );
//! let results = Ranker::default().rank(&catalog, &query)?;
//! for result in &results {
//!     println!("{} {:.4}", result.entry.id, result.distance);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! starmatch is composed of two crates plus this facade:
//!
//! - [`starmatch-core`](https://docs.rs/starmatch-core) - Data model, feature
//!   extraction, distance metrics, the brute-force ranker
//! - [`starmatch-catalog`](https://docs.rs/starmatch-catalog) - CSV parsing and
//!   the load-once catalog store
//!
//! ## Guarantees
//!
//! - **Exact search**: every query rescans the filtered catalog; no
//!   approximate index
//! - **Deterministic output**: distances ascend, exact ties keep catalog
//!   order
//! - **One load per process**: concurrent first callers observe a single
//!   completed snapshot
//! - **Explicit inputs**: all query parameters are function arguments; no
//!   ambient session state

// Re-export core types
pub use starmatch_core::{
    extract, Catalog, CatalogEntry, Category, Error, FeatureSummary, FeatureVector, Metric, Query,
    RankedResult, Ranker, Result, FEATURE_DIM, FEATURE_NAMES,
};

// Re-export catalog acquisition
pub use starmatch_catalog::{load_catalog, CatalogSource, CatalogStore, CsvCatalogSource};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        extract, load_catalog, Catalog, CatalogEntry, CatalogSource, CatalogStore, Category,
        CsvCatalogSource, Error, FeatureSummary, FeatureVector, Metric, Query, RankedResult,
        Ranker, Result, FEATURE_DIM, FEATURE_NAMES,
    };
}
