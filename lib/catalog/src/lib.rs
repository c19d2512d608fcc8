//! Catalog acquisition for starmatch.
//!
//! [`CsvCatalogSource`] parses a CSV export into a
//! [`Catalog`](starmatch_core::Catalog); [`CatalogStore`] holds the
//! loaded snapshot and guarantees at most one load per process lifetime,
//! however many callers race on the first access.

pub mod csv_source;
pub mod store;

pub use csv_source::{load_catalog, CatalogSource, CsvCatalogSource};
pub use store::CatalogStore;
