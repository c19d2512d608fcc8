use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown category: {0}")]
    InvalidCategory(String),

    #[error("Invalid feature dimension: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid k: {0} (must be at least 1)")]
    InvalidK(usize),

    #[error("Missing feature: {0}")]
    MissingFeature(String),

    #[error("Non-numeric value for feature {field}: {value}")]
    NonNumericValue { field: String, value: String },

    #[error("Catalog load error: {0}")]
    DataLoad(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
