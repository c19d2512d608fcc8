//! Canonical feature order and extraction from name/value mappings.
//!
//! Catalog rows and queries share one code path: a mapping from column
//! name to value is projected into a [`FeatureVector`] in the fixed
//! canonical order, so the distance metric always compares like with like.

use serde_json::{Map, Value};

use crate::{Error, FeatureVector, Result};

/// Canonical feature order: right ascension, declination, the five
/// photometric magnitudes, redshift.
pub const FEATURE_NAMES: [&str; 8] = ["alpha", "delta", "u", "g", "r", "i", "z", "redshift"];

/// Dimension of every feature vector in the system.
pub const FEATURE_DIM: usize = FEATURE_NAMES.len();

/// Project a name -> value mapping into the canonical feature order.
///
/// The mapping may carry extra names; every canonical name must be
/// present. String values are accepted when they parse as a real number,
/// since CSV cells arrive as text.
pub fn extract(fields: &Map<String, Value>) -> Result<FeatureVector> {
    let mut data = Vec::with_capacity(FEATURE_DIM);
    for name in FEATURE_NAMES {
        let value = fields
            .get(name)
            .ok_or_else(|| Error::MissingFeature(name.to_string()))?;
        data.push(numeric(name, value)?);
    }
    Ok(FeatureVector::new(data))
}

fn numeric(field: &str, value: &Value) -> Result<f32> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .map(|v| v as f32)
            .ok_or_else(|| non_numeric(field, value)),
        Value::String(s) => s
            .trim()
            .parse::<f32>()
            .map_err(|_| non_numeric(field, value)),
        _ => Err(non_numeric(field, value)),
    }
}

fn non_numeric(field: &str, value: &Value) -> Error {
    Error::NonNumericValue {
        field: field.to_string(),
        value: value.to_string(),
    }
}
