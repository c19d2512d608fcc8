use csv::ReaderBuilder;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;
use tracing::{debug, info};

use starmatch_core::{extract, Catalog, CatalogEntry, Category, Error, Result, FEATURE_NAMES};

/// Column carrying the opaque object identifier.
pub const ID_COLUMN: &str = "obj_ID";

/// Column carrying the object class.
pub const CLASS_COLUMN: &str = "class";

/// Where catalogs come from. The store depends only on this seam.
pub trait CatalogSource {
    fn load(&self) -> Result<Catalog>;
}

/// Loads a catalog from a CSV export with named columns.
///
/// The file must carry [`ID_COLUMN`], [`CLASS_COLUMN`] and the eight
/// feature columns; any further columns are ignored. A malformed row
/// fails the whole load, so no partial catalog is ever observed.
pub struct CsvCatalogSource {
    path: PathBuf,
}

impl CsvCatalogSource {
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for CsvCatalogSource {
    fn load(&self) -> Result<Catalog> {
        let start = Instant::now();
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|e| Error::DataLoad(format!("{}: {}", self.path.display(), e)))?;

        let headers = reader
            .headers()
            .map_err(|e| Error::DataLoad(format!("{}: {}", self.path.display(), e)))?
            .clone();
        let column = |name: &str| -> Result<usize> {
            headers.iter().position(|h| h == name).ok_or_else(|| {
                Error::DataLoad(format!("{}: missing column {}", self.path.display(), name))
            })
        };

        let id_idx = column(ID_COLUMN)?;
        let class_idx = column(CLASS_COLUMN)?;
        let feature_idx = FEATURE_NAMES
            .iter()
            .map(|name| column(name))
            .collect::<Result<Vec<usize>>>()?;
        debug!(path = %self.path.display(), columns = headers.len(), "resolved catalog columns");

        let mut entries = Vec::new();
        for (row, record) in reader.records().enumerate() {
            // Header line plus 1-based numbering.
            let line = row + 2;
            let record =
                record.map_err(|e| Error::DataLoad(format!("line {}: {}", line, e)))?;

            let mut fields = Map::with_capacity(FEATURE_NAMES.len());
            for (&name, &idx) in FEATURE_NAMES.iter().zip(&feature_idx) {
                let cell = record.get(idx).unwrap_or("");
                fields.insert(name.to_string(), Value::String(cell.to_string()));
            }
            let features = extract(&fields)
                .map_err(|e| Error::DataLoad(format!("line {}: {}", line, e)))?;

            let category = Category::from_str(record.get(class_idx).unwrap_or(""))
                .map_err(|e| Error::DataLoad(format!("line {}: {}", line, e)))?;

            let id = record.get(id_idx).unwrap_or("").to_string();
            entries.push(CatalogEntry::new(id, category, features));
        }

        info!(
            path = %self.path.display(),
            rows = entries.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "catalog loaded"
        );
        Ok(Catalog::new(entries))
    }
}

/// Load a catalog CSV in one call.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    CsvCatalogSource::new(path).load()
}
