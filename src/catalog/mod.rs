//! Medicine catalog records and snapshot loading.

use std::{
    collections::HashSet,
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// A single medicine as known to the catalog.
///
/// Textual fields that are absent in the source deserialize as empty strings,
/// so the matching engine never has to special-case them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MedicineRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub brand_name: String,
    #[serde(default)]
    pub generic_name: String,
    #[serde(default)]
    pub strength: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uses: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side_effects: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<String>,
}

impl MedicineRecord {
    /// Minimal constructor used by fixtures and ad-hoc catalogs.
    pub fn new(
        id: impl Into<String>,
        brand_name: impl Into<String>,
        generic_name: impl Into<String>,
        strength: impl Into<String>,
        manufacturer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            brand_name: brand_name.into(),
            generic_name: generic_name.into(),
            strength: strength.into(),
            manufacturer: manufacturer.into(),
            ..Self::default()
        }
    }

    pub fn with_barcode(mut self, barcode: impl Into<String>) -> Self {
        self.barcode = Some(barcode.into());
        self
    }
}

/// Failures raised while reading a catalog snapshot.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("reading catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing catalog csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("parsing catalog json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported catalog format for {} (expected .csv or .json)", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("duplicate medicine id {0}")]
    DuplicateId(String),
}

/// Load a catalog snapshot, dispatching on the file extension.
pub fn load(path: &Path) -> Result<Vec<MedicineRecord>, CatalogError> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase());
    let is_csv = match ext.as_deref() {
        Some("csv") => true,
        Some("json") => false,
        _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
    };
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = if is_csv {
        from_csv_reader(file)?
    } else {
        from_json_reader(file)?
    };
    info!(path = %path.display(), records = records.len(), "loaded medicine catalog");
    Ok(records)
}

/// Parse CSV rows with a header line. Unknown columns are ignored.
pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<MedicineRecord>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut rows = Vec::new();
    for (idx, result) in csv_reader.deserialize::<MedicineRecord>().enumerate() {
        let row = result?;
        if row.brand_name.is_empty() && row.generic_name.is_empty() {
            // header is line 1
            warn!(line = idx + 2, "skipping catalog row without brand or generic name");
            continue;
        }
        rows.push(row);
    }
    finalise(rows)
}

/// Parse a JSON array of records.
pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<MedicineRecord>, CatalogError> {
    let rows: Vec<MedicineRecord> = serde_json::from_reader(reader)?;
    finalise(rows)
}

/// Assign missing ids, blank out empty optionals and reject duplicate ids.
fn finalise(mut rows: Vec<MedicineRecord>) -> Result<Vec<MedicineRecord>, CatalogError> {
    let mut seen = HashSet::new();
    for (idx, row) in rows.iter_mut().enumerate() {
        if row.id.trim().is_empty() {
            row.id = format!("M{:04}", idx + 1);
        }
        for field in [
            &mut row.barcode,
            &mut row.image_url,
            &mut row.uses,
            &mut row.side_effects,
            &mut row.warnings,
        ] {
            if field.as_deref().is_some_and(|v| v.trim().is_empty()) {
                *field = None;
            }
        }
        if !seen.insert(row.id.clone()) {
            return Err(CatalogError::DuplicateId(row.id.clone()));
        }
    }
    Ok(rows)
}
