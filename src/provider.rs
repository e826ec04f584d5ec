//! Loading datasets from disk.
//!
//! A data directory holds one JSON file per [`DatasetName`], each a JSON
//! array of `{ "year": ..., <field>: <number> }` records. A file that is
//! missing or malformed is logged and skipped; the rest still load.

use crate::core::record::{Dataset, DatasetCatalog, DatasetName};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors arising from loading a single dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {dataset} from '{path}': {source}")]
    Io {
        dataset: DatasetName,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {dataset} from '{path}': {source}")]
    Parse {
        dataset: DatasetName,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Source of the indicator datasets.
pub trait DataProvider {
    /// Load one dataset.
    fn load(&self, name: DatasetName) -> Result<Dataset, LoadError>;

    /// Load every dataset. Failures leave that dataset out of the catalog.
    fn load_all(&self) -> DatasetCatalog {
        let mut catalog = DatasetCatalog::new();
        for name in DatasetName::ALL {
            match self.load(name) {
                Ok(dataset) => {
                    log::debug!("Loaded {} ({} records)", name, dataset.len());
                    catalog.insert(dataset);
                }
                Err(e) => log::warn!("{}", e),
            }
        }
        log::info!(
            "Loaded {} of {} datasets",
            catalog.len(),
            DatasetName::ALL.len()
        );
        catalog
    }
}

/// Reads `<root>/<datasetName>.json` files.
#[derive(Debug, Clone)]
pub struct DirectoryProvider {
    root: PathBuf,
}

impl DirectoryProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, name: DatasetName) -> PathBuf {
        self.root.join(name.file_name())
    }
}

impl DataProvider for DirectoryProvider {
    fn load(&self, name: DatasetName) -> Result<Dataset, LoadError> {
        let path = self.path_for(name);
        let content = fs::read_to_string(&path).map_err(|source| LoadError::Io {
            dataset: name,
            path: path.clone(),
            source,
        })?;
        Dataset::from_json(name, &content).map_err(|source| LoadError::Parse {
            dataset: name,
            path,
            source,
        })
    }
}

/// Write a dataset in the format [`DirectoryProvider`] reads.
pub fn write_dataset(root: &Path, dataset: &Dataset) -> std::io::Result<PathBuf> {
    let path = root.join(dataset.name().file_name());
    let json = serde_json::to_string_pretty(dataset.records())?;
    fs::write(&path, json)?;
    Ok(path)
}
