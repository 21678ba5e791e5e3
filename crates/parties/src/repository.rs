//! Buyer directory persistence.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use serde_json::Value as JsonValue;

use crate::buyer::BuyerRecord;

/// Key under which the buyer list is stored in a key-value store.
pub const BUYER_DIRECTORY_KEY: &str = "buyerDetailsList";

/// Buyer repository error.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("storage io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed buyer store: {0}")]
    Format(#[from] serde_json::Error),
    #[error("storage error: {0}")]
    Storage(String),
}

/// Read-on-load / write-on-submit store for the buyer directory.
pub trait BuyerRepository: Send + Sync {
    /// Load every stored buyer, in stored order.
    fn load(&self) -> Result<Vec<BuyerRecord>, RepositoryError>;

    /// Replace the stored list with `records`.
    fn save(&self, records: &[BuyerRecord]) -> Result<(), RepositoryError>;
}

impl<S> BuyerRepository for Arc<S>
where
    S: BuyerRepository + ?Sized,
{
    fn load(&self) -> Result<Vec<BuyerRecord>, RepositoryError> {
        (**self).load()
    }

    fn save(&self, records: &[BuyerRecord]) -> Result<(), RepositoryError> {
        (**self).save(records)
    }
}

/// In-memory buyer repository for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryBuyerRepository {
    inner: RwLock<Vec<BuyerRecord>>,
}

impl InMemoryBuyerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<BuyerRecord>) -> Self {
        Self {
            inner: RwLock::new(records),
        }
    }
}

impl BuyerRepository for InMemoryBuyerRepository {
    fn load(&self) -> Result<Vec<BuyerRecord>, RepositoryError> {
        let records = self
            .inner
            .read()
            .map_err(|_| RepositoryError::Storage("buyer store lock poisoned".to_string()))?;
        Ok(records.clone())
    }

    fn save(&self, records: &[BuyerRecord]) -> Result<(), RepositoryError> {
        let mut stored = self
            .inner
            .write()
            .map_err(|_| RepositoryError::Storage("buyer store lock poisoned".to_string()))?;
        *stored = records.to_vec();
        Ok(())
    }
}

/// Buyer repository over a JSON object file used as a key-value store.
///
/// The list lives under [`BUYER_DIRECTORY_KEY`]; any other keys in the file
/// are preserved on save.
#[derive(Debug, Clone)]
pub struct JsonFileBuyerRepository {
    path: PathBuf,
    key: String,
}

impl JsonFileBuyerRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            key: BUYER_DIRECTORY_KEY.to_string(),
        }
    }

    /// Store the list under a different key (e.g. one file shared by profiles).
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_store(&self) -> Result<BTreeMap<String, JsonValue>, RepositoryError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(RepositoryError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> RepositoryError {
        RepositoryError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl BuyerRepository for JsonFileBuyerRepository {
    fn load(&self) -> Result<Vec<BuyerRecord>, RepositoryError> {
        let mut store = self.read_store()?;
        let records = match store.remove(&self.key) {
            Some(value) => serde_json::from_value(value)?,
            None => Vec::new(),
        };

        tracing::debug!(
            path = %self.path.display(),
            count = records.len(),
            "loaded buyer directory"
        );
        Ok(records)
    }

    fn save(&self, records: &[BuyerRecord]) -> Result<(), RepositoryError> {
        let mut store = self.read_store()?;
        store.insert(self.key.clone(), serde_json::to_value(records)?);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(parent, e))?;
        }

        // Replace via a sibling temp file; readers never see a partial store.
        let tmp_path = self.path.with_extension("json.tmp");
        let body = serde_json::to_string_pretty(&store)?;
        fs::write(&tmp_path, body).map_err(|e| self.io_error(&tmp_path, e))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| self.io_error(&self.path, e))?;

        tracing::info!(
            path = %self.path.display(),
            count = records.len(),
            "saved buyer directory"
        );
        Ok(())
    }
}
