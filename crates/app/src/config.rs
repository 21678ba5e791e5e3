//! Process configuration from environment variables.

use std::path::{Path, PathBuf};

use anyhow::Context;

use gstinvoice_observability::LogFormat;
use gstinvoice_render::SellerProfile;

pub const DATA_DIR_ENV: &str = "GSTINVOICE_DATA_DIR";
pub const LOG_FORMAT_ENV: &str = "GSTINVOICE_LOG_FORMAT";
pub const SELLER_PROFILE_ENV: &str = "GSTINVOICE_SELLER_PROFILE";

/// Key-value store file inside the data directory.
pub const STORE_FILE_NAME: &str = "store.json";

const APP_DIR_NAME: &str = "gstinvoice";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub log_format: LogFormat,
    /// JSON seller profile; the built-in letterhead is used when unset.
    pub seller_profile_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data_dir = get(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        let log_format = match get(LOG_FORMAT_ENV) {
            Some(raw) => raw
                .parse::<LogFormat>()
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("invalid {LOG_FORMAT_ENV}"))?,
            None => LogFormat::default(),
        };

        Ok(Self {
            data_dir,
            log_format,
            seller_profile_path: get(SELLER_PROFILE_ENV).map(PathBuf::from),
        })
    }

    /// Path of the buyer directory store.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE_NAME)
    }

    pub fn load_seller_profile(&self) -> anyhow::Result<SellerProfile> {
        match &self.seller_profile_path {
            Some(path) => read_seller_profile(path),
            None => Ok(SellerProfile::default()),
        }
    }
}

fn default_data_dir() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join(APP_DIR_NAME),
        None => PathBuf::from(".").join(APP_DIR_NAME),
    }
}

fn read_seller_profile(path: &Path) -> anyhow::Result<SellerProfile> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read seller profile {}", path.display()))?;
    serde_json::from_slice(&bytes)
        .with_context(|| format!("failed to parse seller profile {}", path.display()))
}
