//! Record store configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Where the record files live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding both record files.
    pub data_dir: PathBuf,
    /// Product records file name, relative to `data_dir`.
    pub products_file: String,
    /// Customer records file name, relative to `data_dir`.
    pub customers_file: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            products_file: "products.txt".to_string(),
            customers_file: "customers.txt".to_string(),
        }
    }
}

impl StoreConfig {
    /// Default file names under `data_dir`.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn products_path(&self) -> PathBuf {
        self.data_dir.join(&self.products_file)
    }

    pub fn customers_path(&self) -> PathBuf {
        self.data_dir.join(&self.customers_file)
    }
}
