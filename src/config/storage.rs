use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Where the invoice collection is persisted
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub data_file: PathBuf,
}

impl StorageConfig {
    pub fn from_env() -> Self {
        StorageConfig {
            data_file: env::var("DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("invoices.json")),
        }
    }
}
