// JSON file storage for the invoice collection
//
// The whole collection is written as one pretty-printed JSON array. Saves go
// to a sibling temp file which is then renamed over the target, so a failed
// save leaves the previous file intact.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::{InvoiceStorage, Result};
use crate::modules::invoices::models::Invoice;

/// Storage backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "invoices.json".to_string());
        self.path.with_file_name(format!(".{}.tmp", file_name))
    }
}

impl InvoiceStorage for JsonFileStorage {
    fn load(&self) -> Result<Vec<Invoice>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No invoice file yet, starting empty");
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let invoices: Vec<Invoice> = serde_json::from_str(&contents)?;
        debug!(path = %self.path.display(), count = invoices.len(), "Loaded invoices");
        Ok(invoices)
    }

    fn save(&self, invoices: &[Invoice]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let payload = serde_json::to_vec_pretty(invoices)?;
        let temp_path = self.temp_path();

        let write_result = (|| -> std::io::Result<()> {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(&payload)?;
            file.sync_all()?;
            fs::rename(&temp_path, &self.path)
        })();

        if let Err(err) = write_result {
            let _ = fs::remove_file(&temp_path);
            return Err(err.into());
        }

        debug!(path = %self.path.display(), count = invoices.len(), "Saved invoices");
        Ok(())
    }
}
