// In-memory storage, used by tests and as a scratch backend.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::core::{AppError, InvoiceStorage, Result};
use crate::modules::invoices::models::Invoice;

/// Storage that keeps the persisted collection in memory
///
/// Saves can be made to fail on demand to exercise error paths.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    persisted: Mutex<Vec<Invoice>>,
    fail_saves: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated as if `invoices` had been saved earlier
    pub fn with_invoices(invoices: Vec<Invoice>) -> Self {
        Self {
            persisted: Mutex::new(invoices),
            ..Self::default()
        }
    }

    /// Make every following `save` fail (or succeed again)
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Copy of the currently persisted collection
    pub fn snapshot(&self) -> Vec<Invoice> {
        self.persisted
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl InvoiceStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<Invoice>> {
        self.persisted
            .lock()
            .map(|guard| guard.clone())
            .map_err(|_| AppError::internal("memory storage lock poisoned"))
    }

    fn save(&self, invoices: &[Invoice]) -> Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(AppError::storage("simulated save failure"));
        }

        let mut guard = self
            .persisted
            .lock()
            .map_err(|_| AppError::internal("memory storage lock poisoned"))?;
        *guard = invoices.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
