use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{info, warn};

use crate::core::{AppError, InvoiceStorage, Result};
use crate::modules::invoices::models::Invoice;
use crate::modules::reports::models::{ClientSummary, DashboardStats};
use crate::modules::reports::services::{summarize_clients, summarize_dashboard};

/// The business's invoice collection, newest first
///
/// Initialised once from the storage collaborator and written through to it
/// after every upsert. Not safe for concurrent writers; callers serialize
/// access (the HTTP layer holds it behind a mutex).
pub struct InvoiceStore {
    storage: Arc<dyn InvoiceStorage>,
    invoices: Vec<Invoice>,
}

impl InvoiceStore {
    /// Load the persisted collection and take ownership of it
    ///
    /// Derived fields of every loaded record are recomputed.
    pub fn open(storage: Arc<dyn InvoiceStorage>) -> Result<Self> {
        let mut invoices = storage.load()?;
        for invoice in &mut invoices {
            invoice.recalculate();
        }

        info!(count = invoices.len(), "Invoice store loaded");

        Ok(Self { storage, invoices })
    }

    /// Every invoice in stored order
    pub fn all(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn get(&self, id: &str) -> Option<&Invoice> {
        self.invoices.iter().find(|invoice| invoice.id() == id)
    }

    pub fn len(&self) -> usize {
        self.invoices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }

    /// Display number for the next draft: collection size + 1, three digits
    ///
    /// Not a durable counter. Two drafts opened before either is saved get the
    /// same number.
    pub fn next_number(&self) -> String {
        format!("{:03}", self.invoices.len() + 1)
    }

    /// Fresh draft dated today with the next display number. Not persisted.
    pub fn new_draft(&self) -> Invoice {
        Invoice::draft(self.next_number())
    }

    /// Insert or replace by id, then persist the whole collection
    ///
    /// A known id is replaced in place; a new id goes to the front. When the
    /// storage write fails the in-memory collection is restored and the error
    /// returned.
    pub fn upsert(&mut self, mut invoice: Invoice) -> Result<()> {
        invoice.recalculate();
        let id = invoice.id().to_string();

        let previous = match self.invoices.iter().position(|existing| existing.id() == id) {
            Some(index) => Some((index, std::mem::replace(&mut self.invoices[index], invoice))),
            None => {
                self.invoices.insert(0, invoice);
                None
            }
        };

        if let Err(err) = self.storage.save(&self.invoices) {
            warn!(invoice_id = %id, error = %err, "Saving invoices failed, change discarded");
            match previous {
                Some((index, old)) => self.invoices[index] = old,
                None => {
                    self.invoices.remove(0);
                }
            }
            return Err(err);
        }

        info!(
            invoice_id = %id,
            replaced = previous.is_some(),
            count = self.invoices.len(),
            "Invoice saved"
        );

        Ok(())
    }

    /// Per-client statistics over the whole collection
    pub fn clients(&self) -> Vec<ClientSummary> {
        summarize_clients(&self.invoices)
    }

    /// Cash-in-hand and pending totals over the whole collection
    pub fn dashboard(&self) -> DashboardStats {
        summarize_dashboard(&self.invoices)
    }
}

/// Lock a shared store, turning a poisoned lock into an error
pub fn lock_store(store: &Mutex<InvoiceStore>) -> Result<MutexGuard<'_, InvoiceStore>> {
    store
        .lock()
        .map_err(|_| AppError::internal("invoice store lock poisoned"))
}
