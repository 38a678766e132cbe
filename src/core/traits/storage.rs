use crate::core::Result;
use crate::modules::invoices::models::Invoice;

/// Durable storage collaborator for the invoice collection
///
/// Always loads and saves the whole collection, never deltas. A `save` must be
/// all-or-nothing: on error the previously persisted collection is intact.
pub trait InvoiceStorage: Send + Sync {
    /// Load every persisted invoice in stored order (empty when nothing saved yet)
    fn load(&self) -> Result<Vec<Invoice>>;

    /// Replace the persisted collection with `invoices`
    fn save(&self, invoices: &[Invoice]) -> Result<()>;
}
