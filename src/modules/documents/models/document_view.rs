use serde::Serialize;

use crate::modules::documents::services::amount_in_words;
use crate::modules::invoices::models::Invoice;

/// Everything a renderer needs to print a bill
///
/// Built from an invoice whose derived fields are already consistent; the
/// renderer must print them as given and never recompute.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentView {
    pub invoice: Invoice,
    /// Total in words, e.g. "One Thousand Four Hundred Only"
    pub total_in_words: String,
    /// Balance in words, for the "balance due" line
    pub balance_in_words: String,
}

impl DocumentView {
    pub fn new(invoice: Invoice) -> Self {
        let total_in_words = amount_in_words(invoice.total());
        let balance_in_words = amount_in_words(invoice.balance());
        Self {
            invoice,
            total_in_words,
            balance_in_words,
        }
    }
}
