// Read-only projections over the invoice collection.

use std::collections::HashMap;

use crate::core::money::saturating_sum;
use crate::modules::invoices::models::Invoice;
use crate::modules::reports::models::{ClientSummary, DashboardStats};

/// Group invoices by trimmed client name
///
/// Invoices with a blank name are skipped. Clients come out in the order
/// their first invoice appears in `invoices`; callers wanting another order
/// sort the result themselves.
pub fn summarize_clients(invoices: &[Invoice]) -> Vec<ClientSummary> {
    let mut summaries: Vec<ClientSummary> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for invoice in invoices {
        let Some(name) = invoice.client.key() else {
            continue;
        };

        let slot = *index.entry(name).or_insert_with(|| {
            summaries.push(ClientSummary::new(name));
            summaries.len() - 1
        });

        summaries[slot].record(invoice.total(), &invoice.date);
    }

    summaries
}

/// Cash in hand is the sum of advances; pending is the sum of balances
///
/// Both sums are capped at `Decimal::MAX`.
pub fn summarize_dashboard(invoices: &[Invoice]) -> DashboardStats {
    invoices
        .iter()
        .fold(DashboardStats::default(), |mut stats, invoice| {
            stats.cash_in_hand = saturating_sum(stats.cash_in_hand, invoice.advance());
            stats.pending_amount = saturating_sum(stats.pending_amount, invoice.balance());
            stats.invoices_count += 1;
            stats
        })
}
