use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline figures for the home screen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Sum of advances received across all invoices
    pub cash_in_hand: Decimal,
    /// Sum of outstanding balances across all invoices
    pub pending_amount: Decimal,
    pub invoices_count: usize,
}
