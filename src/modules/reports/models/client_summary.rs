use rust_decimal::Decimal;

use crate::core::money::saturating_sum;
use serde::{Deserialize, Serialize};

/// Statistics for one client, keyed by trimmed name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    /// Client name with surrounding whitespace removed
    pub name: String,
    /// Number of invoices billed to this name
    pub count: usize,
    /// Sum of invoice totals (after discount), capped at `Decimal::MAX`
    pub total: Decimal,
    /// Latest bill date, compared as `YYYY-MM-DD` strings
    pub last_date: String,
}

impl ClientSummary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            count: 0,
            total: Decimal::ZERO,
            last_date: String::new(),
        }
    }

    /// Fold one more invoice into the summary
    pub fn record(&mut self, total: Decimal, date: &str) {
        self.count += 1;
        self.total = saturating_sum(self.total, total);
        if date > self.last_date.as_str() {
            self.last_date = date.to_string();
        }
    }
}
