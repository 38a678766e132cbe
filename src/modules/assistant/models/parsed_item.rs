use serde::{Deserialize, Serialize};

use crate::core::money::coerce_f64;
use crate::modules::invoices::models::LineItem;

/// One work line extracted from a free-text description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedItem {
    pub description: String,
    #[serde(default)]
    pub quantity: f64,
}

impl ParsedItem {
    /// Line item with rate 0 and the default unit; bad quantities become 0
    pub fn to_line_item(&self) -> LineItem {
        LineItem::from_parsed(self.description.trim(), coerce_f64(self.quantity))
    }
}

/// Convert assistant output into new line items, in order
pub fn items_from_parsed(parsed: &[ParsedItem]) -> Vec<LineItem> {
    parsed.iter().map(ParsedItem::to_line_item).collect()
}
