// Invoice model with derived totals
//
// An invoice aggregates line items plus client and payment details.
// subtotal, total and balance are never patched incrementally: every mutation
// recomputes all three from the current items, discount and advance.

use chrono::Local;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::line_item::{ItemUpdate, LineItem};
use crate::core::money::{clamp_non_negative, total_of};
use crate::core::AppError;

/// Payment status label
///
/// This is a manual label. It does not follow the balance: an invoice whose
/// balance reaches zero stays `Pending` until the operator marks it `Paid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    /// Money still expected
    #[serde(alias = "बाकी")]
    Pending,

    /// Settled
    #[serde(alias = "पूर्ण")]
    Paid,

    /// Past due
    #[serde(alias = "थकबाकी")]
    Overdue,
}

impl Default for InvoiceStatus {
    fn default() -> Self {
        InvoiceStatus::Pending
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvoiceStatus::Pending => write!(f, "pending"),
            InvoiceStatus::Paid => write!(f, "paid"),
            InvoiceStatus::Overdue => write!(f, "overdue"),
        }
    }
}

impl std::str::FromStr for InvoiceStatus {
    type Err = AppError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            "overdue" => Ok(InvoiceStatus::Overdue),
            _ => Err(AppError::validation(format!("Invalid invoice status: {}", s))),
        }
    }
}

/// Client contact details, owned per invoice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

impl ClientDetails {
    /// Name used to group invoices by client; `None` when blank
    pub fn key(&self) -> Option<&str> {
        let name = self.name.trim();
        (!name.is_empty()).then_some(name)
    }
}

/// Represents a painting-work invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    id: String,

    /// Display sequence number, zero padded ("007")
    pub number: String,

    /// Bill date, `YYYY-MM-DD`
    pub date: String,

    /// Work start date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// Work end date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    #[serde(default)]
    pub client: ClientDetails,

    #[serde(default)]
    items: Vec<LineItem>,

    #[serde(default)]
    subtotal: Decimal,

    #[serde(default)]
    discount: Decimal,

    #[serde(default)]
    total: Decimal,

    #[serde(default)]
    advance: Decimal,

    #[serde(default)]
    balance: Decimal,

    #[serde(default)]
    pub status: InvoiceStatus,

    #[serde(default)]
    pub notes: String,
}

/// Today's date in the bill-date format
pub fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

impl Invoice {
    /// Create an empty draft dated today
    pub fn draft(number: impl Into<String>) -> Self {
        Self::draft_on(number, today())
    }

    /// Create an empty draft with an explicit bill date
    pub fn draft_on(number: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            number: number.into(),
            date: date.into(),
            start_date: None,
            end_date: None,
            client: ClientDetails::default(),
            items: Vec::new(),
            subtotal: Decimal::ZERO,
            discount: Decimal::ZERO,
            total: Decimal::ZERO,
            advance: Decimal::ZERO,
            balance: Decimal::ZERO,
            status: InvoiceStatus::Pending,
            notes: String::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Items in print order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn find_item(&self, item_id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id() == item_id)
    }

    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    pub fn discount(&self) -> Decimal {
        self.discount
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn advance(&self) -> Decimal {
        self.advance
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Append an item at the end of the list
    pub fn add_item(&mut self, item: LineItem) {
        self.items.push(item);
        self.recalculate();
    }

    /// Append several items, keeping their order
    pub fn add_items(&mut self, items: impl IntoIterator<Item = LineItem>) {
        self.items.extend(items);
        self.recalculate();
    }

    /// Remove an item by id
    ///
    /// Returns whether an item was removed; an unknown id leaves the invoice
    /// untouched.
    pub fn remove_item(&mut self, item_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != item_id);
        let removed = self.items.len() != before;
        if removed {
            self.recalculate();
        }
        removed
    }

    /// Apply an edit to one item
    ///
    /// Returns whether the item exists; an unknown id is a no-op.
    pub fn update_item(&mut self, item_id: &str, update: ItemUpdate) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id() == item_id) else {
            return false;
        };
        item.apply(update);
        self.recalculate();
        true
    }

    /// Set the discount, clamping negatives to zero
    pub fn set_discount(&mut self, discount: Decimal) {
        self.discount = clamp_non_negative(discount);
        self.recalculate();
    }

    /// Set the advance received, clamping negatives to zero
    pub fn set_advance(&mut self, advance: Decimal) {
        self.advance = clamp_non_negative(advance);
        self.recalculate();
    }

    pub fn set_status(&mut self, status: InvoiceStatus) {
        self.status = status;
    }

    /// Whether nothing remains owed. Independent of `status`.
    pub fn is_settled(&self) -> bool {
        self.balance.is_zero()
    }

    /// Recompute every derived field from items, discount and advance
    ///
    /// Formula:
    /// * subtotal = sum(item.quantity × item.rate), capped at `Decimal::MAX`
    /// * total = max(0, subtotal - discount)
    /// * balance = max(0, total - advance)
    pub fn recalculate(&mut self) {
        for item in &mut self.items {
            item.calculate_amount();
        }
        self.discount = clamp_non_negative(self.discount);
        self.advance = clamp_non_negative(self.advance);

        self.subtotal = total_of(self.items.iter().map(LineItem::amount));
        self.total = clamp_non_negative(self.subtotal - self.discount);
        self.balance = clamp_non_negative(self.total - self.advance);
    }
}
