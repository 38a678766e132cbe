// Test data factory
//
// Builds invoices and stores backed by in-memory storage.

#![allow(dead_code)]

use std::sync::Arc;

use paintbill::invoices::{Invoice, InvoiceStore, LineItem, MemoryStorage, Unit};
use rust_decimal::Decimal;

/// Line item with explicit quantity and rate
pub fn line_item(description: &str, unit: Unit, quantity: Decimal, rate: Decimal) -> LineItem {
    let mut item = LineItem::new(description, unit, rate);
    item.set_quantity(quantity);
    item
}

/// Invoice for `client` dated `date` with one lump-sum item worth `amount`
pub fn invoice_for(client: &str, amount: Decimal, date: &str) -> Invoice {
    let mut invoice = Invoice::draft_on("001", date);
    invoice.client.name = client.to_string();
    invoice.add_item(line_item("Painting work", Unit::Lump, Decimal::ONE, amount));
    invoice
}

/// Empty store over fresh in-memory storage
pub fn memory_store() -> (Arc<MemoryStorage>, InvoiceStore) {
    let storage = Arc::new(MemoryStorage::new());
    let store = InvoiceStore::open(storage.clone()).expect("memory storage always loads");
    (storage, store)
}
