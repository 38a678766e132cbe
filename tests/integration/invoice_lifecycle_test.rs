// Integration tests for the draft → edit → save → reload lifecycle
//
// Covers upsert identity, write-through persistence, the manual status label
// and rollback when the storage collaborator rejects a save.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use helpers::*;
use paintbill::core::InvoiceStorage;
use paintbill::invoices::{InvoiceStatus, InvoiceStore, ItemField, ItemUpdate, MemoryStorage, Unit};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_wall_paint_end_to_end() {
    let (storage, mut store) = memory_store();
    let mut draft = store.new_draft();
    assert_eq!(draft.number, "001");

    draft.add_item(line_item("Wall Paint", Unit::from("Sq.ft"), Decimal::ONE, dec!(15)));
    let item_id = draft.items()[0].id().to_string();
    draft.update_item(&item_id, ItemUpdate::from_raw(ItemField::Quantity, "100"));

    assert_eq!(draft.items()[0].amount(), dec!(1500));
    assert_eq!(draft.subtotal(), dec!(1500));
    assert_eq!(draft.total(), dec!(1500));
    assert_eq!(draft.balance(), dec!(1500));

    draft.set_discount(dec!(100));
    assert_eq!(draft.total(), dec!(1400));
    assert_eq!(draft.balance(), dec!(1400));

    draft.set_advance(dec!(1400));
    assert_eq!(draft.balance(), Decimal::ZERO);

    let id = draft.id().to_string();
    store.upsert(draft).expect("save succeeds");

    assert_eq!(store.len(), 1);
    let saved = store.get(&id).expect("saved invoice present");
    assert_eq!(saved.subtotal(), dec!(1500));
    assert_eq!(saved.total(), dec!(1400));
    assert_eq!(saved.advance(), dec!(1400));
    assert_eq!(saved.balance(), Decimal::ZERO);

    assert_eq!(storage.save_count(), 1);
    assert_eq!(storage.snapshot().as_slice(), store.all());
}

#[test]
fn test_settled_invoice_keeps_pending_status() {
    let (_storage, mut store) = memory_store();
    let mut invoice = invoice_for("Patil", dec!(2000), "2024-03-01");
    invoice.set_advance(dec!(2000));
    let id = invoice.id().to_string();
    store.upsert(invoice).unwrap();

    let saved = store.get(&id).unwrap();
    assert!(saved.is_settled());
    assert_eq!(saved.status, InvoiceStatus::Pending);
}

#[test]
fn test_resave_preserves_identity_and_position() {
    let (_storage, mut store) = memory_store();
    let first = invoice_for("A", dec!(100), "2024-01-01");
    let second = invoice_for("B", dec!(200), "2024-01-02");
    let first_id = first.id().to_string();

    store.upsert(first).unwrap();
    store.upsert(second).unwrap();
    assert_eq!(store.all()[1].id(), first_id);

    let mut reloaded = store.get(&first_id).unwrap().clone();
    reloaded.set_discount(dec!(30));
    reloaded.set_status(InvoiceStatus::Paid);
    store.upsert(reloaded.clone()).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.all()[1], reloaded);
    assert_eq!(store.all()[1].total(), dec!(70));
}

#[test]
fn test_next_number_follows_collection_size() {
    let (_storage, mut store) = memory_store();
    assert_eq!(store.next_number(), "001");

    for day in 1..=9 {
        store
            .upsert(invoice_for("A", dec!(10), &format!("2024-01-0{}", day)))
            .unwrap();
    }
    assert_eq!(store.next_number(), "010");
}

#[test]
fn test_failed_save_leaves_store_unchanged() {
    let (storage, mut store) = memory_store();
    let kept = invoice_for("A", dec!(100), "2024-01-01");
    let kept_id = kept.id().to_string();
    store.upsert(kept).unwrap();
    let before = store.all().to_vec();

    storage.set_fail_saves(true);

    let err = store.upsert(invoice_for("B", dec!(50), "2024-01-02"));
    assert!(err.is_err());
    assert_eq!(store.all(), before.as_slice());

    let mut edited = store.get(&kept_id).unwrap().clone();
    edited.set_advance(dec!(100));
    assert!(store.upsert(edited).is_err());
    assert_eq!(store.all(), before.as_slice());

    assert_eq!(storage.snapshot(), before);
    assert_eq!(storage.save_count(), 1);
}

#[test]
fn test_open_recomputes_stale_totals() {
    let mut invoice = invoice_for("A", dec!(100), "2024-01-01");
    invoice.set_discount(dec!(10));
    let json = serde_json::to_string(&vec![invoice]).unwrap();
    let tampered = json.replace("\"total\":\"90\"", "\"total\":\"9999\"");
    assert_ne!(json, tampered);

    let storage = Arc::new(MemoryStorage::with_invoices(
        serde_json::from_str(&tampered).unwrap(),
    ));
    assert_eq!(storage.load().unwrap()[0].total(), dec!(9999));

    let store = InvoiceStore::open(storage).unwrap();
    assert_eq!(store.all()[0].total(), dec!(90));
}

#[test]
fn test_huge_items_save_and_reload() {
    let (storage, mut store) = memory_store();
    let big = dec!(100000000000000000);
    let mut invoice = invoice_for("A", Decimal::ONE, "2024-01-01");
    invoice.add_item(line_item("Hall", Unit::SqFt, big, big));
    let id = invoice.id().to_string();

    store.upsert(invoice).unwrap();
    assert_eq!(store.get(&id).unwrap().subtotal(), Decimal::MAX);
    assert_eq!(store.dashboard().pending_amount, Decimal::MAX);

    let reopened = InvoiceStore::open(storage).unwrap();
    assert_eq!(reopened.get(&id).unwrap().balance(), Decimal::MAX);
}

proptest! {
    /// Property: upserting a new id grows by one at the front, a known id
    /// keeps the length and replaces the record
    #[test]
    fn test_upsert_identity(amounts in prop::collection::vec(0u32..10_000, 1..15), pick in 0usize..15) {
        let (_storage, mut store) = memory_store();
        for amount in &amounts {
            let invoice = invoice_for("A", Decimal::from(*amount), "2024-01-01");
            let id = invoice.id().to_string();
            let before = store.len();
            store.upsert(invoice).unwrap();
            prop_assert_eq!(store.len(), before + 1);
            prop_assert_eq!(store.all()[0].id(), id.as_str());
        }

        let index = pick % store.len();
        let mut edited = store.all()[index].clone();
        edited.set_discount(dec!(1));
        let len = store.len();
        store.upsert(edited.clone()).unwrap();

        prop_assert_eq!(store.len(), len);
        prop_assert_eq!(&store.all()[index], &edited);
    }
}
