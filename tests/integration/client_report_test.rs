// Integration tests for client and dashboard roll-ups

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use paintbill::reports::{summarize_clients, summarize_dashboard};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_client_aggregation_example() {
    let invoices = vec![
        invoice_for("A", dec!(100), "2024-01-01"),
        invoice_for("A", dec!(50), "2024-02-01"),
        invoice_for(" ", dec!(10), "2024-03-01"),
    ];

    let clients = summarize_clients(&invoices);

    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].name, "A");
    assert_eq!(clients[0].count, 2);
    assert_eq!(clients[0].total, dec!(150));
    assert_eq!(clients[0].last_date, "2024-02-01");
}

#[test]
fn test_names_are_trimmed_before_grouping() {
    let invoices = vec![
        invoice_for("  Deshmukh", dec!(300), "2024-05-10"),
        invoice_for("Deshmukh ", dec!(200), "2024-04-01"),
        invoice_for("Kulkarni", dec!(75), "2024-01-15"),
    ];

    let clients = summarize_clients(&invoices);

    assert_eq!(clients.len(), 2);
    assert_eq!(clients[0].name, "Deshmukh");
    assert_eq!(clients[0].count, 2);
    assert_eq!(clients[0].total, dec!(500));
    assert_eq!(clients[0].last_date, "2024-05-10");
    assert_eq!(clients[1].name, "Kulkarni");
}

#[test]
fn test_client_total_uses_discounted_total() {
    let mut invoice = invoice_for("A", dec!(1000), "2024-01-01");
    invoice.set_discount(dec!(250));
    invoice.set_advance(dec!(100));

    let clients = summarize_clients(&[invoice]);
    assert_eq!(clients[0].total, dec!(750));
}

#[test]
fn test_dashboard_through_store() {
    let (_storage, mut store) = memory_store();

    let mut first = invoice_for("A", dec!(1500), "2024-01-01");
    first.set_discount(dec!(100));
    first.set_advance(dec!(1400));
    let mut second = invoice_for("B", dec!(800), "2024-02-01");
    second.set_advance(dec!(300));
    let unnamed = invoice_for("", dec!(40), "2024-03-01");

    store.upsert(first).unwrap();
    store.upsert(second).unwrap();
    store.upsert(unnamed).unwrap();

    let stats = store.dashboard();
    assert_eq!(stats.cash_in_hand, dec!(1700));
    assert_eq!(stats.pending_amount, dec!(540));
    assert_eq!(stats.invoices_count, 3);

    let clients = store.clients();
    assert_eq!(clients.len(), 2);
    assert_eq!(clients[0].name, "B");
    assert_eq!(clients[1].name, "A");
}

#[test]
fn test_empty_collection() {
    assert!(summarize_clients(&[]).is_empty());

    let stats = summarize_dashboard(&[]);
    assert_eq!(stats.cash_in_hand, Decimal::ZERO);
    assert_eq!(stats.pending_amount, Decimal::ZERO);
    assert_eq!(stats.invoices_count, 0);
}
