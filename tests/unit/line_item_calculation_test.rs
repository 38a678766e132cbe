// Property-based tests for line item amount calculation
//
// Properties tested:
// 1. amount = quantity × rate right after creation
// 2. amount = quantity × rate after changing only the quantity
// 3. amount = quantity × rate after changing only the rate
// 4. amount is never negative, whatever the input
// 5. products past the decimal range cap at Decimal::MAX

use paintbill::invoices::{ItemField, ItemUpdate, LineItem, Unit};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn money(paise: u64) -> Decimal {
    Decimal::new(paise as i64, 2)
}

proptest! {
    /// Property: a new item has quantity 1 and amount equal to its rate
    #[test]
    fn test_new_item_amount_equals_rate(rate in 0u64..=10_000_000u64) {
        let item = LineItem::new("Wall Paint", Unit::SqFt, money(rate));
        prop_assert_eq!(item.quantity(), Decimal::ONE);
        prop_assert_eq!(item.amount(), money(rate));
    }

    /// Property: changing quantity alone keeps amount = quantity × rate
    #[test]
    fn test_quantity_change_keeps_amount(
        rate in 0u64..=1_000_000u64,
        quantity in 0u32..=100_000u32,
    ) {
        let mut item = LineItem::new("Putty", Unit::SqFt, money(rate));
        item.set_quantity(Decimal::from(quantity));

        prop_assert_eq!(item.amount(), Decimal::from(quantity) * money(rate));
    }

    /// Property: changing rate alone keeps amount = quantity × rate
    #[test]
    fn test_rate_change_keeps_amount(
        quantity in 0u32..=100_000u32,
        old_rate in 0u64..=1_000_000u64,
        new_rate in 0u64..=1_000_000u64,
    ) {
        let mut item = LineItem::new("Polish", Unit::RunningFt, money(old_rate));
        item.set_quantity(Decimal::from(quantity));
        item.set_rate(money(new_rate));

        prop_assert_eq!(item.rate(), money(new_rate));
        prop_assert_eq!(item.amount(), item.quantity() * item.rate());
    }

    /// Property: negative inputs clamp to zero and amount stays non-negative
    #[test]
    fn test_amount_never_negative(
        quantity in -100_000i64..=100_000i64,
        rate in -100_000i64..=100_000i64,
    ) {
        let mut item = LineItem::new("Cleaning", Unit::Lump, Decimal::ONE);
        item.set_quantity(Decimal::from(quantity));
        item.set_rate(Decimal::from(rate));

        prop_assert!(item.amount() >= Decimal::ZERO);
        prop_assert_eq!(item.amount(), item.quantity() * item.rate());
    }

    /// Property: arbitrary raw text never panics and keeps the invariant
    #[test]
    fn test_raw_text_updates_keep_invariant(raw in "\\PC{0,12}") {
        let mut item = LineItem::new("Texture", Unit::SqFt, dec!(25));
        item.apply(ItemUpdate::from_raw(ItemField::Quantity, &raw));
        item.apply(ItemUpdate::from_raw(ItemField::Rate, &raw));

        prop_assert!(item.quantity() >= Decimal::ZERO);
        prop_assert!(item.rate() >= Decimal::ZERO);
        prop_assert_eq!(item.amount(), item.quantity() * item.rate());
    }
}

proptest! {
    /// Property: huge factors never panic; amount is exact or capped
    #[test]
    fn test_huge_factors_saturate(
        quantity in 0u64..=u64::MAX,
        rate in 0u64..=u64::MAX,
    ) {
        let mut item = LineItem::new("Wall Paint", Unit::SqFt, Decimal::ZERO);
        item.apply(ItemUpdate::from_raw(ItemField::Quantity, &quantity.to_string()));
        item.apply(ItemUpdate::from_raw(ItemField::Rate, &rate.to_string()));

        let expected = Decimal::from(quantity)
            .checked_mul(Decimal::from(rate))
            .unwrap_or(Decimal::MAX);
        prop_assert_eq!(item.amount(), expected);
    }
}

#[test]
fn test_wall_paint_example() {
    let mut item = LineItem::new("Wall Paint", Unit::SqFt, dec!(15));
    item.set_quantity(dec!(100));
    assert_eq!(item.amount(), dec!(1500));
}

#[test]
fn test_fractional_quantity() {
    let mut item = LineItem::new("Brass work", Unit::Brass, dec!(1200));
    item.set_quantity(dec!(2.5));
    assert_eq!(item.amount(), dec!(3000));
}

#[test]
fn test_zero_quantity_tolerated() {
    let mut item = LineItem::new("Side Work", Unit::Nos, dec!(500));
    item.apply(ItemUpdate::from_raw(ItemField::Quantity, "0"));
    assert_eq!(item.quantity(), Decimal::ZERO);
    assert_eq!(item.amount(), Decimal::ZERO);
}

#[test]
fn test_description_and_unit_edits_keep_amount() {
    let mut item = LineItem::new("Hall", Unit::SqFt, dec!(15));
    item.set_quantity(dec!(10));
    item.apply(ItemUpdate::Description("Hall and passage".to_string()));
    item.apply(ItemUpdate::Unit(Unit::Lump));

    assert_eq!(item.description, "Hall and passage");
    assert_eq!(item.unit, Unit::Lump);
    assert_eq!(item.amount(), dec!(150));
}
