// Amount in words, Indian numbering (thousand, lakh, crore)
//
// Used for the "Rupees ... Only" line of a printed bill.

use rust_decimal::Decimal;

use crate::core::money::whole_units;

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const THOUSAND: u128 = 1_000;
const LAKH: u128 = 100_000;
const CRORE: u128 = 10_000_000;

/// Words for a whole number
///
/// `0` is "Zero"; anything else is its expansion followed by " Only",
/// e.g. 123456 is "One Lakh Twenty Three Thousand Four Hundred Fifty Six Only".
pub fn words_for(n: u128) -> String {
    if n == 0 {
        return "Zero".to_string();
    }

    let mut words = Vec::new();
    push_words(n, &mut words);
    words.push("Only");
    words.join(" ")
}

/// Words for a money amount; paise are dropped (floored) first
///
/// Amounts past a lakh crore repeat the "Crore" band, e.g. 2 × 10^19 is
/// "Two Lakh Crore Crore Only".
pub fn amount_in_words(amount: Decimal) -> String {
    words_for(whole_units(amount))
}

fn push_words(n: u128, words: &mut Vec<&'static str>) {
    match n {
        0 => {}
        1..=19 => words.push(ONES[n as usize]),
        20..=99 => {
            words.push(TENS[(n / 10) as usize]);
            push_words(n % 10, words);
        }
        100..=999 => {
            words.push(ONES[(n / 100) as usize]);
            words.push("Hundred");
            push_words(n % 100, words);
        }
        _ if n < LAKH => {
            push_words(n / THOUSAND, words);
            words.push("Thousand");
            push_words(n % THOUSAND, words);
        }
        _ if n < CRORE => {
            push_words(n / LAKH, words);
            words.push("Lakh");
            push_words(n % LAKH, words);
        }
        _ => {
            push_words(n / CRORE, words);
            words.push("Crore");
            push_words(n % CRORE, words);
        }
    }
}
