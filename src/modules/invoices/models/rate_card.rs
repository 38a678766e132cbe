// Rate card: predefined services offered by the business with default rates.

use rust_decimal::Decimal;
use serde::Serialize;

use super::line_item::{LineItem, Unit};

/// One predefined service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateCardEntry {
    /// Bilingual label printed on the bill
    pub name: &'static str,
    /// Default rate per unit in rupees
    pub default_rate: u32,
}

impl RateCardEntry {
    pub fn rate(&self) -> Decimal {
        Decimal::from(self.default_rate)
    }

    /// New line item for this service, quantity 1, default unit
    pub fn to_line_item(&self) -> LineItem {
        LineItem::new(self.name, Unit::default(), self.rate())
    }
}

const fn entry(name: &'static str, default_rate: u32) -> RateCardEntry {
    RateCardEntry { name, default_rate }
}

/// Services offered in the add-service picker, in display order
pub static RATE_CARD: &[RateCardEntry] = &[
    entry("एस स्पार्क (Ace Spark)", 13),
    entry("एस इमल्शन (Ace Emulsion)", 15),
    entry("अपिक्स इमल्शन (Apex Emulsion)", 17),
    entry("अपिक्स अल्टिमा (Apex Ultima)", 20),
    entry("अल्टिमा प्रोटेक (Ultima Protek)", 22),
    entry("डॅम्प प्रूफ (Dam Proof)", 14),
    entry("ग्रील ऑईल पेंट (Grill Oil Paint)", 40),
    entry("साफसफाई (Cleaning)", 4),
    entry("साईड काम (Side Work)", 0),
    entry("इंटेरिअर पेंटिंग (Interior Painting)", 12),
    entry("पुट्टी २ कोट (Putty 2 Coat)", 12),
    entry("पॉलिश काम (Polish Work)", 35),
    entry("पीओपी फॉल्स सीलिंग (POP False Ceiling)", 45),
    entry("वॉटरप्रूफिंग (Waterproofing)", 18),
    entry("टेक्चर डिझाईन (Texture Design)", 25),
    entry("रॉयल प्ले (Royal Play)", 35),
    entry("इतर कामे (Other Work)", 0),
];

/// Look up a service by its exact label
pub fn find_service(name: &str) -> Option<&'static RateCardEntry> {
    RATE_CARD.iter().find(|entry| entry.name == name)
}
