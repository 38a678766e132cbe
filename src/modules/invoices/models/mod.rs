mod invoice;
mod line_item;
mod rate_card;

pub use invoice::{today, ClientDetails, Invoice, InvoiceStatus};
pub use line_item::{ItemField, ItemUpdate, LineItem, Unit};
pub use rate_card::{find_service, RateCardEntry, RATE_CARD};
