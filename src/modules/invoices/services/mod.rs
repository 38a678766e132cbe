pub mod invoice_store;

pub use invoice_store::{lock_store, InvoiceStore};
