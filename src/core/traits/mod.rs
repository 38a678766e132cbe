pub mod storage;

pub use storage::InvoiceStorage;
