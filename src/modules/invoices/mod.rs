// Invoices module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{ClientDetails, Invoice, InvoiceStatus, ItemField, ItemUpdate, LineItem, Unit};
pub use repositories::{JsonFileStorage, MemoryStorage};
pub use services::InvoiceStore;
