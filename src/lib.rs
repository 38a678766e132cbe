//! Paintbill invoicing library
//!
//! Invoice computation and lifecycle for a single painting-services business:
//! line items and derived totals, the write-through invoice store, client and
//! dashboard roll-ups, and amounts in words for printed bills.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::assistant;
pub use modules::documents;
pub use modules::invoices;
pub use modules::reports;
