pub mod client_aggregator;

pub use client_aggregator::{summarize_clients, summarize_dashboard};
