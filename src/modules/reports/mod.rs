pub mod controllers;
pub mod models;
pub mod services;

pub use models::{ClientSummary, DashboardStats};
pub use services::{summarize_clients, summarize_dashboard};
