mod client_summary;
mod dashboard;

pub use client_summary::ClientSummary;
pub use dashboard::DashboardStats;
