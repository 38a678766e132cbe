use std::sync::Mutex;

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::invoices::services::InvoiceStore;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub invoices: Option<usize>,
}

/// GET /health - Liveness probe
/// Reports the number of invoices held; `status` is "degraded" when the
/// store lock is poisoned.
pub async fn health_check(store: web::Data<Mutex<InvoiceStore>>) -> impl Responder {
    let invoices = store.lock().ok().map(|store| store.len());
    let status = if invoices.is_some() { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        invoices,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
