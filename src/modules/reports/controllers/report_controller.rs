use std::sync::Mutex;

use actix_web::{web, HttpResponse};
use tracing::debug;

use crate::core::AppError;
use crate::modules::invoices::services::{lock_store, InvoiceStore};

/// Per-client statistics in first-seen order
/// GET /clients
pub async fn list_clients(store: web::Data<Mutex<InvoiceStore>>) -> Result<HttpResponse, AppError> {
    let store = lock_store(&store)?;
    let clients = store.clients();
    debug!(count = clients.len(), "Client summary generated");

    Ok(HttpResponse::Ok().json(clients))
}

/// Cash in hand and pending totals
/// GET /dashboard
pub async fn dashboard(store: web::Data<Mutex<InvoiceStore>>) -> Result<HttpResponse, AppError> {
    let store = lock_store(&store)?;
    Ok(HttpResponse::Ok().json(store.dashboard()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/clients", web::get().to(list_clients))
        .route("/dashboard", web::get().to(dashboard));
}
