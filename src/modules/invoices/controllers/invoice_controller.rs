use std::sync::Mutex;

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::core::AppError;
use crate::modules::invoices::models::{Invoice, RateCardEntry, Unit, RATE_CARD};
use crate::modules::invoices::services::{lock_store, InvoiceStore};

/// Rate card payload for the add-service picker
#[derive(Debug, Serialize)]
pub struct RateCardResponse {
    pub services: &'static [RateCardEntry],
    pub units: Vec<String>,
}

/// List all invoices, newest first
/// GET /invoices
pub async fn list_invoices(store: web::Data<Mutex<InvoiceStore>>) -> Result<HttpResponse, AppError> {
    let store = lock_store(&store)?;
    Ok(HttpResponse::Ok().json(store.all()))
}

/// Get invoice by ID
/// GET /invoices/{id}
pub async fn get_invoice(
    store: web::Data<Mutex<InvoiceStore>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let invoice_id = path.into_inner();
    let store = lock_store(&store)?;
    let invoice = store
        .get(&invoice_id)
        .ok_or_else(|| AppError::not_found(format!("Invoice {}", invoice_id)))?;

    Ok(HttpResponse::Ok().json(invoice))
}

/// Start a new draft with the next display number (not saved)
/// POST /invoices/draft
pub async fn create_draft(store: web::Data<Mutex<InvoiceStore>>) -> Result<HttpResponse, AppError> {
    let store = lock_store(&store)?;
    Ok(HttpResponse::Created().json(store.new_draft()))
}

/// Save a draft: insert or replace by id
/// PUT /invoices
///
/// Derived totals in the body are ignored and recomputed from items,
/// discount and advance.
pub async fn save_invoice(
    store: web::Data<Mutex<InvoiceStore>>,
    request: web::Json<Invoice>,
) -> Result<HttpResponse, AppError> {
    let invoice = request.into_inner();
    let invoice_id = invoice.id().to_string();
    if invoice_id.trim().is_empty() {
        return Err(AppError::validation("Invoice id cannot be empty"));
    }

    let mut store = lock_store(&store)?;
    store.upsert(invoice)?;

    let saved = store
        .get(&invoice_id)
        .ok_or_else(|| AppError::internal("Saved invoice missing from store"))?;
    Ok(HttpResponse::Ok().json(saved))
}

/// Predefined services and units
/// GET /rate-card
pub async fn rate_card() -> HttpResponse {
    HttpResponse::Ok().json(RateCardResponse {
        services: RATE_CARD,
        units: Unit::STANDARD.iter().map(|unit| unit.label().to_string()).collect(),
    })
}

/// Configure invoice routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/rate-card", web::get().to(rate_card)).service(
        web::scope("/invoices")
            .route("", web::get().to(list_invoices))
            .route("", web::put().to(save_invoice))
            .route("/draft", web::post().to(create_draft))
            .route("/{id}", web::get().to(get_invoice)),
    );
}
