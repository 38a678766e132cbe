use std::sync::Mutex;

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::core::money::coerce_amount;
use crate::core::AppError;
use crate::modules::documents::models::DocumentView;
use crate::modules::documents::services::amount_in_words;
use crate::modules::invoices::services::{lock_store, InvoiceStore};

#[derive(Debug, Serialize)]
pub struct WordsResponse {
    pub amount: String,
    pub words: String,
}

/// Printable view of a saved invoice
/// GET /documents/{id}
pub async fn get_document(
    store: web::Data<Mutex<InvoiceStore>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let invoice_id = path.into_inner();
    let store = lock_store(&store)?;
    let invoice = store
        .get(&invoice_id)
        .cloned()
        .ok_or_else(|| AppError::not_found(format!("Invoice {}", invoice_id)))?;

    Ok(HttpResponse::Ok().json(DocumentView::new(invoice)))
}

/// Amount in words; unparseable input reads as zero
/// GET /words/{amount}
pub async fn words(path: web::Path<String>) -> HttpResponse {
    let amount = coerce_amount(&path.into_inner());
    HttpResponse::Ok().json(WordsResponse {
        amount: amount.to_string(),
        words: amount_in_words(amount),
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/documents/{id}", web::get().to(get_document))
        .route("/words/{amount}", web::get().to(words));
}
