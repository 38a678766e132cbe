use std::sync::Arc;

use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::middleware::RequestIdValue;
use crate::modules::assistant::models::items_from_parsed;
use crate::modules::assistant::services::WorkDescriptionParser;
use crate::modules::invoices::models::LineItem;

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub enabled: bool,
    pub items: Vec<LineItem>,
}

/// Turn a rough description into new line items (rate 0)
/// POST /assistant/parse
///
/// Always 200: a disabled or failing assistant yields an empty list.
pub async fn parse_description(
    req: HttpRequest,
    parser: web::Data<Arc<dyn WorkDescriptionParser>>,
    request: web::Json<ParseRequest>,
) -> HttpResponse {
    let request_id = req
        .extensions()
        .get::<RequestIdValue>()
        .map(|id| id.0.clone())
        .unwrap_or_default();

    let parsed = parser.parse(&request.text).await;

    info!(
        request_id = %request_id,
        parser = parser.name(),
        enabled = parser.is_enabled(),
        count = parsed.len(),
        "Work description parsed"
    );

    HttpResponse::Ok().json(ParseResponse {
        enabled: parser.is_enabled(),
        items: items_from_parsed(&parsed),
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/assistant/parse", web::post().to(parse_description));
}
