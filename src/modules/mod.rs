pub mod assistant;
pub mod documents;
pub mod health;
pub mod invoices;
pub mod reports;

/// Register every module's routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    health::controllers::configure(cfg);
    invoices::controllers::configure(cfg);
    reports::controllers::configure(cfg);
    documents::controllers::configure(cfg);
    assistant::controllers::configure(cfg);
}
