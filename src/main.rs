use std::sync::{Arc, Mutex};

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paintbill::assistant::{GeminiParser, WorkDescriptionParser};
use paintbill::config::{Config, LogFormat};
use paintbill::core::InvoiceStorage;
use paintbill::invoices::{InvoiceStore, JsonFileStorage};
use paintbill::middleware::RequestId;

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("paintbill={},actix_web=info", config.app.log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    match config.app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    init_tracing(&config);

    tracing::info!("Starting paintbill");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Invoice file: {}", config.storage.data_file.display());

    let storage: Arc<dyn InvoiceStorage> =
        Arc::new(JsonFileStorage::new(config.storage.data_file.clone()));
    let store = InvoiceStore::open(storage).context("Failed to load invoices")?;
    let store = web::Data::new(Mutex::new(store));

    let parser: Arc<dyn WorkDescriptionParser> =
        Arc::new(GeminiParser::new(&config.assistant).context("Failed to build assistant client")?);
    if !parser.is_enabled() {
        tracing::warn!("ASSISTANT_API_KEY not set, work-description assistant disabled");
    }
    let parser = web::Data::new(parser);

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(store.clone())
            .app_data(parser.clone())
            .configure(paintbill::modules::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server error")
}
