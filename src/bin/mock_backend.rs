// Mock shop backend
//
// Serves the product REST routes over an in-memory catalog seeded with the
// sample home goods, for running the client against something local.

use actix_web::{web, App, HttpServer};
use anyhow::Result;
use shop_admin::fixtures::products::sample_products;
use shop_admin::web_app::config::ApiConfig;
use shop_admin::web_app::mock_server::{self, MockBackend};
use std::env;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load environment variables
    let config = ApiConfig::from_env();
    let addr = env::var("MOCK_BACKEND_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".to_string());

    let mut backend = MockBackend::new(sample_products());
    backend.page_size = config.page_size;
    let backend = web::Data::new(backend);

    tracing::info!(
        "Starting mock backend at http://{} with {} products, page size {}",
        addr,
        backend.catalog.len(),
        backend.page_size
    );

    HttpServer::new(move || {
        App::new()
            .app_data(backend.clone())
            .configure(mock_server::configure)
    })
    .bind(&addr)?
    .run()
    .await?;

    Ok(())
}
