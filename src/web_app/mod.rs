// web_app/mod.rs - Root module of the shop administration client
//
// Architecture:
// - model/: data types shared by the client, the services and the mock backend
// - config.rs: backend location and client settings
// - error.rs: error taxonomy (transport, status, validation, business rule)
// - api/: the ProductApi seam, its reqwest client and an in-memory catalog
// - state.rs: published state with replay-latest subscriptions
// - services/: catalog query service and product detail editor
// - mock_server.rs: actix-web backend over the in-memory catalog (mock-server only)

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod services;
pub mod state;

#[cfg(feature = "mock-server")]
pub mod mock_server;

pub use config::ApiConfig;
pub use error::CatalogError;
pub use services::{CatalogService, ProductEditor};
