// web_app/api/mod.rs - Access to the shop REST backend
//
// `ProductApi` is the seam between the services and the network:
// - client.rs: reqwest implementation against the real backend
// - queries.rs: paths and query strings, shared by the client and the mock server
// - memory.rs: in-memory catalog with the backend's list semantics

use async_trait::async_trait;

use crate::web_app::error::CatalogError;
use crate::web_app::model::*;

pub mod client;
pub mod memory;
pub mod queries;

pub use client::HttpProductApi;
pub use memory::MemoryCatalog;

/// Image file attached to a product creation request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Operations the shop backend offers for products
///
/// Mutations return the backend's message verbatim; deciding whether it means
/// success is up to the caller.
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// `GET /products` with the five search parameters
    async fn list_products(&self, search: &ProductSearch)
        -> Result<ProductListResponse, CatalogError>;

    /// `GET /products/:id`
    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError>;

    /// `PUT /products/:id`
    async fn update_product(&self, product: &Product) -> Result<String, CatalogError>;

    /// `DELETE /products/:id`
    async fn delete_product(&self, id: ProductId) -> Result<String, CatalogError>;

    /// `POST /products`
    async fn add_product(
        &self,
        product: &NewProduct,
        image: Option<&ImageUpload>,
    ) -> Result<String, CatalogError>;

    /// `GET /gallery/product/:id`
    async fn product_galleries(&self, id: ProductId) -> Result<Vec<GalleryImage>, CatalogError>;

    /// `GET /product/:id/rating`
    async fn product_rating(&self, id: ProductId) -> Result<RatingSummary, CatalogError>;

    /// `GET /product/:id/rating/user/:userId`
    async fn user_product_rating(
        &self,
        id: ProductId,
        user_id: UserId,
    ) -> Result<Option<ProductRating>, CatalogError>;

    /// `POST /rate`
    async fn rate_product(&self, rating: &ProductRating) -> Result<String, CatalogError>;
}
