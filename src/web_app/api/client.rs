// web_app/api/client.rs - reqwest client for the shop backend
//
// Thin pass-through: one request per call, no retry, no caching. Non-2xx
// answers become `CatalogError::Status` carrying the response body.

use async_trait::async_trait;
use reqwest::{multipart, Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::queries::{self, PRODUCTS_PATH, RATE_PATH};
use super::{ImageUpload, ProductApi};
use crate::web_app::config::ApiConfig;
use crate::web_app::error::CatalogError;
use crate::web_app::model::*;

#[derive(Clone, Debug)]
pub struct HttpProductApi {
    config: ApiConfig,
    http: Client,
}

impl HttpProductApi {
    /// Client with the configured request timeout
    pub fn new(config: ApiConfig) -> Result<Self, CatalogError> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self { config, http })
    }

    /// Client reusing an existing reqwest client (and its interceptors, headers, ...)
    pub fn with_client(config: ApiConfig, http: Client) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}

/// Decode a 2xx body, otherwise turn the response into a status error
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, CatalogError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!("Backend returned {}: {}", status, body);
        return Err(CatalogError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

async fn message(response: Response) -> Result<String, CatalogError> {
    let body: MessageResponse = decode(response).await?;
    Ok(body.message)
}

#[async_trait]
impl ProductApi for HttpProductApi {
    async fn list_products(
        &self,
        search: &ProductSearch,
    ) -> Result<ProductListResponse, CatalogError> {
        tracing::debug!("GET {} with {:?}", PRODUCTS_PATH, search);

        let response = self
            .http
            .get(self.url(PRODUCTS_PATH))
            .query(&queries::list_params(search))
            .send()
            .await?;

        decode(response).await
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let response = self
            .http
            .get(self.url(&queries::product_path(id)))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(id));
        }

        let envelope: ProductEnvelope = decode(response).await?;
        Ok(envelope.product)
    }

    async fn update_product(&self, product: &Product) -> Result<String, CatalogError> {
        let response = self
            .http
            .put(self.url(&queries::product_path(product.id)))
            .json(product)
            .send()
            .await?;

        message(response).await
    }

    async fn delete_product(&self, id: ProductId) -> Result<String, CatalogError> {
        let response = self
            .http
            .delete(self.url(&queries::product_path(id)))
            .send()
            .await?;

        message(response).await
    }

    async fn add_product(
        &self,
        product: &NewProduct,
        image: Option<&ImageUpload>,
    ) -> Result<String, CatalogError> {
        let mut form = multipart::Form::new()
            .text("productName", product.name.clone())
            .text("productSummary", product.summary.clone())
            .text("productCategory", product.category.clone())
            .text("productDesc", product.description.clone())
            .text("productBrand", product.brand.clone())
            .text("productPrice", product.price.to_string())
            .text("productStock", product.stock.to_string());

        if let Some(image) = image {
            let part = multipart::Part::bytes(image.bytes.clone())
                .file_name(image.file_name.clone())
                .mime_str(&image.mime)?;
            form = form.part("image", part);
        }

        let response = self
            .http
            .post(self.url(PRODUCTS_PATH))
            .multipart(form)
            .send()
            .await?;

        message(response).await
    }

    async fn product_galleries(&self, id: ProductId) -> Result<Vec<GalleryImage>, CatalogError> {
        let response = self
            .http
            .get(self.url(&queries::gallery_path(id)))
            .send()
            .await?;

        let body: GalleryResponse = decode(response).await?;
        Ok(body.into_images())
    }

    async fn product_rating(&self, id: ProductId) -> Result<RatingSummary, CatalogError> {
        let response = self
            .http
            .get(self.url(&queries::rating_path(id)))
            .send()
            .await?;

        decode(response).await
    }

    async fn user_product_rating(
        &self,
        id: ProductId,
        user_id: UserId,
    ) -> Result<Option<ProductRating>, CatalogError> {
        let response = self
            .http
            .get(self.url(&queries::user_rating_path(id, user_id)))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body: UserRatingResponse = decode(response).await?;
        Ok(body.rating)
    }

    async fn rate_product(&self, rating: &ProductRating) -> Result<String, CatalogError> {
        let response = self
            .http
            .post(self.url(RATE_PATH))
            .json(rating)
            .send()
            .await?;

        message(response).await
    }
}
