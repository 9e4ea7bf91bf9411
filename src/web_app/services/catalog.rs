// web_app/services/catalog.rs - Catalog query service
//
// Owns the current search criteria and the three published views of the
// product list: the rows, the brand facets and the category facets.
//
// Requests are not sequenced. When two list queries overlap, whichever answer
// arrives last is what subscribers end up seeing.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;

use super::collaborators::ListRefresher;
use crate::web_app::api::{HttpProductApi, ImageUpload, ProductApi};
use crate::web_app::config::ApiConfig;
use crate::web_app::error::CatalogError;
use crate::web_app::model::*;
use crate::web_app::state::Published;

/// Everything one list response produced
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListSnapshot {
    pub products: Vec<Product>,
    pub brands: Vec<Facet>,
    pub categories: Vec<Facet>,
    /// Matches across all pages, when the backend reports it
    pub total_count: Option<u64>,
}

/// Fill in each facet's total with the number of `products` carrying its value
///
/// Counts are page-local: only the rows passed in are looked at. Values the
/// backend listed but no row carries keep a total of 0.
pub fn apply_facet_totals(products: &[Product], facets: &mut [Facet], kind: FacetKind) {
    for facet in facets.iter_mut() {
        facet.total = products
            .iter()
            .filter(|p| p.facet_value(kind) == facet.value)
            .count();
    }
}

pub struct CatalogService {
    api: Arc<dyn ProductApi>,
    criteria: Published<ProductSearch>,
    products: Published<Vec<Product>>,
    brands: Published<Vec<Facet>>,
    categories: Published<Vec<Facet>>,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("criteria", &self.criteria.get())
            .field("products", &self.products.get().len())
            .finish()
    }
}

impl CatalogService {
    /// Service over any backend, starting at page 1 with `page_size` rows
    pub fn new(api: Arc<dyn ProductApi>, page_size: u32) -> Self {
        Self {
            api,
            criteria: Published::new(ProductSearch::with_page_size(page_size)),
            products: Published::default(),
            brands: Published::default(),
            categories: Published::default(),
        }
    }

    /// Service talking HTTP to the configured backend
    pub fn from_config(config: &ApiConfig) -> Result<Self, CatalogError> {
        let api = HttpProductApi::new(config.clone())?;
        Ok(Self::new(Arc::new(api), config.page_size))
    }

    pub fn api(&self) -> &Arc<dyn ProductApi> {
        &self.api
    }

    // ---- Published state ----

    pub fn criteria(&self) -> ProductSearch {
        self.criteria.get()
    }

    pub fn products(&self) -> Vec<Product> {
        self.products.get()
    }

    pub fn brands(&self) -> Vec<Facet> {
        self.brands.get()
    }

    pub fn categories(&self) -> Vec<Facet> {
        self.categories.get()
    }

    pub fn subscribe_criteria(&self) -> watch::Receiver<ProductSearch> {
        self.criteria.subscribe()
    }

    pub fn subscribe_products(&self) -> watch::Receiver<Vec<Product>> {
        self.products.subscribe()
    }

    pub fn subscribe_brands(&self) -> watch::Receiver<Vec<Facet>> {
        self.brands.subscribe()
    }

    pub fn subscribe_categories(&self) -> watch::Receiver<Vec<Facet>> {
        self.categories.subscribe()
    }

    // ---- Criteria ----

    pub fn set_page(&self, page: u32) {
        self.criteria.modify(|c| c.page = page.max(1));
    }

    pub fn set_page_size(&self, size: u32) {
        self.criteria.modify(|c| {
            c.size = size.max(1);
            c.page = 1;
        });
    }

    /// Narrow to one brand, `None` shows all brands again
    pub fn filter_brand(&self, brand: Option<&str>) {
        self.criteria.modify(|c| {
            c.filter_brand = brand.unwrap_or_default().to_string();
            c.page = 1;
        });
    }

    /// Narrow to one category, `None` shows all categories again
    pub fn filter_category(&self, category: Option<&str>) {
        self.criteria.modify(|c| {
            c.filter_category = category.unwrap_or_default().to_string();
            c.page = 1;
        });
    }

    /// New search term, back to the first page
    pub fn search(&self, term: &str) {
        self.criteria.modify(|c| {
            c.searched_product = term.trim().to_string();
            c.page = 1;
        });
    }

    /// Drop brand, category and search term, back to the first page
    pub fn clear_filters(&self) {
        self.criteria.modify(|c| {
            c.filter_brand.clear();
            c.filter_category.clear();
            c.searched_product.clear();
            c.page = 1;
        });
    }

    // ---- Requests ----

    /// Re-run the list query with the current criteria
    pub async fn refresh(&self) -> Result<ListSnapshot, CatalogError> {
        let criteria = self.criteria();
        self.request_list(&criteria).await
    }

    /// Make `criteria` current and load its page
    pub async fn fetch_list(&self, criteria: ProductSearch) -> Result<ListSnapshot, CatalogError> {
        self.criteria.publish(criteria.clone());
        self.request_list(&criteria).await
    }

    async fn request_list(&self, criteria: &ProductSearch) -> Result<ListSnapshot, CatalogError> {
        tracing::info!(
            "Loading products: page={} size={} brand='{}' category='{}' search='{}'",
            criteria.page,
            criteria.size,
            criteria.filter_brand,
            criteria.filter_category,
            criteria.searched_product
        );

        let response = match self.api.list_products(criteria).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Product list request failed: {}", e);
                return Err(e);
            }
        };

        let products = response.products.rows;
        let mut brands = response.brands;
        let mut categories = response.categories;
        apply_facet_totals(&products, &mut brands, FacetKind::Brand);
        apply_facet_totals(&products, &mut categories, FacetKind::Category);

        tracing::info!(
            "Loaded {} products, {} brands, {} categories",
            products.len(),
            brands.len(),
            categories.len()
        );

        let snapshot = ListSnapshot {
            products,
            brands,
            categories,
            total_count: response.products.count,
        };

        self.products.publish(snapshot.products.clone());
        self.categories.publish(snapshot.categories.clone());
        self.brands.publish(snapshot.brands.clone());

        Ok(snapshot)
    }

    pub async fn fetch_by_id(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.api.get_product(id).await.map_err(|e| {
            tracing::warn!("Loading product {} failed: {}", id, e);
            e
        })
    }

    /// Save `product`; the list is not reloaded, callers refresh on success
    ///
    /// An invalid product is rejected before any request is made.
    pub async fn update(&self, product: &Product) -> Result<String, CatalogError> {
        if let Err(errors) = product.validate() {
            tracing::warn!("Product {} not sent: {}", product.id, errors);
            return Err(errors.into());
        }

        let message = self.api.update_product(product).await?;
        expect_message(message, PRODUCT_UPDATED)
    }

    /// Delete product `id`; the list is not reloaded, callers refresh on success
    pub async fn delete(&self, id: ProductId) -> Result<String, CatalogError> {
        let message = self.api.delete_product(id).await?;
        expect_message(message, PRODUCT_DELETED)
    }

    pub async fn create(
        &self,
        product: &NewProduct,
        image: Option<&ImageUpload>,
    ) -> Result<String, CatalogError> {
        tracing::info!("Creating product '{}'", product.name);
        self.api.add_product(product, image).await
    }

    pub async fn galleries(&self, id: ProductId) -> Result<Vec<GalleryImage>, CatalogError> {
        self.api.product_galleries(id).await
    }

    pub async fn rating(&self, id: ProductId) -> Result<RatingSummary, CatalogError> {
        self.api.product_rating(id).await
    }

    pub async fn user_rating(
        &self,
        id: ProductId,
        user_id: UserId,
    ) -> Result<Option<ProductRating>, CatalogError> {
        self.api.user_product_rating(id, user_id).await
    }

    pub async fn rate(
        &self,
        id: ProductId,
        user_id: UserId,
        rating: f64,
    ) -> Result<String, CatalogError> {
        let rating = ProductRating {
            product_id: id,
            user_id,
            product_rating: rating,
        };
        self.api.rate_product(&rating).await
    }
}

fn expect_message(message: String, expected: &str) -> Result<String, CatalogError> {
    if message == expected {
        Ok(message)
    } else {
        tracing::warn!("Expected '{}', backend said '{}'", expected, message);
        Err(CatalogError::Rejected(message))
    }
}

#[async_trait]
impl ListRefresher for CatalogService {
    async fn refresh_list(&self) -> Result<(), CatalogError> {
        self.refresh().await.map(|_| ())
    }
}
