// fixtures/fakes.rs - Scripted stand-ins for the backend and the editor's collaborators
//
// FakeProductApi answers from a MemoryCatalog and records every call, so tests
// can assert both on published state and on "no request was sent".

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::web_app::api::{ImageUpload, MemoryCatalog, ProductApi};
use crate::web_app::error::CatalogError;
use crate::web_app::model::*;
use crate::web_app::services::collaborators::{
    ConfirmPrompt, Confirmation, ListRefresher, Notifier,
};

/// Which backend operation a recorded call hit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiCall {
    List,
    Get,
    Update,
    Delete,
    Add,
    Galleries,
    Rating,
    UserRating,
    Rate,
}

/// ProductApi over an in-memory catalog, with scripted answers
#[derive(Debug, Default)]
pub struct FakeProductApi {
    catalog: MemoryCatalog,
    calls: Mutex<Vec<ApiCall>>,
    list_override: Mutex<Option<ProductListResponse>>,
    list_delays: Mutex<Vec<(u32, Duration)>>,
    update_message: Mutex<Option<String>>,
    delete_message: Mutex<Option<String>>,
    failing: AtomicBool,
}

impl FakeProductApi {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            catalog: MemoryCatalog::new(products),
            ..Default::default()
        }
    }

    pub fn catalog(&self) -> &MemoryCatalog {
        &self.catalog
    }

    /// Answer every list request with `response` instead of the catalog
    pub fn with_list_response(self, response: ProductListResponse) -> Self {
        *self.list_override.lock().unwrap() = Some(response);
        self
    }

    /// Delay list answers for `page` by `delay`
    pub fn with_list_delay(self, page: u32, delay: Duration) -> Self {
        self.list_delays.lock().unwrap().push((page, delay));
        self
    }

    /// Answer updates with `message` instead of "Product Updated"
    pub fn with_update_message(self, message: &str) -> Self {
        *self.update_message.lock().unwrap() = Some(message.to_string());
        self
    }

    /// Answer deletes with `message` instead of "Product Deleted"
    pub fn with_delete_message(self, message: &str) -> Self {
        *self.delete_message.lock().unwrap() = Some(message.to_string());
        self
    }

    /// Make every following call fail with a 500
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, call: ApiCall) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| **c == call).count()
    }

    fn record(&self, call: ApiCall) -> Result<(), CatalogError> {
        self.calls.lock().unwrap().push(call);
        if self.failing.load(Ordering::SeqCst) {
            return Err(CatalogError::Status {
                status: 500,
                body: "Internal Server Error".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ProductApi for FakeProductApi {
    async fn list_products(
        &self,
        search: &ProductSearch,
    ) -> Result<ProductListResponse, CatalogError> {
        self.record(ApiCall::List)?;

        let delay = self
            .list_delays
            .lock()
            .unwrap()
            .iter()
            .find(|(page, _)| *page == search.page)
            .map(|(_, delay)| *delay);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let scripted = self.list_override.lock().unwrap().clone();
        Ok(scripted.unwrap_or_else(|| self.catalog.list(search)))
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.record(ApiCall::Get)?;
        self.catalog.get(id).ok_or(CatalogError::NotFound(id))
    }

    async fn update_product(&self, product: &Product) -> Result<String, CatalogError> {
        self.record(ApiCall::Update)?;
        if let Some(message) = self.update_message.lock().unwrap().clone() {
            return Ok(message);
        }
        if !self.catalog.update(product.clone()) {
            return Err(CatalogError::NotFound(product.id));
        }
        Ok(PRODUCT_UPDATED.to_string())
    }

    async fn delete_product(&self, id: ProductId) -> Result<String, CatalogError> {
        self.record(ApiCall::Delete)?;
        if let Some(message) = self.delete_message.lock().unwrap().clone() {
            return Ok(message);
        }
        if !self.catalog.delete(id) {
            return Err(CatalogError::NotFound(id));
        }
        Ok(PRODUCT_DELETED.to_string())
    }

    async fn add_product(
        &self,
        product: &NewProduct,
        image: Option<&ImageUpload>,
    ) -> Result<String, CatalogError> {
        self.record(ApiCall::Add)?;
        let path = image.map(|i| format!("uploads/{}", i.file_name));
        self.catalog.add(product.clone(), path);
        Ok("Product Added".to_string())
    }

    async fn product_galleries(&self, id: ProductId) -> Result<Vec<GalleryImage>, CatalogError> {
        self.record(ApiCall::Galleries)?;
        self.catalog.galleries(id).ok_or(CatalogError::NotFound(id))
    }

    async fn product_rating(&self, id: ProductId) -> Result<RatingSummary, CatalogError> {
        self.record(ApiCall::Rating)?;
        Ok(self.catalog.rating(id))
    }

    async fn user_product_rating(
        &self,
        id: ProductId,
        user_id: UserId,
    ) -> Result<Option<ProductRating>, CatalogError> {
        self.record(ApiCall::UserRating)?;
        Ok(self.catalog.user_rating(id, user_id))
    }

    async fn rate_product(&self, rating: &ProductRating) -> Result<String, CatalogError> {
        self.record(ApiCall::Rate)?;
        if !self.catalog.rate(rating.clone()) {
            return Err(CatalogError::NotFound(rating.product_id));
        }
        Ok("Product Rated".to_string())
    }
}

/// ListRefresher that only counts how often it was asked
#[derive(Debug, Default)]
pub struct CountingRefresher {
    count: AtomicUsize,
}

impl CountingRefresher {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ListRefresher for CountingRefresher {
    async fn refresh_list(&self) -> Result<(), CatalogError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// What a RecordingNotifier was told
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success { title: String, message: String },
    Error { title: String, message: String },
}

/// Notifier keeping every notice for later inspection
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter_map(|n| match n {
                Notice::Error { message, .. } => Some(message),
                Notice::Success { .. } => None,
            })
            .collect()
    }

    pub fn successes(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter_map(|n| match n {
                Notice::Success { message, .. } => Some(message),
                Notice::Error { .. } => None,
            })
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, title: &str, message: &str) {
        self.notices.lock().unwrap().push(Notice::Success {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    fn error(&self, title: &str, message: &str) {
        self.notices.lock().unwrap().push(Notice::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

/// Confirmation that answers from a fixed value and counts prompts
#[derive(Debug)]
pub struct ScriptedConfirmation {
    answer: bool,
    asked: AtomicUsize,
}

impl ScriptedConfirmation {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: AtomicUsize::new(0),
        }
    }

    pub fn asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Confirmation for ScriptedConfirmation {
    async fn confirm(&self, _prompt: &ConfirmPrompt) -> bool {
        self.asked.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}
