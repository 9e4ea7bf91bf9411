// web_app/model/mod.rs - Data models shared by the client, the services and the mock backend
//
// Field names on the wire follow the shop backend (productId, productName, ...),
// so every struct carries explicit serde renames and the Rust side keeps short names.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod form;

pub use form::ProductForm;

/// Backend identifier of a product
pub type ProductId = i64;

/// Backend identifier of a user (used by ratings)
pub type UserId = i64;

/// Page size used when nothing is configured
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Message the backend answers with after a successful update
pub const PRODUCT_UPDATED: &str = "Product Updated";

/// Message the backend answers with after a successful delete
pub const PRODUCT_DELETED: &str = "Product Deleted";

/// Product as returned by `/products` and `/products/:id`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "productId")]
    pub id: ProductId,
    #[serde(rename = "productName")]
    pub name: String,
    #[serde(rename = "productSummary", default)]
    pub summary: String,
    #[serde(rename = "productCategory")]
    pub category: String,
    #[serde(rename = "productDesc", default)]
    pub description: String,
    #[serde(rename = "productBrand")]
    pub brand: String,
    /// Selling price (already discounted when `before_discount` is set)
    #[serde(rename = "productPrice", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// List price before the discount was applied
    #[serde(
        rename = "beforeDiscount",
        with = "rust_decimal::serde::float_option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub before_discount: Option<Decimal>,
    #[serde(rename = "productStock")]
    pub stock: i32,
    /// Gallery images, first one is the cover
    #[serde(rename = "product_galleries", default)]
    pub galleries: Vec<GalleryImage>,
}

impl Product {
    /// Price shown in the edit form: the pre-discount price when there is one
    pub fn list_price(&self) -> Decimal {
        self.before_discount.unwrap_or(self.price)
    }

    /// Path of the cover image, relative to the asset server
    pub fn cover_image(&self) -> Option<&str> {
        self.galleries.first().map(|g| g.image_path.as_str())
    }

    /// Value of the given facet attribute for this product
    pub fn facet_value(&self, kind: FacetKind) -> &str {
        match kind {
            FacetKind::Brand => &self.brand,
            FacetKind::Category => &self.category,
        }
    }
}

/// One image of a product gallery
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    #[serde(rename = "galleryId", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "imagePath")]
    pub image_path: String,
}

/// Search, filter and pagination parameters of the product list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearch {
    /// 1-based page number
    pub page: u32,
    pub size: u32,
    /// Empty means "all brands"
    pub filter_brand: String,
    /// Empty means "all categories"
    pub filter_category: String,
    /// Free-text search term, empty means no search
    pub searched_product: String,
}

impl Default for ProductSearch {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl ProductSearch {
    /// First page, no filters, given page size
    pub fn with_page_size(size: u32) -> Self {
        Self {
            page: 1,
            size,
            filter_brand: String::new(),
            filter_category: String::new(),
            searched_product: String::new(),
        }
    }

    /// Zero-based row offset of the first product on the page
    pub fn offset(&self) -> usize {
        (self.page.max(1) as usize - 1) * self.size as usize
    }

    /// True when any of brand, category or search narrows the list
    pub fn is_filtered(&self) -> bool {
        !self.filter_brand.is_empty()
            || !self.filter_category.is_empty()
            || !self.searched_product.is_empty()
    }
}

/// Attribute a facet is computed over
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FacetKind {
    Brand,
    Category,
}

impl std::fmt::Display for FacetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FacetKind::Brand => write!(f, "brand"),
            FacetKind::Category => write!(f, "category"),
        }
    }
}

/// Filter value with the number of products on the current page carrying it
///
/// The backend only sends the distinct values; `total` is filled in client-side
/// and only counts the rows of the page that was just fetched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    #[serde(rename = "DISTINCT")]
    pub value: String,
    #[serde(default)]
    pub total: usize,
}

impl Facet {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            total: 0,
        }
    }
}

/// Row set of a list response
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProductRows {
    /// Number of products matching the filters across all pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(default)]
    pub rows: Vec<Product>,
}

/// Body of `GET /products`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub products: ProductRows,
    #[serde(default)]
    pub brands: Vec<Facet>,
    #[serde(default)]
    pub categories: Vec<Facet>,
}

/// Body of `GET /products/:id`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductEnvelope {
    pub product: Product,
}

/// Body of every mutating endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of `GET /gallery/product/:id`, either wrapped or a bare array
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GalleryResponse {
    Wrapped { galleries: Vec<GalleryImage> },
    Bare(Vec<GalleryImage>),
}

impl GalleryResponse {
    pub fn into_images(self) -> Vec<GalleryImage> {
        match self {
            GalleryResponse::Wrapped { galleries } => galleries,
            GalleryResponse::Bare(images) => images,
        }
    }
}

/// A single user's rating of a product, also the body of `POST /rate`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRating {
    pub product_id: ProductId,
    pub user_id: UserId,
    pub product_rating: f64,
}

/// Aggregated rating of a product
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    /// Average rating, absent when nobody rated yet
    #[serde(default, alias = "avgRating", alias = "average")]
    pub rating: Option<f64>,
    #[serde(default, alias = "total")]
    pub count: u64,
}

/// Body of `GET /product/:id/rating/user/:userId`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UserRatingResponse {
    #[serde(default)]
    pub rating: Option<ProductRating>,
}

/// Product creation payload, sent as a multipart form
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    #[serde(rename = "productName")]
    pub name: String,
    #[serde(rename = "productSummary")]
    pub summary: String,
    #[serde(rename = "productCategory")]
    pub category: String,
    #[serde(rename = "productDesc")]
    pub description: String,
    #[serde(rename = "productBrand")]
    pub brand: String,
    #[serde(rename = "productPrice", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(rename = "productStock")]
    pub stock: i32,
}
