// web_app/api/memory.rs - In-memory product catalog
//
// Reproduces the list semantics of the shop backend without a database:
// - brand and category filters are exact matches
// - the search term is a case-insensitive substring of name, summary or brand
// - pages are 1-based
// - brand/category facets are the distinct values of the whole catalog

use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard};

use super::queries::matches_term;
use crate::web_app::model::*;

#[derive(Debug, Default)]
struct Inner {
    products: Vec<Product>,
    ratings: Vec<ProductRating>,
    next_id: ProductId,
}

/// Thread-safe product store shared by the mock backend and test fakes
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    inner: Mutex<Inner>,
}

impl MemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        let next_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(Inner {
                products,
                ratings: Vec::new(),
                next_id,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panicking writer leaves the data consistent, every mutation is a single step
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn len(&self) -> usize {
        self.lock().products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One page of products plus the distinct brand and category values
    pub fn list(&self, search: &ProductSearch) -> ProductListResponse {
        let inner = self.lock();

        let matching: Vec<&Product> = inner
            .products
            .iter()
            .filter(|p| search.filter_brand.is_empty() || p.brand == search.filter_brand)
            .filter(|p| search.filter_category.is_empty() || p.category == search.filter_category)
            .filter(|p| {
                matches_term(&p.name, &search.searched_product)
                    || matches_term(&p.summary, &search.searched_product)
                    || matches_term(&p.brand, &search.searched_product)
            })
            .collect();

        let count = matching.len() as u64;
        let rows: Vec<Product> = matching
            .into_iter()
            .skip(search.offset())
            .take(search.size as usize)
            .cloned()
            .collect();

        let brands = distinct(inner.products.iter().map(|p| p.brand.as_str()));
        let categories = distinct(inner.products.iter().map(|p| p.category.as_str()));

        tracing::debug!(
            "Memory catalog page {} returned {} of {} products",
            search.page,
            rows.len(),
            count
        );

        ProductListResponse {
            products: ProductRows {
                count: Some(count),
                rows,
            },
            brands,
            categories,
        }
    }

    pub fn get(&self, id: ProductId) -> Option<Product> {
        self.lock().products.iter().find(|p| p.id == id).cloned()
    }

    /// Replace the stored product with the same id, false if there is none
    pub fn update(&self, product: Product) -> bool {
        let mut inner = self.lock();
        match inner.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => {
                *existing = product;
                true
            }
            None => false,
        }
    }

    pub fn delete(&self, id: ProductId) -> bool {
        let mut inner = self.lock();
        let before = inner.products.len();
        inner.products.retain(|p| p.id != id);
        inner.ratings.retain(|r| r.product_id != id);
        inner.products.len() != before
    }

    /// Store a new product and return its id
    pub fn add(&self, product: NewProduct, image_path: Option<String>) -> ProductId {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;

        inner.products.push(Product {
            id,
            name: product.name,
            summary: product.summary,
            category: product.category,
            description: product.description,
            brand: product.brand,
            price: product.price,
            before_discount: None,
            stock: product.stock,
            galleries: image_path
                .map(|image_path| {
                    vec![GalleryImage {
                        id: None,
                        image_path,
                    }]
                })
                .unwrap_or_default(),
        });
        id
    }

    pub fn galleries(&self, id: ProductId) -> Option<Vec<GalleryImage>> {
        self.get(id).map(|p| p.galleries)
    }

    /// Record a rating, replacing the user's previous rating of the product
    pub fn rate(&self, rating: ProductRating) -> bool {
        let mut inner = self.lock();
        if !inner.products.iter().any(|p| p.id == rating.product_id) {
            return false;
        }
        inner
            .ratings
            .retain(|r| !(r.product_id == rating.product_id && r.user_id == rating.user_id));
        inner.ratings.push(rating);
        true
    }

    pub fn rating(&self, id: ProductId) -> RatingSummary {
        let inner = self.lock();
        let values: Vec<f64> = inner
            .ratings
            .iter()
            .filter(|r| r.product_id == id)
            .map(|r| r.product_rating)
            .collect();

        let count = values.len() as u64;
        let rating = (count > 0).then(|| values.iter().sum::<f64>() / count as f64);
        RatingSummary { rating, count }
    }

    pub fn user_rating(&self, id: ProductId, user_id: UserId) -> Option<ProductRating> {
        self.lock()
            .ratings
            .iter()
            .find(|r| r.product_id == id && r.user_id == user_id)
            .cloned()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<Facet> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(Facet::new)
        .collect()
}
