// web_app/api/queries.rs - Paths and query parameters of the shop backend
//
// Pure functions, no I/O. The client builds requests from them and the mock
// server parses with the same names, so the two cannot drift apart.

use serde::{Deserialize, Serialize};

use crate::web_app::model::{ProductId, ProductSearch, UserId};

pub const PRODUCTS_PATH: &str = "/products";
pub const RATE_PATH: &str = "/rate";

/// Query string of `GET /products`
///
/// All five parameters are always present; an unset filter is sent empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub size: Option<u32>,
    #[serde(default)]
    pub filter_brand: String,
    #[serde(default)]
    pub filter_category: String,
    #[serde(default)]
    pub searched_product: String,
}

impl From<&ProductSearch> for ListQuery {
    fn from(search: &ProductSearch) -> Self {
        ListQuery {
            page: Some(search.page),
            size: Some(search.size),
            filter_brand: search.filter_brand.clone(),
            filter_category: search.filter_category.clone(),
            searched_product: search.searched_product.clone(),
        }
    }
}

impl ListQuery {
    /// Search criteria, falling back to `default_size` and page 1
    pub fn to_search(&self, default_size: u32) -> ProductSearch {
        let mut search = ProductSearch::with_page_size(self.size.unwrap_or(default_size));
        search.page = self.page.unwrap_or(1).max(1);
        search.filter_brand = self.filter_brand.clone();
        search.filter_category = self.filter_category.clone();
        search.searched_product = self.searched_product.clone();
        search
    }
}

/// `(name, value)` pairs in the order the backend documents them
pub fn list_params(search: &ProductSearch) -> Vec<(&'static str, String)> {
    vec![
        ("page", search.page.to_string()),
        ("size", search.size.to_string()),
        ("filterBrand", search.filter_brand.clone()),
        ("filterCategory", search.filter_category.clone()),
        ("searchedProduct", search.searched_product.clone()),
    ]
}

pub fn product_path(id: ProductId) -> String {
    format!("{}/{}", PRODUCTS_PATH, id)
}

pub fn gallery_path(id: ProductId) -> String {
    format!("/gallery/product/{}", id)
}

pub fn rating_path(id: ProductId) -> String {
    format!("/product/{}/rating", id)
}

pub fn user_rating_path(id: ProductId, user_id: UserId) -> String {
    format!("/product/{}/rating/user/{}", id, user_id)
}

/// Case-insensitive substring match used for the free-text search
pub fn matches_term(haystack: &str, term: &str) -> bool {
    let term = term.trim();
    term.is_empty() || haystack.to_lowercase().contains(&term.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_order_and_values() {
        let mut search = ProductSearch::with_page_size(20);
        search.page = 2;
        search.filter_brand = "Lumo".to_string();

        let params = list_params(&search);
        let names: Vec<&str> = params.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            names,
            ["page", "size", "filterBrand", "filterCategory", "searchedProduct"]
        );
        assert_eq!(params[0].1, "2");
        assert_eq!(params[1].1, "20");
        assert_eq!(params[2].1, "Lumo");
        // unset filters are sent empty
        assert_eq!(params[3].1, "");
        assert_eq!(params[4].1, "");
    }

    #[test]
    fn test_paths() {
        assert_eq!(product_path(42), "/products/42");
        assert_eq!(gallery_path(42), "/gallery/product/42");
        assert_eq!(rating_path(42), "/product/42/rating");
        assert_eq!(user_rating_path(42, 7), "/product/42/rating/user/7");
    }

    #[test]
    fn test_list_query_round_trips_search() {
        let mut search = ProductSearch::with_page_size(5);
        search.page = 4;
        search.searched_product = "lamp".to_string();

        let query = ListQuery::from(&search);
        assert_eq!(query.to_search(10), search);
    }

    #[test]
    fn test_list_query_defaults() {
        let search = ListQuery::default().to_search(12);
        assert_eq!(search.page, 1);
        assert_eq!(search.size, 12);

        let zero_page = ListQuery {
            page: Some(0),
            ..Default::default()
        };
        assert_eq!(zero_page.to_search(12).page, 1);
    }

    #[test]
    fn test_matches_term() {
        assert!(matches_term("Desk Lamp", "lamp"));
        assert!(matches_term("Desk Lamp", ""));
        assert!(matches_term("Desk Lamp", "  "));
        assert!(!matches_term("Desk Lamp", "kettle"));
    }
}
