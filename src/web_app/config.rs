// web_app/config.rs - Client configuration
//
// Values come from the environment (optionally seeded from a .env file),
// each with a local-development default.

use std::env;
use std::time::Duration;

use crate::web_app::model::DEFAULT_PAGE_SIZE;

/// Where the shop backend lives and how the client talks to it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the REST backend, e.g. `http://localhost:5000`
    pub api_url: String,
    /// Base URL gallery image paths are resolved against
    pub asset_url: String,
    /// Page size of the initial list query
    pub page_size: u32,
    pub request_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new("http://localhost:5000")
    }
}

impl ApiConfig {
    /// Config for a backend at `api_url`, serving its own assets
    pub fn new(api_url: impl Into<String>) -> Self {
        let api_url = trim_base(api_url.into());
        Self {
            asset_url: api_url.clone(),
            api_url,
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: Duration::from_secs(30),
        }
    }

    /// Read the configuration from the environment
    ///
    /// * `SHOP_API_URL` - backend base URL
    /// * `SHOP_ASSET_URL` - image base URL, defaults to the backend URL
    /// * `SHOP_PAGE_SIZE` - initial page size
    /// * `SHOP_REQUEST_TIMEOUT_SECS` - per-request timeout
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let api_url = env::var("SHOP_API_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string());
        let mut config = Self::new(api_url);

        if let Ok(asset_url) = env::var("SHOP_ASSET_URL") {
            config.asset_url = trim_base(asset_url);
        }

        config.page_size = env::var("SHOP_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|size: &u32| *size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        config.request_timeout = env::var("SHOP_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(config.request_timeout);

        tracing::debug!("Loaded api config: {:?}", config);
        config
    }

    /// Absolute URL of an API path such as `/products/3`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    /// Absolute URL of a gallery image path
    pub fn asset(&self, image_path: &str) -> String {
        format!("{}/{}", self.asset_url, image_path.trim_start_matches('/'))
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
