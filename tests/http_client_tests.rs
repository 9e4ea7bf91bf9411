// tests/http_client_tests.rs - reqwest client against the actix mock backend
//
// Each test binds its own mock backend on an ephemeral port so the catalogs
// are independent.

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use rust_decimal::Decimal;
use shop_admin::fixtures::products::sample_products;
use shop_admin::web_app::api::{HttpProductApi, ImageUpload, ProductApi};
use shop_admin::web_app::config::ApiConfig;
use shop_admin::web_app::error::CatalogError;
use shop_admin::web_app::mock_server::{self, MockBackend};
use shop_admin::web_app::model::*;
use shop_admin::web_app::services::CatalogService;

/// Start a mock backend and return its address plus shared state
fn start_backend() -> (SocketAddr, web::Data<MockBackend>) {
    let backend = web::Data::new(MockBackend::new(sample_products()));
    let data = backend.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(mock_server::configure)
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind mock backend");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    (addr, backend)
}

fn client_for(addr: SocketAddr) -> HttpProductApi {
    HttpProductApi::new(ApiConfig::new(format!("http://{}", addr))).expect("build client")
}

#[actix_web::test]
async fn test_list_products_over_http() {
    let (addr, _) = start_backend();
    let api = client_for(addr);

    let mut search = ProductSearch::with_page_size(3);
    search.filter_brand = "Lumo".to_string();
    let response = api.list_products(&search).await.unwrap();

    assert_eq!(response.products.rows.len(), 3);
    assert!(response.products.rows.iter().all(|p| p.brand == "Lumo"));
    assert_eq!(response.products.count, Some(4));
    assert_eq!(response.brands.len(), 4);
    assert_eq!(response.categories.len(), 4);
}

#[actix_web::test]
async fn test_get_product_and_not_found() {
    let (addr, _) = start_backend();
    let api = client_for(addr);

    let kettle = api.get_product(3).await.unwrap();
    assert_eq!(kettle.name, "Kettle");
    assert_eq!(kettle.price, Decimal::new(3000, 2));
    assert_eq!(kettle.before_discount, Some(Decimal::new(4000, 2)));
    assert_eq!(kettle.cover_image(), Some("uploads/product-3.png"));

    let err = api.get_product(404).await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(404)));
}

#[actix_web::test]
async fn test_update_and_delete_over_http() {
    let (addr, backend) = start_backend();
    let api = client_for(addr);

    let mut lamp = api.get_product(1).await.unwrap();
    lamp.stock = 2;
    assert_eq!(api.update_product(&lamp).await.unwrap(), PRODUCT_UPDATED);
    assert_eq!(backend.catalog.get(1).unwrap().stock, 2);

    lamp.price = Decimal::new(-1, 0);
    let err = api.update_product(&lamp).await.unwrap_err();
    assert!(matches!(err, CatalogError::Status { status: 400, .. }));

    assert_eq!(api.delete_product(1).await.unwrap(), PRODUCT_DELETED);
    assert!(backend.catalog.get(1).is_none());

    let err = api.delete_product(1).await.unwrap_err();
    assert!(matches!(err, CatalogError::Status { status: 404, .. }));
}

#[actix_web::test]
async fn test_add_product_sends_multipart_form() {
    let (addr, backend) = start_backend();
    let api = client_for(addr);

    let toaster = NewProduct {
        name: "Toaster".to_string(),
        summary: "Two slots".to_string(),
        category: "Kitchen".to_string(),
        description: "A two slot toaster".to_string(),
        brand: "Boil".to_string(),
        price: Decimal::new(2550, 2),
        stock: 7,
    };
    let image = ImageUpload {
        file_name: "toaster.png".to_string(),
        mime: "image/png".to_string(),
        bytes: vec![0x89, b'P', b'N', b'G'],
    };

    let message = api.add_product(&toaster, Some(&image)).await.unwrap();
    assert_eq!(message, "Product Added");

    let mut search = ProductSearch::with_page_size(50);
    search.searched_product = "toaster".to_string();
    let rows = backend.catalog.list(&search).products.rows;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].price, Decimal::new(2550, 2));
    assert_eq!(rows[0].stock, 7);
    assert_eq!(rows[0].description, "A two slot toaster");

    let galleries = api.product_galleries(rows[0].id).await.unwrap();
    assert_eq!(galleries[0].image_path, "uploads/toaster.png");
}

#[actix_web::test]
async fn test_ratings_over_http() -> anyhow::Result<()> {
    let (addr, _) = start_backend();
    let api = client_for(addr);

    assert_eq!(api.product_rating(6).await?.count, 0);
    assert!(api.user_product_rating(6, 1).await?.is_none());

    let rating = ProductRating {
        product_id: 6,
        user_id: 1,
        product_rating: 4.0,
    };
    let message = api
        .rate_product(&rating)
        .await
        .map_err(|e| anyhow::anyhow!("rate_product failed: {}", e))?;
    assert_eq!(message, "Product Rated");

    let summary = api.product_rating(6).await?;
    assert_eq!(summary.count, 1);
    assert_eq!(summary.rating, Some(4.0));
    assert_eq!(api.user_product_rating(6, 1).await?, Some(rating));

    Ok(())
}

#[actix_web::test]
async fn test_catalog_service_over_http() {
    let (addr, _) = start_backend();
    let mut config = ApiConfig::new(format!("http://{}", addr));
    config.page_size = 5;
    let catalog = Arc::new(CatalogService::from_config(&config).unwrap());

    catalog.filter_category(Some("Kitchen"));
    let snapshot = catalog.refresh().await.unwrap();

    assert_eq!(snapshot.products.len(), 3);
    assert_eq!(snapshot.total_count, Some(3));
    let kitchen = catalog
        .categories()
        .into_iter()
        .find(|f| f.value == "Kitchen")
        .unwrap();
    assert_eq!(kitchen.total, 3);
    let lumo = catalog
        .brands()
        .into_iter()
        .find(|f| f.value == "Lumo")
        .unwrap();
    assert_eq!(lumo.total, 1);

    catalog.set_page(2);
    catalog.clear_filters();
    assert_eq!(catalog.criteria().page, 1);
    catalog.refresh().await.unwrap();
    assert_eq!(catalog.products().len(), 5);
}
