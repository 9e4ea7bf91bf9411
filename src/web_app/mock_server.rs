// web_app/mock_server.rs - actix-web backend over the in-memory catalog
//
// Serves the same routes and JSON shapes as the shop backend so the reqwest
// client can be exercised end to end, in tests and during local development.

use actix_multipart::form::{bytes::Bytes as FilePart, text::Text, MultipartForm};
use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;

use crate::web_app::api::queries::{self, ListQuery};
use crate::web_app::api::MemoryCatalog;
use crate::web_app::model::*;

/// Shared state of the mock backend
#[derive(Debug)]
pub struct MockBackend {
    pub catalog: MemoryCatalog,
    pub page_size: u32,
}

impl MockBackend {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            catalog: MemoryCatalog::new(products),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Register every backend route on an actix `App`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(queries::PRODUCTS_PATH, web::get().to(list_products))
        .route(queries::PRODUCTS_PATH, web::post().to(add_product))
        .route("/products/{id}", web::get().to(get_product))
        .route("/products/{id}", web::put().to(update_product))
        .route("/products/{id}", web::delete().to(delete_product))
        .route("/gallery/product/{id}", web::get().to(product_galleries))
        .route("/product/{id}/rating", web::get().to(product_rating))
        .route(
            "/product/{id}/rating/user/{user_id}",
            web::get().to(user_product_rating),
        )
        .route(queries::RATE_PATH, web::post().to(rate_product));
}

fn not_found(id: ProductId) -> HttpResponse {
    HttpResponse::NotFound().json(MessageResponse::new(format!("Product {} not found", id)))
}

async fn list_products(
    state: web::Data<MockBackend>,
    query: web::Query<ListQuery>,
) -> HttpResponse {
    let search = query.to_search(state.page_size);
    tracing::info!("Mock list request: {:?}", search);
    HttpResponse::Ok().json(state.catalog.list(&search))
}

async fn get_product(state: web::Data<MockBackend>, path: web::Path<ProductId>) -> HttpResponse {
    let id = path.into_inner();
    match state.catalog.get(id) {
        Some(product) => HttpResponse::Ok().json(ProductEnvelope { product }),
        None => not_found(id),
    }
}

async fn update_product(
    state: web::Data<MockBackend>,
    path: web::Path<ProductId>,
    body: web::Json<Product>,
) -> HttpResponse {
    let id = path.into_inner();
    let mut product = body.into_inner();
    product.id = id;

    if let Err(errors) = product.validate() {
        return HttpResponse::BadRequest().json(MessageResponse::new(errors.to_string()));
    }

    if state.catalog.update(product) {
        tracing::info!("Mock updated product {}", id);
        HttpResponse::Ok().json(MessageResponse::new(PRODUCT_UPDATED))
    } else {
        not_found(id)
    }
}

async fn delete_product(state: web::Data<MockBackend>, path: web::Path<ProductId>) -> HttpResponse {
    let id = path.into_inner();
    if state.catalog.delete(id) {
        tracing::info!("Mock deleted product {}", id);
        HttpResponse::Ok().json(MessageResponse::new(PRODUCT_DELETED))
    } else {
        not_found(id)
    }
}

/// Multipart body of `POST /products`
#[derive(MultipartForm)]
struct NewProductForm {
    #[multipart(rename = "productName")]
    name: Text<String>,
    #[multipart(rename = "productSummary")]
    summary: Text<String>,
    #[multipart(rename = "productCategory")]
    category: Text<String>,
    #[multipart(rename = "productDesc")]
    description: Text<String>,
    #[multipart(rename = "productBrand")]
    brand: Text<String>,
    #[multipart(rename = "productPrice")]
    price: Text<String>,
    #[multipart(rename = "productStock")]
    stock: Text<String>,
    image: Option<FilePart>,
}

async fn add_product(
    state: web::Data<MockBackend>,
    MultipartForm(form): MultipartForm<NewProductForm>,
) -> HttpResponse {
    let price = form.price.trim().parse::<Decimal>();
    let stock = form.stock.trim().parse::<i32>();
    let (Ok(price), Ok(stock)) = (price, stock) else {
        return HttpResponse::BadRequest().json(MessageResponse::new("Invalid price or stock"));
    };

    let product = NewProduct {
        name: form.name.into_inner(),
        summary: form.summary.into_inner(),
        category: form.category.into_inner(),
        description: form.description.into_inner(),
        brand: form.brand.into_inner(),
        price,
        stock,
    };
    let image_path = form
        .image
        .and_then(|image| image.file_name)
        .map(|name| format!("uploads/{}", name));

    let id = state.catalog.add(product, image_path);
    tracing::info!("Mock created product {}", id);
    HttpResponse::Ok().json(MessageResponse::new("Product Added"))
}

async fn product_galleries(
    state: web::Data<MockBackend>,
    path: web::Path<ProductId>,
) -> HttpResponse {
    let id = path.into_inner();
    match state.catalog.galleries(id) {
        Some(galleries) => HttpResponse::Ok().json(GalleryResponse::Wrapped { galleries }),
        None => not_found(id),
    }
}

async fn product_rating(state: web::Data<MockBackend>, path: web::Path<ProductId>) -> HttpResponse {
    HttpResponse::Ok().json(state.catalog.rating(path.into_inner()))
}

async fn user_product_rating(
    state: web::Data<MockBackend>,
    path: web::Path<(ProductId, UserId)>,
) -> HttpResponse {
    let (id, user_id) = path.into_inner();
    HttpResponse::Ok().json(UserRatingResponse {
        rating: state.catalog.user_rating(id, user_id),
    })
}

async fn rate_product(
    state: web::Data<MockBackend>,
    body: web::Json<ProductRating>,
) -> HttpResponse {
    let rating = body.into_inner();
    let id = rating.product_id;
    if state.catalog.rate(rating) {
        HttpResponse::Ok().json(MessageResponse::new("Product Rated"))
    } else {
        not_found(id)
    }
}
