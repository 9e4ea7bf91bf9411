// fixtures/products.rs - Sample home goods catalog
//
// Eight products over four brands and four categories. Some brands span
// several categories so filtered pages still carry facets with zero matches.

use rust_decimal::Decimal;

use super::SampleData;
use crate::web_app::model::{GalleryImage, Product};

pub struct HomeGoods;

impl SampleData for HomeGoods {
    fn products() -> Vec<Product> {
        vec![
            product(1, "Desk Lamp", "Warm LED desk lamp", "Lighting", "Lumo", 4500, 12),
            product(2, "Floor Lamp", "Dimmable floor lamp", "Lighting", "Lumo", 8900, 4),
            discounted(product(3, "Kettle", "Fast boil kettle", "Kitchen", "Boil", 3000, 20), 4000),
            product(4, "Glow Kettle", "Kettle with a light ring", "Kitchen", "Lumo", 5500, 0),
            product(5, "Chef Knife", "Forged steel knife", "Kitchen", "Edge", 7000, 8),
            product(6, "Trail Runner", "Light trail shoe", "Shoes", "Stride", 8950, 14),
            product(7, "Road Runner", "Cushioned road shoe", "Shoes", "Stride", 9900, 6),
            product(8, "Camp Lantern", "Rechargeable lantern", "Outdoor", "Lumo", 3500, 30),
        ]
    }
}

/// The home goods catalog
pub fn sample_products() -> Vec<Product> {
    HomeGoods::products()
}

/// Product with one gallery image and a price given in cents
pub fn product(
    id: i64,
    name: &str,
    summary: &str,
    category: &str,
    brand: &str,
    price_cents: i64,
    stock: i32,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        summary: summary.to_string(),
        category: category.to_string(),
        description: format!("{} by {}", summary, brand),
        brand: brand.to_string(),
        price: Decimal::new(price_cents, 2),
        before_discount: None,
        stock,
        galleries: vec![GalleryImage {
            id: Some(id * 10),
            image_path: format!("uploads/product-{}.png", id),
        }],
    }
}

fn discounted(mut product: Product, list_price_cents: i64) -> Product {
    product.before_discount = Some(Decimal::new(list_price_cents, 2));
    product
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_ids_are_unique() {
        let products = sample_products();
        let ids: HashSet<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_sample_products_are_valid() {
        for product in sample_products() {
            assert!(product.price >= Decimal::ZERO, "{}", product.name);
            assert!(product.stock >= 0, "{}", product.name);
            assert!(product.cover_image().is_some(), "{}", product.name);
        }
    }

    #[test]
    fn test_one_product_is_discounted() {
        let discounted: Vec<Product> = sample_products()
            .into_iter()
            .filter(|p| p.before_discount.is_some())
            .collect();
        assert_eq!(discounted.len(), 1);
        assert_eq!(discounted[0].list_price(), Decimal::new(4000, 2));
    }
}
