// web_app/model/form.rs - Editable product form
//
// The form holds exactly what the edit view binds to. Validation is an explicit
// function returning every failing field, so callers can mark them all at once.

use rust_decimal::Decimal;

use super::{GalleryImage, Product, ProductId};
use crate::web_app::error::{FieldErrorKind, FormField, ValidationErrors};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductForm {
    pub id: Option<ProductId>,
    pub name: String,
    pub summary: String,
    pub category: String,
    pub description: String,
    pub brand: String,
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
    pub galleries: Vec<GalleryImage>,
}

impl ProductForm {
    /// Form populated from a fetched product
    pub fn from_product(product: &Product) -> Self {
        let mut form = Self::default();
        form.patch(product);
        form
    }

    /// Overwrite every field with the product's values
    ///
    /// The price field shows the list price, i.e. `before_discount` when the
    /// product is discounted.
    pub fn patch(&mut self, product: &Product) {
        self.id = Some(product.id);
        self.name = product.name.clone();
        self.summary = product.summary.clone();
        self.category = product.category.clone();
        self.description = product.description.clone();
        self.brand = product.brand.clone();
        self.price = Some(product.list_price());
        self.stock = Some(product.stock);
        self.galleries = product.galleries.clone();
    }

    /// Check required text fields and non-negative numbers
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        check_fields(
            [
                (FormField::Name, &self.name),
                (FormField::Summary, &self.summary),
                (FormField::Category, &self.category),
                (FormField::Description, &self.description),
                (FormField::Brand, &self.brand),
            ],
            self.price,
            self.stock,
        )
    }

    /// Validated product ready to be sent with `PUT /products/:id`
    pub fn to_product(&self, id: ProductId) -> Result<Product, ValidationErrors> {
        self.validate()?;

        Ok(Product {
            id,
            name: self.name.clone(),
            summary: self.summary.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            brand: self.brand.clone(),
            price: self.price.unwrap_or_default(),
            before_discount: None,
            stock: self.stock.unwrap_or_default(),
            galleries: self.galleries.clone(),
        })
    }
}

impl Product {
    /// Same rules as the edit form: text fields set, price and stock not negative
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        check_fields(
            [
                (FormField::Name, &self.name),
                (FormField::Summary, &self.summary),
                (FormField::Category, &self.category),
                (FormField::Description, &self.description),
                (FormField::Brand, &self.brand),
            ],
            Some(self.price),
            Some(self.stock),
        )
    }
}

fn check_fields(
    text: [(FormField, &String); 5],
    price: Option<Decimal>,
    stock: Option<i32>,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    for (field, value) in text {
        if value.trim().is_empty() {
            errors.push(field, FieldErrorKind::Required);
        }
    }

    match price {
        None => errors.push(FormField::Price, FieldErrorKind::Required),
        Some(price) if price.is_sign_negative() && !price.is_zero() => {
            errors.push(FormField::Price, FieldErrorKind::Negative)
        }
        Some(_) => {}
    }

    match stock {
        None => errors.push(FormField::Stock, FieldErrorKind::Required),
        Some(stock) if stock < 0 => errors.push(FormField::Stock, FieldErrorKind::Negative),
        Some(_) => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ProductForm {
        ProductForm {
            id: Some(1),
            name: "Desk Lamp".to_string(),
            summary: "Warm light".to_string(),
            category: "Lighting".to_string(),
            description: "A desk lamp with a warm LED".to_string(),
            brand: "Lumo".to_string(),
            price: Some(Decimal::new(4500, 2)),
            stock: Some(3),
            galleries: vec![],
        }
    }

    #[test]
    fn test_filled_form_is_valid() {
        assert!(filled_form().validate().is_ok());
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = ProductForm::default().validate().unwrap_err();
        assert_eq!(errors.errors.len(), 7);
        assert!(errors
            .errors
            .iter()
            .all(|e| e.kind == FieldErrorKind::Required));
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let mut form = filled_form();
        form.brand = "   ".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.errors.len(), 1);
        assert!(errors.has(FormField::Brand));
    }

    #[test]
    fn test_negative_numbers_rejected() {
        let mut form = filled_form();
        form.price = Some(Decimal::new(-1, 0));
        form.stock = Some(-4);

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.errors.len(), 2);
        assert!(errors
            .errors
            .iter()
            .all(|e| e.kind == FieldErrorKind::Negative));
    }

    #[test]
    fn test_zero_price_and_stock_allowed() {
        let mut form = filled_form();
        form.price = Some(Decimal::ZERO);
        form.stock = Some(0);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_patch_uses_list_price() {
        let product = Product {
            id: 5,
            name: "Kettle".to_string(),
            summary: "Fast boil".to_string(),
            category: "Kitchen".to_string(),
            description: "1.7l kettle".to_string(),
            brand: "Boil".to_string(),
            price: Decimal::new(30, 0),
            before_discount: Some(Decimal::new(40, 0)),
            stock: 2,
            galleries: vec![],
        };

        let form = ProductForm::from_product(&product);
        assert_eq!(form.id, Some(5));
        assert_eq!(form.price, Some(Decimal::new(40, 0)));

        let rebuilt = form.to_product(5).unwrap();
        assert_eq!(rebuilt.price, Decimal::new(40, 0));
        assert!(rebuilt.before_discount.is_none());
    }

    #[test]
    fn test_product_validation_matches_form_rules() {
        let mut product = filled_form().to_product(1).unwrap();
        assert!(product.validate().is_ok());

        product.price = Decimal::new(-1, 0);
        product.category = " ".to_string();
        let errors = product.validate().unwrap_err();
        assert!(errors.has(FormField::Price));
        assert!(errors.has(FormField::Category));
        assert_eq!(errors.errors.len(), 2);
    }
}
