// fixtures/mod.rs - Reusable test data and scripted collaborators
//
// Shared by the unit tests, the integration tests under tests/ and the mock
// backend binary, so every one of them works against the same catalog.
//
// - products.rs: the sample catalog
// - fakes.rs: a ProductApi fake and recording collaborators for the editor

pub mod fakes;
pub mod products;

use crate::web_app::model::Product;

/// A named set of products a backend can be seeded with
pub trait SampleData {
    /// Products in the order the backend returns them
    fn products() -> Vec<Product>;
}
