// lib.rs - Root of the shop_admin library
//
// `web_app` holds the catalog client, the services and the mock backend.
// `fixtures` holds the sample catalog and scripted fakes used by the tests
// and the mock backend binary.

pub mod fixtures;
pub mod web_app;
