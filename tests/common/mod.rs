// common/mod.rs - Shared setup for the service and editor tests
//
// Every test gets a fresh fake backend seeded with the sample catalog, so
// tests never see each other's updates or deletes.

#![allow(dead_code)]

use std::sync::Arc;

use shop_admin::fixtures::fakes::{CountingRefresher, FakeProductApi, RecordingNotifier, ScriptedConfirmation};
use shop_admin::fixtures::products::sample_products;
use shop_admin::web_app::config::ApiConfig;
use shop_admin::web_app::services::{CatalogService, ProductEditor};

/// Catalog service over `api` with the default page size
pub fn catalog_over(api: Arc<FakeProductApi>) -> Arc<CatalogService> {
    Arc::new(CatalogService::new(api, 10))
}

/// Fake backend with the sample catalog
pub fn sample_api() -> Arc<FakeProductApi> {
    Arc::new(FakeProductApi::new(sample_products()))
}

/// An editor together with every collaborator it was built from
pub struct EditorHarness {
    pub api: Arc<FakeProductApi>,
    pub catalog: Arc<CatalogService>,
    pub parent: Arc<CountingRefresher>,
    pub notifier: Arc<RecordingNotifier>,
    pub confirmation: Arc<ScriptedConfirmation>,
    pub editor: ProductEditor,
}

/// Editor over `api` whose confirmation dialog always answers `confirm`
pub fn editor_harness(api: FakeProductApi, confirm: bool) -> EditorHarness {
    let api = Arc::new(api);
    let catalog = catalog_over(api.clone());
    let parent = Arc::new(CountingRefresher::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let confirmation = Arc::new(ScriptedConfirmation::new(confirm));

    let editor = ProductEditor::new(
        catalog.clone(),
        parent.clone(),
        notifier.clone(),
        confirmation.clone(),
    )
    .with_config(&ApiConfig::new("http://localhost:5000/"));

    EditorHarness {
        api,
        catalog,
        parent,
        notifier,
        confirmation,
        editor,
    }
}
