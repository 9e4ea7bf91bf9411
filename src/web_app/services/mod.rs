// web_app/services/mod.rs - Catalog query service and detail editor
//
// - catalog.rs: criteria, list/detail requests, published list and facets
// - editor.rs: load/edit/save/delete state machine for one product
// - collaborators.rs: notifier, confirmation and list-refresh seams
// - image_drop.rs: data URL previews of dropped files

pub mod catalog;
pub mod collaborators;
pub mod editor;
pub mod image_drop;

pub use catalog::{apply_facet_totals, CatalogService, ListSnapshot};
pub use collaborators::{
    ConfirmPrompt, Confirmation, FixedAnswer, ListRefresher, Notifier, TracingNotifier,
};
pub use editor::{DeleteOutcome, EditorState, ProductEditor};
pub use image_drop::DropEntry;
