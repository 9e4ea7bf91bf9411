// web_app/services/editor.rs - Product detail editor
//
// State machine:
//
//   Idle -> Loading -> Editing -> Submitting -> Editing
//              |
//              +-> Failed            (product could not be loaded)
//
// Submitting always falls back to Editing, on success and on error, and the
// form keeps whatever the user typed. Nothing is changed optimistically.

use std::sync::Arc;

use super::catalog::CatalogService;
use super::collaborators::{Confirmation, ListRefresher, Notifier, DELETE_PROMPT};
use super::image_drop::{self, DropEntry};
use crate::web_app::api::ImageUpload;
use crate::web_app::config::ApiConfig;
use crate::web_app::error::CatalogError;
use crate::web_app::model::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Idle,
    Loading,
    Editing,
    Submitting,
    Failed,
}

impl EditorState {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditorState::Idle => "idle",
            EditorState::Loading => "loading",
            EditorState::Editing => "editing",
            EditorState::Submitting => "submitting",
            EditorState::Failed => "failed",
        }
    }
}

impl std::fmt::Display for EditorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a delete request ended when no error occurred
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined the confirmation, nothing was sent
    Cancelled,
}

pub struct ProductEditor {
    catalog: Arc<CatalogService>,
    parent: Arc<dyn ListRefresher>,
    notifier: Arc<dyn Notifier>,
    confirmation: Arc<dyn Confirmation>,
    assets: Option<ApiConfig>,

    state: EditorState,
    form: ProductForm,
    product: Option<Product>,
    submitted: bool,
    image_path: String,
    image: Option<ImageUpload>,
    last_error: Option<String>,
}

impl ProductEditor {
    /// Idle editor; `parent` is asked to reload its list after a save or delete
    pub fn new(
        catalog: Arc<CatalogService>,
        parent: Arc<dyn ListRefresher>,
        notifier: Arc<dyn Notifier>,
        confirmation: Arc<dyn Confirmation>,
    ) -> Self {
        Self {
            catalog,
            parent,
            notifier,
            confirmation,
            assets: None,
            state: EditorState::Idle,
            form: ProductForm::default(),
            product: None,
            submitted: false,
            image_path: String::new(),
            image: None,
            last_error: None,
        }
    }

    /// Resolve gallery image paths against the configured asset URL for the preview
    pub fn with_config(mut self, config: &ApiConfig) -> Self {
        self.assets = Some(config.clone());
        self
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    /// Form the view binds its inputs to
    pub fn form_mut(&mut self) -> &mut ProductForm {
        &mut self.form
    }

    /// Product as last loaded or saved
    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    /// Set once a submit was attempted, cleared by a successful save
    pub fn submitted(&self) -> bool {
        self.submitted
    }

    /// Preview source: asset URL of the cover image or a data URL of a dropped file
    pub fn image_path(&self) -> &str {
        &self.image_path
    }

    /// File dropped since the product was loaded
    pub fn pending_image(&self) -> Option<&ImageUpload> {
        self.image.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn require(&self, expected: EditorState) -> Result<(), CatalogError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(CatalogError::InvalidState {
                expected: expected.as_str(),
                actual: self.state.as_str(),
            })
        }
    }

    fn current_id(&self) -> Result<ProductId, CatalogError> {
        self.form
            .id
            .or_else(|| self.product.as_ref().map(|p| p.id))
            .ok_or(CatalogError::InvalidState {
                expected: "loaded",
                actual: self.state.as_str(),
            })
    }

    fn fail(&mut self, title: &str, err: &CatalogError) {
        let message = err.to_string();
        self.notifier.error(title, &message);
        self.last_error = Some(message);
    }

    /// Fetch product `id` and populate the form
    ///
    /// A failed fetch leaves the editor in `Failed` and returns the error.
    pub async fn load(&mut self, id: ProductId) -> Result<(), CatalogError> {
        tracing::debug!("Editor loading product {}", id);
        self.state = EditorState::Loading;
        self.last_error = None;

        match self.catalog.fetch_by_id(id).await {
            Ok(product) => {
                self.form.patch(&product);
                self.image = None;
                self.image_path = match (product.cover_image(), &self.assets) {
                    (Some(cover), Some(config)) => config.asset(cover),
                    (Some(cover), None) => cover.to_string(),
                    (None, _) => String::new(),
                };
                self.product = Some(product);
                self.submitted = false;
                self.state = EditorState::Editing;
                Ok(())
            }
            Err(e) => {
                self.state = EditorState::Failed;
                self.fail("Error!", &e);
                Err(e)
            }
        }
    }

    /// Validate the form and save it
    ///
    /// An invalid form is rejected before any request is made. On success the
    /// parent list is refreshed.
    pub async fn submit(&mut self) -> Result<(), CatalogError> {
        self.require(EditorState::Editing)?;
        self.submitted = true;

        let id = self.current_id()?;
        let product = match self.form.to_product(id) {
            Ok(product) => product,
            Err(errors) => {
                tracing::debug!("Product {} not submitted: {}", id, errors);
                return Err(errors.into());
            }
        };

        self.state = EditorState::Submitting;
        let result = self.catalog.update(&product).await;
        self.state = EditorState::Editing;

        match result {
            Ok(message) => {
                tracing::info!("Product {} saved", id);
                self.submitted = false;
                self.last_error = None;
                self.product = Some(product);
                if let Err(e) = self.parent.refresh_list().await {
                    tracing::warn!("List refresh after saving product {} failed: {}", id, e);
                }
                self.notifier.success("Success", &message);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Saving product {} failed: {}", id, e);
                self.fail("Error!", &e);
                Err(e)
            }
        }
    }

    /// Ask for confirmation, then delete the product
    pub async fn confirm_delete(&mut self) -> Result<DeleteOutcome, CatalogError> {
        self.require(EditorState::Editing)?;
        let id = self.current_id()?;

        if !self.confirmation.confirm(&DELETE_PROMPT).await {
            tracing::debug!("Delete of product {} cancelled", id);
            return Ok(DeleteOutcome::Cancelled);
        }

        self.state = EditorState::Submitting;
        let result = self.catalog.delete(id).await;
        self.state = EditorState::Editing;

        match result {
            Ok(_) => {
                tracing::info!("Product {} deleted", id);
                self.last_error = None;
                self.notifier.success("Deleted!", "Product deleted!");
                if let Err(e) = self.parent.refresh_list().await {
                    tracing::warn!("List refresh after deleting product {} failed: {}", id, e);
                }
                Ok(DeleteOutcome::Deleted)
            }
            Err(e) => {
                tracing::error!("Deleting product {} failed: {}", id, e);
                self.fail("Error!", &e);
                Err(e)
            }
        }
    }

    /// Preview the first dropped entry if it is a file
    ///
    /// Returns false and leaves `image_path` alone for folders and non-file items.
    pub fn drop_files(&mut self, entries: &[DropEntry]) -> bool {
        let Some(file) = image_drop::first_file(entries) else {
            return false;
        };

        self.image_path = image_drop::data_url(file);
        self.image = Some(file.clone());
        true
    }
}
