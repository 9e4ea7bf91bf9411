// web_app/error.rs - Error types for the catalog client and the editor

use thiserror::Error;

use crate::web_app::model::ProductId;

/// Form field that can fail validation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Summary,
    Category,
    Description,
    Brand,
    Price,
    Stock,
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Backend field names, so messages line up with what the form binds to
        match self {
            FormField::Name => write!(f, "productName"),
            FormField::Summary => write!(f, "productSummary"),
            FormField::Category => write!(f, "productCategory"),
            FormField::Description => write!(f, "productDesc"),
            FormField::Brand => write!(f, "productBrand"),
            FormField::Price => write!(f, "productPrice"),
            FormField::Stock => write!(f, "productStock"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldErrorKind {
    Required,
    Negative,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub kind: FieldErrorKind,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            FieldErrorKind::Required => write!(f, "{} is required", self.field),
            FieldErrorKind::Negative => write!(f, "{} must not be negative", self.field),
        }
    }
}

/// Every field that failed validation, in form order
#[derive(Clone, Debug, Default, PartialEq, Eq, Error)]
#[error("invalid product form: {}", join_errors(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn push(&mut self, field: FormField, kind: FieldErrorKind) {
        self.errors.push(FieldError { field, kind });
    }

    /// True when `field` has at least one error
    pub fn has(&self, field: FormField) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

/// Errors raised while talking to the shop backend or driving the editor
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Connection, timeout or body decoding failure inside reqwest
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("product {0} not found")]
    NotFound(ProductId),

    /// Backend answered 2xx but with a message other than the expected one
    #[error("request rejected: {0}")]
    Rejected(String),

    #[error(transparent)]
    Invalid(#[from] ValidationErrors),

    /// Operation not allowed in the editor's current state
    #[error("editor is {actual}, expected {expected}")]
    InvalidState {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CatalogError {
    /// True for failures caught before any request left the client
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            CatalogError::Invalid(_) | CatalogError::InvalidState { .. }
        )
    }
}
