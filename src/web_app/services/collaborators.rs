// web_app/services/collaborators.rs - Outside parties the editor talks to
//
// The editor never renders anything itself. Notifications, the confirmation
// dialog and the list view that needs reloading are all behind these traits.

use async_trait::async_trait;

use crate::web_app::error::CatalogError;

/// Whoever owns the product list and can reload it
#[async_trait]
pub trait ListRefresher: Send + Sync {
    async fn refresh_list(&self) -> Result<(), CatalogError>;
}

/// Toast/alert channel for user-facing outcomes
pub trait Notifier: Send + Sync {
    fn success(&self, title: &str, message: &str);
    fn error(&self, title: &str, message: &str);
}

/// Question shown before a destructive action
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: &'static str,
    pub text: &'static str,
    pub confirm_label: &'static str,
}

pub const DELETE_PROMPT: ConfirmPrompt = ConfirmPrompt {
    title: "Are you sure?",
    text: "Confirm action",
    confirm_label: "Yes",
};

/// Yes/no dialog
#[async_trait]
pub trait Confirmation: Send + Sync {
    /// Resolves once the user answered, true means go ahead
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool;
}

/// Notifier that only writes to the log
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, title: &str, message: &str) {
        tracing::info!("{}: {}", title, message);
    }

    fn error(&self, title: &str, message: &str) {
        tracing::error!("{}: {}", title, message);
    }
}

/// Confirmation that answers the same way every time
#[derive(Clone, Copy, Debug)]
pub struct FixedAnswer(pub bool);

#[async_trait]
impl Confirmation for FixedAnswer {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        tracing::debug!("Auto-answering '{}' with {}", prompt.title, self.0);
        self.0
    }
}
