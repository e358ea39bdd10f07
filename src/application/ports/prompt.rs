//! Interactive permission prompt port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::origin::Origin;

/// Prompt surface errors
#[derive(Debug, Clone, Error)]
pub enum PromptError {
    #[error("Prompt surface unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to show prompt: {0}")]
    ShowFailed(String),
}

/// A button on the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptAction {
    pub label: String,
    pub access_key: char,
}

impl PromptAction {
    pub fn new(label: impl Into<String>, access_key: char) -> Self {
        Self {
            label: label.into(),
            access_key,
        }
    }
}

/// Display options for the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptOptions {
    /// Number of page changes the prompt survives
    pub persistence: u32,
    /// Keep the prompt open while its anchor is visible
    pub persist_while_visible: bool,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            persistence: 1,
            persist_while_visible: true,
        }
    }
}

/// Everything a prompt surface needs to ask the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    /// Surface the prompt is anchored on
    pub surface: String,
    /// Stable prompt identifier
    pub id: String,
    pub origin: Origin,
    pub message: String,
    pub icon: Option<String>,
    pub primary: PromptAction,
    pub secondary: Vec<PromptAction>,
    pub options: PromptOptions,
}

/// How the user left the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptOutcome {
    /// The primary action was chosen
    Accepted,
    /// A secondary action was chosen
    Declined,
    /// Closed without choosing
    Dismissed,
}

/// Port for asking the user a yes/no question
#[async_trait]
pub trait PermissionPrompt: Send + Sync {
    /// Show the prompt and wait for the user to act on it.
    ///
    /// Dismissal must be reported as `Dismissed`, distinct from either button.
    async fn ask(&self, request: &PromptRequest) -> Result<PromptOutcome, PromptError>;
}

/// Blanket implementation for boxed prompt types
#[async_trait]
impl PermissionPrompt for Box<dyn PermissionPrompt> {
    async fn ask(&self, request: &PromptRequest) -> Result<PromptOutcome, PromptError> {
        self.as_ref().ask(request).await
    }
}

#[async_trait]
impl<T: PermissionPrompt + ?Sized> PermissionPrompt for std::sync::Arc<T> {
    async fn ask(&self, request: &PromptRequest) -> Result<PromptOutcome, PromptError> {
        self.as_ref().ask(request).await
    }
}
