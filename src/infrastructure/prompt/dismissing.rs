//! Prompt that never gets an answer
//!
//! Used where no interactive surface exists. Every unknown origin is denied
//! for the call and asked again next time.

use async_trait::async_trait;

use crate::application::ports::{PermissionPrompt, PromptError, PromptOutcome, PromptRequest};

pub struct DismissingPrompt;

impl DismissingPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DismissingPrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PermissionPrompt for DismissingPrompt {
    async fn ask(&self, request: &PromptRequest) -> Result<PromptOutcome, PromptError> {
        tracing::debug!(origin = %request.origin, "No prompt surface, dismissing");
        Ok(PromptOutcome::Dismissed)
    }
}
