//! Desktop notification prompt using notify-rust
//!
//! Action buttons need a freedesktop notification server, so this prompt
//! only answers on Linux and the BSDs.

use async_trait::async_trait;

use crate::application::ports::{PermissionPrompt, PromptError, PromptOutcome, PromptRequest};

/// Action identifier for the primary button
const PRIMARY_ACTION: &str = "primary";
/// Action identifier prefix for secondary buttons
const SECONDARY_ACTION: &str = "secondary";
/// Reported by the notification server when the prompt is closed
#[cfg_attr(not(all(unix, not(target_os = "macos"))), allow(dead_code))]
const CLOSED_ACTION: &str = "__closed";

/// Prompt shown as an actionable desktop notification
pub struct NotifyRustPrompt {
    /// Application name for notifications
    app_name: String,
    /// Icon used when the request carries none
    default_icon: String,
}

impl NotifyRustPrompt {
    pub fn new() -> Self {
        Self {
            app_name: "Rainbow".to_string(),
            default_icon: "camera-web".to_string(),
        }
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            ..Self::new()
        }
    }

    /// Whether actionable notifications exist on this platform
    pub const fn supported() -> bool {
        cfg!(all(unix, not(target_os = "macos")))
    }

    /// Button identifiers and labels, primary first
    fn actions(request: &PromptRequest) -> Vec<(String, String)> {
        let mut actions = vec![(PRIMARY_ACTION.to_string(), request.primary.label.clone())];
        for (i, action) in request.secondary.iter().enumerate() {
            actions.push((format!("{}-{}", SECONDARY_ACTION, i), action.label.clone()));
        }
        actions
    }

    /// Map the invoked action back onto an outcome
    fn outcome_for(action: &str) -> PromptOutcome {
        if action == PRIMARY_ACTION {
            PromptOutcome::Accepted
        } else if action.starts_with(SECONDARY_ACTION) {
            PromptOutcome::Declined
        } else {
            PromptOutcome::Dismissed
        }
    }
}

impl Default for NotifyRustPrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PermissionPrompt for NotifyRustPrompt {
    #[cfg(all(unix, not(target_os = "macos")))]
    async fn ask(&self, request: &PromptRequest) -> Result<PromptOutcome, PromptError> {
        let app_name = self.app_name.clone();
        let summary = format!("{} wants your camera", request.origin);
        let body = request.message.clone();
        let icon = request
            .icon
            .clone()
            .unwrap_or_else(|| self.default_icon.clone());
        let actions = Self::actions(request);

        // Waiting for the user blocks, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            let mut notification = notify_rust::Notification::new();
            notification
                .appname(&app_name)
                .summary(&summary)
                .body(&body)
                .icon(&icon)
                .timeout(notify_rust::Timeout::Never);
            for (id, label) in &actions {
                notification.action(id, label);
            }

            let handle = notification
                .show()
                .map_err(|e| PromptError::ShowFailed(e.to_string()))?;

            let mut outcome = PromptOutcome::Dismissed;
            handle.wait_for_action(|action: &str| {
                if action != CLOSED_ACTION {
                    outcome = Self::outcome_for(action);
                }
            });
            Ok(outcome)
        })
        .await
        .map_err(|e| PromptError::ShowFailed(format!("Task join error: {}", e)))?
    }

    #[cfg(not(all(unix, not(target_os = "macos"))))]
    async fn ask(&self, _request: &PromptRequest) -> Result<PromptOutcome, PromptError> {
        Err(PromptError::Unavailable(
            "actionable notifications are not supported on this platform".to_string(),
        ))
    }
}
