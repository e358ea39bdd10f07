//! Permission prompt adapters
//!
//! Desktop notifications with action buttons where the platform supports
//! them, and an always-dismissing prompt for headless hosts.

mod dismissing;
mod notify_rust;

pub use dismissing::DismissingPrompt;
pub use notify_rust::NotifyRustPrompt;

use crate::application::ports::PermissionPrompt;

/// Create the default prompt for the current platform
pub fn create_prompt() -> Box<dyn PermissionPrompt> {
    if NotifyRustPrompt::supported() {
        Box::new(NotifyRustPrompt::new())
    } else {
        Box::new(DismissingPrompt::new())
    }
}
