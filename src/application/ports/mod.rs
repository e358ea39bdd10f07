//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod artifact;
pub mod config;
pub mod device;
pub mod permission;
pub mod prompt;

// Re-export common types
pub use artifact::{AllocationError, ArtifactAllocator};
pub use config::ConfigStore;
pub use device::{CaptureDevice, CaptureEvent, CaptureObserver, DeviceError, NoOpObserver};
pub use permission::{PermissionStore, PermissionStoreError};
pub use prompt::{
    PermissionPrompt, PromptAction, PromptError, PromptOptions, PromptOutcome, PromptRequest,
};
