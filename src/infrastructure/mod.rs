//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the filesystem, FFmpeg and the desktop notification server.

pub mod artifact;
pub mod capture;
pub mod config;
pub mod permission;
pub mod prompt;

// Re-export adapters
pub use artifact::TempDirAllocator;
pub use capture::FfmpegCaptureDevice;
pub use config::XdgConfigStore;
pub use permission::{JsonPermissionStore, MemoryPermissionStore};
pub use prompt::{create_prompt, DismissingPrompt, NotifyRustPrompt};

use crate::application::ports::PermissionPrompt;
use crate::application::{AuthorizationGate, CaptureService, MediaAccess};
use crate::domain::config::AppConfig;

/// `MediaAccess` wired with the default adapters
pub type DefaultMediaAccess = MediaAccess<
    XdgConfigStore,
    JsonPermissionStore,
    Box<dyn PermissionPrompt>,
    FfmpegCaptureDevice,
    TempDirAllocator,
>;

/// Wire the default adapters for this platform
pub fn create_media_access(config: &AppConfig) -> DefaultMediaAccess {
    let gate = AuthorizationGate::new(
        XdgConfigStore::new(),
        JsonPermissionStore::new(),
        create_prompt(),
    );
    let capture = CaptureService::new(
        FfmpegCaptureDevice::from_config(config),
        TempDirAllocator::from_config(config),
    );
    MediaAccess::new(gate, capture)
}
