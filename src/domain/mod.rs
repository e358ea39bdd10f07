//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod capture;
pub mod config;
pub mod error;
pub mod origin;
pub mod permission;

// Re-export common types
pub use capture::{
    ArtifactHandle, CaptureProperties, CaptureSession, CaptureState, PropertyBag, PropertyValue,
    RenderContext, SessionError,
};
pub use config::AppConfig;
pub use error::*;
pub use origin::{AllowedDomains, Origin};
pub use permission::{Decision, PermissionStatus, MEDIA_CAPABILITY};
