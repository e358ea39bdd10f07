//! Capture domain: request properties, artifacts and the session state machine

mod artifact;
mod properties;
mod session;

pub use artifact::{ArtifactHandle, RenderContext};
pub use properties::{CaptureProperties, PropertyBag, PropertyValue};
pub use session::{CaptureSession, CaptureState, SessionError};
