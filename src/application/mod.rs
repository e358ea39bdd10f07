//! Application layer - Use cases and port interfaces
//!
//! Contains the authorization and capture operations and trait
//! definitions for external system interactions.

pub mod access;
pub mod authorize;
pub mod capture;
pub mod ports;

// Re-export use cases
pub use access::MediaAccess;
pub use authorize::{AuthorizationGate, Resolution, ACCESS_PROMPT_ID, ACCESS_PROMPT_MESSAGE};
pub use capture::{CaptureError, CaptureService};
