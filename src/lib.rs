//! Rainbow - origin-gated camera and microphone capture
//!
//! This crate decides which web origins may record from the user's camera and
//! microphone, remembers those decisions, and drives a native recorder that
//! writes the capture to a scratch file handed back to the caller.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Origins, permission decisions, capture properties and the
//!   capture session state machine
//! - **Application**: The authorization gate, the capture service and the
//!   port interfaces (traits) they depend on
//! - **Infrastructure**: Adapter implementations (TOML config, JSON permission
//!   file, desktop notification prompt, FFmpeg, scratch files)
//!
//! # Example
//!
//! ```no_run
//! use rainbow::domain::{AppConfig, CaptureProperties, RenderContext};
//! use rainbow::infrastructure::create_media_access;
//!
//! # async fn run() -> Result<(), rainbow::application::CaptureError> {
//! let config = AppConfig::defaults();
//! rainbow::logging::init(&config);
//!
//! let access = create_media_access(&config);
//! let tab = RenderContext::new("tab-1");
//! if let Some(artifact) = access
//!     .request_capture(&tab, "http://localhost/demo", &CaptureProperties::audio_video(), None)
//!     .await?
//! {
//!     println!("recording into {}", artifact);
//!     access.stop().await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod logging;
