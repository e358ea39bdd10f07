//! Native capture device port interface

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::capture::{ArtifactHandle, PropertyBag, RenderContext};

/// Capture device errors
#[derive(Debug, Clone, Error)]
pub enum DeviceError {
    #[error("FFmpeg not found. Please install FFmpeg")]
    FfmpegNotFound,

    #[error("Failed to start capture: {0}")]
    StartFailed(String),

    #[error("Failed to stop capture: {0}")]
    StopFailed(String),

    #[error("No capture in progress on device")]
    NotCapturing,
}

/// Events delivered to a capture observer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureEvent {
    /// The device began writing to the destination
    Started(ArtifactHandle),
    /// Capture ended; the artifact is final and now owned by the observer
    Finished(ArtifactHandle),
}

impl CaptureEvent {
    /// Event tag as seen by observers
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Started(_) => "started",
            Self::Finished(_) => "finished",
        }
    }

    pub fn artifact(&self) -> &ArtifactHandle {
        match self {
            Self::Started(a) | Self::Finished(a) => a,
        }
    }
}

/// Receiver of capture lifecycle events
pub trait CaptureObserver: Send + Sync {
    fn on_event(&self, event: &CaptureEvent);
}

impl<F> CaptureObserver for F
where
    F: Fn(&CaptureEvent) + Send + Sync,
{
    fn on_event(&self, event: &CaptureEvent) {
        self(event)
    }
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl CaptureObserver for NoOpObserver {
    fn on_event(&self, _event: &CaptureEvent) {}
}

/// Port for the native recorder.
///
/// `events` is a sink owned by the capture session, never the caller's
/// observer. Devices must not emit `Finished`.
#[async_trait]
pub trait CaptureDevice: Send + Sync {
    /// Begin capturing into `destination`.
    async fn record_to_file(
        &self,
        properties: &PropertyBag,
        context: &RenderContext,
        destination: &Path,
        events: Arc<dyn CaptureObserver>,
    ) -> Result<(), DeviceError>;

    /// Stop capturing and finalize the destination file.
    ///
    /// Returns `NotCapturing` once the device no longer holds a capture.
    async fn stop(&self) -> Result<(), DeviceError>;
}

#[async_trait]
impl<T: CaptureDevice + ?Sized> CaptureDevice for Arc<T> {
    async fn record_to_file(
        &self,
        properties: &PropertyBag,
        context: &RenderContext,
        destination: &Path,
        events: Arc<dyn CaptureObserver>,
    ) -> Result<(), DeviceError> {
        self.as_ref()
            .record_to_file(properties, context, destination, events)
            .await
    }

    async fn stop(&self) -> Result<(), DeviceError> {
        self.as_ref().stop().await
    }
}
