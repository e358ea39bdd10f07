//! Capture session use case

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;

use crate::domain::capture::{
    ArtifactHandle, CaptureProperties, CaptureSession, CaptureState, RenderContext, SessionError,
};

use super::ports::{
    AllocationError, ArtifactAllocator, CaptureDevice, CaptureEvent, CaptureObserver, DeviceError,
    NoOpObserver,
};

/// Errors from the capture use case
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Recording already in progress")]
    AlreadyRecording,

    #[error("No recording in progress")]
    NotRecording,

    #[error("Capture device failed: {0}")]
    Device(#[from] DeviceError),

    #[error("Could not allocate capture artifact: {0}")]
    Allocation(#[from] AllocationError),
}

impl From<SessionError> for CaptureError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::AlreadyRecording => Self::AlreadyRecording,
            SessionError::NotRecording => Self::NotRecording,
        }
    }
}

/// Session state plus the observer of the capture in flight
struct Active {
    session: CaptureSession,
    observer: Arc<dyn CaptureObserver>,
}

/// Runs at most one capture at a time.
///
/// Performs no authorization; callers must have cleared the origin first.
pub struct CaptureService<D, A>
where
    D: CaptureDevice,
    A: ArtifactAllocator,
{
    device: D,
    allocator: A,
    active: Mutex<Active>,
}

impl<D, A> CaptureService<D, A>
where
    D: CaptureDevice,
    A: ArtifactAllocator,
{
    pub fn new(device: D, allocator: A) -> Self {
        Self {
            device,
            allocator,
            active: Mutex::new(Active {
                session: CaptureSession::new(),
                observer: Arc::new(NoOpObserver),
            }),
        }
    }

    /// Get current session state
    pub async fn state(&self) -> CaptureState {
        self.active.lock().await.session.state()
    }

    pub async fn is_recording(&self) -> bool {
        self.active.lock().await.session.is_recording()
    }

    /// Sink for the device's own events; callers only ever see "finished"
    fn device_events() -> Arc<dyn CaptureObserver> {
        Arc::new(|event: &CaptureEvent| {
            tracing::debug!(event = event.tag(), artifact = %event.artifact(), "Device event");
        })
    }

    /// Start capturing into a freshly allocated artifact.
    ///
    /// Returns the placeholder handle; its contents are final only after
    /// [`stop`](Self::stop). Without an observer, events are dropped.
    pub async fn start(
        &self,
        properties: &CaptureProperties,
        context: &RenderContext,
        observer: Option<Arc<dyn CaptureObserver>>,
    ) -> Result<ArtifactHandle, CaptureError> {
        let mut active = self.active.lock().await;
        active.session.ensure_idle()?;

        let path = self.allocator.allocate().await?;
        let artifact = ArtifactHandle::new(path);
        let observer = observer.unwrap_or_else(|| Arc::new(NoOpObserver));

        let bag = properties.to_bag();
        if let Err(e) = self
            .device
            .record_to_file(&bag, context, artifact.path(), Self::device_events())
            .await
        {
            // Nothing was written; drop the empty placeholder
            if let Err(rm) = tokio::fs::remove_file(artifact.path()).await {
                tracing::warn!(artifact = %artifact, error = %rm, "Failed to remove capture placeholder");
            }
            return Err(e.into());
        }

        active.session.begin(artifact.clone())?;
        active.observer = observer;

        tracing::info!(%context, artifact = %artifact, "Capture started");
        Ok(artifact)
    }

    /// Stop the capture in flight and hand the artifact to the observer.
    ///
    /// The observer sees "finished" after the device has stopped and after
    /// the session lock is released.
    pub async fn stop(&self) -> Result<(), CaptureError> {
        let (artifact, observer) = {
            let mut active = self.active.lock().await;
            if !active.session.is_recording() {
                return Err(CaptureError::NotRecording);
            }

            match self.device.stop().await {
                Ok(()) => {}
                Err(DeviceError::NotCapturing) => {
                    // Device already lost the capture; nothing left to retry
                    tracing::warn!("Device holds no capture, abandoning session");
                    active.session.finish()?;
                    active.observer = Arc::new(NoOpObserver);
                    return Err(DeviceError::NotCapturing.into());
                }
                Err(e) => return Err(e.into()),
            }

            let artifact = active.session.finish()?;
            let observer = std::mem::replace(&mut active.observer, Arc::new(NoOpObserver));
            (artifact, observer)
        };

        match artifact {
            Some(artifact) => {
                tracing::info!(artifact = %artifact, "Capture finished");
                observer.on_event(&CaptureEvent::Finished(artifact));
            }
            None => tracing::info!("Capture finished without artifact"),
        }
        Ok(())
    }
}
