//! Media access facade: authorization in front of the capture session

use std::sync::Arc;

use crate::domain::capture::{ArtifactHandle, CaptureProperties, CaptureState, RenderContext};

use super::authorize::AuthorizationGate;
use super::capture::{CaptureError, CaptureService};
use super::ports::{
    ArtifactAllocator, CaptureDevice, CaptureObserver, ConfigStore, PermissionPrompt,
    PermissionStore,
};

/// Entry point for in-process callers.
///
/// Holds one capture session, so one `MediaAccess` can record from one
/// surface at a time. Hosts keep a single instance per process; recording
/// from several tabs at once is not supported.
pub struct MediaAccess<C, P, U, D, A>
where
    C: ConfigStore,
    P: PermissionStore,
    U: PermissionPrompt,
    D: CaptureDevice,
    A: ArtifactAllocator,
{
    gate: AuthorizationGate<C, P, U>,
    capture: CaptureService<D, A>,
}

impl<C, P, U, D, A> MediaAccess<C, P, U, D, A>
where
    C: ConfigStore,
    P: PermissionStore,
    U: PermissionPrompt,
    D: CaptureDevice,
    A: ArtifactAllocator,
{
    pub fn new(gate: AuthorizationGate<C, P, U>, capture: CaptureService<D, A>) -> Self {
        Self { gate, capture }
    }

    pub fn gate(&self) -> &AuthorizationGate<C, P, U> {
        &self.gate
    }

    pub fn capture(&self) -> &CaptureService<D, A> {
        &self.capture
    }

    /// Decide whether `location` may capture
    pub async fn authorize(&self, context: &RenderContext, location: &str) -> bool {
        self.gate.authorize(context, location).await
    }

    /// Authorize `location`, then start capturing on `context`.
    ///
    /// Returns `Ok(None)` when access was denied or dismissed; nothing is
    /// started in that case.
    pub async fn request_capture(
        &self,
        context: &RenderContext,
        location: &str,
        properties: &CaptureProperties,
        observer: Option<Arc<dyn CaptureObserver>>,
    ) -> Result<Option<ArtifactHandle>, CaptureError> {
        let resolution = self.gate.resolve(context, location).await;
        if !resolution.is_allowed() {
            tracing::info!(location, ?resolution, "Capture request denied");
            return Ok(None);
        }

        self.capture
            .start(properties, context, observer)
            .await
            .map(Some)
    }

    /// Start capturing for a caller that has already been authorized
    pub async fn start(
        &self,
        properties: &CaptureProperties,
        context: &RenderContext,
        observer: Option<Arc<dyn CaptureObserver>>,
    ) -> Result<ArtifactHandle, CaptureError> {
        self.capture.start(properties, context, observer).await
    }

    /// Stop the capture in flight
    pub async fn stop(&self) -> Result<(), CaptureError> {
        self.capture.stop().await
    }

    pub async fn state(&self) -> CaptureState {
        self.capture.state().await
    }
}
