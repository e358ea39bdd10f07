//! Shared test doubles for the integration tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use rainbow::application::ports::{
    CaptureDevice, CaptureEvent, CaptureObserver, DeviceError, PermissionPrompt, PromptError,
    PromptOutcome, PromptRequest,
};
use rainbow::domain::{PropertyBag, RenderContext};

/// Prompt that plays back scripted outcomes, dismissing once the script runs out
#[derive(Default)]
pub struct ScriptedPrompt {
    outcomes: Mutex<VecDeque<PromptOutcome>>,
    asked: AtomicUsize,
}

impl ScriptedPrompt {
    pub fn new(outcomes: impl IntoIterator<Item = PromptOutcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            asked: AtomicUsize::new(0),
        }
    }

    pub fn times_asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PermissionPrompt for ScriptedPrompt {
    async fn ask(&self, _request: &PromptRequest) -> Result<PromptOutcome, PromptError> {
        self.asked.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(PromptOutcome::Dismissed))
    }
}

/// Device that records calls and writes a marker into the destination on stop
#[derive(Default)]
pub struct FakeDevice {
    destination: Mutex<Option<std::path::PathBuf>>,
    capturing: AtomicBool,
    pub stops: AtomicUsize,
}

impl FakeDevice {
    pub fn is_capturing(&self) -> bool {
        self.capturing.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CaptureDevice for FakeDevice {
    async fn record_to_file(
        &self,
        _properties: &PropertyBag,
        _context: &RenderContext,
        destination: &Path,
        _events: Arc<dyn CaptureObserver>,
    ) -> Result<(), DeviceError> {
        *self.destination.lock().unwrap() = Some(destination.to_path_buf());
        self.capturing.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn stop(&self) -> Result<(), DeviceError> {
        let destination = self
            .destination
            .lock()
            .unwrap()
            .take()
            .ok_or(DeviceError::NotCapturing)?;
        std::fs::write(&destination, b"OggS")
            .map_err(|e| DeviceError::StopFailed(e.to_string()))?;
        self.capturing.store(false, Ordering::SeqCst);
        self.stops.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Observer collecting every event it sees
pub fn collecting_observer() -> (Arc<Mutex<Vec<CaptureEvent>>>, Arc<dyn CaptureObserver>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let observer: Arc<dyn CaptureObserver> =
        Arc::new(move |event: &CaptureEvent| sink.lock().unwrap().push(event.clone()));
    (events, observer)
}

/// Executable shell script standing in for ffmpeg; the output path is its last argument
#[cfg(unix)]
pub fn fake_ffmpeg(dir: &Path, body: &str) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("ffmpeg");
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}
