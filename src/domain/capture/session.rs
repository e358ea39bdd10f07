//! Capture session state machine

use std::fmt;
use thiserror::Error;

use super::ArtifactHandle;

/// Capture session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaptureState {
    #[default]
    Idle,
    Recording,
}

impl CaptureState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Recording => "recording",
        }
    }
}

impl fmt::Display for CaptureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Illegal session transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Recording already in progress")]
    AlreadyRecording,

    #[error("No recording in progress")]
    NotRecording,
}

/// Capture session entity.
///
/// State machine:
///   IDLE -> RECORDING (begin)
///   RECORDING -> IDLE (finish, yields the pending artifact)
///
/// Only one capture may be in flight per session.
#[derive(Debug, Default)]
pub struct CaptureSession {
    state: CaptureState,
    pending: Option<ArtifactHandle>,
}

impl CaptureSession {
    /// Create a new session in idle state
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn is_recording(&self) -> bool {
        self.state == CaptureState::Recording
    }

    /// The artifact of the capture in flight
    pub fn pending(&self) -> Option<&ArtifactHandle> {
        self.pending.as_ref()
    }

    /// Fail unless idle
    pub fn ensure_idle(&self) -> Result<(), SessionError> {
        if self.is_recording() {
            return Err(SessionError::AlreadyRecording);
        }
        Ok(())
    }

    /// Transition from IDLE to RECORDING
    pub fn begin(&mut self, artifact: ArtifactHandle) -> Result<(), SessionError> {
        self.ensure_idle()?;
        self.state = CaptureState::Recording;
        self.pending = Some(artifact);
        Ok(())
    }

    /// Transition from RECORDING to IDLE, taking the pending artifact
    pub fn finish(&mut self) -> Result<Option<ArtifactHandle>, SessionError> {
        if !self.is_recording() {
            return Err(SessionError::NotRecording);
        }
        self.state = CaptureState::Idle;
        Ok(self.pending.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact() -> ArtifactHandle {
        ArtifactHandle::new("/tmp/rainbow.ogg")
    }

    #[test]
    fn new_session_is_idle() {
        let session = CaptureSession::new();
        assert_eq!(session.state(), CaptureState::Idle);
        assert!(session.pending().is_none());
    }

    #[test]
    fn begin_from_idle() {
        let mut session = CaptureSession::new();
        session.begin(artifact()).unwrap();
        assert!(session.is_recording());
        assert_eq!(session.pending(), Some(&artifact()));
    }

    #[test]
    fn begin_while_recording_fails() {
        let mut session = CaptureSession::new();
        session.begin(artifact()).unwrap();

        let err = session.begin(ArtifactHandle::new("/tmp/other.ogg")).unwrap_err();
        assert_eq!(err, SessionError::AlreadyRecording);
        // The first artifact is untouched
        assert_eq!(session.pending(), Some(&artifact()));
    }

    #[test]
    fn finish_from_idle_fails() {
        let mut session = CaptureSession::new();
        assert_eq!(session.finish().unwrap_err(), SessionError::NotRecording);
    }

    #[test]
    fn finish_yields_artifact_once() {
        let mut session = CaptureSession::new();
        session.begin(artifact()).unwrap();

        assert_eq!(session.finish().unwrap(), Some(artifact()));
        assert_eq!(session.state(), CaptureState::Idle);
        assert!(session.pending().is_none());
        assert_eq!(session.finish().unwrap_err(), SessionError::NotRecording);
    }

    #[test]
    fn full_cycle_twice() {
        let mut session = CaptureSession::new();
        for _ in 0..2 {
            session.begin(artifact()).unwrap();
            session.finish().unwrap();
        }
        assert_eq!(session.state(), CaptureState::Idle);
    }

    #[test]
    fn state_display() {
        assert_eq!(CaptureState::Idle.to_string(), "idle");
        assert_eq!(CaptureState::Recording.to_string(), "recording");
    }

    #[test]
    fn error_display() {
        assert!(SessionError::AlreadyRecording.to_string().contains("already"));
        assert!(SessionError::NotRecording.to_string().contains("No recording"));
    }
}
