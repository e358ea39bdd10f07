//! Capture artifacts and render contexts

use std::fmt;
use std::path::{Path, PathBuf};

/// Handle to the file a capture is written into.
///
/// Handed out as a placeholder when capture starts; the bytes behind it are
/// only final once the session has been stopped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactHandle {
    path: PathBuf,
}

impl ArtifactHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name component, if the path has one
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

impl fmt::Display for ArtifactHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// The rendering surface a request originates from (a browser tab, a
/// canvas). Capture is bound to it and prompts are anchored on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderContext {
    surface: String,
}

impl RenderContext {
    pub fn new(surface: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
        }
    }

    pub fn surface(&self) -> &str {
        &self.surface
    }
}

impl fmt::Display for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_exposes_path_and_name() {
        let handle = ArtifactHandle::new("/tmp/rainbow-2.ogg");
        assert_eq!(handle.path(), Path::new("/tmp/rainbow-2.ogg"));
        assert_eq!(handle.file_name(), Some("rainbow-2.ogg"));
        assert_eq!(handle.into_path(), PathBuf::from("/tmp/rainbow-2.ogg"));
    }

    #[test]
    fn render_context_display() {
        let ctx = RenderContext::new("tab-3");
        assert_eq!(ctx.to_string(), "tab-3");
    }
}
