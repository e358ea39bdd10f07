//! Scratch-directory artifact allocator

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::{self, OpenOptions};

use crate::application::ports::{AllocationError, ArtifactAllocator};
use crate::domain::config::{AppConfig, DEFAULT_ARTIFACT_NAME};

/// Attempts before giving up on finding a free name
const MAX_ATTEMPTS: u32 = 10_000;

/// Allocates `name.ext`, then `name-1.ext`, `name-2.ext`, ... in a scratch
/// directory, creating each file exclusively so no existing file is reused.
pub struct TempDirAllocator {
    dir: PathBuf,
    file_name: String,
}

impl TempDirAllocator {
    /// Allocate `rainbow.ogg` variants in the system temp dir
    pub fn new() -> Self {
        Self::with_dir(std::env::temp_dir())
    }

    /// Allocate in a custom directory
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            file_name: DEFAULT_ARTIFACT_NAME.to_string(),
        }
    }

    /// Use a different base file name
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// Create from the scratch dir and artifact name in the config
    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_dir(config.scratch_dir_or_default()).file_name(config.artifact_name_or_default())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Candidate name for the given attempt; attempt 0 is the bare name
    fn candidate(&self, attempt: u32) -> String {
        if attempt == 0 {
            return self.file_name.clone();
        }

        match self.file_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => format!("{}-{}.{}", stem, attempt, ext),
            _ => format!("{}-{}", self.file_name, attempt),
        }
    }

    async fn create_exclusive(path: &Path) -> std::io::Result<()> {
        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        options.mode(0o666);
        options.open(path).await.map(|_| ())
    }
}

impl Default for TempDirAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArtifactAllocator for TempDirAllocator {
    async fn allocate(&self) -> Result<PathBuf, AllocationError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| AllocationError::DirectoryUnavailable(e.to_string()))?;

        for attempt in 0..MAX_ATTEMPTS {
            let path = self.dir.join(self.candidate(attempt));
            match Self::create_exclusive(&path).await {
                Ok(()) => {
                    tracing::debug!(path = %path.display(), "Allocated capture artifact");
                    return Ok(path);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(AllocationError::CreateFailed(e.to_string())),
            }
        }

        Err(AllocationError::Exhausted(self.file_name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_insert_counter_before_extension() {
        let allocator = TempDirAllocator::with_dir("/tmp");
        assert_eq!(allocator.candidate(0), "rainbow.ogg");
        assert_eq!(allocator.candidate(1), "rainbow-1.ogg");
        assert_eq!(allocator.candidate(12), "rainbow-12.ogg");
    }

    #[test]
    fn candidates_without_extension() {
        let allocator = TempDirAllocator::with_dir("/tmp").file_name("capture");
        assert_eq!(allocator.candidate(2), "capture-2");

        let dotfile = TempDirAllocator::with_dir("/tmp").file_name(".capture");
        assert_eq!(dotfile.candidate(1), ".capture-1");
    }

    #[tokio::test]
    async fn allocates_unique_files() {
        let dir = tempfile::tempdir().unwrap();
        let allocator = TempDirAllocator::with_dir(dir.path());

        let first = allocator.allocate().await.unwrap();
        let second = allocator.allocate().await.unwrap();

        assert_eq!(first, dir.path().join("rainbow.ogg"));
        assert_eq!(second, dir.path().join("rainbow-1.ogg"));
        assert!(first.exists());
        assert!(second.exists());
    }

    #[tokio::test]
    async fn skips_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("rainbow.ogg"), b"old capture").unwrap();
        let allocator = TempDirAllocator::with_dir(dir.path());

        let path = allocator.allocate().await.unwrap();
        assert_eq!(path, dir.path().join("rainbow-1.ogg"));
        // The existing file is untouched
        assert_eq!(
            std::fs::read(dir.path().join("rainbow.ogg")).unwrap(),
            b"old capture"
        );
    }

    #[tokio::test]
    async fn creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("captures").join("today");
        let allocator = TempDirAllocator::with_dir(&nested).file_name("clip.ogg");

        let path = allocator.allocate().await.unwrap();
        assert_eq!(path, nested.join("clip.ogg"));
    }

    #[test]
    fn from_config_uses_settings() {
        let config = AppConfig {
            scratch_dir: Some(PathBuf::from("/var/tmp/cams")),
            artifact_name: Some("cam.ogg".to_string()),
            ..Default::default()
        };
        let allocator = TempDirAllocator::from_config(&config);
        assert_eq!(allocator.dir(), Path::new("/var/tmp/cams"));
        assert_eq!(allocator.candidate(0), "cam.ogg");
    }
}
