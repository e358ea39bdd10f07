//! Artifact allocation port interface

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

/// Allocation errors
#[derive(Debug, Clone, Error)]
pub enum AllocationError {
    #[error("Scratch directory unavailable: {0}")]
    DirectoryUnavailable(String),

    #[error("Failed to create artifact file: {0}")]
    CreateFailed(String),

    #[error("No unique artifact name left for \"{0}\"")]
    Exhausted(String),
}

/// Port for allocating capture destinations
#[async_trait]
pub trait ArtifactAllocator: Send + Sync {
    /// Create a new, previously nonexistent file and return its path.
    async fn allocate(&self) -> Result<PathBuf, AllocationError>;
}
