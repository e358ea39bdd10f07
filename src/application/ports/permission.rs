//! Permission store port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::origin::Origin;
use crate::domain::permission::{Decision, PermissionStatus};

/// Permission store errors
#[derive(Debug, Clone, Error)]
pub enum PermissionStoreError {
    #[error("Failed to read permissions: {0}")]
    ReadFailed(String),

    #[error("Failed to parse permissions: {0}")]
    ParseFailed(String),

    #[error("Failed to write permissions: {0}")]
    WriteFailed(String),
}

/// Port for remembered per-origin decisions
#[async_trait]
pub trait PermissionStore: Send + Sync {
    /// Look up the exact origin for a capability.
    ///
    /// Returns `Unknown` when nothing has been recorded.
    async fn test_decision(
        &self,
        origin: &Origin,
        capability: &str,
    ) -> Result<PermissionStatus, PermissionStoreError>;

    /// Record (or replace) the decision for an origin and capability.
    async fn record_decision(
        &self,
        origin: &Origin,
        capability: &str,
        decision: Decision,
    ) -> Result<(), PermissionStoreError>;
}

#[async_trait]
impl<S: PermissionStore + ?Sized> PermissionStore for std::sync::Arc<S> {
    async fn test_decision(
        &self,
        origin: &Origin,
        capability: &str,
    ) -> Result<PermissionStatus, PermissionStoreError> {
        self.as_ref().test_decision(origin, capability).await
    }

    async fn record_decision(
        &self,
        origin: &Origin,
        capability: &str,
        decision: Decision,
    ) -> Result<(), PermissionStoreError> {
        self.as_ref().record_decision(origin, capability, decision).await
    }
}
