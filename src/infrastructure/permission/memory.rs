//! In-memory permission store

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{PermissionStore, PermissionStoreError};
use crate::domain::origin::Origin;
use crate::domain::permission::{Decision, PermissionStatus};

/// Permission store that forgets everything when dropped
#[derive(Debug, Default)]
pub struct MemoryPermissionStore {
    entries: RwLock<HashMap<(Origin, String), Decision>>,
}

impl MemoryPermissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of remembered decisions
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl PermissionStore for MemoryPermissionStore {
    async fn test_decision(
        &self,
        origin: &Origin,
        capability: &str,
    ) -> Result<PermissionStatus, PermissionStoreError> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(&(origin.clone(), capability.to_string()))
            .copied()
            .into())
    }

    async fn record_decision(
        &self,
        origin: &Origin,
        capability: &str,
        decision: Decision,
    ) -> Result<(), PermissionStoreError> {
        self.entries
            .write()
            .await
            .insert((origin.clone(), capability.to_string()), decision);
        Ok(())
    }
}
