//! JSON file permission store adapter

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;

use crate::application::ports::{PermissionStore, PermissionStoreError};
use crate::domain::origin::Origin;
use crate::domain::permission::{Decision, PermissionStatus};

/// origin -> capability -> decision
type PermissionTable = BTreeMap<String, BTreeMap<String, Decision>>;

/// Permission store persisted as a JSON document.
///
/// The file is read once, on first use; every recorded decision rewrites it.
pub struct JsonPermissionStore {
    path: PathBuf,
    table: Mutex<Option<PermissionTable>>,
}

impl JsonPermissionStore {
    /// Create a store at `$XDG_CONFIG_HOME/rainbow/permissions.json`
    pub fn new() -> Self {
        Self::with_path(crate::infrastructure::config::config_dir().join("permissions.json"))
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            table: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    async fn read_table(&self) -> Result<PermissionTable, PermissionStoreError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(PermissionTable::new()),
            Err(e) => return Err(PermissionStoreError::ReadFailed(e.to_string())),
        };

        match serde_json::from_str(&content) {
            Ok(table) => Ok(table),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Discarding unreadable permissions file"
                );
                Ok(PermissionTable::new())
            }
        }
    }

    async fn write_table(&self, table: &PermissionTable) -> Result<(), PermissionStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| PermissionStoreError::WriteFailed(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(table)
            .map_err(|e| PermissionStoreError::WriteFailed(e.to_string()))?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| PermissionStoreError::WriteFailed(e.to_string()))
    }
}

impl Default for JsonPermissionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PermissionStore for JsonPermissionStore {
    async fn test_decision(
        &self,
        origin: &Origin,
        capability: &str,
    ) -> Result<PermissionStatus, PermissionStoreError> {
        let mut guard = self.table.lock().await;
        if guard.is_none() {
            *guard = Some(self.read_table().await?);
        }

        let status = guard
            .as_ref()
            .and_then(|table| table.get(origin.as_str()))
            .and_then(|caps| caps.get(capability))
            .copied()
            .into();
        Ok(status)
    }

    async fn record_decision(
        &self,
        origin: &Origin,
        capability: &str,
        decision: Decision,
    ) -> Result<(), PermissionStoreError> {
        let mut guard = self.table.lock().await;
        let mut table = match guard.take() {
            Some(table) => table,
            None => self.read_table().await?,
        };

        table
            .entry(origin.to_string())
            .or_default()
            .insert(capability.to_string(), decision);

        let written = self.write_table(&table).await;
        *guard = Some(table);
        written
    }
}
