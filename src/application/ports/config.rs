//! Configuration port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::domain::origin::AllowedDomains;

/// Port for configuration storage
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load configuration from storage.
    ///
    /// # Returns
    /// The loaded config (fields are None when nothing has been stored)
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Save configuration to storage.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Get the configuration file path.
    fn path(&self) -> PathBuf;

    /// Check if configuration has been stored.
    fn exists(&self) -> bool;

    /// Read the allowlist, seeding the defaults when it is missing or the
    /// stored configuration cannot be parsed.
    ///
    /// Never fails: a seed that cannot be written is still used for this
    /// process.
    async fn load_allowed_domains(&self) -> AllowedDomains {
        let base = match self.load().await {
            Ok(config) => {
                if let Some(domains) = config.allowed_domains() {
                    return domains;
                }
                config
            }
            Err(e) => {
                tracing::warn!(error = %e, "Stored configuration unreadable, reseeding defaults");
                AppConfig::empty()
            }
        };

        let domains = AllowedDomains::defaults();
        let seeded = AppConfig {
            allowed_domains: Some(domains.clone().into_vec()),
            ..base
        };
        match self.save(&seeded).await {
            Ok(()) => tracing::info!(path = %self.path().display(), "Seeded default allowed domains"),
            Err(e) => tracing::warn!(error = %e, "Failed to persist default allowed domains"),
        }
        domains
    }
}
