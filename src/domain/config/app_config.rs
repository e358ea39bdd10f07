//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::origin::AllowedDomains;

/// Default artifact file name; uniqueness suffixes are inserted before the extension
pub const DEFAULT_ARTIFACT_NAME: &str = "rainbow.ogg";

/// Default tracing filter when neither RUST_LOG nor config sets one
pub const DEFAULT_LOG_FILTER: &str = "rainbow=info";

/// FFmpeg capture device configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FfmpegConfig {
    /// Program to run, looked up on PATH unless absolute
    pub binary: Option<String>,
    pub video_input: Option<String>,
    pub audio_input: Option<String>,
}

/// Application configuration.
/// All fields are optional so partial config files load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub allowed_domains: Option<Vec<String>>,
    pub artifact_name: Option<String>,
    pub scratch_dir: Option<PathBuf>,
    pub log_filter: Option<String>,
    pub ffmpeg: Option<FfmpegConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            allowed_domains: Some(AllowedDomains::defaults().into_vec()),
            artifact_name: Some(DEFAULT_ARTIFACT_NAME.to_string()),
            scratch_dir: None,
            log_filter: Some(DEFAULT_LOG_FILTER.to_string()),
            ffmpeg: Some(FfmpegConfig {
                binary: Some("ffmpeg".to_string()),
                video_input: Some("/dev/video0".to_string()),
                audio_input: Some("default".to_string()),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Configured allowlist, if one has been seeded
    pub fn allowed_domains(&self) -> Option<AllowedDomains> {
        self.allowed_domains.clone().map(AllowedDomains::new)
    }

    /// Get the artifact file name, or "rainbow.ogg" if not set/blank
    pub fn artifact_name_or_default(&self) -> &str {
        self.artifact_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_ARTIFACT_NAME)
    }

    /// Get the scratch directory, or the system temp dir if not set
    pub fn scratch_dir_or_default(&self) -> PathBuf {
        self.scratch_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    /// Get the log filter, or "rainbow=info" if not set
    pub fn log_filter_or_default(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Get the ffmpeg program, or "ffmpeg" if not set
    pub fn ffmpeg_binary_or_default(&self) -> &str {
        self.ffmpeg
            .as_ref()
            .and_then(|f| f.binary.as_deref())
            .unwrap_or("ffmpeg")
    }

    /// Get the ffmpeg video input, or "/dev/video0" if not set
    pub fn video_input_or_default(&self) -> &str {
        self.ffmpeg
            .as_ref()
            .and_then(|f| f.video_input.as_deref())
            .unwrap_or("/dev/video0")
    }

    /// Get the ffmpeg audio input, or "default" if not set
    pub fn audio_input_or_default(&self) -> &str {
        self.ffmpeg
            .as_ref()
            .and_then(|f| f.audio_input.as_deref())
            .unwrap_or("default")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert_eq!(
            config.allowed_domains,
            Some(vec![
                "http://localhost".to_string(),
                "http://mozilla.github.com".to_string()
            ])
        );
        assert_eq!(config.artifact_name_or_default(), "rainbow.ogg");
        assert_eq!(config.log_filter_or_default(), "rainbow=info");
        assert_eq!(config.ffmpeg_binary_or_default(), "ffmpeg");
        assert_eq!(config.video_input_or_default(), "/dev/video0");
        assert_eq!(config.audio_input_or_default(), "default");
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.allowed_domains.is_none());
        assert!(config.allowed_domains().is_none());
        assert!(config.artifact_name.is_none());
        assert!(config.scratch_dir.is_none());
        assert!(config.ffmpeg.is_none());
    }

    #[test]
    fn blank_artifact_name_uses_default() {
        let config = AppConfig {
            artifact_name: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.artifact_name_or_default(), "rainbow.ogg");
    }

    #[test]
    fn scratch_dir_defaults_to_temp_dir() {
        assert_eq!(AppConfig::empty().scratch_dir_or_default(), std::env::temp_dir());

        let config = AppConfig {
            scratch_dir: Some(PathBuf::from("/var/tmp/rainbow")),
            ..Default::default()
        };
        assert_eq!(config.scratch_dir_or_default(), PathBuf::from("/var/tmp/rainbow"));
    }

    #[test]
    fn allowed_domains_deduplicates() {
        let config = AppConfig {
            allowed_domains: Some(vec![
                "http://localhost".to_string(),
                "http://localhost".to_string(),
            ]),
            ..Default::default()
        };
        assert_eq!(config.allowed_domains().unwrap().len(), 1);
    }
}
