//! Configuration domain

mod app_config;

pub use app_config::{AppConfig, FfmpegConfig, DEFAULT_ARTIFACT_NAME, DEFAULT_LOG_FILTER};
