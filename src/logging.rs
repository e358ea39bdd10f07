//! Tracing subscriber setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::domain::config::AppConfig;

/// Install a fmt subscriber.
///
/// `RUST_LOG` wins over the configured filter. Returns false when a global
/// subscriber was already installed, which is left in place.
pub fn init(config: &AppConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_filter_or_default()))
        .unwrap_or_else(|_| EnvFilter::new(crate::domain::config::DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_harmless() {
        let config = AppConfig::defaults();
        let _ = init(&config);
        assert!(!init(&config));
    }

    #[test]
    fn bad_filter_falls_back() {
        let config = AppConfig {
            log_filter: Some("rainbow=[[[".to_string()),
            ..Default::default()
        };
        // Must not panic
        let _ = init(&config);
    }
}
