//! `tracing` subscriber setup for binaries and tests that embed the SDK.

use crate::config::CoreConfig;
use crate::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Installs a global fmt subscriber filtered by `cfg.log_level`.
///
/// Fails if the filter does not parse or a global subscriber is already set.
pub fn init(cfg: &CoreConfig) -> Result<()> {
    let filter = build_filter(cfg)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(cfg.log_ansi)
        .with_target(true)
        .try_init()
        .map_err(|e| Error::config(format!("logging init failed: {e}")))?;
    tracing::debug!(level = %cfg.log_level, "logging initialised");
    Ok(())
}

pub fn build_filter(cfg: &CoreConfig) -> Result<EnvFilter> {
    cfg.env_filter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_accepts_targets() {
        let cfg = CoreConfig {
            log_level: "warn,rekognition_sdk=debug".into(),
            log_ansi: false,
        };
        assert!(build_filter(&cfg).is_ok());

        let bare_target = CoreConfig {
            log_level: "warn,rekognition_sdk".into(),
            log_ansi: false,
        };
        assert!(bare_target.validate().is_ok());
        assert!(build_filter(&bare_target).is_ok());
    }

    #[test]
    fn filter_rejects_unknown_level() {
        let cfg = CoreConfig {
            log_level: "rekognition_sdk=loud".into(),
            log_ansi: false,
        };
        assert!(build_filter(&cfg).is_err());
    }
}
