use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing_subscriber::EnvFilter;

/// Process-level settings shared by every crate in the workspace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoreConfig {
    /// A `tracing` filter directive, e.g. `info` or `rekognition_sdk=debug`.
    #[serde(default = "CoreConfig::default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_ansi: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: Self::default_log_level(),
            log_ansi: false,
        }
    }
}

impl CoreConfig {
    pub fn default_log_level() -> String {
        "info".into()
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let cfg: Self =
            toml::from_str(&data).map_err(|e| Error::config(format!("toml parse error: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let data = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("toml serialize error: {e}")))?;
        fs::write(path, data)?;
        Ok(())
    }

    pub fn from_env() -> Result<Self> {
        let mut cfg = Self::default();
        if let Ok(v) = std::env::var("REKOGNITION_LOG_LEVEL") {
            cfg.log_level = v;
        }
        if let Ok(v) = std::env::var("REKOGNITION_LOG_ANSI") {
            cfg.log_ansi = v == "1" || v.eq_ignore_ascii_case("true");
        }
        cfg.validate()?;
        Ok(cfg)
    }

    /// Accepts anything `EnvFilter` does: a bare level, a bare target, or a
    /// comma separated list of `target=level` directives.
    pub fn validate(&self) -> Result<()> {
        self.env_filter().map(|_| ())
    }

    pub fn env_filter(&self) -> Result<EnvFilter> {
        if self.log_level.trim().is_empty() {
            return Err(Error::config("log_level must not be empty"));
        }
        EnvFilter::try_new(&self.log_level)
            .map_err(|e| Error::config(format!("invalid log_level {:?}: {e}", self.log_level)))
    }
}
