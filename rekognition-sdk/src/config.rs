use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Duration};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SdkConfig {
    #[serde(default = "SdkConfig::default_endpoint")]
    pub endpoint: String,
    #[serde(default = "SdkConfig::default_region")]
    pub region: String,
    #[serde(default = "SdkConfig::default_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            endpoint: Self::default_endpoint(),
            region: Self::default_region(),
            request_timeout_ms: Self::default_timeout_ms(),
        }
    }
}

impl SdkConfig {
    pub fn default_endpoint() -> String {
        "https://rekognition.us-east-1.amazonaws.com".to_string()
    }

    pub fn default_region() -> String {
        "us-east-1".to_string()
    }

    pub const fn default_timeout_ms() -> u64 {
        30_000
    }

    /// Regional endpoint, `https://rekognition.<region>.amazonaws.com`.
    pub fn for_region(region: impl Into<String>) -> Self {
        let region = region.into();
        Self {
            endpoint: format!("https://rekognition.{region}.amazonaws.com"),
            region,
            request_timeout_ms: Self::default_timeout_ms(),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
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

    /// Defaults overridden by `REKOGNITION_REGION`, `REKOGNITION_ENDPOINT`
    /// and `REKOGNITION_TIMEOUT_MS`. A region without an explicit endpoint
    /// selects that region's endpoint.
    pub fn from_env() -> Result<Self> {
        let mut cfg = match std::env::var("REKOGNITION_REGION") {
            Ok(region) => Self::for_region(region),
            Err(_) => Self::default(),
        };
        if let Ok(v) = std::env::var("REKOGNITION_ENDPOINT") {
            cfg.endpoint = v;
        }
        if let Ok(v) = std::env::var("REKOGNITION_TIMEOUT_MS") {
            cfg.request_timeout_ms = v
                .trim()
                .parse()
                .map_err(|_| Error::config(format!("invalid REKOGNITION_TIMEOUT_MS: {v}")))?;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://")) {
            return Err(Error::config(format!(
                "endpoint must be an http(s) URL: {}",
                self.endpoint
            )));
        }
        if self.region.trim().is_empty() {
            return Err(Error::config("region must not be empty"));
        }
        if self.request_timeout_ms == 0 {
            return Err(Error::config("request_timeout_ms must be positive"));
        }
        Ok(())
    }
}
