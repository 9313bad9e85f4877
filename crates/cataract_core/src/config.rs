//! Application settings loaded from a TOML file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default upload limit: 5 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Maximum box an uploaded image is shrunk into for the preview.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    pub max_width: f64,
    pub max_height: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            max_width: 500.0,
            max_height: 400.0,
        }
    }
}

/// Upload limits checked before any decoding happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadLimits {
    pub max_bytes: u64,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub max_upload_bytes: u64,
    pub preview: Bounds,
    /// Simulated processing latency before a result is shown.
    pub analysis_delay_ms: u64,
    /// Overlay diameter as a fraction of the shorter preview side.
    pub overlay_fraction: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            preview: Bounds::default(),
            analysis_delay_ms: 2000,
            overlay_fraction: 0.3,
        }
    }
}

impl AppConfig {
    pub fn upload_limits(&self) -> UploadLimits {
        UploadLimits {
            max_bytes: self.max_upload_bytes,
        }
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let cfg: AppConfig = toml::from_str(raw).context("invalid configuration")?;
        if cfg.preview.max_width <= 0.0 || cfg.preview.max_height <= 0.0 {
            anyhow::bail!(
                "preview bounds must be positive, got {}x{}",
                cfg.preview.max_width,
                cfg.preview.max_height
            );
        }
        if !(0.0..=1.0).contains(&cfg.overlay_fraction) {
            anyhow::bail!(
                "overlay_fraction must lie in [0, 1], got {}",
                cfg.overlay_fraction
            );
        }
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("cannot read config {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("in {}", path.display()))
    }

    /// Loads the config at `path`, falling back to defaults when the file is
    /// absent or unusable.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(cfg) => {
                tracing::info!("Loaded config from {}", path.display());
                cfg
            }
            Err(e) => {
                tracing::warn!("Ignoring config: {e:#}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() -> Result<()> {
        let cfg = AppConfig::from_toml("analysis_delay_ms = 50\n[preview]\nmax_width = 320\n")?;
        assert_eq!(cfg.analysis_delay(), Duration::from_millis(50));
        assert_eq!(cfg.preview.max_width, 320.0);
        assert_eq!(cfg.preview.max_height, 400.0);
        assert_eq!(cfg.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
        Ok(())
    }

    #[test]
    fn rejects_out_of_range_overlay_fraction() {
        assert!(AppConfig::from_toml("overlay_fraction = 1.5").is_err());
        assert!(AppConfig::from_toml("[preview]\nmax_height = 0").is_err());
    }

    #[test]
    fn load_or_default_handles_missing_and_malformed_files() -> Result<()> {
        let dir = tempdir()?;
        let missing = dir.path().join("absent.toml");
        assert_eq!(AppConfig::load_or_default(&missing), AppConfig::default());

        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "max_upload_bytes = \"lots\"")?;
        assert_eq!(AppConfig::load_or_default(&broken), AppConfig::default());

        let good = dir.path().join("good.toml");
        fs::write(&good, "max_upload_bytes = 1024")?;
        assert_eq!(AppConfig::load_or_default(&good).upload_limits().max_bytes, 1024);
        Ok(())
    }
}
