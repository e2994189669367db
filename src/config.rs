//! Giglink configuration loaded from `giglink.toml`.
//!
//! The [`MarketConfig`] struct holds every tunable parameter of the
//! workflow core. Fields missing from the file fall back to sensible
//! defaults, so an absent config file is perfectly valid.

use serde::Deserialize;
use std::path::Path;

use crate::error::Result;

/// Top-level configuration loaded from `giglink.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketConfig {
    /// Minutes an issued OTP stays valid before verification fails.
    #[serde(default = "default_otp_expiry_minutes")]
    pub otp_expiry_minutes: i64,

    /// Number of digits in a generated OTP code.
    #[serde(default = "default_otp_digits")]
    pub otp_digits: usize,
}

// Default OTP validity window: 10 minutes.
fn default_otp_expiry_minutes() -> i64 {
    10
}

// Default OTP length: 6 digits.
fn default_otp_digits() -> usize {
    6
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            otp_expiry_minutes: default_otp_expiry_minutes(),
            otp_digits: default_otp_digits(),
        }
    }
}

impl MarketConfig {
    /// Load configuration from `giglink.toml` in the current directory,
    /// falling back to defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("giglink.toml"))
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Ok(toml::from_str::<MarketConfig>(&contents)?)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = MarketConfig::default();
        assert_eq!(config.otp_expiry_minutes, 10);
        assert_eq!(config.otp_digits, 6);
    }

    #[test]
    fn deserialize_partial_toml() {
        let toml_str = r#"
            otp_expiry_minutes = 5
        "#;
        let config: MarketConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.otp_expiry_minutes, 5);
        assert_eq!(config.otp_digits, 6);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("giglink.toml");
        std::fs::write(&path, "otp_digits = 4\n").unwrap();

        let config = MarketConfig::load_from(&path).unwrap();
        assert_eq!(config.otp_digits, 4);
        assert_eq!(config.otp_expiry_minutes, 10);
    }

    #[test]
    fn load_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = MarketConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.otp_expiry_minutes, 10);
    }
}
