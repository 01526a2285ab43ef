//! Host-provided configuration
//!
//! The hosting application constructs [`ApiSettings`] once and hands it to
//! the analysis host. The core reads the target API version only through
//! feature-gate checks; it never interprets version strings beyond equality.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use thiserror::Error;

/// Problems with host-supplied configuration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("API version string is empty")]
    EmptyVersion,
    #[error("API version string {0:?} contains whitespace")]
    InvalidVersion(String),
}

/// Target API version plus per-feature overrides.
///
/// Version strings are opaque tokens ("1.8.5", "2.0"); availability is set
/// membership against versions registered per feature, not semver ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    api_version: SmolStr,
    toggles: FxHashMap<SmolStr, bool>,
}

impl ApiSettings {
    pub fn new(api_version: &str) -> Result<Self, SettingsError> {
        if api_version.is_empty() {
            return Err(SettingsError::EmptyVersion);
        }
        if api_version.contains(char::is_whitespace) {
            return Err(SettingsError::InvalidVersion(api_version.to_string()));
        }
        Ok(Self {
            api_version: SmolStr::new(api_version),
            toggles: FxHashMap::default(),
        })
    }

    /// The opaque target version token
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Force a feature on or off regardless of version gating
    pub fn set_feature_toggle(&mut self, feature: &str, enabled: bool) {
        self.toggles.insert(SmolStr::new(feature), enabled);
    }

    pub fn feature_toggle(&self, feature: &str) -> Option<bool> {
        self.toggles.get(feature).copied()
    }
}

impl Default for ApiSettings {
    /// Targets the latest known API version with no overrides
    fn default() -> Self {
        Self {
            api_version: SmolStr::new_static("2.0"),
            toggles: FxHashMap::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_versions() {
        assert_eq!(ApiSettings::new(""), Err(SettingsError::EmptyVersion));
        assert!(matches!(
            ApiSettings::new("1. 0"),
            Err(SettingsError::InvalidVersion(_))
        ));
    }

    #[test]
    fn test_toggles() {
        let mut settings = ApiSettings::new("1.8.5").unwrap();
        assert_eq!(settings.feature_toggle("db.transaction"), None);
        settings.set_feature_toggle("db.transaction", false);
        assert_eq!(settings.feature_toggle("db.transaction"), Some(false));
    }
}
