//! Version gating of the builtin tables

use crate::helpers::SHARED_REGISTRY;
use magicscript::{ApiSettings, SettingsError};
use rstest::rstest;

#[rstest]
#[case("db.transaction", "2.0", true)]
#[case("db.transaction", "1.8.5", true)]
#[case("db.transaction", "1.0", false)]
#[case("db.cache", "1.6.0", true)]
#[case("db.cache", "1.5.0", false)]
#[case("http.patch", "2.0", true)]
#[case("http.patch", "1.8.5", false)]
#[case("response.download", "1.8.5", true)]
#[case("response.download", "1.6.0", false)]
fn builtin_gates_follow_the_configured_version(
    #[case] feature: &str,
    #[case] version: &str,
    #[case] expected: bool,
) {
    let settings = ApiSettings::new(version).unwrap();
    assert_eq!(
        SHARED_REGISTRY.is_feature_available(feature, &settings),
        expected,
        "{} under {}",
        feature,
        version
    );
}

#[test]
fn ungated_methods_are_always_available() {
    let oldest = ApiSettings::new("1.0").unwrap();
    assert!(SHARED_REGISTRY.is_feature_available("db.select", &oldest));
    assert!(SHARED_REGISTRY.is_feature_available("http.get", &oldest));
}

#[test]
fn host_toggles_override_version_gates_both_ways() {
    let mut settings = ApiSettings::new("1.0").unwrap();
    settings.set_feature_toggle("db.transaction", true);
    assert!(SHARED_REGISTRY.is_feature_available("db.transaction", &settings));

    let mut settings = ApiSettings::new("2.0").unwrap();
    settings.set_feature_toggle("http.patch", false);
    assert!(!SHARED_REGISTRY.is_feature_available("http.patch", &settings));
}

#[test]
fn default_settings_use_the_current_version() {
    let settings = ApiSettings::default();
    assert_eq!(settings.api_version(), "2.0");
    assert!(SHARED_REGISTRY.is_feature_available("db.transaction", &settings));
}

#[test]
fn settings_reject_malformed_versions() {
    assert!(matches!(
        ApiSettings::new(""),
        Err(SettingsError::EmptyVersion)
    ));
    assert!(matches!(
        ApiSettings::new("not a version"),
        Err(SettingsError::InvalidVersion(_))
    ));
}
