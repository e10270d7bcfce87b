use super::*;

#[test]
fn defaults_match_page_contract() {
    let config = ThemeConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.attribute, "data-theme");
    assert_eq!(config.toggle_id, "themeToggle");
    assert_eq!(config.icon_id, "themeIcon");
    assert_eq!(config.light_icon, "bi bi-sun-fill");
    assert_eq!(config.dark_icon, "bi bi-moon-fill");
    assert_eq!(config.fallback_delay_ms, 100);
}

#[test]
fn icon_for_uses_configured_classes() {
    let config = ThemeConfig {
        light_icon: "icon icon-day".into(),
        dark_icon: "icon icon-night".into(),
        ..ThemeConfig::default()
    };
    assert_eq!(config.icon_for(ThemePreference::Light), "icon icon-day");
    assert_eq!(config.icon_for(ThemePreference::Dark), "icon icon-night");
}

#[test]
fn from_json_overrides_only_named_fields() {
    let raw = r#"{"storage_key":"site_theme","fallback_delay_ms":0}"#;
    let config = ThemeConfig::from_json(raw).unwrap();
    assert_eq!(config.storage_key, "site_theme");
    assert_eq!(config.fallback_delay_ms, 0);
    assert_eq!(config.toggle_id, "themeToggle");
    assert_eq!(config.dark_icon, "bi bi-moon-fill");
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(ThemeConfig::from_json("{}").unwrap(), ThemeConfig::default());
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = ThemeConfig::from_json("{\"toggle_id\": 7}").unwrap_err();
    assert!(matches!(err, ThemeError::Config(_)));
    assert!(err.to_string().starts_with("config parse failed"));
}
