use super::*;

#[test]
fn defaults_match_site_timings() {
    let config = EffectConfig::default();
    assert_eq!(config.clone_lifetime_ms, 1000);
    assert_eq!(config.particle_lifetime_ms, 900);
    assert_eq!(config.burst_size, 8);
    assert_eq!(config.palette.len(), 4);
    assert_eq!(LoadingConfig::default().min_visible_ms, 300);
}

#[test]
fn from_json_fills_missing_fields_with_defaults() {
    let config = EffectConfig::from_json(r#"{ "clone_lifetime_ms": 1500 }"#).expect("valid config");
    assert_eq!(config.clone_lifetime_ms, 1500);
    assert_eq!(config.particle_lifetime_ms, 900);
    assert_eq!(config.burst_size, 8);
}

#[test]
fn from_json_rejects_empty_palette() {
    let err = EffectConfig::from_json(r#"{ "palette": [] }"#).expect_err("empty palette");
    assert!(matches!(err, ConfigError::EmptyPalette));
}

#[test]
fn from_json_rejects_zero_burst() {
    let err = EffectConfig::from_json(r#"{ "burst_size": 0 }"#).expect_err("zero burst");
    assert!(matches!(err, ConfigError::ZeroBurstSize));
}

#[test]
fn from_json_reports_parse_errors() {
    let err = EffectConfig::from_json("{ not json").expect_err("malformed");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn color_for_cycles_through_palette() {
    let config = EffectConfig::default();
    assert_eq!(config.color_for(0), "#f6d3c6");
    assert_eq!(config.color_for(3), "#c9987d");
    assert_eq!(config.color_for(4), "#f6d3c6");
}

#[test]
fn color_for_falls_back_when_palette_cleared() {
    let config = EffectConfig { palette: Vec::new(), ..EffectConfig::default() };
    assert_eq!(config.color_for(1), "#d6b89a");
}
