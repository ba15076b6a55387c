use super::*;

#[test]
fn defaults_apply_when_unset() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_latency(None).unwrap(), Duration::from_millis(DEFAULT_SIMULATED_LATENCY_MS));
    assert!(parse_bool("SEED_DEMO_DATA", None, true).unwrap());
}

#[test]
fn empty_values_fall_back_to_defaults() {
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
    assert!(!parse_bool("SEED_DEMO_DATA", Some(""), false).unwrap());
}

#[test]
fn port_parses_and_rejects_garbage() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    assert_eq!(
        parse_port(Some("eighty")).unwrap_err(),
        ConfigError::Invalid { key: "PORT", value: "eighty".into() }
    );
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn latency_zero_disables_delay() {
    assert_eq!(parse_latency(Some("0")).unwrap(), Duration::ZERO);
    assert_eq!(parse_latency(Some("250")).unwrap(), Duration::from_millis(250));
    assert!(parse_latency(Some("-1")).is_err());
}

#[test]
fn bool_variants() {
    for value in ["1", "true", "YES", " on "] {
        assert!(parse_bool("K", Some(value), false).unwrap(), "expected true for {value:?}");
    }
    for value in ["0", "False", "no", "OFF"] {
        assert!(!parse_bool("K", Some(value), true).unwrap(), "expected false for {value:?}");
    }
    let err = parse_bool("SEED_DEMO_DATA", Some("maybe"), true).unwrap_err();
    assert_eq!(err.to_string(), "invalid SEED_DEMO_DATA: \"maybe\"");
}

#[test]
fn default_config_matches_constants() {
    let cfg = ServerConfig::default();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.simulated_latency, Duration::from_millis(DEFAULT_SIMULATED_LATENCY_MS));
    assert!(cfg.seed_demo_data);
}
