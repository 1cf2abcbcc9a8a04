use multithresh_core::{MultiThreshError, SearchMode, ThresholdConfig};

// ---------------------------------------------------------------------------
// SearchMode Display
// ---------------------------------------------------------------------------

#[test]
fn test_search_mode_display() {
    assert_eq!(format!("{}", SearchMode::Auto), "Auto");
    assert_eq!(format!("{}", SearchMode::Sequential), "Sequential");
    assert_eq!(format!("{}", SearchMode::Parallel), "Parallel");
}

#[test]
fn test_search_mode_default_is_auto() {
    assert_eq!(SearchMode::default(), SearchMode::Auto);
}

// ---------------------------------------------------------------------------
// ThresholdConfig
// ---------------------------------------------------------------------------

#[test]
fn test_default_config_is_classic_otsu() {
    let config = ThresholdConfig::default();
    assert_eq!(config.thresholds, 1);
    assert_eq!(config.classes(), 2);
    assert_eq!(config.levels, 256);
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_fields_take_defaults() {
    let config: ThresholdConfig = serde_json::from_str(r#"{"thresholds": 3}"#).unwrap();
    assert_eq!(config.thresholds, 3);
    assert_eq!(config.levels, 256);
    assert_eq!(config.search, SearchMode::Auto);

    let empty: ThresholdConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, ThresholdConfig::default());
}

#[test]
fn test_config_serde_roundtrip() {
    let config = ThresholdConfig {
        thresholds: 4,
        levels: 64,
        search: SearchMode::Sequential,
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: ThresholdConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_validate_threshold_count() {
    for n in 1..=4 {
        assert!(ThresholdConfig::with_thresholds(n).validate().is_ok());
    }
    assert!(matches!(
        ThresholdConfig::with_thresholds(0).validate(),
        Err(MultiThreshError::InvalidClassCount { classes: 1 })
    ));
    assert!(matches!(
        ThresholdConfig::with_thresholds(7).validate(),
        Err(MultiThreshError::InvalidClassCount { classes: 8 })
    ));
}

#[test]
fn test_validate_levels() {
    let mut config = ThresholdConfig::default();
    config.levels = 1;
    assert!(matches!(
        config.validate(),
        Err(MultiThreshError::InvalidLevels { levels: 1 })
    ));
    config.levels = 257;
    assert!(config.validate().is_err());
    config.levels = 2;
    assert!(config.validate().is_ok());
}
