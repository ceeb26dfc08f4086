use super::*;

#[test]
fn test_validate_default_config() {
    let config = Config::default();
    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_validate_invalid_port() {
    let mut config = Config::default();
    config.server.port = 0;

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
    assert!(result.errors.iter().any(|e| e.path == "server.port"));
}

#[test]
fn test_validate_empty_host() {
    let mut config = Config::default();
    config.server.host = String::new();

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "server.host"));
}

#[test]
fn test_validate_unknown_default() {
    let mut config = Config::default();
    config.project.default = "blog".to_string();

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
    assert!(result.errors.iter().any(|e| e.path == "project.default"));
}

#[test]
fn test_validate_default_not_enabled() {
    let mut config = Config::default();
    config.project.default = "projectWeather".to_string();
    config.project.enabled = vec!["projectOne".to_string(), "projectTwo".to_string()];

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
    let err = result
        .errors
        .iter()
        .find(|e| e.path == "project.default")
        .unwrap();
    assert!(err.message.contains("not enabled"));
}

#[test]
fn test_validate_unknown_enabled_project() {
    let mut config = Config::default();
    config.project.enabled.push("projectThree".to_string());

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
    assert!(result.errors.iter().any(|e| e.message.contains("projectThree")));
}

#[test]
fn test_validate_no_enabled_projects() {
    let mut config = Config::default();
    config.project.enabled.clear();

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "project.enabled"));
}

#[test]
fn test_validate_duplicate_enabled_warning() {
    let mut config = Config::default();
    config.project.enabled.push("projectOne".to_string());

    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result.warnings.iter().any(|w| w.path == "project.enabled"));
}

#[test]
fn test_validate_unknown_selection_is_only_a_warning() {
    let mut config = Config::default();
    config.project.selected = Some("doesNotExist".to_string());

    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result.warnings.iter().any(|w| w.path == "project.selected"));
}

#[test]
fn test_validate_known_selection() {
    let mut config = Config::default();
    config.project.selected = Some("projectTwo".to_string());

    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_validate_invalid_unit() {
    let mut config = Config::default();
    config.weather.unit = "kelvin".to_string();

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "weather.unit"));
}

#[test]
fn test_validate_unit_accepts_what_the_weather_view_parses() {
    for unit in ["Fahrenheit", "CELSIUS", " f ", "c"] {
        let mut config = Config::default();
        config.weather.unit = unit.to_string();

        let result = ConfigValidator::validate(&config);
        assert!(result.is_valid(), "unit {:?} should be accepted", unit);
        assert!(unit.parse::<TemperatureUnit>().is_ok());
    }
}

#[test]
fn test_validate_empty_location_warning() {
    let mut config = Config::default();
    config.weather.location = "  ".to_string();

    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result.warnings.iter().any(|w| w.path == "weather.location"));
}

#[test]
fn test_validate_filter_directive_warning() {
    let mut config = Config::default();
    config.logging.level = "showcase=debug,tower_http=info".to_string();

    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result.warnings.iter().any(|w| w.path == "logging.level"));
}

#[test]
fn test_into_result() {
    let mut config = Config::default();
    config.project.selected = Some("blog".to_string());
    let warnings = ConfigValidator::validate(&config).into_result().unwrap();
    assert_eq!(warnings.len(), 1);

    config.server.port = 0;
    let err = ConfigValidator::validate(&config).into_result().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(ref errors) if errors.len() == 1));
}

#[test]
fn test_validation_result_methods() {
    let mut result = ValidationResult::default();
    assert!(result.is_valid());

    result.add_warning(ValidationWarning::new("path", "warning"));
    assert!(result.is_valid());

    result.add_error(ValidationError::new("path", "error"));
    assert!(!result.is_valid());
}
