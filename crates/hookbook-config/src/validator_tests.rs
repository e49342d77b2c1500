use super::*;

#[test]
fn test_validate_default_config() {
    let config = Config::default();
    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    // localhost over http and no api key
    assert!(result.warnings.iter().any(|w| w.path == "api.base_url"));
    assert!(result.warnings.iter().any(|w| w.path == "api.api_key"));
}

#[test]
fn test_validate_https_with_key_is_clean() {
    let mut config = Config::default();
    config.api.base_url = "https://app.example.com/api".to_string();
    config.api.api_key = Some("key".to_string());

    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_validate_invalid_base_url() {
    let mut config = Config::default();
    config.api.base_url = "not a url".to_string();

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
    assert!(result.errors.iter().any(|e| e.path == "api.base_url"));
}

#[test]
fn test_validate_non_http_scheme() {
    let mut config = Config::default();
    config.api.base_url = "ftp://example.com".to_string();

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
}

#[test]
fn test_validate_zero_timeout() {
    let mut config = Config::default();
    config.api.timeout_seconds = 0;

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
    assert!(result.errors.iter().any(|e| e.path == "api.timeout_seconds"));
}

#[test]
fn test_validate_high_timeout_warning() {
    let mut config = Config::default();
    config.api.timeout_seconds = 3600;

    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result.warnings.iter().any(|w| w.path == "api.timeout_seconds"));
}

#[test]
fn test_validate_empty_public_base_url() {
    let mut config = Config::default();
    config.embed.public_base_url = "  ".to_string();

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "embed.public_base_url"));
}

#[test]
fn test_into_result_reports_first_error() {
    let mut config = Config::default();
    config.api.timeout_seconds = 0;

    let err = ConfigValidator::validate(&config).into_result().unwrap_err();
    assert!(err.to_string().contains("api.timeout_seconds"));
}

#[test]
fn test_into_result_passes_warnings_through() {
    let warnings = ConfigValidator::validate(&Config::default())
        .into_result()
        .unwrap();
    assert!(!warnings.is_empty());
}

#[test]
fn test_embed_section_ignores_bad_api() {
    let mut config = Config::default();
    config.api.base_url = "not a url".to_string();
    config.api.timeout_seconds = 0;

    let result = ConfigValidator::validate_embed(&config);
    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
    assert!(!ConfigValidator::validate_api(&config).is_valid());
}

#[test]
fn test_api_section_ignores_bad_embed() {
    let mut config = Config::default();
    config.embed.public_base_url = "  ".to_string();

    assert!(ConfigValidator::validate_api(&config).is_valid());
    let result = ConfigValidator::validate_embed(&config);
    assert!(result.errors.iter().any(|e| e.path == "embed.public_base_url"));
}
