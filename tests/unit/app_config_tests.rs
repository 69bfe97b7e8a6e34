/*!
 * Tests for application configuration
 */

use std::str::FromStr;

use dialectai::app_config::{Config, LogLevel, ProviderConfig, TranslationProvider};

use crate::common;

/// Default config targets Gemini with both providers available
#[test]
fn test_config_default_shouldTargetGemini() {
    let config = Config::default();
    assert_eq!(config.provider, TranslationProvider::Gemini);
    assert_eq!(config.available_providers.len(), 2);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// The active provider config is resolved by its lowercase identifier
#[test]
fn test_config_getActiveProviderConfig_shouldMatchProviderType() {
    let config = Config::default();
    let active = config.get_active_provider_config().unwrap();
    assert_eq!(active.provider_type, "gemini");
    assert_eq!(active.model, "gemini-2.0-flash");
    assert!(active.endpoint.contains("generativelanguage"));
}

/// Validation rejects a Gemini config without an API key
#[test]
fn test_config_validate_withGeminiAndNoApiKey_shouldFail() {
    // Make sure the environment fallback does not mask the failure
    unsafe { std::env::remove_var("GEMINI_API_KEY") };
    let config = Config::default();
    assert!(config.validate().is_err());
}

/// The mock provider needs no API key
#[test]
fn test_config_validate_withMockProvider_shouldSucceed() {
    let config = common::get_test_config();
    assert!(config.validate().is_ok());
}

/// An explicit API key takes precedence over the environment
#[test]
fn test_config_getApiKey_withConfiguredKey_shouldUseIt() {
    let mut config = Config::default();
    config
        .available_providers
        .iter_mut()
        .find(|p| p.provider_type == "gemini")
        .unwrap()
        .api_key = "configured-key".to_string();
    assert_eq!(config.get_api_key(), "configured-key");
}

/// Provider identifiers parse from their lowercase strings
#[test]
fn test_translation_provider_fromStr_shouldParseKnownProviders() {
    assert_eq!(
        TranslationProvider::from_str("gemini").unwrap(),
        TranslationProvider::Gemini
    );
    assert_eq!(
        TranslationProvider::from_str("Mock").unwrap(),
        TranslationProvider::Mock
    );
    assert!(TranslationProvider::from_str("openai").is_err());
}

/// Config round-trips through its JSON form
#[test]
fn test_config_serde_shouldRoundTrip() {
    let config = common::get_test_config();
    let json = serde_json::to_string_pretty(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.provider, TranslationProvider::Mock);
    assert_eq!(parsed.available_providers.len(), 2);
}

/// Missing optional fields fall back to serde defaults
#[test]
fn test_provider_config_serde_withMinimalJson_shouldUseDefaults() {
    let json = r#"{"type": "gemini"}"#;
    let parsed: ProviderConfig = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.provider_type, "gemini");
    assert!(parsed.model.is_empty());
    assert_eq!(parsed.timeout_secs, 30);
}
