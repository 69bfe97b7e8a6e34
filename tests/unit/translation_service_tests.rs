/*!
 * Tests for translation service functionality
 */

use tokio_test;

use dialectai::dialects::Dialect;
use dialectai::providers::mock::MockProvider;
use dialectai::translation::{
    FALLBACK_CONFIDENCE, MOCK_TRANSLATION_PREFIX, TranslationRequest, TranslationService,
};

use crate::common;

/// A working provider's structured output becomes the primary result
#[tokio::test]
async fn test_translate_withWorkingProvider_shouldReturnRefinedText() {
    let provider = MockProvider::working().with_custom_response(|_| {
        r#"{"dialect": "nagpur", "translated": "माले हाय बा", "confidence": 0.97}"#.to_string()
    });
    let service = TranslationService::with_provider(Box::new(provider));

    let result = service.translate("मला आहे", Dialect::Nagpur).await;
    assert_eq!(result.translated_text, "माले हाय बा");
    assert_eq!(result.applied_rules, vec!["आहे → हाय", "मला → माले"]);
    assert!((result.confidence - 0.97).abs() < f32::EPSILON);
}

/// Provider failure falls back to the rule-engine output with the sentinel
#[test]
fn test_translate_withFailingProvider_shouldFallBackToRuleOutput() {
    common::init_test_logging();
    let service = common::failing_service();

    let result = tokio_test::block_on(async { service.translate("मला आहे", Dialect::Nagpur).await });
    assert_eq!(result.translated_text, "माले हाय");
    assert_eq!(result.applied_rules, vec!["आहे → हाय", "मला → माले"]);
    assert_eq!(result.confidence, FALLBACK_CONFIDENCE);
}

/// Standard-dialect fallback is flagged with the mock marker
#[test]
fn test_translate_withFailingProviderAndStandard_shouldPrefixMockMarker() {
    common::init_test_logging();
    let service = common::failing_service();

    let result =
        tokio_test::block_on(async { service.translate("मला आहे", Dialect::Standard).await });
    assert!(result.translated_text.starts_with(MOCK_TRANSLATION_PREFIX));
    assert!(result.translated_text.ends_with("मला आहे"));
    assert!(result.applied_rules.is_empty());
    assert_eq!(result.confidence, FALLBACK_CONFIDENCE);
}

/// Unparseable provider output routes to the same fallback as an error
#[tokio::test]
async fn test_translate_withMalformedProviderOutput_shouldFallBack() {
    let service = TranslationService::with_provider(Box::new(MockProvider::malformed()));

    let result = service.translate("मला आहे", Dialect::Nagpur).await;
    assert_eq!(result.translated_text, "माले हाय");
    assert_eq!(result.confidence, FALLBACK_CONFIDENCE);
}

/// Empty provider output is unparseable and falls back too
#[tokio::test]
async fn test_translate_withEmptyProviderOutput_shouldFallBack() {
    let service = TranslationService::with_provider(Box::new(MockProvider::empty()));

    let result = service.translate("मला आहे", Dialect::Nagpur).await;
    assert_eq!(result.confidence, FALLBACK_CONFIDENCE);
}

/// JSON wrapped in a Markdown code fence still parses as a primary result
#[tokio::test]
async fn test_translate_withFencedProviderOutput_shouldParse() {
    let provider = MockProvider::working().with_custom_response(|_| {
        "```json\n{\"dialect\": \"malvani\", \"translated\": \"माका आसा\", \"confidence\": 0.9}\n```"
            .to_string()
    });
    let service = TranslationService::with_provider(Box::new(provider));

    let result = service.translate("मला आहे", Dialect::Malvani).await;
    assert_eq!(result.translated_text, "माका आसा");
    assert!((result.confidence - 0.9).abs() < f32::EPSILON);
}

/// Out-of-range confidence from the provider is clamped to [0, 1]
#[tokio::test]
async fn test_translate_withOutOfRangeConfidence_shouldClamp() {
    let provider = MockProvider::working().with_custom_response(|_| {
        r#"{"dialect": "nagpur", "translated": "माले हाय", "confidence": 1.7}"#.to_string()
    });
    let service = TranslationService::with_provider(Box::new(provider));

    let result = service.translate("मला आहे", Dialect::Nagpur).await;
    assert_eq!(result.confidence, 1.0);
}

/// Empty text is rejected before any substitution or provider call
#[tokio::test]
async fn test_translate_request_withEmptyText_shouldReturnValidationError() {
    let service = common::working_service();
    let request = TranslationRequest {
        text: "   ".to_string(),
        dialect: "nagpur".to_string(),
    };

    let error = service.translate_request(&request).await.unwrap_err();
    assert_eq!(error.errors.len(), 1);
    assert_eq!(error.errors[0].0, "text");
}

/// Unknown dialect identifiers are rejected with a field error
#[tokio::test]
async fn test_translate_request_withUnknownDialect_shouldReturnValidationError() {
    let service = common::working_service();
    let request = TranslationRequest {
        text: "मला आहे".to_string(),
        dialect: "klingon".to_string(),
    };

    let error = service.translate_request(&request).await.unwrap_err();
    assert_eq!(error.errors.len(), 1);
    assert_eq!(error.errors[0].0, "dialect");
}

/// Multiple invalid fields are reported together
#[tokio::test]
async fn test_translate_request_withEmptyTextAndUnknownDialect_shouldReportBoth() {
    let service = common::working_service();
    let request = TranslationRequest {
        text: String::new(),
        dialect: "klingon".to_string(),
    };

    let error = service.translate_request(&request).await.unwrap_err();
    let fields: Vec<&str> = error.errors.iter().map(|(f, _)| f.as_str()).collect();
    assert_eq!(fields, vec!["text", "dialect"]);
}

/// A valid request flows through validation to a full result
#[tokio::test]
async fn test_translate_request_withValidRequest_shouldSucceed() {
    let service = common::working_service();
    let request = TranslationRequest {
        text: "मला आहे".to_string(),
        dialect: "nagpur".to_string(),
    };

    let result = service.translate_request(&request).await.unwrap();
    assert!(!result.translated_text.is_empty());
    assert_eq!(result.applied_rules, vec!["आहे → हाय", "मला → माले"]);
}

/// Fallback for a no-rule dialect serves the untouched input
#[tokio::test]
async fn test_translate_withFailingProviderAndEmptyRuleSet_shouldServeInput() {
    let service = common::failing_service();

    let result = service.translate("मला आहे", Dialect::Mumbai).await;
    assert_eq!(result.translated_text, "मला आहे");
    assert!(result.applied_rules.is_empty());
    assert_eq!(result.confidence, FALLBACK_CONFIDENCE);
}
