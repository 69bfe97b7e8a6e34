/*!
 * Tests for provider implementations
 */

use dialectai::errors::ProviderError;
use dialectai::providers::GenerationProvider;
use dialectai::providers::gemini::{Gemini, GeminiRequest, GeminiResponse};
use dialectai::providers::mock::MockProvider;

/// Requests serialize to the wire shape the Gemini API expects
#[test]
fn test_gemini_request_serialization_shouldMatchWireFormat() {
    let request = GeminiRequest::new("नमस्कार").temperature(0.5).json_output();
    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(json["contents"][0]["role"], "user");
    assert_eq!(json["contents"][0]["parts"][0]["text"], "नमस्कार");
    assert_eq!(json["generationConfig"]["temperature"], 0.5);
    assert_eq!(json["generationConfig"]["responseMimeType"], "application/json");
}

/// Response text is extracted across candidates and parts
#[test]
fn test_gemini_extract_text_shouldConcatenateParts() {
    let raw = r#"{
        "candidates": [
            {"content": {"role": "model", "parts": [{"text": "माले "}, {"text": "हाय"}]}}
        ]
    }"#;
    let response: GeminiResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(Gemini::extract_text_from_response(&response), "माले हाय");
}

/// A response without candidates extracts to an empty string
#[test]
fn test_gemini_extract_text_withNoCandidates_shouldReturnEmpty() {
    let response: GeminiResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(Gemini::extract_text_from_response(&response), "");
}

/// An unreachable endpoint surfaces as a provider error, not a panic
#[tokio::test]
async fn test_gemini_generate_withUnreachableEndpoint_shouldReturnError() {
    let gemini = Gemini::new("test-key", "http://127.0.0.1:9", "gemini-2.0-flash", 1);
    let result = gemini.generate("prompt").await;
    assert!(matches!(
        result,
        Err(ProviderError::ConnectionError(_)) | Err(ProviderError::RequestFailed(_))
    ));
}

/// Providers are usable through the trait object the service holds
#[tokio::test]
async fn test_mock_provider_asTraitObject_shouldGenerate() {
    let provider: Box<dyn GenerationProvider> = Box::new(MockProvider::working());
    let text = provider.generate("prompt").await.unwrap();
    assert!(text.contains("confidence"));
    assert!(provider.test_connection().await.is_ok());
}

/// The failing mock also fails its connection test
#[tokio::test]
async fn test_mock_provider_failing_shouldFailConnectionTest() {
    let provider = MockProvider::failing();
    assert!(provider.test_connection().await.is_err());
}
