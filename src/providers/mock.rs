/*!
 * Mock provider implementations for testing.
 *
 * This module provides mock providers that simulate different behaviors:
 * - `MockProvider::working()` - Always succeeds with valid structured output
 * - `MockProvider::failing()` - Always fails with an error
 * - `MockProvider::malformed()` - Succeeds but returns unparseable text
 * - `MockProvider::empty()` - Returns an empty response
 */

use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::providers::GenerationProvider;

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with valid structured JSON
    Working,
    /// Always fails with an error
    Failing,
    /// Succeeds but returns text that is not valid JSON
    Malformed,
    /// Returns an empty response
    Empty,
    /// Simulates a slow response (for timeout testing)
    Slow { delay_ms: u64 },
}

/// Mock provider for testing orchestration behavior
#[derive(Debug, Clone)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Custom response generator (optional)
    custom_response: Option<fn(&str) -> String>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            custom_response: None,
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that returns non-JSON text
    pub fn malformed() -> Self {
        Self::new(MockBehavior::Malformed)
    }

    /// Create a mock that returns empty responses
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Set a custom response generator
    pub fn with_custom_response(mut self, generator: fn(&str) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }
}

#[async_trait]
impl GenerationProvider for MockProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        match self.behavior {
            MockBehavior::Working => {
                let text = if let Some(generator) = self.custom_response {
                    generator(prompt)
                } else {
                    r#"{"dialect": "standard", "translated": "मॉक प्रतिसाद", "confidence": 0.92}"#
                        .to_string()
                };
                Ok(text)
            }

            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated provider failure".to_string(),
            }),

            MockBehavior::Malformed => Ok("This is not the JSON you are looking for".to_string()),

            MockBehavior::Empty => Ok(String::new()),

            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
                Ok(r#"{"dialect": "standard", "translated": "उशिरा प्रतिसाद", "confidence": 0.9}"#
                    .to_string())
            }
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::ConnectionError(
                "Simulated connection failure".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
