/*!
 * Provider implementations for the external text-generation service.
 *
 * This module contains client implementations for the generation step:
 * - Gemini: Google Gemini API integration
 * - Mock: deterministic provider for tests and offline use
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for text-generation providers
///
/// The orchestrator hands a provider a fully rendered prompt and expects
/// raw generated text back; interpreting that text is the orchestrator's
/// job. Exactly one call is made per translation, with no retries.
#[async_trait]
pub trait GenerationProvider: Send + Sync + Debug {
    /// Generate text for the given prompt
    ///
    /// # Arguments
    /// * `prompt` - The rendered prompt to complete
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The generated text or an error
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Test the connection to the provider
    ///
    /// # Returns
    /// * `Result<(), ProviderError>` - Ok if the connection is usable, or an error
    async fn test_connection(&self) -> Result<(), ProviderError>;
}

pub mod gemini;
pub mod mock;
