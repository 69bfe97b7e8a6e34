use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::providers::GenerationProvider;

/// Gemini client for interacting with the Google Generative Language API
#[derive(Debug)]
pub struct Gemini {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL (optional, defaults to public API)
    endpoint: String,
    /// Model name to generate with
    model: String,
}

/// Gemini generateContent request
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    /// The conversation contents
    contents: Vec<GeminiContent>,

    /// Generation parameters
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

/// A single content turn in a Gemini request or response
#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiContent {
    /// Role of the turn (user, model)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Parts making up the turn
    pub parts: Vec<GeminiPart>,
}

/// A text fragment within a content turn
#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiPart {
    /// The text content
    pub text: String,
}

/// Generation parameters for the Gemini API
#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,

    /// Maximum number of tokens to generate
    #[serde(rename = "maxOutputTokens", skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,

    /// MIME type the model must respond with (e.g. "application/json")
    #[serde(rename = "responseMimeType", skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
}

/// Gemini generateContent response
#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    /// The generated candidates
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

/// Individual candidate in a Gemini response
#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    /// The content of the candidate
    pub content: GeminiContent,
}

impl Default for GeminiRequest {
    fn default() -> Self {
        Self {
            contents: Vec::new(),
            generation_config: Some(GenerationConfig {
                temperature: Some(0.7),
                max_output_tokens: Some(1024),
                response_mime_type: None,
            }),
        }
    }
}

impl GeminiRequest {
    /// Create a new request with a single user turn
    pub fn new(prompt: impl Into<String>) -> Self {
        Self::default().add_content("user", prompt)
    }

    /// Add a content turn to the request
    pub fn add_content(mut self, role: impl Into<String>, text: impl Into<String>) -> Self {
        self.contents.push(GeminiContent {
            role: Some(role.into()),
            parts: vec![GeminiPart { text: text.into() }],
        });
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        let config = self.generation_config.get_or_insert(GenerationConfig {
            temperature: None,
            max_output_tokens: None,
            response_mime_type: None,
        });
        config.temperature = Some(temperature);
        self
    }

    /// Ask the model to respond with JSON only
    pub fn json_output(mut self) -> Self {
        let config = self.generation_config.get_or_insert(GenerationConfig {
            temperature: None,
            max_output_tokens: None,
            response_mime_type: None,
        });
        config.response_mime_type = Some("application/json".to_string());
        self
    }
}

impl Gemini {
    /// Create a new Gemini client
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            model: model.into(),
        }
    }

    /// Complete a generateContent request
    pub async fn complete(&self, request: GeminiRequest) -> Result<GeminiResponse, ProviderError> {
        let base = if self.endpoint.is_empty() {
            "https://generativelanguage.googleapis.com"
        } else {
            self.endpoint.trim_end_matches('/')
        };
        let api_url = format!("{}/v1beta/models/{}:generateContent", base, self.model);

        let response = self
            .client
            .post(&api_url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() || e.is_connect() {
                    ProviderError::ConnectionError(format!("Gemini API unreachable: {}", e))
                } else {
                    ProviderError::RequestFailed(format!("Failed to send request to Gemini API: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Gemini API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        response
            .json::<GeminiResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(format!("Failed to parse Gemini API response: {}", e)))
    }

    /// Extract the concatenated text from a Gemini response
    pub fn extract_text_from_response(response: &GeminiResponse) -> String {
        response
            .candidates
            .iter()
            .flat_map(|c| c.content.parts.iter())
            .map(|p| p.text.as_str())
            .collect()
    }
}

#[async_trait]
impl GenerationProvider for Gemini {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = GeminiRequest::new(prompt).json_output();
        let response = self.complete(request).await?;
        Ok(Self::extract_text_from_response(&response))
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        let request = GeminiRequest::new("Hello").temperature(0.0);
        self.complete(request).await?;
        Ok(())
    }
}
