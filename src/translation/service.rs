/*!
 * Core translation orchestrator.
 *
 * This module sequences a translation request through validation, the
 * rule-based substitution engine and the external generation provider.
 * Provider failures never surface to the caller: the orchestrator serves
 * the substitution output instead, marked by a fixed degraded confidence.
 */

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::app_config::{Config, TranslationProvider};
use crate::dialects::Dialect;
use crate::errors::{AppError, ProviderError, ValidationError};
use crate::providers::GenerationProvider;
use crate::providers::gemini::Gemini;
use crate::providers::mock::MockProvider;
use crate::substitution::apply_rules;
use crate::translation::prompts::PromptTemplate;

/// Confidence reported when the generation provider failed and the
/// rule-engine output was served instead. Strictly lower than anything the
/// provider reports for a real translation.
pub const FALLBACK_CONFIDENCE: f32 = 0.5;

/// Prefix marking a standard-dialect fallback as a non-AI-verified mock
/// translation, so unrefined text is never presented as authoritative.
pub const MOCK_TRANSLATION_PREFIX: &str = "[मॉक अनुवाद / mock translation] ";

/// A translation request as received from a UI or CLI caller
///
/// The dialect arrives as a string and is validated against the known
/// identifiers before any work happens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// The text to translate
    pub text: String,
    /// Target dialect identifier
    pub dialect: String,
}

impl TranslationRequest {
    /// Validate the request fields, collecting every field error
    pub fn validate(&self) -> Result<Dialect, ValidationError> {
        let mut errors = Vec::new();

        if self.text.trim().is_empty() {
            errors.push(("text".to_string(), "Text cannot be empty.".to_string()));
        }

        let dialect = match self.dialect.parse::<Dialect>() {
            Ok(dialect) => Some(dialect),
            Err(_) => {
                errors.push((
                    "dialect".to_string(),
                    format!("Unknown dialect: {}", self.dialect),
                ));
                None
            }
        };

        match dialect {
            Some(dialect) if errors.is_empty() => Ok(dialect),
            _ => Err(ValidationError { errors }),
        }
    }
}

/// The outcome of a translation, primary or fallback
///
/// Callers cannot distinguish the two by shape; only the confidence
/// sentinel and out-of-band logging reveal a degraded result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    /// The translated text
    pub translated_text: String,
    /// Every substitution rule that fired, in application order,
    /// formatted as "<from> → <to>"
    pub applied_rules: Vec<String>,
    /// Confidence score in [0, 1]
    pub confidence: f32,
}

/// Structured output expected from the generation provider
#[derive(Debug, Deserialize)]
struct DialectTranslation {
    /// Echoed target dialect (informational)
    #[allow(dead_code)]
    dialect: String,
    /// The refined translation
    translated: String,
    /// Model-reported confidence
    confidence: f32,
}

/// Service for orchestrating dialect translation
pub struct TranslationService {
    /// The generation provider used for the refinement step
    provider: Box<dyn GenerationProvider>,
    /// Prompt template rendered for each request
    template: PromptTemplate,
}

impl TranslationService {
    /// Create a new translation service from the application configuration
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let provider: Box<dyn GenerationProvider> = match config.provider {
            TranslationProvider::Gemini => {
                let provider_config = config
                    .get_active_provider_config()
                    .ok_or_else(|| AppError::Config("No Gemini provider configured".to_string()))?;
                Box::new(Gemini::new(
                    config.get_api_key(),
                    provider_config.endpoint.clone(),
                    provider_config.model.clone(),
                    provider_config.timeout_secs,
                ))
            }
            TranslationProvider::Mock => Box::new(MockProvider::working()),
        };

        Ok(Self::with_provider(provider))
    }

    /// Create a translation service backed by an explicit provider
    pub fn with_provider(provider: Box<dyn GenerationProvider>) -> Self {
        Self {
            provider,
            template: PromptTemplate::default(),
        }
    }

    /// Override the prompt template
    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    /// Translate a raw request, validating its fields first
    ///
    /// Validation failures are returned immediately; no substitution or
    /// generation call is attempted for an invalid request.
    pub async fn translate_request(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, ValidationError> {
        let dialect = request.validate()?;
        Ok(self.translate(&request.text, dialect).await)
    }

    /// Translate validated text into the target dialect
    ///
    /// Runs the substitution engine, then the generation provider; any
    /// provider failure is absorbed into the fallback result.
    pub async fn translate(&self, text: &str, dialect: Dialect) -> TranslationResult {
        let (transformed, applied_rules) = apply_rules(text, dialect);
        debug!(
            "Applied {} substitution rule(s) for dialect '{}'",
            applied_rules.len(),
            dialect
        );

        let prompt = self.template.render(&transformed, dialect);
        match self.refine(&prompt).await {
            Ok(refined) => TranslationResult {
                translated_text: refined.translated,
                applied_rules,
                confidence: refined.confidence.clamp(0.0, 1.0),
            },
            Err(e) => {
                warn!(
                    "Generation provider failed, serving rule-based fallback: {}",
                    e
                );
                Self::fallback_result(transformed, applied_rules, dialect)
            }
        }
    }

    /// Call the provider and parse its structured output
    async fn refine(&self, prompt: &str) -> Result<DialectTranslation, ProviderError> {
        let raw = self.provider.generate(prompt).await?;
        parse_structured_output(&raw)
    }

    /// Build the degraded-mode result from the substitution output
    fn fallback_result(
        transformed: String,
        applied_rules: Vec<String>,
        dialect: Dialect,
    ) -> TranslationResult {
        // Standard has no substitutions of its own, so its fallback text is
        // flagged rather than passed off as a translation.
        let translated_text = if dialect == Dialect::Standard {
            format!("{}{}", MOCK_TRANSLATION_PREFIX, transformed)
        } else {
            transformed
        };

        TranslationResult {
            translated_text,
            applied_rules,
            confidence: FALLBACK_CONFIDENCE,
        }
    }
}

/// Parse the provider's raw text as a structured dialect translation
///
/// Models sometimes wrap JSON in a fenced code block even when asked not
/// to; the fence is stripped before parsing.
fn parse_structured_output(raw: &str) -> Result<DialectTranslation, ProviderError> {
    let cleaned = strip_code_fence(raw);
    serde_json::from_str(cleaned)
        .map_err(|e| ProviderError::ParseError(format!("Invalid structured output: {}", e)))
}

/// Strip a surrounding Markdown code fence, if present
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening fence line
    let body = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => rest,
    };
    body.trim_end().trim_end_matches("```").trim()
}
