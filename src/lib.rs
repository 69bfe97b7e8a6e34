/*!
 * # DialectAI - Marathi Dialect Translation
 *
 * A Rust library for converting Standard Marathi text into regional dialect
 * forms using a deterministic rule-based pass refined by an AI provider.
 *
 * ## Features
 *
 * - Deterministic phrase substitution with Devanagari-aware word boundaries
 * - Longest-phrase-first rule precedence with a full applied-rule trace
 * - AI refinement of the rule output via the Gemini API
 * - Deterministic fallback when the AI provider is unavailable
 * - Seventeen recognized dialect identifiers, including the standard no-op
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `dialects`: Dialect identifiers and labels
 * - `substitution`: The rule-based substitution engine
 * - `translation`: Orchestration of substitution plus AI refinement:
 *   - `translation::prompts`: Prompt template for the refinement step
 *   - `translation::service`: The translation orchestrator
 * - `providers`: Client implementations for generation providers:
 *   - `providers::gemini`: Gemini API client
 *   - `providers::mock`: Deterministic mock provider
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod dialects;
pub mod errors;
pub mod providers;
pub mod substitution;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use dialects::Dialect;
pub use errors::{AppError, ProviderError, ValidationError};
pub use substitution::{ScriptBlock, apply_rules};
pub use translation::{TranslationRequest, TranslationResult, TranslationService};
