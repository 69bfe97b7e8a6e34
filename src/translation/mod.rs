/*!
 * Translation orchestration.
 *
 * This module sequences the rule-based substitution output into the external
 * generation call and provides the degraded-mode fallback:
 * - `translation::prompts`: prompt template for the dialect refinement step
 * - `translation::service`: the translation orchestrator itself
 */

pub mod prompts;
pub mod service;

pub use prompts::PromptTemplate;
pub use service::{
    FALLBACK_CONFIDENCE, MOCK_TRANSLATION_PREFIX, TranslationRequest, TranslationResult,
    TranslationService,
};
