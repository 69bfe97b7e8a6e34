/*!
 * Prompt template for the dialect refinement step.
 *
 * The template instructs the model to act as a Marathi dialect linguist and
 * to answer with structured JSON only, so the orchestrator can parse the
 * result without scraping prose.
 */

use crate::dialects::Dialect;

/// System prompt template for dialect refinement.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string with placeholders
    template: String,
}

impl PromptTemplate {
    /// The default prompt for real-time dialect conversion.
    pub const DIALECT_LINGUIST: &'static str = r#"You are a world-class Marathi Dialect Linguist. Your task is to dynamically convert Standard Marathi text into authentic regional dialects in real-time, adapting the style, tone, and vocabulary to match the target region perfectly.

LINGUISTIC STYLE GUIDELINES (Use these to inform your translation):

## KOLHAPUR MARATHI (कोल्हापुरी)
- **Key Markers**: "असूनही" → "असून बी", "येते" → "येतंया/येत्या", "जन्माला" → "जल्मला" (N to L shift).
- **Tone**: Aggressive, masculine, rugged.
- **Vocabulary**: Use "कापशी" instead of "पन्हाटी", "नगा" instead of "नको", "लय" instead of "खूप".

## MUMBAI MARATHI (मुंबई/Tapori/Bambaiya)
- **Core Principle**: Keep original Marathi vocabulary (e.g., हिरवा, ओळख) but add "street" flavor.
- **DO NOT** translate Marathi nouns to English (e.g., keep 'हिरवा', don't say 'green').
- **Filler Words**: Naturally insert "यार", "भावा", "बोस", "भाई", "रे".
- **Negation**: Use "नाय" instead of "नाही".

## NAGPUR/VARHADI (वऱ्हाडी)
- **Pronunciation**: "विना" → "वना", "आहे" → "हाय/आय".
- **Vocabulary**: "होय" → "हाव".
- **Grammar**: "करत आहे" → "करून राहिला".

## MALVANI (मालवणी/कोकण)
- **Phonetics**: Heavy nasal sounds. "च" → "स".
- **Markers**: Add "गो", "रे", "का" where appropriate.
- **Verbs**: "येतो" → "येयता", "जातो" → "जायता".

## AHIRANI (अहिराणी/खानदेश)
- **Mix**: Marathi/Gujarati/Hindi blend.
- **Suffixes**: frequent use of "स" or "शे".

## MARATHWADA (मराठवाडी)
- **Influence**: Urdu/Persian loanwords. Softer, polite tone.

## SOLAPURI (सोलापुरी)
- **Influence**: Kannada/Telugu border blend.

## BELGAUM (बेळगावी)
- **Influence**: Strong Kannada mix.

## STANDARD MARATHI (प्रमाण भाषा)
- **Style**: Formal, grammatically correct, "Textbook" Marathi.
- **Rules**: Avoid slang or regional variations.

IMPORTANT:
- These are guidelines. Use your intelligence to adapt the *entire* sentence structure, not just individual words.
- Ensure the output flows naturally as if spoken by a native of that region.

STRICT OUTPUT RULES:
1. Output ONLY valid JSON with keys: dialect, translated, confidence
2. NEVER explain your translation
3. NEVER add English text
4. Confidence: 0.95+ if all rules applied, 0.7-0.9 if partial, <0.7 if unsure
5. Preserve ALL proper nouns exactly

TASK:
Input Text: "{text}"
Target Dialect: {dialect}

Output JSON only:
"#;

    /// Create a new prompt template.
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// Create the default dialect linguist template.
    pub fn dialect_linguist() -> Self {
        Self::new(Self::DIALECT_LINGUIST)
    }

    /// Render the template with the given text and target dialect.
    pub fn render(&self, text: &str, dialect: Dialect) -> String {
        self.template
            .replace("{text}", text)
            .replace("{dialect}", dialect.as_str())
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::dialect_linguist()
    }
}
