/*!
 * Rule-based dialect substitution engine.
 *
 * This module owns the static per-dialect phrase substitution tables and
 * applies them to input text with script-aware word-boundary detection,
 * longest-phrase-first precedence and a trace of every rule that fired.
 * The engine is pure and never fails: input it cannot transform is passed
 * through unchanged.
 */

use std::collections::HashMap;
use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::dialects::Dialect;

/// Static regex for collapsing whitespace runs left behind by replacements
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Per-dialect substitution tables, built once at startup and shared read-only
///
/// Each entry maps a source phrase to its dialect replacement. An empty
/// replacement deletes the phrase. Dialects absent from the table, and
/// dialects with an empty table, are both no-ops. Entry order within a
/// dialect decides ties between phrases of equal character length.
static DIALECT_RULES: Lazy<HashMap<Dialect, Vec<(&'static str, &'static str)>>> = Lazy::new(|| {
    HashMap::from([
        (
            Dialect::Nagpur,
            vec![
                ("आहे", "हाय"),
                ("मला", "माले"),
                ("तुला", "तुले"),
                ("काय", "का"),
                ("कुठे", "कोठा"),
                ("नाही", "न्हाई"),
            ],
        ),
        (
            Dialect::Malvani,
            vec![
                ("आहे", "आसा"),
                ("मला", "माका"),
                ("तुला", "तुका"),
                ("काय", "काय"),
                ("कुठे", "खुय"),
                ("नाही", "नाय"),
            ],
        ),
        (
            Dialect::Ahirani,
            vec![
                ("आहे", "शे"),
                ("मला", "माले"),
                ("काय", "काय"),
                ("कुठे", "कुथा"),
                ("नाही", "नाही"),
            ],
        ),
        (
            Dialect::Kolhapur,
            vec![
                ("तू काय करते आहेस", "काय कराय लागलीस"),
                ("तू", ""),
            ],
        ),
        // No substitutions encoded yet for the remaining dialects
        (Dialect::Pune, vec![]),
        (Dialect::Mumbai, vec![]),
        (Dialect::Agri, vec![]),
        (Dialect::Warli, vec![]),
        (Dialect::Thanjavur, vec![]),
        (Dialect::Koli, vec![]),
        (Dialect::Solapuri, vec![]),
        (Dialect::Marathwada, vec![]),
        (Dialect::Belgaum, vec![]),
        (Dialect::Dangii, vec![]),
        (Dialect::Pawra, vec![]),
        (Dialect::Gondi, vec![]),
    ])
});

/// Contiguous Unicode block used as the word-boundary predicate for a script
///
/// A phrase occurrence only counts as a word when the characters immediately
/// before and after it fall outside the block (or the occurrence touches a
/// string edge). This approximates word boundaries for scripts where the
/// Latin-oriented `\b` notion does not apply.
#[derive(Debug, Clone)]
pub struct ScriptBlock {
    range: RangeInclusive<u32>,
}

impl ScriptBlock {
    /// Devanagari block, U+0900 to U+097F
    pub const DEVANAGARI: ScriptBlock = ScriptBlock {
        range: 0x0900..=0x097F,
    };

    /// Create a block for an arbitrary codepoint range
    pub fn new(range: RangeInclusive<u32>) -> Self {
        Self { range }
    }

    /// Whether a character belongs to this block
    pub fn contains(&self, c: char) -> bool {
        self.range.contains(&(c as u32))
    }
}

/// Apply the substitution rules for a dialect to the given text
///
/// Returns the transformed text and the ordered trace of rules that fired,
/// each formatted as `"<from> → <to>"`. Rules apply longest phrase first,
/// cumulatively against the progressively transformed text, so a later rule
/// may match text introduced by an earlier replacement. `standard` and
/// dialects without substitutions return the input unchanged with an empty
/// trace.
pub fn apply_rules(text: &str, dialect: Dialect) -> (String, Vec<String>) {
    let rules = match DIALECT_RULES.get(&dialect) {
        Some(rules) if dialect != Dialect::Standard && !rules.is_empty() => rules,
        _ => return (text.to_string(), Vec::new()),
    };

    // Longer phrases replace first so a multi-word rule is never corrupted
    // by one of its constituent shorter rules. The sort is stable, so table
    // order breaks ties between phrases of equal length.
    let mut sorted_rules: Vec<&(&str, &str)> = rules.iter().collect();
    sorted_rules.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));

    let mut transformed = text.to_string();
    let mut applied_rules = Vec::new();

    for (from, to) in sorted_rules {
        if let Some(replaced) = replace_word_bounded(&transformed, from, to, &ScriptBlock::DEVANAGARI)
        {
            transformed = WHITESPACE_RUN.replace_all(&replaced, " ").trim().to_string();
            applied_rules.push(format!("{} → {}", from, to));
        }
    }

    (transformed, applied_rules)
}

/// Replace every boundary-respecting occurrence of `phrase` in `text`
///
/// An occurrence is boundary-respecting when the characters adjacent to it
/// are not in `block`; string edges always qualify. Returns `None` when no
/// occurrence qualified, so the caller can tell a fired rule from a skipped
/// one.
fn replace_word_bounded(
    text: &str,
    phrase: &str,
    replacement: &str,
    block: &ScriptBlock,
) -> Option<String> {
    if phrase.is_empty() {
        return None;
    }

    let mut result = String::with_capacity(text.len());
    let mut cursor = 0;
    let mut search_from = 0;
    let mut fired = false;

    while let Some(offset) = text[search_from..].find(phrase) {
        let start = search_from + offset;
        let end = start + phrase.len();
        let preceded_in_block = text[..start]
            .chars()
            .next_back()
            .is_some_and(|c| block.contains(c));
        let followed_in_block = text[end..].chars().next().is_some_and(|c| block.contains(c));
        if preceded_in_block || followed_in_block {
            // Resume one character past the rejected position, so an
            // overlapping occurrence starting inside it is still considered.
            search_from = start
                + text[start..]
                    .chars()
                    .next()
                    .map_or(phrase.len(), |c| c.len_utf8());
            continue;
        }

        result.push_str(&text[cursor..start]);
        result.push_str(replacement);
        cursor = end;
        search_from = end;
        fired = true;
    }

    if !fired {
        return None;
    }
    result.push_str(&text[cursor..]);
    Some(result)
}
