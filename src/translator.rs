//! Strength-gated per-token dictionary translation
//!
//! Each word token is resolved independently against the dictionary and
//! the keep-English set. A 0-100 strength dial decides how aggressive the
//! translation is: above the threshold every covered token is translated,
//! below it only glue words (pronouns, auxiliaries, question words,
//! connectors) convert, which keeps low-strength output close to English
//! while still bending the structure.

use std::collections::{HashMap, HashSet};

use crate::config::ConversionConfig;
use crate::dictionary;
use crate::tokenizer::{Token, singularize};

/// Strength at or above which dictionary-covered tokens always translate.
/// A compatibility constant carried over from the original ruleset; there
/// is no deeper rationale behind the value.
pub const STRENGTH_ALWAYS_TRANSLATE: u8 = 35;

/// Translate a token sequence into Tenglish pieces.
///
/// Per token:
/// 1. Non-word tokens pass through unchanged.
/// 2. The lowercase form and a heuristic singular form are computed.
/// 3. Keep-English words (either form, when enabled) emit the lowercase
///    original untranslated.
/// 4. Dictionary-covered tokens translate when the strength gate or the
///    glue set allows it; the exact lowercase key wins over the singular.
/// 5. Translations get the original token's leading capital restored.
/// 6. Everything else (unknown words, gated-off words) emits lowercase.
///
/// The dictionary and keep-English set are read-only; nothing is mutated.
pub fn translate_tokens(
    tokens: Vec<Token>,
    dict: &HashMap<String, String>,
    keep_english: &HashSet<String>,
    config: &ConversionConfig,
) -> Vec<String> {
    let mut out = Vec::with_capacity(tokens.len());

    for token in tokens {
        let word = match token {
            Token::Word(word) => word,
            other => {
                out.push(other.into_text());
                continue;
            }
        };

        let lower = word.to_lowercase();
        let singular = singularize(&lower);

        // Keep common English nouns / brand-like words.
        if config.keep_english_nouns
            && (keep_english.contains(&lower) || keep_english.contains(&singular))
        {
            out.push(lower);
            continue;
        }

        let replacement = dict.get(&lower).or_else(|| dict.get(&singular));
        match replacement {
            Some(replacement) if should_translate(config.strength, &lower, &singular) => {
                out.push(restore_leading_case(&word, replacement));
            }
            // Gated-off and unknown words stay English, lowercased.
            _ => out.push(lower),
        }
    }

    out
}

fn should_translate(strength: u8, lower: &str, singular: &str) -> bool {
    strength >= STRENGTH_ALWAYS_TRANSLATE
        || dictionary::is_glue(lower)
        || dictionary::is_glue(singular)
}

/// Carry the original token's leading capital onto the replacement's first
/// character; the rest of the replacement is left as authored (lowercase).
pub fn restore_leading_case(original: &str, replacement: &str) -> String {
    let starts_upper = original.chars().next().is_some_and(|c| c.is_uppercase());
    if starts_upper {
        capitalize_first(replacement)
    } else {
        replacement.to_string()
    }
}

/// Uppercase the first character of a string, leaving the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
