//! Fixed-phrase rewriting applied before tokenization
//!
//! A prioritized list of casual Telangana phrase rules is substituted over
//! the lowercased input. Order is semantically load-bearing: more specific
//! phrases ("thanks a lot") must fire before shorter overlapping ones
//! ("thanks") can consume a remnant. Identity rules hold their priority
//! slot so later rules never rewrite what they matched.

use regex::{NoExpand, Regex};

/// The ordered phrase rules, most specific first.
const PHRASE_RULES: &[(&str, &str)] = &[
    ("thanks a lot", "chala thanks"),
    ("thank you", "chala thanks"),
    ("thank u", "chala thanks"),
    ("thanks", "thanks"),
    ("good morning", "good morning"),
    ("good night", "good night"),
    ("i love you", "nenu ninnu premistunna"),
    ("i miss you", "nenu ninnu miss avtunna"),
    ("what are you doing", "em chestunnav"),
    ("what is this", "idi enti"),
    ("how are you", "ela unnav"),
    ("i am fine", "bagunna"),
    ("i am sorry", "sorry ra"),
    ("excuse me", "excuse me"),
    ("please", "please"),
];

/// Applies the fixed phrase rules in priority order.
///
/// Compile the rules once with [`PhraseRuleEngine::new`] and reuse the
/// engine across conversions.
pub struct PhraseRuleEngine {
    rules: Vec<(Regex, &'static str)>,
}

impl PhraseRuleEngine {
    pub fn new() -> Self {
        let rules = PHRASE_RULES
            .iter()
            .map(|(phrase, replacement)| {
                let pattern = format!(r"\b{}\b", regex::escape(phrase));
                // Static patterns, compilation cannot fail.
                (Regex::new(&pattern).unwrap(), *replacement)
            })
            .collect();
        Self { rules }
    }

    /// Lowercase the text and substitute every rule, in order.
    pub fn apply(&self, text: &str) -> String {
        let mut result = text.to_lowercase();
        for (pattern, replacement) in &self.rules {
            result = pattern
                .replace_all(&result, NoExpand(replacement))
                .into_owned();
        }
        result
    }
}

impl Default for PhraseRuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_input() {
        let engine = PhraseRuleEngine::new();
        assert_eq!(engine.apply("Hello World"), "hello world");
    }

    #[test]
    fn test_specific_phrase_wins_over_remnant() {
        let engine = PhraseRuleEngine::new();
        // "thanks a lot" fires before the bare "thanks" rule could split it.
        assert_eq!(engine.apply("Thanks a lot"), "chala thanks");
        assert_eq!(engine.apply("thank you"), "chala thanks");
    }

    #[test]
    fn test_case_insensitive_match() {
        let engine = PhraseRuleEngine::new();
        assert_eq!(engine.apply("WHAT ARE YOU DOING"), "em chestunnav");
    }

    #[test]
    fn test_phrase_inside_sentence() {
        let engine = PhraseRuleEngine::new();
        assert_eq!(
            engine.apply("hey, how are you today?"),
            "hey, ela unnav today?"
        );
    }

    #[test]
    fn test_word_boundaries_respected() {
        let engine = PhraseRuleEngine::new();
        // "pleased" must not trigger the "please" rule.
        assert_eq!(engine.apply("she was pleased"), "she was pleased");
    }

    #[test]
    fn test_unmatched_text_only_lowercased() {
        let engine = PhraseRuleEngine::new();
        assert_eq!(engine.apply("Office Meeting at 9"), "office meeting at 9");
    }
}
