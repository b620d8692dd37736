//! Optional styling applied after phrase substitution
//!
//! Three opt-in touches plus a mandatory cleanup, in fixed order:
//! postposition rewriting (to/in/with -> ki/lo/tho), casual Telangana
//! "ra" endings, the polite "andi" ending, and finally punctuation
//! spacing cleanup with whitespace normalization.

use regex::Regex;

use crate::config::ConversionConfig;
use crate::tokenizer::normalize_spaces;

/// Statements at most this many whitespace-delimited pieces long get the
/// casual " ra" appended (when slang is enabled and no question mark is
/// present).
const SHORT_STATEMENT_WORDS: usize = 7;

/// Compiled style rules; build once, reuse across conversions.
pub struct StylePass {
    postpositions: Vec<(Regex, &'static str)>,
    question_guard: Regex,
    statement_guard: Regex,
    punct_spacing: Regex,
}

impl StylePass {
    pub fn new() -> Self {
        let postpositions = [("to", "ki"), ("in", "lo"), ("with", "tho")]
            .iter()
            .map(|(word, replacement)| {
                // Static patterns, compilation cannot fail.
                (Regex::new(&format!(r"\b{word}\b")).unwrap(), *replacement)
            })
            .collect();
        Self {
            postpositions,
            // "bro" already counts as a casual qualifier for questions.
            question_guard: Regex::new(r"\b(ra|rey|bro)\b").unwrap(),
            statement_guard: Regex::new(r"\b(ra|rey)\b").unwrap(),
            punct_spacing: Regex::new(r"\s+([.!?,;:])").unwrap(),
        }
    }

    /// Apply the enabled style steps and the final cleanup.
    pub fn apply(&self, text: &str, config: &ConversionConfig) -> String {
        let mut result = text.to_string();

        if config.add_postpositions {
            for (pattern, replacement) in &self.postpositions {
                result = pattern.replace_all(&result, *replacement).into_owned();
            }
        }

        if config.add_telangana_slang {
            if result.contains('?') {
                if !self.question_guard.is_match(&result) {
                    result = result.replace('?', " ra?");
                }
            } else if result.split_whitespace().count() <= SHORT_STATEMENT_WORDS
                && !self.statement_guard.is_match(&result)
            {
                result.push_str(" ra");
            }
        }

        if config.polite_mode && ends_with_letter(&result) {
            result = format!("{} andi", result.trim());
        }

        let result = self.punct_spacing.replace_all(&result, "$1");
        normalize_spaces(&result)
    }
}

impl Default for StylePass {
    fn default() -> Self {
        Self::new()
    }
}

/// True when the text ends, ignoring trailing whitespace, with an ASCII
/// letter or apostrophe.
fn ends_with_letter(text: &str) -> bool {
    text.trim_end()
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '\'')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slang_config() -> ConversionConfig {
        let mut config = ConversionConfig::default();
        config.add_telangana_slang = true;
        config
    }

    #[test]
    fn test_postpositions_whole_word_only() {
        let pass = StylePass::new();
        let config = ConversionConfig::default();
        assert_eq!(
            pass.apply("go to office tomorrow", &config),
            "go ki office tomorrow"
        );
        assert_eq!(pass.apply("meeting lo undi with", &config), "meeting lo undi tho");
        // Substrings are never rewritten: "into", "within" stay intact.
        assert_eq!(pass.apply("dive into it within", &config), "dive into it within");
    }

    #[test]
    fn test_postpositions_disabled() {
        let pass = StylePass::new();
        let mut config = ConversionConfig::default();
        config.add_postpositions = false;
        assert_eq!(pass.apply("go to office", &config), "go to office");
    }

    #[test]
    fn test_slang_question_gets_ra() {
        let pass = StylePass::new();
        assert_eq!(
            pass.apply("em chestunnav ?", &slang_config()),
            "em chestunnav ra?"
        );
    }

    #[test]
    fn test_slang_question_not_duplicated() {
        let pass = StylePass::new();
        // "bro" already satisfies the standalone ra/rey/bro guard.
        assert_eq!(
            pass.apply("em chestunnav bro ?", &slang_config()),
            "em chestunnav bro?"
        );
        assert_eq!(
            pass.apply("em chestunnav ra ?", &slang_config()),
            "em chestunnav ra?"
        );
    }

    #[test]
    fn test_slang_guard_is_whole_word() {
        let pass = StylePass::new();
        // "nidra" contains "ra" but is not a standalone qualifier.
        assert_eq!(
            pass.apply("nidra vastunda ?", &slang_config()),
            "nidra vastunda ra?"
        );
    }

    #[test]
    fn test_slang_short_statement_appended() {
        let pass = StylePass::new();
        assert_eq!(pass.apply("nenu veltunna", &slang_config()), "nenu veltunna ra");
    }

    #[test]
    fn test_slang_long_statement_untouched() {
        let pass = StylePass::new();
        let long = "one two three four five six seven eight";
        assert_eq!(pass.apply(long, &slang_config()), long);
    }

    #[test]
    fn test_polite_ending_after_letter() {
        let pass = StylePass::new();
        let mut config = ConversionConfig::default();
        config.polite_mode = true;
        assert_eq!(pass.apply("chala thanks", &config), "chala thanks andi");
        // After punctuation, no "andi".
        assert_eq!(pass.apply("chala thanks .", &config), "chala thanks.");
    }

    #[test]
    fn test_cleanup_removes_space_before_punctuation() {
        let pass = StylePass::new();
        let config = ConversionConfig::default();
        assert_eq!(
            pass.apply("nenu veltunna , sare . ", &config),
            "nenu veltunna, sare."
        );
    }
}
