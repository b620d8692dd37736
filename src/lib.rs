//! Rule-based English to Telangana-style Tenglish conversion.
//!
//! Tenglish is informal Telugu in Roman script code-mixed with English,
//! as casually written in Hyderabad/Telangana: "office ki velta",
//! "chala thanks", "meeting lo unna". The converter is a fixed pipeline:
//! phrase rules, tokenization, strength-gated per-token dictionary lookup,
//! multiword phrase substitution and optional style endings. Fully offline
//! and synchronous; conversion is total over all string inputs.
//!
//! ```ignore
//! use tenglish::{ConversionConfig, TenglishConverter, compose_keep_english};
//!
//! let converter = TenglishConverter::new();
//! let config = ConversionConfig::default();
//! let keep = compose_keep_english("ElderMate, GATE");
//! let out = converter.convert("I am going to office now.", &config, &keep);
//! assert_eq!(out, "Nenu unna veltunna ki office ippudu.");
//! ```
//!
//! Re-running `convert` on its own output is undefined: the pipeline is
//! not idempotent and no round-trip guarantee is made.

use std::collections::{HashMap, HashSet};

pub mod config;
pub mod dictionary;
pub mod multiword;
pub mod phrases;
pub mod style;
pub mod tokenizer;
pub mod translator;

// Re-export the core API for convenient access
pub use config::{ConversionConfig, compose_keep_english};
pub use dictionary::build_dictionary;
pub use multiword::MultiwordPass;
pub use phrases::PhraseRuleEngine;
pub use style::StylePass;
pub use tokenizer::{Token, tokenize};
pub use translator::{STRENGTH_ALWAYS_TRANSLATE, translate_tokens};

/// The build-once converter: owns the dictionary and every compiled
/// pattern pass. Immutable after construction, so one instance can be
/// shared read-only across calls (and across threads).
pub struct TenglishConverter {
    dictionary: HashMap<String, String>,
    phrase_rules: PhraseRuleEngine,
    multiword: MultiwordPass,
    style: StylePass,
}

impl TenglishConverter {
    /// Build the dictionary and compile all substitution passes.
    pub fn new() -> Self {
        let dictionary = build_dictionary();
        let multiword = MultiwordPass::from_dictionary(&dictionary);
        TenglishConverter {
            dictionary,
            phrase_rules: PhraseRuleEngine::new(),
            multiword,
            style: StylePass::new(),
        }
    }

    /// The built dictionary, for callers that want the raw mapping.
    pub fn dictionary(&self) -> &HashMap<String, String> {
        &self.dictionary
    }

    /// Convert English text into Tenglish.
    ///
    /// Empty or whitespace-only input yields an empty string. The keep
    /// set is the caller-composed keep-English set, see
    /// [`compose_keep_english`].
    ///
    /// Pipeline: phrase rules -> tokenize -> per-token translation ->
    /// join -> multiword substitution -> style pass. The phrase rule
    /// engine lowercases wholesale, so as a last step the raw input's
    /// leading capital (if any) is restored onto the output. This applies
    /// even when the output's first word is a keep-English word:
    /// "Office is far" becomes "Office undi far", keeping the sentence
    /// capital rather than forcing keep words to lowercase everywhere.
    pub fn convert(
        &self,
        text: &str,
        config: &ConversionConfig,
        keep_english: &HashSet<String>,
    ) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        let starts_upper = text
            .trim_start()
            .chars()
            .next()
            .is_some_and(|c| c.is_uppercase());

        let phrased = self.phrase_rules.apply(text);
        let tokens = tokenize(&phrased);
        let translated = translate_tokens(tokens, &self.dictionary, keep_english, config);
        let joined = translated.join(" ");
        let substituted = self.multiword.apply(&joined);
        let styled = self.style.apply(&substituted, config);

        if starts_upper {
            translator::capitalize_first(&styled)
        } else {
            styled
        }
    }
}

impl Default for TenglishConverter {
    fn default() -> Self {
        Self::new()
    }
}
