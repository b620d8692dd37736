//! Multiword phrase substitution over the token-translated string
//!
//! After per-token translation is joined back into a single string, every
//! dictionary key containing a space ("will go", "want to sleep", "i am")
//! is substituted case-insensitively with word-boundary anchoring. Keys
//! apply longest first so "want to go" is consumed whole before any
//! shorter overlapping key could bite into it, and each key runs exactly
//! one non-recursive pass over the string.

use regex::{NoExpand, Regex};
use std::collections::HashMap;

/// Compiled multiword substitution rules, longest key first.
pub struct MultiwordPass {
    rules: Vec<(Regex, String)>,
}

impl MultiwordPass {
    /// Extract the multiword keys from a dictionary and compile them.
    ///
    /// Length ties break lexicographically so the rule order (and thus the
    /// whole pass) is deterministic regardless of map iteration order.
    pub fn from_dictionary(dict: &HashMap<String, String>) -> Self {
        let mut keys: Vec<&String> = dict.keys().filter(|key| key.contains(' ')).collect();
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let rules = keys
            .into_iter()
            .map(|key| {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(key));
                // Escaped literal keys, compilation cannot fail.
                (Regex::new(&pattern).unwrap(), dict[key].clone())
            })
            .collect();

        Self { rules }
    }

    /// Substitute every rule once, longest first.
    pub fn apply(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (pattern, replacement) in &self.rules {
            result = pattern
                .replace_all(&result, NoExpand(replacement))
                .into_owned();
        }
        result
    }
}
