//! Conversion configuration and keep-English set composition

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::dictionary;

/// Per-call conversion settings.
///
/// `strength` is a 0-100 dial controlling how aggressively English words
/// are replaced; values above 100 are clamped at the boundary and behave
/// like 100. The defaults mirror the original converter's initial control
/// state: strength 65, keep English nouns, ki/lo/tho postpositions on,
/// slang and polite endings off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// How aggressively to translate, 0-100.
    pub strength: u8,
    /// Keep common English nouns (office, meeting, ...) untranslated.
    pub keep_english_nouns: bool,
    /// Append the polite "andi" ending.
    pub polite_mode: bool,
    /// Rewrite standalone to/in/with into ki/lo/tho.
    pub add_postpositions: bool,
    /// Add casual Telangana "ra" endings.
    pub add_telangana_slang: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            strength: 65,
            keep_english_nouns: true,
            polite_mode: false,
            add_postpositions: true,
            add_telangana_slang: false,
        }
    }
}

impl ConversionConfig {
    /// Set the strength, clamped to the documented 0-100 range.
    pub fn with_strength(mut self, strength: u8) -> Self {
        self.strength = strength.min(100);
        self
    }
}

/// Compose the runtime keep-English set: the fixed base set plus a
/// user-supplied comma-separated list (entries trimmed, lowercased, empty
/// entries discarded).
///
/// # Example
/// ```ignore
/// let keep = compose_keep_english("ElderMate, GATE, IIT");
/// assert!(keep.contains("eldermate"));
/// assert!(keep.contains("office")); // from the base set
/// ```
pub fn compose_keep_english(extra: &str) -> HashSet<String> {
    let mut set = dictionary::default_keep_english();
    for entry in extra.split(',') {
        let word = entry.trim().to_lowercase();
        if !word.is_empty() {
            set.insert(word);
        }
    }
    set
}

/// Load a `ConversionConfig` from a JSON file.
///
/// Missing fields take their defaults, so a partial file like
/// `{"strength": 90, "polite_mode": true}` is valid.
///
/// # Errors
/// - File not found or unreadable
/// - Invalid JSON or wrong field types
pub fn load_config_from_file(path: &Path) -> Result<ConversionConfig, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config '{}': {}", path.display(), e))?;

    let config: ConversionConfig = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse config '{}': {}", path.display(), e))?;

    let strength = config.strength;
    Ok(config.with_strength(strength))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_controls() {
        let config = ConversionConfig::default();
        assert_eq!(config.strength, 65);
        assert!(config.keep_english_nouns);
        assert!(config.add_postpositions);
        assert!(!config.polite_mode);
        assert!(!config.add_telangana_slang);
    }

    #[test]
    fn test_strength_is_clamped() {
        let config = ConversionConfig::default().with_strength(250);
        assert_eq!(config.strength, 100);
        let config = ConversionConfig::default().with_strength(0);
        assert_eq!(config.strength, 0);
    }

    #[test]
    fn test_compose_keep_english_merges_and_normalizes() {
        let keep = compose_keep_english("ElderMate,  GATE , ,IIT,");
        assert!(keep.contains("eldermate"));
        assert!(keep.contains("gate"));
        assert!(keep.contains("iit"));
        assert!(keep.contains("office"));
        assert!(!keep.contains(""));
    }

    #[test]
    fn test_compose_keep_english_empty_extra() {
        let keep = compose_keep_english("");
        assert_eq!(keep, dictionary::default_keep_english());
    }

    #[test]
    fn test_partial_json_config() {
        let config: ConversionConfig =
            serde_json::from_str(r#"{"strength": 90, "polite_mode": true}"#).unwrap();
        assert_eq!(config.strength, 90);
        assert!(config.polite_mode);
        // Untouched fields keep their defaults.
        assert!(config.keep_english_nouns);
        assert!(!config.add_telangana_slang);
    }
}
