//! The built-in Telangana-style Tenglish dictionary
//!
//! This module holds the hand-authored ruleset data (base words, fixed
//! phrases, kept English nouns, verb bank) and expands it into the final
//! word/phrase mapping used by the conversion pipeline. The expansion is
//! pure and deterministic: `build_dictionary` returns the same mapping on
//! every call, so callers build it once and share it read-only.

use std::collections::{HashMap, HashSet};

/// Core base words: pronouns, auxiliaries, connectors, verb roots,
/// question words, time words, adjectives and casual vocabulary.
const BASE_WORDS: &[(&str, &str)] = &[
    // Pronouns
    ("i", "nenu"),
    ("me", "nannu"),
    ("my", "naa"),
    ("mine", "naadi"),
    ("you", "nuvvu"),
    ("your", "nee"),
    ("yours", "needi"),
    ("he", "vaadu"),
    ("him", "vaadini"),
    ("his", "vaadi"),
    ("she", "aame"),
    ("her", "aameni"),
    ("hers", "aame di"),
    ("we", "manam"),
    ("us", "manalni"),
    ("our", "maa"),
    ("they", "vaallu"),
    ("them", "vaallani"),
    ("their", "vaalla"),
    // Auxiliaries / state
    ("am", "unna"),
    ("is", "undi"),
    ("are", "unnaru"),
    ("was", "unde"),
    ("were", "unnaru"),
    ("be", "undu"),
    // Connectors and postpositions
    ("and", "inka"),
    ("but", "kani"),
    ("because", "endukante"),
    ("so", "andukani"),
    ("then", "appudu"),
    ("to", "ki"),
    ("in", "lo"),
    ("with", "tho"),
    ("on", "meeda"),
    ("at", "daggara"),
    ("from", "nundi"),
    ("for", "kosam"),
    ("about", "gurinchi"),
    ("before", "mundhu"),
    ("after", "tarvata"),
    // Common verb roots (the verb bank below overlays richer forms)
    ("go", "ellu"),
    ("come", "ra"),
    ("do", "chey"),
    ("eat", "tinu"),
    ("drink", "taagu"),
    ("sleep", "nidra"),
    ("work", "pani"),
    ("study", "chaduvu"),
    ("wait", "agu"),
    ("stop", "aapu"),
    ("start", "start"),
    ("see", "choodu"),
    ("watch", "choodu"),
    ("look", "choodu"),
    ("say", "cheppu"),
    ("tell", "cheppu"),
    ("give", "ivvu"),
    ("take", "teesko"),
    ("help", "help"),
    // Question words
    ("what", "em"),
    ("why", "enduku"),
    ("how", "ela"),
    ("where", "ekkada"),
    ("when", "eppudu"),
    ("who", "evaru"),
    ("which", "edi"),
    // Time
    ("now", "ippudu"),
    ("today", "ivala"),
    ("tomorrow", "repu"),
    ("yesterday", "ninna"),
    ("later", "tarvata"),
    ("always", "eppudu"),
    ("never", "eppudu kaadu"),
    // Adjectives / misc
    ("good", "bagundi"),
    ("bad", "baaledu"),
    ("fine", "bagundi"),
    ("very", "chala"),
    ("ok", "sare"),
    ("okay", "sare"),
    ("yes", "avunu"),
    ("no", "ledu"),
    // Casual / slang / common
    ("bro", "bro"),
    ("dude", "bro"),
    ("friend", "friend"),
    ("thanks", "thanks"),
    ("sorry", "sorry"),
    ("please", "please"),
    ("hello", "hello"),
    ("hi", "hi"),
    ("bye", "bye"),
    ("late", "late"),
    ("fast", "fast"),
    ("slow", "slow"),
];

/// Exact-match multiword phrases overlaid on the base words. These are
/// picked up by the multiword substitution pass after token translation.
const FIXED_PHRASES: &[(&str, &str)] = &[
    ("i am", "nenu unna"),
    ("i'm", "nenu"),
    ("you are", "nuvvu"),
    ("you're", "nuvvu"),
    ("what are you doing", "em chestunnav"),
    ("what are u doing", "em chestunnav"),
    ("how are you", "ela unnav"),
];

/// Common English nouns intentionally kept as English in the dictionary
/// itself (Hyderabad code-mix style). These map to themselves; the runtime
/// keep-English set in [`default_keep_english`] overlaps with this list and
/// both mechanisms must agree.
const KEEP_NOUNS: &[&str] = &[
    "office",
    "meeting",
    "college",
    "class",
    "project",
    "assignment",
    "deadline",
    "phone",
    "mobile",
    "laptop",
    "wifi",
    "internet",
    "email",
    "app",
    "gym",
    "workout",
    "diet",
    "protein",
    "training",
    "practice",
    "youtube",
    "instagram",
    "whatsapp",
    "google",
    "bus",
    "train",
    "bike",
    "car",
    "home",
    "room",
    "food",
    "water",
    "money",
    "time",
    "gate",
    "iit",
    "eldermate",
    "raspberry",
    "pi",
];

/// One verb bank entry: an English stem and its Telangana casual forms.
struct VerbForms {
    english: &'static str,
    root: &'static str,
    continuous: &'static str,
    past: &'static str,
    future: &'static str,
}

const fn verb(
    english: &'static str,
    root: &'static str,
    continuous: &'static str,
    past: &'static str,
    future: &'static str,
) -> VerbForms {
    VerbForms {
        english,
        root,
        continuous,
        past,
        future,
    }
}

/// English verb stems with their Telugu casual conjugations. Entries that
/// share a surface form ("see" and "watch" both become "choodu") overwrite
/// each other's derived keys in build order; both produce the same
/// replacement, so the overwrite is intentional.
const VERB_BANK: &[VerbForms] = &[
    verb("go", "ellu", "veltunna", "vellaa", "velta"),
    verb("come", "ra", "vastunna", "vachaa", "vasta"),
    verb("do", "chey", "chestunna", "chesaa", "chestaa"),
    verb("eat", "tinu", "tintunna", "tinna", "tintaa"),
    verb("drink", "taagu", "taagutunna", "taaga", "taagtaa"),
    verb("sleep", "nidra", "nidra potunna", "nidra poya", "nidra potaa"),
    verb("study", "chaduvu", "chaduvutunna", "chadivaa", "chaduvutaa"),
    verb("work", "pani", "panichestunna", "pani chesaa", "panichestaa"),
    verb("wait", "agu", "agutunna", "agaa", "aguta"),
    verb("stop", "aapu", "aapestunna", "aapesaa", "aapestaa"),
    verb("see", "choodu", "chustunna", "chusaa", "chustaa"),
    verb("watch", "choodu", "chustunna", "chusaa", "chustaa"),
    verb("tell", "cheppu", "cheptunna", "cheppaa", "cheptaa"),
    verb("say", "cheppu", "cheptunna", "cheppaa", "cheptaa"),
    verb("give", "ivvu", "istunna", "ichaa", "istaa"),
    verb("take", "teesko", "teesukuntunna", "teeskunna", "teeskuntaa"),
    verb("help", "help", "help chestunna", "help chesaa", "help chestaa"),
];

/// Irregular English past forms that override the `<verb>ed` fallback.
const IRREGULAR_PAST: &[(&str, &str)] = &[
    ("go", "went"),
    ("eat", "ate"),
    ("drink", "drank"),
    ("sleep", "slept"),
    ("take", "took"),
    ("come", "came"),
    ("do", "did"),
];

/// Structural words that stay eligible for translation even at low
/// strength: pronouns, auxiliaries, question words and common connectors.
const GLUE_WORDS: &[&str] = &[
    "i", "you", "me", "my", "your", "is", "am", "are", "was", "were", "no", "yes", "now", "today",
    "tomorrow", "yesterday", "what", "why", "how", "where", "when", "who", "and", "but", "because",
    "so", "then", "please", "sorry", "very", "to", "in", "with", "on", "at", "from", "for", "about",
    "before", "after",
];

/// English nouns and brand-like words that must never be translated when
/// keep-English-nouns is enabled. Callers extend this base set with their
/// own comma-separated words, see [`crate::config::compose_keep_english`].
const KEEP_ENGLISH_DEFAULT: &[&str] = &[
    "wifi",
    "internet",
    "phone",
    "mobile",
    "laptop",
    "app",
    "email",
    "office",
    "meeting",
    "project",
    "assignment",
    "deadline",
    "class",
    "college",
    "gym",
    "workout",
    "diet",
    "protein",
    "training",
    "practice",
    "youtube",
    "instagram",
    "whatsapp",
    "google",
    "bus",
    "train",
    "bike",
    "car",
    "gate",
    "iit",
    "eldermate",
    "raspberry",
    "pi",
    "camera",
    "robot",
];

/// Build the full Tenglish dictionary.
///
/// Starts from the base words, overlays the fixed phrases and the kept
/// English nouns, then derives verb forms for every verb bank entry:
///
/// - `<verb>` → root form
/// - `<verb>ing` → continuous form (both the naive concatenation and the
///   real English gerund with trailing-`e` dropped; the naive key is a
///   harmless fallback)
/// - `<verb>ed` → past form, with irregular surfaces (went, ate, ...)
///   overriding the fallback
/// - `will <verb>` → future form
/// - `can <verb>` → `<root> galanu`; `cannot <verb>` / `can't <verb>` →
///   `<root> ledu`
/// - `want to <verb>` / `need to <verb>` / `have to <verb>` →
///   `<root> kavali`; `must <verb>` → `<root> tappadu`
/// - `please <verb>` → `please <root>`
///
/// # Returns
/// A mapping from lowercase English words and phrases to their Tenglish
/// replacements. Identical on every call.
pub fn build_dictionary() -> HashMap<String, String> {
    let mut dict: HashMap<String, String> = HashMap::new();

    for (word, replacement) in BASE_WORDS {
        dict.insert((*word).to_string(), (*replacement).to_string());
    }

    for (phrase, replacement) in FIXED_PHRASES {
        dict.insert((*phrase).to_string(), (*replacement).to_string());
    }

    for noun in KEEP_NOUNS {
        dict.insert((*noun).to_string(), (*noun).to_string());
    }

    for forms in VERB_BANK {
        let stem = forms.english;
        dict.insert(stem.to_string(), forms.root.to_string());

        // Naive gerund first, then the real English one (come -> coming).
        dict.insert(format!("{stem}ing"), forms.continuous.to_string());
        let gerund = match stem.strip_suffix('e') {
            Some(short) => format!("{short}ing"),
            None => format!("{stem}ing"),
        };
        dict.insert(gerund, forms.continuous.to_string());

        dict.insert(format!("{stem}ed"), forms.past.to_string());
        for (verb, irregular) in IRREGULAR_PAST {
            if *verb == stem {
                dict.insert((*irregular).to_string(), forms.past.to_string());
            }
        }

        dict.insert(format!("will {stem}"), forms.future.to_string());

        dict.insert(format!("can {stem}"), format!("{} galanu", forms.root));
        dict.insert(format!("cannot {stem}"), format!("{} ledu", forms.root));
        dict.insert(format!("can't {stem}"), format!("{} ledu", forms.root));

        dict.insert(format!("want to {stem}"), format!("{} kavali", forms.root));
        dict.insert(format!("need to {stem}"), format!("{} kavali", forms.root));
        dict.insert(format!("have to {stem}"), format!("{} kavali", forms.root));
        dict.insert(format!("must {stem}"), format!("{} tappadu", forms.root));

        dict.insert(format!("please {stem}"), format!("please {}", forms.root));
    }

    dict
}

/// The base keep-English set consulted at translation time.
pub fn default_keep_english() -> HashSet<String> {
    KEEP_ENGLISH_DEFAULT
        .iter()
        .map(|word| (*word).to_string())
        .collect()
}

/// Whether a lowercase word belongs to the fixed glue set.
pub fn is_glue(word: &str) -> bool {
    GLUE_WORDS.contains(&word)
}
