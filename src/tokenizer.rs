//! Tokenization and small word-shape helpers
//!
//! The tokenizer pads the sentence punctuation marks `. ! ? , ; :` with
//! spaces, collapses whitespace and splits the result into tokens. A token
//! is a word only if it consists of ASCII letters and apostrophes; anything
//! else passes through the rest of the pipeline untranslated.

/// Punctuation marks that are split into their own tokens.
pub const PUNCTUATION: &[char] = &['.', '!', '?', ',', ';', ':'];

/// A single unit of input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// ASCII letters and apostrophes only; eligible for translation.
    Word(String),
    /// One of `. ! ? , ; :`.
    Punct(char),
    /// Anything else (digits, symbols, mixed fragments); passed through.
    Other(String),
}

impl Token {
    /// Consume the token and return its literal text.
    pub fn into_text(self) -> String {
        match self {
            Token::Word(word) => word,
            Token::Punct(mark) => mark.to_string(),
            Token::Other(text) => text,
        }
    }
}

/// Split text into word, punctuation and other tokens.
///
/// Whitespace runs collapse away; relative token order is preserved.
///
/// # Example
/// ```ignore
/// let tokens = tokenize("hello, world");
/// assert_eq!(tokens.len(), 3); // "hello" "," "world"
/// ```
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut padded = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        if PUNCTUATION.contains(&c) {
            padded.push(' ');
            padded.push(c);
            padded.push(' ');
        } else {
            padded.push(c);
        }
    }

    padded.split_whitespace().map(classify).collect()
}

fn classify(piece: &str) -> Token {
    if is_word(piece) {
        return Token::Word(piece.to_string());
    }
    let mut chars = piece.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if PUNCTUATION.contains(&c) => Token::Punct(c),
        _ => Token::Other(piece.to_string()),
    }
}

/// A word is ASCII letters and apostrophes, nothing else.
pub fn is_word(piece: &str) -> bool {
    !piece.is_empty()
        && piece
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c == '\'')
}

/// Light plural-to-singular heuristic for lowercase English words:
/// `ies` → `y` when longer than three characters, otherwise a trailing
/// `s` is stripped unless the word ends in `ss`.
pub fn singularize(word: &str) -> String {
    if word.ends_with("ies") && word.len() > 3 {
        return format!("{}y", &word[..word.len() - 3]);
    }
    if word.ends_with('s') && word.len() > 3 && !word.ends_with("ss") {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

/// Collapse whitespace runs to single spaces and trim both ends.
pub fn normalize_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_punctuation() {
        let tokens = tokenize("hello, world!");
        assert_eq!(
            tokens,
            vec![
                Token::Word("hello".to_string()),
                Token::Punct(','),
                Token::Word("world".to_string()),
                Token::Punct('!'),
            ]
        );
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        let tokens = tokenize("  one   two\t three \n");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2], Token::Word("three".to_string()));
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_apostrophe_words_are_words() {
        assert_eq!(
            tokenize("can't"),
            vec![Token::Word("can't".to_string())]
        );
    }

    #[test]
    fn test_non_words_pass_through_as_other() {
        let tokens = tokenize("room 42b @ 9:30");
        assert!(tokens.contains(&Token::Other("42b".to_string())));
        assert!(tokens.contains(&Token::Other("@".to_string())));
        // The colon inside "9:30" is padded and split out.
        assert!(tokens.contains(&Token::Punct(':')));
        assert!(tokens.contains(&Token::Other("9".to_string())));
    }

    #[test]
    fn test_is_word() {
        assert!(is_word("hello"));
        assert!(is_word("can't"));
        assert!(!is_word("hello1"));
        assert!(!is_word("a-b"));
        assert!(!is_word(""));
    }

    #[test]
    fn test_singularize() {
        assert_eq!(singularize("stories"), "story");
        assert_eq!(singularize("meetings"), "meeting");
        assert_eq!(singularize("class"), "class");
        assert_eq!(singularize("bus"), "bus");
        assert_eq!(singularize("ties"), "ty");
        assert_eq!(singularize("go"), "go");
    }

    #[test]
    fn test_normalize_spaces() {
        assert_eq!(normalize_spaces("  a  b \t c "), "a b c");
        assert_eq!(normalize_spaces(""), "");
    }
}
