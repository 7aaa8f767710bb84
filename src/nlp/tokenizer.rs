//! Tokenization
//!
//! Whitespace normalization and a small Unicode-aware word tokenizer.
//! Words are maximal runs of alphanumeric characters, optionally joined by
//! a single inner apostrophe or hyphen ("don't", "well-known"). Every other
//! non-space character becomes its own punctuation token.

use crate::types::Token;

/// Collapse every run of whitespace into one space and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Tokenizer producing [`Token`]s with byte offsets.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Split `text` into word and punctuation tokens.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut chars = text.char_indices().peekable();

        while let Some((start, ch)) = chars.next() {
            if ch.is_whitespace() {
                continue;
            }

            if !ch.is_alphanumeric() {
                tokens.push(Token::new(ch.to_string(), start, start + ch.len_utf8()));
                continue;
            }

            let mut end = start + ch.len_utf8();
            while let Some(&(idx, next)) = chars.peek() {
                if next.is_alphanumeric() {
                    end = idx + next.len_utf8();
                    chars.next();
                } else if is_joiner(next) && followed_by_alnum(&text[idx + next.len_utf8()..]) {
                    chars.next();
                    end = idx + next.len_utf8();
                } else {
                    break;
                }
            }
            tokens.push(Token::new(&text[start..end], start, end));
        }

        tokens
    }

    /// Lowercased word tokens only (punctuation dropped).
    pub fn lowercase_words(&self, text: &str) -> Vec<String> {
        self.tokenize(text)
            .into_iter()
            .filter(Token::is_word)
            .map(|t| t.text.to_lowercase())
            .collect()
    }
}

fn is_joiner(ch: char) -> bool {
    matches!(ch, '\'' | '’' | '-')
}

fn followed_by_alnum(rest: &str) -> bool {
    rest.chars().next().is_some_and(char::is_alphanumeric)
}
