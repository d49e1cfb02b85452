use unicode_segmentation::UnicodeSegmentation;

use crate::token::{Token, Tokens};

pub trait TextTokenizer {
    fn tokenize<T: AsRef<str>>(&self, text: T) -> Tokens;
}

/// Splits text on Unicode word boundaries (UAX #29), lowercases each word
/// and keeps only fully alphabetic units. Digits, punctuation fragments and
/// mixed alphanumerics never reach the rest of the pipeline.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeWord;

impl UnicodeWord {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextTokenizer for UnicodeWord {
    fn tokenize<T: AsRef<str>>(&self, text: T) -> Tokens {
        text.as_ref()
            .unicode_words()
            .filter(|word| word.chars().all(char::is_alphabetic))
            .map(|word| Token::from(word.to_lowercase()))
            .collect()
    }
}
