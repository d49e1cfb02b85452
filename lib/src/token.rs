use std::{ops::Deref, slice::Iter};

/// A single word unit produced by the tokenizer: lowercase, alphabetic only.
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq)]
pub struct Token(String);

impl Token {
    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Token {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Token> for String {
    fn from(value: Token) -> Self {
        value.0
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Token(value)
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Token(String::from(value))
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An ordered token sequence. Relative order is preserved by every
/// pipeline stage that touches it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tokens(Vec<Token>);

impl Tokens {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.0.push(token)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, Token> {
        self.0.iter()
    }

    #[inline]
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&Token) -> bool,
    {
        self.0.retain(f)
    }
}

impl From<Vec<Token>> for Tokens {
    fn from(value: Vec<Token>) -> Self {
        Tokens(value)
    }
}

impl FromIterator<Token> for Tokens {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Tokens(iter.into_iter().collect())
    }
}

impl IntoIterator for Tokens {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[macro_export]
macro_rules! tokens {
    ( $( $token:expr ),* $(,)? ) => {{
        $crate::token::Tokens::from(vec![
            $( $crate::token::Token::from($token) ),*
        ])
    }};
}
