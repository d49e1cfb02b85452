use hashbrown::HashSet;

use crate::token::Tokens;

pub trait TokenFilter {
    fn apply(&self, tokens: &mut Tokens);
}

/// An immutable per-language stopword set. Built once by the resource
/// provider, read-only afterwards.
#[derive(Clone, Debug, Default)]
pub struct StopwordSet(HashSet<String>);

impl StopwordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(words.into_iter().map(Into::into).collect())
    }

    /// Unions in additional exclusions, e.g. the hand-picked Russian
    /// pronoun forms missing from the generic stoplist.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.extend(words.into_iter().map(Into::into));
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Removes stopwords in place, preserving the relative order of the
/// surviving tokens.
#[derive(Clone, Debug)]
pub struct StopwordFilter {
    set: StopwordSet,
}

impl StopwordFilter {
    pub fn new(set: StopwordSet) -> Self {
        Self { set }
    }
}

impl TokenFilter for StopwordFilter {
    fn apply(&self, tokens: &mut Tokens) {
        tokens.retain(|token| !self.set.contains(token.as_str()))
    }
}
