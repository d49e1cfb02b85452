mod english;
mod russian;

pub use {
    english::English,
    russian::{Interpretation, MorphAnalyzer, ParseError, Russian},
};

use crate::language::Language;

/// The single contract both language variants implement: one token in,
/// exactly one non-empty lemma out. Total; a form unknown to the backing
/// dictionary or model comes back unchanged.
pub trait Lemmatize {
    fn lemmatize(&self, token: &str) -> String;
}

/// Language dispatch, selected once when the pipeline is built. Everything
/// downstream of this point is language-agnostic.
#[derive(Clone, Debug)]
pub enum Lemmatizer {
    English(English),
    Russian(Russian),
}

impl Lemmatizer {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::English => Lemmatizer::English(English::new()),
            Language::Russian => Lemmatizer::Russian(Russian::new()),
        }
    }

    pub fn language(&self) -> Language {
        match self {
            Lemmatizer::English(_) => Language::English,
            Lemmatizer::Russian(_) => Language::Russian,
        }
    }
}

impl Lemmatize for Lemmatizer {
    fn lemmatize(&self, token: &str) -> String {
        match self {
            Lemmatizer::English(lemmatizer) => lemmatizer.lemmatize(token),
            Lemmatizer::Russian(lemmatizer) => lemmatizer.lemmatize(token),
        }
    }
}
