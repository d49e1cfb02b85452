use std::{cmp::Ordering, sync::OnceLock};

use hashbrown::HashMap;
use thiserror::Error;

use super::Lemmatize;

/// The analyzer's only failure modes. Anything else is a successful parse
/// with at least one interpretation.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("token contains non-Cyrillic characters")]
    NonCyrillic,

    #[error("no morphological interpretation matches the token")]
    UnknownWord,
}

/// One grammatical reading of a surface form: its dictionary (normal) form
/// and the share of probability mass assigned to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Interpretation {
    pub normal_form: String,
    pub score: f32,
}

/// Weighted inflection paradigms for the productive noun, adjective and
/// verb patterns: (surface suffix, normal-form suffix, raw weight).
/// Competing readings of one surface form are ranked by weight; table
/// order breaks exact weight ties.
const PARADIGMS: &[(&str, &str, f32)] = &[
    // Adjectives.
    ("ого", "ый", 0.60),
    ("его", "ий", 0.60),
    ("ыми", "ый", 0.60),
    ("ими", "ий", 0.60),
    ("ая", "ый", 0.58),
    ("яя", "ий", 0.58),
    ("ые", "ый", 0.58),
    ("ие", "ий", 0.58),
    ("ому", "ый", 0.55),
    ("ему", "ий", 0.55),
    ("ое", "ый", 0.55),
    ("ее", "ий", 0.55),
    ("ых", "ый", 0.55),
    ("их", "ий", 0.55),
    ("ым", "ый", 0.50),
    ("им", "ий", 0.50),
    ("ую", "ый", 0.50),
    ("юю", "ий", 0.50),
    // Verbs, present and past.
    ("ается", "аться", 0.55),
    ("ает", "ать", 0.55),
    ("ают", "ать", 0.55),
    ("аешь", "ать", 0.55),
    ("аем", "ать", 0.50),
    ("аете", "ать", 0.50),
    ("ует", "овать", 0.50),
    ("уют", "овать", 0.50),
    ("ала", "ать", 0.50),
    ("али", "ать", 0.50),
    ("ал", "ать", 0.50),
    ("ила", "ить", 0.50),
    ("или", "ить", 0.50),
    ("ил", "ить", 0.50),
    ("ела", "еть", 0.48),
    ("ели", "еть", 0.48),
    ("ел", "еть", 0.45),
    ("ало", "ать", 0.45),
    ("ило", "ить", 0.45),
    ("ит", "ить", 0.40),
    ("ят", "ить", 0.40),
    ("аю", "ать", 0.40),
    // Nouns.
    ("ами", "а", 0.55),
    ("ями", "я", 0.55),
    ("ов", "", 0.50),
    ("ы", "а", 0.50),
    ("ам", "а", 0.45),
    ("ах", "а", 0.45),
    ("ям", "я", 0.45),
    ("ях", "я", 0.45),
    ("ой", "а", 0.45),
    ("ев", "", 0.45),
    ("и", "а", 0.45),
    ("ом", "", 0.42),
    ("ей", "ь", 0.40),
    ("ою", "а", 0.35),
    ("у", "а", 0.35),
    ("ю", "я", 0.35),
    ("и", "я", 0.35),
    ("е", "а", 0.30),
];

/// Stem must keep at least this many characters for a paradigm to apply.
const MIN_STEM_CHARS: usize = 2;

/// Irregular forms the suffix paradigms cannot reach. Checked first and
/// weighted above any paradigm, like a dictionary hit in pymorphy.
fn irregular() -> &'static HashMap<&'static str, &'static str> {
    static MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| {
        [
            ("был", "быть"),
            ("была", "быть"),
            ("были", "быть"),
            ("было", "быть"),
            ("дети", "ребёнок"),
            ("детей", "ребёнок"),
            ("детям", "ребёнок"),
            ("люди", "человек"),
            ("людей", "человек"),
            ("людям", "человек"),
            ("шёл", "идти"),
            ("шла", "идти"),
            ("шли", "идти"),
            ("шло", "идти"),
        ]
        .iter()
        .copied()
        .collect::<HashMap<_, _>>()
    })
}

const DICTIONARY_WEIGHT: f32 = 1.0;

fn is_cyrillic(ch: char) -> bool {
    matches!(ch, 'а'..='я' | 'ё')
}

/// Probabilistic morphological analyzer over the embedded model. Produces
/// every applicable interpretation of a lowercase Cyrillic token, ranked
/// by normalized score.
#[derive(Clone, Copy, Debug, Default)]
pub struct MorphAnalyzer;

impl MorphAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(&self, word: &str) -> Result<Vec<Interpretation>, ParseError> {
        if word.is_empty() || !word.chars().all(is_cyrillic) {
            return Err(ParseError::NonCyrillic);
        }

        let mut candidates = Vec::new();

        if let Some(normal) = irregular().get(word) {
            candidates.push(((*normal).to_string(), DICTIONARY_WEIGHT));
        }

        for (suffix, normal, weight) in PARADIGMS {
            let Some(stem) = word.strip_suffix(suffix) else {
                continue;
            };

            if stem.chars().count() < MIN_STEM_CHARS {
                continue;
            }

            candidates.push((format!("{stem}{normal}"), *weight));
        }

        if candidates.is_empty() {
            return Err(ParseError::UnknownWord);
        }

        let total: f32 = candidates.iter().map(|(_, weight)| weight).sum();
        let mut interpretations = candidates
            .into_iter()
            .map(|(normal_form, weight)| Interpretation {
                normal_form,
                score: weight / total,
            })
            .collect::<Vec<_>>();

        // Stable sort: equal scores keep table order.
        interpretations.sort_by(|a, b| {
            b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
        });

        Ok(interpretations)
    }
}

/// The Russian variant: take the highest-scoring interpretation's normal
/// form; a token the analyzer cannot parse passes through unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct Russian {
    analyzer: MorphAnalyzer,
}

impl Russian {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Lemmatize for Russian {
    fn lemmatize(&self, token: &str) -> String {
        match self.analyzer.parse(token) {
            Ok(interpretations) => interpretations
                .into_iter()
                .next()
                .map(|interpretation| interpretation.normal_form)
                .unwrap_or_else(|| token.to_string()),
            Err(_) => token.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MorphAnalyzer, ParseError, Russian};
    use crate::lemma::Lemmatize;

    #[test]
    fn test_analyzer_ranks_interpretations() {
        let analyzer = MorphAnalyzer::new();
        let interpretations = analyzer.parse("книги").unwrap();

        assert!(interpretations.len() > 1);
        assert_eq!(interpretations[0].normal_form, "книга");

        let total: f32 = interpretations.iter().map(|i| i.score).sum();
        assert!((total - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_analyzer_dictionary_beats_paradigms() {
        let analyzer = MorphAnalyzer::new();
        let interpretations = analyzer.parse("были").unwrap();
        assert_eq!(interpretations[0].normal_form, "быть");
    }

    #[test]
    fn test_analyzer_rejects_non_cyrillic() {
        let analyzer = MorphAnalyzer::new();
        assert_eq!(analyzer.parse("cat"), Err(ParseError::NonCyrillic));
        assert_eq!(analyzer.parse(""), Err(ParseError::NonCyrillic));
    }

    #[test]
    fn test_analyzer_unknown_word() {
        let analyzer = MorphAnalyzer::new();
        assert_eq!(analyzer.parse("бдыщ"), Err(ParseError::UnknownWord));
    }

    #[test]
    fn test_russian_lemmatizes_inflected_forms() {
        let lemmatizer = Russian::new();

        assert_eq!(lemmatizer.lemmatize("книги"), "книга");
        assert_eq!(lemmatizer.lemmatize("кошку"), "кошка");
        assert_eq!(lemmatizer.lemmatize("сидела"), "сидеть");
        assert_eq!(lemmatizer.lemmatize("зелёные"), "зелёный");
        assert_eq!(lemmatizer.lemmatize("быстрого"), "быстрый");
        assert_eq!(lemmatizer.lemmatize("котов"), "кот");
        assert_eq!(lemmatizer.lemmatize("людей"), "человек");
    }

    #[test]
    fn test_russian_falls_back_to_surface_form() {
        let lemmatizer = Russian::new();

        // Unknown to the model, or not Cyrillic at all.
        assert_eq!(lemmatizer.lemmatize("бдыщ"), "бдыщ");
        assert_eq!(lemmatizer.lemmatize("стол"), "стол");
        assert_eq!(lemmatizer.lemmatize("xyz"), "xyz");
    }
}
