use std::sync::OnceLock;

use hashbrown::HashMap;

use super::Lemmatize;

/// Irregular forms consulted before the detachment rules.
fn exceptions() -> &'static HashMap<&'static str, &'static str> {
    static MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| {
        [
            // Surface forms that look plural but are not.
            ("alias", "alias"),
            ("atlas", "atlas"),
            ("bias", "bias"),
            ("canvas", "canvas"),
            ("lens", "lens"),
            // Irregular and suffix-rule-resistant plurals.
            ("cases", "case"),
            ("causes", "cause"),
            ("children", "child"),
            ("courses", "course"),
            ("feet", "foot"),
            ("houses", "house"),
            ("geese", "goose"),
            ("lives", "life"),
            ("men", "man"),
            ("mice", "mouse"),
            ("oxen", "ox"),
            ("people", "person"),
            ("phrases", "phrase"),
            ("teeth", "tooth"),
            ("uses", "use"),
            ("wives", "wife"),
            ("women", "woman"),
        ]
        .iter()
        .copied()
        .collect::<HashMap<_, _>>()
    })
}

/// Noun-biased suffix detachments, longest suffix first so that e.g.
/// "churches" is not clipped by the bare "s" rule.
const DETACHMENTS: &[(&str, &str)] = &[
    ("ches", "ch"),
    ("shes", "sh"),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ves", "f"),
    ("ies", "y"),
    ("men", "man"),
    ("s", ""),
];

/// Dictionary-based canonicalization assuming a generic, noun-biased part
/// of speech. Forms the dictionary does not cover pass through unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct English;

impl English {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Lemmatize for English {
    fn lemmatize(&self, token: &str) -> String {
        if let Some(lemma) = exceptions().get(token) {
            return (*lemma).to_string();
        }

        for (suffix, replacement) in DETACHMENTS {
            let Some(stem) = token.strip_suffix(suffix) else {
                continue;
            };

            if stem.is_empty() {
                continue;
            }

            // Bare "s" detachment would mangle words like "gas" or
            // "crisis": the stem must keep at least three characters and
            // the word must not carry an -ss/-us/-is ending.
            if *suffix == "s"
                && (stem.chars().count() < 3
                    || token.ends_with("ss")
                    || token.ends_with("us")
                    || token.ends_with("is"))
            {
                break;
            }

            return format!("{stem}{replacement}");
        }

        token.to_string()
    }
}
