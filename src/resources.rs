use lexfreq::{filter::StopwordSet, language::Language, pipeline::LanguageResources};
use stop_words::{get, LANGUAGE};

/// High-frequency pronoun/determiner forms missing from the generic
/// Russian stoplist.
const RUSSIAN_EXTRA_STOPWORDS: [&str; 3] = ["это", "свой", "свои"];

/// Builds the per-language resources once, before the pipeline exists.
pub fn load(language: Language) -> LanguageResources {
    let mut stopwords: StopwordSet = match language {
        Language::English => get(LANGUAGE::English),
        Language::Russian => get(LANGUAGE::Russian),
    }
    .into_iter()
    .collect();

    if language == Language::Russian {
        stopwords.extend(RUSSIAN_EXTRA_STOPWORDS);
    }

    LanguageResources::new(language, stopwords)
}
