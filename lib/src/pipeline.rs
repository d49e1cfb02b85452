use tracing::debug;

use crate::{
    error::Error,
    filter::{StopwordFilter, StopwordSet, TokenFilter},
    frequency::FrequencyTable,
    language::Language,
    lemma::{Lemmatize, Lemmatizer},
    rank::{top_n, RankedEntry},
    tokenizer::{TextTokenizer, UnicodeWord},
};

pub const DEFAULT_TOP_N: usize = 5;

/// Everything the resource provider hands over for one language: the
/// stopword set and the lemmatization backend. Built once before the
/// pipeline, immutable afterwards, trivially replaced by fixtures in tests.
#[derive(Clone, Debug)]
pub struct LanguageResources {
    pub language: Language,
    pub stopwords: StopwordSet,
    pub lemmatizer: Lemmatizer,
}

impl LanguageResources {
    /// Convenience constructor pairing a stopword set with the built-in
    /// lemmatizer for the language.
    pub fn new(language: Language, stopwords: StopwordSet) -> Self {
        Self {
            language,
            stopwords,
            lemmatizer: Lemmatizer::for_language(language),
        }
    }
}

/// Supplies raw document text for an identifier, or a not-found condition.
pub trait DocumentSource {
    fn fetch(&self, id: &str) -> Result<String, Error>;
}

/// Consumes the final ranking. Rendering failures are the sink's own
/// business; the contract is fire-and-forget.
pub trait RenderSink {
    fn render(&mut self, entries: &[RankedEntry], language: Language);
}

/// The whole analysis chain: tokenize, drop stopwords, lemmatize, count,
/// select the top N. Single-pass, synchronous, language picked once at
/// construction.
#[derive(Clone, Debug)]
pub struct Pipeline {
    language: Language,
    tokenizer: UnicodeWord,
    filter: StopwordFilter,
    lemmatizer: Lemmatizer,
    limit: usize,
}

impl Pipeline {
    pub fn new(resources: LanguageResources) -> Self {
        Self::with_limit(resources, DEFAULT_TOP_N)
    }

    pub fn with_limit(resources: LanguageResources, limit: usize) -> Self {
        Self {
            language: resources.language,
            tokenizer: UnicodeWord::new(),
            filter: StopwordFilter::new(resources.stopwords),
            lemmatizer: resources.lemmatizer,
            limit,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// The pure core: document text in, ranked lemmas out.
    pub fn run(&self, text: &str) -> Vec<RankedEntry> {
        let mut tokens = self.tokenizer.tokenize(text);
        debug!(tokens = tokens.len(), "tokenized document");

        self.filter.apply(&mut tokens);
        debug!(tokens = tokens.len(), "removed stopwords");

        let lemmas = tokens
            .into_iter()
            .map(|token| self.lemmatizer.lemmatize(token.as_str()));
        let table = FrequencyTable::from_lemmas(lemmas);
        debug!(distinct = table.len(), occurrences = table.total(), "aggregated lemma frequencies");

        top_n(&table, self.limit)
    }

    /// Fetches the document, runs the core and hands the ranking to the
    /// sink. A not-found condition propagates; the sink is never invoked
    /// on failure.
    pub fn analyze<S, R>(&self, source: &S, sink: &mut R, id: &str) -> Result<(), Error>
    where
        S: DocumentSource,
        R: RenderSink,
    {
        let text = source.fetch(id)?;
        let ranked = self.run(&text);
        sink.render(&ranked, self.language);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{LanguageResources, Pipeline};
    use crate::{filter::StopwordSet, language::Language, rank::RankedEntry};

    fn english_pipeline() -> Pipeline {
        let stopwords = StopwordSet::new(["the", "a", "an", "is", "on", "was"]);
        Pipeline::new(LanguageResources::new(Language::English, stopwords))
    }

    #[test]
    fn test_pipeline_ranks_content_words() {
        let pipeline = english_pipeline();
        let ranked = pipeline.run("The cat sat on the cat mat. The cat was happy.");

        assert_eq!(
            ranked,
            vec![
                RankedEntry::new("cat", 3),
                RankedEntry::new("sat", 1),
                RankedEntry::new("mat", 1),
                RankedEntry::new("happy", 1),
            ]
        );
    }

    #[test]
    fn test_pipeline_stopword_only_document() {
        let pipeline = english_pipeline();
        assert!(pipeline.run("the a an is").is_empty());
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let pipeline = english_pipeline();
        let text = "Cats chase cats. Dogs chase cats.";

        assert_eq!(pipeline.run(text), pipeline.run(text));
    }

    #[test]
    fn test_pipeline_respects_limit() {
        let stopwords = StopwordSet::default();
        let resources = LanguageResources::new(Language::English, stopwords);
        let pipeline = Pipeline::with_limit(resources, 2);

        let ranked = pipeline.run("one two three four five");
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_pipeline_russian_with_fallback() {
        let stopwords = StopwordSet::new(["на", "и", "это"]);
        let pipeline = Pipeline::new(LanguageResources::new(Language::Russian, stopwords));

        let ranked = pipeline.run("Кошки и кошка сидела на бдыщ.");

        assert_eq!(
            ranked,
            vec![
                RankedEntry::new("кошка", 2),
                RankedEntry::new("сидеть", 1),
                RankedEntry::new("бдыщ", 1),
            ]
        );
    }
}
