use lexfreq::{
    error::Error,
    filter::StopwordSet,
    language::Language,
    pipeline::{DocumentSource, RenderSink},
    rank::RankedEntry,
};

pub fn english_fixture_stopwords() -> StopwordSet {
    StopwordSet::new(["the", "a", "an", "is", "on", "was", "and"])
}

pub fn russian_fixture_stopwords() -> StopwordSet {
    let mut set = StopwordSet::new(["и", "в", "на", "у"]);
    set.extend(["это", "свой", "свои"]);
    set
}

/// Serves a fixed document for any identifier.
pub struct StaticSource(pub &'static str);

impl DocumentSource for StaticSource {
    fn fetch(&self, _id: &str) -> Result<String, Error> {
        Ok(self.0.to_string())
    }
}

/// Knows no documents at all.
pub struct MissingSource;

impl DocumentSource for MissingSource {
    fn fetch(&self, id: &str) -> Result<String, Error> {
        Err(Error::DocumentNotFound { id: id.to_string() })
    }
}

/// Records every hand-off instead of drawing anything.
#[derive(Default)]
pub struct RecordingSink {
    pub calls: Vec<(Vec<RankedEntry>, Language)>,
}

impl RenderSink for RecordingSink {
    fn render(&mut self, entries: &[RankedEntry], language: Language) {
        self.calls.push((entries.to_vec(), language));
    }
}
