use std::io::{self, Write};

use lexfreq::{language::Language, pipeline::RenderSink, rank::RankedEntry};
use serde::Serialize;
use tracing::warn;

const MAX_BAR_WIDTH: usize = 40;

struct Labels {
    title: String,
    words: &'static str,
    frequency: &'static str,
    empty: &'static str,
}

fn labels(language: Language, limit: usize) -> Labels {
    match language {
        Language::English => Labels {
            title: format!("Top-{limit} words (English)"),
            words: "Words",
            frequency: "Frequency",
            empty: "No words to display.",
        },
        Language::Russian => Labels {
            title: format!("Топ-{limit} слов (русский)"),
            words: "Слова",
            frequency: "Частота",
            empty: "Нет слов для отображения.",
        },
    }
}

/// Horizontal bar chart on a terminal: one bar per lemma, scaled to the
/// maximum count, annotated with the exact count. Labels follow the
/// selected language.
pub struct BarChart<W: Write> {
    out: W,
    limit: usize,
}

impl BarChart<io::Stdout> {
    pub fn stdout(limit: usize) -> Self {
        Self::new(io::stdout(), limit)
    }
}

impl<W: Write> BarChart<W> {
    pub fn new(out: W, limit: usize) -> Self {
        Self { out, limit }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, entries: &[RankedEntry], language: Language) -> io::Result<()> {
        let labels = labels(language, self.limit);

        writeln!(self.out, "{}", labels.title)?;
        writeln!(self.out)?;

        if entries.is_empty() {
            writeln!(self.out, "{}", labels.empty)?;
            return Ok(());
        }

        let max_count = entries.iter().map(|entry| entry.count).max().unwrap_or(1);
        let lemma_width = entries
            .iter()
            .map(|entry| entry.lemma.chars().count())
            .max()
            .unwrap_or(0);

        for entry in entries {
            let length = (entry.count as usize * MAX_BAR_WIDTH / max_count as usize).max(1);
            let bar = "█".repeat(length);
            writeln!(
                self.out,
                "{:<width$}  {} {}",
                entry.lemma,
                bar,
                entry.count,
                width = lemma_width
            )?;
        }

        writeln!(self.out)?;
        writeln!(self.out, "{} / {}", labels.words, labels.frequency)?;
        Ok(())
    }
}

impl<W: Write> RenderSink for BarChart<W> {
    fn render(&mut self, entries: &[RankedEntry], language: Language) {
        if let Err(error) = self.write(entries, language) {
            warn!(%error, "failed to render chart");
        }
    }
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    lemma: &'a str,
    count: u32,
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    language: &'static str,
    words: Vec<JsonEntry<'a>>,
}

/// Machine-readable alternative to the chart.
pub struct JsonReport<W: Write> {
    out: W,
}

impl JsonReport<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, entries: &[RankedEntry], language: Language) -> io::Result<()> {
        let document = JsonDocument {
            language: language.code(),
            words: entries
                .iter()
                .map(|entry| JsonEntry {
                    lemma: &entry.lemma,
                    count: entry.count,
                })
                .collect(),
        };

        serde_json::to_writer_pretty(&mut self.out, &document)?;
        writeln!(self.out)
    }
}

impl<W: Write> RenderSink for JsonReport<W> {
    fn render(&mut self, entries: &[RankedEntry], language: Language) {
        if let Err(error) = self.write(entries, language) {
            warn!(%error, "failed to render report");
        }
    }
}
