use std::cmp::Reverse;

use crate::frequency::FrequencyTable;

/// One row of the final ranking.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RankedEntry {
    pub lemma: String,
    pub count: u32,
}

impl RankedEntry {
    pub fn new<S: Into<String>>(lemma: S, count: u32) -> Self {
        Self {
            lemma: lemma.into(),
            count,
        }
    }
}

/// Selects the `n` highest-count lemmas. Count ties break by first
/// occurrence in the document: the table iterates in first-seen order and
/// the sort is stable, so the earlier lemma keeps the higher rank.
pub fn top_n(table: &FrequencyTable, n: usize) -> Vec<RankedEntry> {
    let mut entries = table
        .iter()
        .map(|(lemma, count)| RankedEntry::new(lemma, count))
        .collect::<Vec<_>>();

    entries.sort_by_key(|entry| Reverse(entry.count));
    entries.truncate(n);
    entries
}
