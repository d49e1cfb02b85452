use hashbrown::HashMap;

/// Lemma occurrence counts. Iteration order is the order in which each
/// distinct lemma was first seen, which downstream ranking relies on for
/// deterministic tie-breaking.
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<(String, u32)>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lemmas<I>(lemmas: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut table = Self::new();
        for lemma in lemmas {
            table.count(lemma);
        }
        table
    }

    pub fn count(&mut self, lemma: String) {
        match self.index.get(lemma.as_str()) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(lemma.clone(), self.entries.len());
                self.entries.push((lemma, 1));
            }
        }
    }

    pub fn get(&self, lemma: &str) -> Option<u32> {
        self.index.get(lemma).map(|&slot| self.entries[slot].1)
    }

    /// Number of distinct lemmas.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the length of the lemma sequence the table
    /// was built from.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| u64::from(*count)).sum()
    }

    /// First-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(lemma, count)| (lemma.as_str(), *count))
    }
}
