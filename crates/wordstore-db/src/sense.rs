use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;
use wordstore_types::{SenseEntry, SenseKey, Synset, SynsetId, fold_lemma};

use crate::error::Result;
use crate::files::{Record, records};

/// Parsed `index.sense`, grouping sense entries by case-folded lemma.
#[derive(Debug, Clone, Default)]
pub struct SenseIndex {
    entries: HashMap<String, Vec<SenseEntry>>,
    len: usize,
}

impl SenseIndex {
    /// Parse the sense index, attaching synsets through `resolve`.
    ///
    /// Entries whose synset cannot be resolved are kept with `synset: None`.
    pub fn parse<F>(file: &str, bytes: &[u8], resolve: F) -> Result<Self>
    where
        F: Fn(SynsetId) -> Option<Arc<Synset>>,
    {
        let mut entries: HashMap<String, Vec<SenseEntry>> = HashMap::new();
        let mut len = 0;
        let mut unresolved = 0usize;
        for record in records(file, bytes) {
            let record = record?;
            let mut entry = parse_sense_line(&record)?;
            entry.synset = resolve(entry.synset_id());
            if entry.synset.is_none() {
                unresolved += 1;
            }
            entries
                .entry(fold_lemma(&entry.key.lemma))
                .or_default()
                .push(entry);
            len += 1;
        }
        if unresolved > 0 {
            debug!(file, unresolved, "sense entries without a loaded synset");
        }
        Ok(Self { entries, len })
    }

    /// Parse without attaching synsets.
    pub fn parse_unresolved(file: &str, bytes: &[u8]) -> Result<Self> {
        Self::parse(file, bytes, |_| None)
    }

    /// All senses of a lemma in file order; empty when the lemma is unknown.
    pub fn get(&self, lemma: &str) -> &[SenseEntry] {
        self.entries
            .get(&fold_lemma(lemma))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of distinct lemmas.
    pub fn lemma_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of sense entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &SenseEntry> + '_ {
        self.entries.values().flatten()
    }
}

fn parse_sense_line(record: &Record<'_>) -> Result<SenseEntry> {
    let tokens: Vec<&str> = record.text.split_ascii_whitespace().collect();
    let [key, offset, sense_number, tag_count] = tokens.as_slice() else {
        return Err(record.malformed(format!("expected 4 fields, found {}", tokens.len())));
    };
    let key =
        SenseKey::parse(key).ok_or_else(|| record.malformed(format!("invalid sense key {key:?}")))?;
    Ok(SenseEntry {
        key,
        synset_offset: record.number(offset, "synset_offset")?,
        sense_number: record.number(sense_number, "sense_number")?,
        tag_count: record.number(tag_count, "tag_cnt")?,
        synset: None,
    })
}
