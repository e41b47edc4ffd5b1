use std::collections::HashMap;

use tracing::warn;
use wordstore_types::{IndexEntry, Pos, Relationship, fold_lemma, stored_to_lemma};

use crate::error::Result;
use crate::files::{Record, records};

/// Parsed `index.<pos>` file keyed by case-folded lemma.
#[derive(Debug, Clone)]
pub struct PosIndex {
    pos: Pos,
    entries: HashMap<String, IndexEntry>,
}

impl PosIndex {
    /// Parse a whole index file. `pos` is the storage POS the file belongs
    /// to; entries tagged with any other storage POS are rejected.
    pub fn parse(file: &str, bytes: &[u8], pos: Pos) -> Result<Self> {
        let pos = pos.storage();
        let mut entries = HashMap::new();
        for record in records(file, bytes) {
            let record = record?;
            let entry = parse_index_line(&record, pos)?;
            let key = fold_lemma(&entry.lemma);
            if entries.insert(key, entry).is_some() {
                warn!(
                    file,
                    line = record.line,
                    "duplicate index lemma; keeping the later entry"
                );
            }
        }
        Ok(Self { pos, entries })
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Look up a lemma; the argument is folded the same way keys are.
    pub fn get(&self, lemma: &str) -> Option<&IndexEntry> {
        self.entries.get(&fold_lemma(lemma))
    }

    pub fn contains(&self, lemma: &str) -> bool {
        self.get(lemma).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in unspecified order, keyed by their folded lemma.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexEntry)> + '_ {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }
}

fn parse_index_line(record: &Record<'_>, pos: Pos) -> Result<IndexEntry> {
    let tokens: Vec<&str> = record.text.split_ascii_whitespace().collect();
    if tokens.len() < 6 {
        return Err(record.malformed("too few fields"));
    }

    let lemma = stored_to_lemma(tokens[0]);
    let tag = Pos::from_tag(tokens[1])
        .ok_or_else(|| record.malformed(format!("invalid part of speech {:?}", tokens[1])))?;
    if tag.storage() != pos {
        return Err(record.malformed(format!("{tag} entry in {pos} index")));
    }
    let synset_cnt: u32 = record.number(tokens[2], "synset_cnt")?;
    let p_cnt: usize = record.number(tokens[3], "p_cnt")?;

    let expected = 6usize
        .saturating_add(p_cnt)
        .saturating_add(synset_cnt as usize);
    if tokens.len() != expected {
        return Err(record.malformed(format!(
            "expected {expected} fields for {synset_cnt} senses and {p_cnt} pointers, found {}",
            tokens.len()
        )));
    }

    let mut relationships = Vec::with_capacity(p_cnt);
    for symbol in &tokens[4..4 + p_cnt] {
        let rel = Relationship::from_symbol(symbol)
            .ok_or_else(|| record.malformed(format!("unknown pointer symbol {symbol:?}")))?;
        if !relationships.contains(&rel) {
            relationships.push(rel);
        }
    }

    let mut idx = 4 + p_cnt;
    // sense_cnt duplicates synset_cnt; validated but not kept.
    let _: u32 = record.number(tokens[idx], "sense_cnt")?;
    idx += 1;
    let tagsense_cnt = record.number(tokens[idx], "tagsense_cnt")?;
    idx += 1;

    let synset_offsets = tokens[idx..]
        .iter()
        .map(|token| record.number::<u32>(token, "synset_offset"))
        .collect::<Result<Vec<_>>>()?;

    Ok(IndexEntry {
        lemma,
        pos,
        synset_cnt,
        relationships,
        tagsense_cnt,
        synset_offsets,
    })
}
