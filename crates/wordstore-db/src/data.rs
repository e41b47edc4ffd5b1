use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;
use wordstore_types::{
    Pos, Relationship, RelationshipEdge, Synset, SynsetId, Word, decode_word_numbers,
    split_adj_marker, stored_to_lemma,
};

use crate::error::Result;
use crate::files::{Record, records};

/// Parsed `data.<pos>` file keyed by byte offset.
#[derive(Debug, Clone)]
pub struct PosData {
    pos: Pos,
    synsets: HashMap<u32, Arc<Synset>>,
}

impl PosData {
    pub fn parse(file: &str, bytes: &[u8], pos: Pos) -> Result<Self> {
        let pos = pos.storage();
        let mut synsets = HashMap::new();
        for record in records(file, bytes) {
            let record = record?;
            let synset = parse_data_line(&record, pos)?;
            let offset = synset.id.offset;
            if synsets.insert(offset, Arc::new(synset)).is_some() {
                warn!(
                    file,
                    line = record.line,
                    offset,
                    "duplicate synset offset; keeping the later record"
                );
            }
        }
        Ok(Self { pos, synsets })
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn get(&self, offset: u32) -> Option<&Synset> {
        self.synsets.get(&offset).map(Arc::as_ref)
    }

    /// Shared handle to a synset, used to wire sense entries to their synsets.
    pub fn get_arc(&self, offset: u32) -> Option<&Arc<Synset>> {
        self.synsets.get(&offset)
    }

    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Synset> + '_ {
        self.synsets.values().map(Arc::as_ref)
    }
}

fn parse_data_line(record: &Record<'_>, pos: Pos) -> Result<Synset> {
    let text = record.text;
    let body = text.split_once('|').map_or(text, |(body, _)| body);
    let gloss = text.rsplit_once('|').map_or("", |(_, gloss)| gloss.trim());

    let tokens: Vec<&str> = body.split_ascii_whitespace().collect();
    let mut cursor = Tokens {
        record,
        tokens: &tokens,
        idx: 0,
    };

    let offset: u32 = record.number(cursor.next("synset_offset")?, "synset_offset")?;
    let lex_filenum: u8 = record.number(cursor.next("lex_filenum")?, "lex_filenum")?;
    let ss_type_token = cursor.next("ss_type")?;
    let ss_type = Pos::from_tag(ss_type_token)
        .ok_or_else(|| record.malformed(format!("invalid ss_type {ss_type_token:?}")))?;
    if ss_type.storage() != pos {
        return Err(record.malformed(format!("{ss_type} synset in {pos} data")));
    }

    let w_cnt = record.hex(cursor.next("w_cnt")?, "w_cnt")? as usize;
    if w_cnt > cursor.remaining() / 2 {
        return Err(record.malformed(format!(
            "w_cnt {w_cnt} exceeds the {} fields left on the line",
            cursor.remaining()
        )));
    }
    let mut words = Vec::with_capacity(w_cnt);
    for _ in 0..w_cnt {
        let (stored, marker) = split_adj_marker(cursor.next("word")?);
        let lex_id = record.hex(cursor.next("lex_id")?, "lex_id")?;
        let lex_id = u8::try_from(lex_id)
            .map_err(|_| record.malformed(format!("lex_id {lex_id} out of range")))?;
        words.push(Word {
            text: stored_to_lemma(stored),
            lex_id,
            marker,
        });
    }

    let p_cnt: usize = record.number(cursor.next("p_cnt")?, "p_cnt")?;
    let mut relationships = Vec::with_capacity(p_cnt.min(tokens.len()));
    for _ in 0..p_cnt {
        let symbol = cursor.next("pointer_symbol")?;
        let relationship = Relationship::from_symbol(symbol)
            .ok_or_else(|| record.malformed(format!("unknown pointer symbol {symbol:?}")))?;
        let target_offset: u32 = record.number(cursor.next("pointer offset")?, "pointer offset")?;
        let target_tag = cursor.next("pointer pos")?;
        let target_pos = Pos::from_tag(target_tag)
            .ok_or_else(|| record.malformed(format!("invalid pointer pos {target_tag:?}")))?;
        let numbers = cursor.next("source/target")?;
        let (source_word, target_word) = decode_word_numbers(numbers)
            .ok_or_else(|| record.malformed(format!("invalid source/target {numbers:?}")))?;
        if let Some(source) = source_word
            && usize::from(source) > words.len()
        {
            return Err(record.malformed(format!(
                "source word {source} out of range for {} words",
                words.len()
            )));
        }
        relationships.push(RelationshipEdge {
            relationship,
            target: SynsetId::new(target_pos, target_offset),
            source_word,
            target_word,
        });
    }

    // Verb frames: `f_cnt` followed by `+ f_num w_num` triples. Not kept.
    if pos == Pos::Verb && !cursor.is_done() {
        let f_cnt: usize = record.number(cursor.next("f_cnt")?, "f_cnt")?;
        for _ in 0..f_cnt {
            if cursor.next("frame marker")? != "+" {
                return Err(record.malformed("verb frame without '+'"));
            }
            let _: u8 = record.number(cursor.next("f_num")?, "f_num")?;
            record.hex(cursor.next("w_num")?, "w_num")?;
        }
    }

    if !cursor.is_done() {
        return Err(record.malformed("unexpected trailing fields before gloss"));
    }

    Ok(Synset {
        id: SynsetId::new(pos, offset),
        lex_filenum,
        pos: ss_type,
        words,
        relationships,
        gloss: gloss.to_string(),
    })
}

struct Tokens<'r, 't> {
    record: &'r Record<'r>,
    tokens: &'t [&'t str],
    idx: usize,
}

impl<'t> Tokens<'_, 't> {
    fn next(&mut self, field: &str) -> Result<&'t str> {
        let token = self
            .tokens
            .get(self.idx)
            .copied()
            .ok_or_else(|| self.record.malformed(format!("missing {field}")))?;
        self.idx += 1;
        Ok(token)
    }

    fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.idx)
    }

    fn is_done(&self) -> bool {
        self.idx >= self.tokens.len()
    }
}
