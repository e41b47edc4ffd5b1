//! Load a WordNet dictionary into an immutable, queryable store.
//!
//! The loader reads the four `index.*`/`data.*` pairs, `index.sense` and the
//! `*.exc` morphology lists from a `dict` directory, validates every record
//! against the file grammar and builds a [`WordNet`] value. Loading either
//! succeeds completely or returns a [`LoadError`] carrying the file name, line
//! number and raw text of the offending record.
//!
//! Once loaded the store is read-only and `Send + Sync`; share it behind an
//! `Arc` and query from as many threads as needed.
//!
//! # Example
//! ```no_run
//! use wordstore_db::{LoadMode, WordNet};
//! use wordstore_types::{Pos, Relationship};
//!
//! # fn main() -> Result<(), wordstore_db::LoadError> {
//! let wn = WordNet::load_with_mode("/usr/share/wordnet/dict", LoadMode::Mmap)?;
//! for sense in wn.lookup("computer") {
//!     let synset = wn.sense_synset(sense).expect("synset present");
//!     println!("{} [{:?}] {}", sense.key, sense.lex_file_name(), synset.definition());
//!     for parent in wn.related(synset, Relationship::Hypernym) {
//!         println!("  is a {}", parent.words[0].text);
//!     }
//! }
//! assert_eq!(wn.morph("swam", Pos::Verb).map(|b| b.lemma.into_owned()), Some("swim".into()));
//! # Ok(()) }
//! ```
//!
//! For a runnable demo, see `cargo run -p wordstore-db --example stats -- <dict>`.

mod data;
mod error;
mod files;
mod index;
mod sense;

use std::collections::{HashMap, HashSet, VecDeque};
use std::path::Path;
use std::time::Instant;

use tracing::info;
use wordstore_morphy::{BaseForm, Morphy};
use wordstore_types::{
    IndexEntry, Pos, Relationship, RelationshipEdge, SenseEntry, Synset, SynsetId, Word,
};

pub use data::PosData;
pub use error::{LoadError, Result};
pub use files::LoadMode;
pub use index::PosIndex;
pub use sense::SenseIndex;

const SENSE_INDEX: &str = "index.sense";

/// In-memory WordNet dictionary.
#[derive(Debug, Clone)]
pub struct WordNet {
    indices: HashMap<Pos, PosIndex>,
    data: HashMap<Pos, PosData>,
    senses: SenseIndex,
    morphy: Morphy,
}

impl WordNet {
    /// Load WordNet from a `dict` directory.
    ///
    /// Defaults to memory-mapping the source files. Use [`load_with_mode`] to
    /// force owned buffers instead.
    ///
    /// [`load_with_mode`]: WordNet::load_with_mode
    pub fn load(dict_dir: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_mode(dict_dir, LoadMode::Mmap)
    }

    /// Load WordNet choosing between mmap and owned buffers at runtime.
    pub fn load_with_mode(dict_dir: impl AsRef<Path>, mode: LoadMode) -> Result<Self> {
        let dir = dict_dir.as_ref();
        let started = Instant::now();

        for name in required_files() {
            let path = dir.join(&name);
            if !path.exists() {
                return Err(LoadError::MissingFile { path });
            }
        }

        let mut indices = HashMap::new();
        let mut data = HashMap::new();
        for pos in Pos::STORAGE {
            let name = format!("index.{}", pos.file_stem());
            let buf = files::load_file(&dir.join(&name), mode)?;
            let index = PosIndex::parse(&name, buf.as_slice(), pos)?;
            info!("loaded {} {pos} index entries from {name}", index.len());
            indices.insert(pos, index);

            let name = format!("data.{}", pos.file_stem());
            let buf = files::load_file(&dir.join(&name), mode)?;
            let synsets = PosData::parse(&name, buf.as_slice(), pos)?;
            info!("loaded {} {pos} synsets from {name}", synsets.len());
            data.insert(pos, synsets);
        }

        let buf = files::load_file(&dir.join(SENSE_INDEX), mode)?;
        let senses = SenseIndex::parse(SENSE_INDEX, buf.as_slice(), |id| {
            data.get(&id.pos)
                .and_then(|synsets| synsets.get_arc(id.offset))
                .cloned()
        })?;
        info!(
            "loaded {} sense entries for {} lemmas from {SENSE_INDEX}",
            senses.len(),
            senses.lemma_count()
        );

        let morphy = Morphy::load(dir)?;

        let wn = Self {
            indices,
            data,
            senses,
            morphy,
        };
        info!(
            "wordnet ready: {} index entries, {} synsets in {:.2?}",
            wn.index_count(),
            wn.synset_count(),
            started.elapsed()
        );
        Ok(wn)
    }

    /// Index entry for a lemma in one part of speech. Satellites are looked
    /// up in the adjective index.
    pub fn lookup_with_pos(&self, lemma: &str, pos: Pos) -> Option<&IndexEntry> {
        self.indices.get(&pos.storage())?.get(lemma)
    }

    /// Every sense of a lemma across all parts of speech, in `index.sense`
    /// order. Unknown lemmas yield an empty slice.
    pub fn lookup(&self, lemma: &str) -> &[SenseEntry] {
        self.senses.get(lemma)
    }

    /// Senses of a lemma restricted to one part of speech; adjectives and
    /// satellites match each other.
    pub fn lookup_senses_with_pos<'a>(
        &'a self,
        lemma: &str,
        pos: Pos,
    ) -> impl Iterator<Item = &'a SenseEntry> + use<'a> {
        let wanted = pos.storage();
        self.lookup(lemma)
            .iter()
            .filter(move |sense| sense.pos().storage() == wanted)
    }

    /// The sense with a given 1-based sense number.
    pub fn lookup_with_pos_and_sense(
        &self,
        lemma: &str,
        pos: Pos,
        sense_number: u32,
    ) -> Option<&SenseEntry> {
        self.lookup_senses_with_pos(lemma, pos)
            .find(|sense| sense.sense_number == sense_number)
    }

    /// True when `lemma` has an index entry for `pos`.
    pub fn lemma_exists(&self, pos: Pos, lemma: &str) -> bool {
        self.lookup_with_pos(lemma, pos).is_some()
    }

    pub fn get_synset(&self, pos: Pos, offset: u32) -> Option<&Synset> {
        self.synset(SynsetId::new(pos, offset))
    }

    /// Fetch a synset by id.
    pub fn synset(&self, id: SynsetId) -> Option<&Synset> {
        self.data.get(&id.pos.storage())?.get(id.offset)
    }

    /// Synset a sense points at, using the eagerly attached one when present.
    ///
    /// Entries produced by [`WordNet::load`] already carry their synset when
    /// it exists, so the offset lookup only finds something for entries
    /// built elsewhere, such as those from [`SenseIndex::parse_unresolved`].
    pub fn sense_synset<'a>(&'a self, sense: &'a SenseEntry) -> Option<&'a Synset> {
        sense
            .synset()
            .or_else(|| self.synset(sense.synset_id()))
    }

    /// Resolve the target of an edge; `None` when it dangles.
    pub fn edge_target(&self, edge: &RelationshipEdge) -> Option<&Synset> {
        self.synset(edge.target)
    }

    /// Source and target words of a lexical edge. Either side is `None` for
    /// whole-synset edges, out-of-range numbers, or an unresolved target.
    pub fn edge_words<'a>(
        &'a self,
        source: &'a Synset,
        edge: &RelationshipEdge,
    ) -> (Option<&'a Word>, Option<&'a Word>) {
        let source_word = edge.source_word.and_then(|n| source.word(n));
        let target_word = edge
            .target_word
            .and_then(|n| self.edge_target(edge)?.word(n));
        (source_word, target_word)
    }

    /// Resolved targets of one relationship type, in file order. Dangling
    /// edges are skipped.
    pub fn related<'a>(
        &'a self,
        synset: &'a Synset,
        relationship: Relationship,
    ) -> impl Iterator<Item = &'a Synset> + 'a {
        synset
            .edges(relationship)
            .filter_map(|edge| self.edge_target(edge))
    }

    /// Breadth-first transitive closure over one relationship, excluding
    /// the start synset. Each synset appears once even in cyclic graphs.
    pub fn closure(&self, start: SynsetId, relationship: Relationship) -> Vec<&Synset> {
        let Some(origin) = self.synset(start) else {
            return Vec::new();
        };
        let mut seen = HashSet::from([origin.id]);
        let mut queue = VecDeque::from([origin]);
        let mut out = Vec::new();
        while let Some(current) = queue.pop_front() {
            for next in self.related(current, relationship) {
                if seen.insert(next.id) {
                    out.push(next);
                    queue.push_back(next);
                }
            }
        }
        out
    }

    /// Base form of `word` validated against the index.
    pub fn morph(&self, word: &str, pos: Pos) -> Option<BaseForm<'_>> {
        self.morphy
            .morph(pos, word, |pos, lemma| self.lemma_exists(pos, lemma))
    }

    /// All validated base forms, most likely first.
    pub fn morph_all(&self, word: &str, pos: Pos) -> Vec<BaseForm<'_>> {
        self.morphy
            .morph_all(pos, word, |pos, lemma| self.lemma_exists(pos, lemma))
    }

    pub fn morphy(&self) -> &Morphy {
        &self.morphy
    }

    /// Iterate all synsets across parts of speech in unspecified order.
    pub fn iter_synsets(&self) -> impl Iterator<Item = &Synset> + '_ {
        Pos::STORAGE
            .into_iter()
            .filter_map(|pos| self.data.get(&pos))
            .flat_map(PosData::iter)
    }

    /// Iterate index entries of one part of speech in unspecified order.
    pub fn iter_index(&self, pos: Pos) -> impl Iterator<Item = &IndexEntry> + '_ {
        self.indices
            .get(&pos.storage())
            .into_iter()
            .flat_map(|index| index.iter().map(|(_, entry)| entry))
    }

    /// Number of index entries across all parts of speech.
    pub fn index_count(&self) -> usize {
        self.indices.values().map(PosIndex::len).sum()
    }

    pub fn synset_count(&self) -> usize {
        self.data.values().map(PosData::len).sum()
    }

    /// Distinct lemmas in `index.sense`.
    pub fn sense_lemma_count(&self) -> usize {
        self.senses.lemma_count()
    }

    /// Number of lines in `index.sense`.
    pub fn sense_count(&self) -> usize {
        self.senses.len()
    }
}

fn required_files() -> Vec<String> {
    Pos::STORAGE
        .iter()
        .flat_map(|pos| {
            let stem = pos.file_stem();
            [format!("index.{stem}"), format!("data.{stem}")]
        })
        .chain(std::iter::once(SENSE_INDEX.to_string()))
        .collect()
}
