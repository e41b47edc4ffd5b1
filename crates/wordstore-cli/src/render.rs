//! Serializable views over store results, printed as text or JSON.

use std::fmt;
use std::path::Path;

use serde::Serialize;
use wordstore_db::WordNet;
use wordstore_morphy::CandidateSource;
use wordstore_types::{Pos, SenseEntry, Synset, fold_lemma};

#[derive(Debug, Serialize)]
pub struct LookupView {
    pub query: String,
    /// Lemma the senses belong to.
    pub lemma: String,
    /// Set when `query` was reduced to a base form before lookup.
    pub reduced: bool,
    pub senses: Vec<SenseView>,
}

#[derive(Debug, Serialize)]
pub struct SenseView {
    pub key: String,
    pub pos: String,
    pub sense_number: u32,
    pub tag_count: u32,
    pub lex_file: Option<&'static str>,
    pub synset: Option<SynsetView>,
}

#[derive(Debug, Serialize)]
pub struct SynsetView {
    pub id: String,
    pub offset: u32,
    pub pos: String,
    pub lex_file: Option<&'static str>,
    pub words: Vec<String>,
    pub definition: String,
    pub examples: Vec<String>,
    pub edges: Vec<EdgeView>,
}

#[derive(Debug, Serialize)]
pub struct EdgeView {
    pub relationship: &'static str,
    pub symbol: &'static str,
    pub target: String,
    /// First word of the target synset; absent when the pointer dangles.
    pub target_head: Option<String>,
    pub source_word: Option<String>,
    pub target_word: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MorphView {
    pub word: String,
    pub forms: Vec<BaseFormView>,
}

#[derive(Debug, Serialize)]
pub struct BaseFormView {
    pub pos: String,
    pub lemma: String,
    pub source: String,
}

#[derive(Debug, Serialize)]
pub struct StatsView {
    pub dict: String,
    pub index_entries: usize,
    pub synsets: usize,
    pub sense_entries: usize,
    pub sense_lemmas: usize,
    pub parts_of_speech: Vec<PosStatsView>,
}

#[derive(Debug, Serialize)]
pub struct PosStatsView {
    pub pos: String,
    pub index_entries: usize,
    pub exceptions: usize,
}

fn search_order(pos: Option<Pos>) -> Vec<Pos> {
    pos.map_or_else(|| Pos::STORAGE.to_vec(), |pos| vec![pos])
}

/// Senses of `query`, falling back to its base forms when the query itself
/// is not a lemma.
pub fn lookup_view(wn: &WordNet, query: &str, pos: Option<Pos>) -> LookupView {
    let senses_of = |lemma: &str| match pos {
        Some(pos) => wn.lookup_senses_with_pos(lemma, pos).collect::<Vec<_>>(),
        None => wn.lookup(lemma).iter().collect::<Vec<_>>(),
    };

    let mut lemma = fold_lemma(query);
    let mut senses = senses_of(lemma.as_str());
    let mut reduced = false;
    if senses.is_empty() {
        // Exception lists are case-sensitive, so the query is tried as typed
        // before its folded form.
        let folded = (lemma != query).then_some(lemma.as_str());
        let base = search_order(pos).into_iter().find_map(|p| {
            std::iter::once(query).chain(folded).find_map(|word| {
                let base = wn.morph(word, p)?;
                let found = senses_of(&*base.lemma);
                (!found.is_empty()).then(|| (base.lemma.into_owned(), found))
            })
        });
        if let Some((base, found)) = base {
            lemma = base;
            senses = found;
            reduced = true;
        }
    }

    LookupView {
        query: query.to_string(),
        lemma,
        reduced,
        senses: senses.into_iter().map(|s| sense_view(wn, s)).collect(),
    }
}

pub fn sense_view(wn: &WordNet, sense: &SenseEntry) -> SenseView {
    SenseView {
        key: sense.key.to_string(),
        pos: sense.pos().to_string(),
        sense_number: sense.sense_number,
        tag_count: sense.tag_count,
        lex_file: sense.lex_file_name(),
        synset: wn.sense_synset(sense).map(|s| synset_view(wn, s)),
    }
}

pub fn synset_view(wn: &WordNet, synset: &Synset) -> SynsetView {
    let edges = synset
        .relationships
        .iter()
        .map(|edge| {
            let (source_word, target_word) = wn.edge_words(synset, edge);
            EdgeView {
                relationship: edge.relationship.name(),
                symbol: edge.relationship.symbol(),
                target: edge.target.to_string(),
                target_head: wn
                    .edge_target(edge)
                    .and_then(|t| t.words.first())
                    .map(|w| w.text.clone()),
                source_word: source_word.map(|w| w.text.clone()),
                target_word: target_word.map(|w| w.text.clone()),
            }
        })
        .collect();
    SynsetView {
        id: synset.id.to_string(),
        offset: synset.id.offset,
        pos: synset.pos.to_string(),
        lex_file: synset.lex_file_name(),
        words: synset.words.iter().map(|w| w.text.clone()).collect(),
        definition: synset.definition().to_string(),
        examples: synset.examples().into_iter().map(str::to_string).collect(),
        edges,
    }
}

pub fn morph_view(wn: &WordNet, word: &str, pos: Option<Pos>) -> MorphView {
    let forms = search_order(pos)
        .into_iter()
        .flat_map(|p| wn.morph_all(word, p))
        .map(|base| BaseFormView {
            pos: base.pos.to_string(),
            lemma: base.lemma.into_owned(),
            source: match base.source {
                CandidateSource::Exception => "exception".to_string(),
                CandidateSource::Unchanged => "unchanged".to_string(),
                CandidateSource::Rule {
                    suffix,
                    replacement,
                } => format!("-{suffix} -> -{replacement}"),
            },
        })
        .collect();
    MorphView {
        word: word.to_string(),
        forms,
    }
}

pub fn stats_view(wn: &WordNet, dict_dir: &Path) -> StatsView {
    StatsView {
        dict: dict_dir.display().to_string(),
        index_entries: wn.index_count(),
        synsets: wn.synset_count(),
        sense_entries: wn.sense_count(),
        sense_lemmas: wn.sense_lemma_count(),
        parts_of_speech: Pos::STORAGE
            .into_iter()
            .map(|pos| PosStatsView {
                pos: pos.to_string(),
                index_entries: wn.iter_index(pos).count(),
                exceptions: wn.morphy().exception_count(pos),
            })
            .collect(),
    }
}

impl fmt::Display for LookupView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.senses.is_empty() {
            return writeln!(f, "no senses for {:?}", self.query);
        }
        if self.reduced {
            writeln!(f, "{} (base form of {})", self.lemma, self.query)?;
        }
        for sense in &self.senses {
            write!(
                f,
                "{} {} #{} [{}]",
                sense.key,
                sense.pos,
                sense.sense_number,
                sense.lex_file.unwrap_or("?")
            )?;
            match &sense.synset {
                Some(synset) => writeln!(
                    f,
                    " {}: {}",
                    synset.words.join(", "),
                    synset.definition
                )?,
                None => writeln!(f, " (synset not loaded)")?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for SynsetView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {} [{}] {}",
            self.id,
            self.pos,
            self.lex_file.unwrap_or("?"),
            self.words.join(", ")
        )?;
        writeln!(f, "  {}", self.definition)?;
        for example in &self.examples {
            writeln!(f, "  \"{example}\"")?;
        }
        for edge in &self.edges {
            write!(f, "  {} {}", edge.relationship, edge.target)?;
            if let Some(head) = &edge.target_head {
                write!(f, " {head}")?;
            }
            if let (Some(from), Some(to)) = (&edge.source_word, &edge.target_word) {
                write!(f, " ({from} -> {to})")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for MorphView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.forms.is_empty() {
            return writeln!(f, "no base form for {:?}", self.word);
        }
        for form in &self.forms {
            writeln!(f, "{:<6} {:<16} {}", form.pos, form.lemma, form.source)?;
        }
        Ok(())
    }
}

impl fmt::Display for StatsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dictionary    : {}", self.dict)?;
        writeln!(f, "Index entries : {}", self.index_entries)?;
        writeln!(f, "Synsets       : {}", self.synsets)?;
        writeln!(
            f,
            "Sense entries : {} for {} lemmas",
            self.sense_entries, self.sense_lemmas
        )?;
        for pos in &self.parts_of_speech {
            writeln!(
                f,
                "  {:<5} {} index entries, {} exceptions",
                pos.pos, pos.index_entries, pos.exceptions
            )?;
        }
        Ok(())
    }
}
