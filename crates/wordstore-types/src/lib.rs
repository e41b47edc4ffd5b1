//! Owned, immutable types that mirror WordNet's dictionary format.
//!
//! These types are what the loaders in `wordstore-db` produce and what the
//! store hands out by reference. Text fields are already decoded (`_` turned
//! back into spaces, adjective markers split off); numeric fields keep their
//! raw meaning (`offset`, `lex_id`, `lex_filenum`, pointer word numbers).
//!
//! Use [`Pos`] and [`SynsetId`] to key into a store, [`Synset`],
//! [`IndexEntry`] and [`SenseEntry`] to inspect parsed records, and helpers
//! like [`decode_word_numbers`] or [`SenseKey::parse`] to interpret the
//! packed fields of the record grammar.
//!
//! ```rust
//! use wordstore_types::{Pos, Relationship, SynsetId, decode_word_numbers};
//!
//! let id = SynsetId::new(Pos::AdjectiveSatellite, 1740);
//! assert_eq!(id.pos, Pos::Adjective);
//! assert_eq!(Relationship::from_symbol("@i"), Some(Relationship::InstanceHypernym));
//! assert_eq!(decode_word_numbers("0a0b"), Some((Some(10), Some(11))));
//! ```

use std::fmt;
use std::sync::Arc;

/// Part of speech as used by WordNet files.
///
/// `AdjectiveSatellite` only occurs as a synset type (`s`) and in sense keys
/// (`5`); storage and lookup treat it as [`Pos::Adjective`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Pos {
    Noun,
    Verb,
    Adjective,
    Adverb,
    AdjectiveSatellite,
}

impl Pos {
    /// The four parts of speech that own an `index.*`/`data.*` file pair.
    pub const STORAGE: [Pos; 4] = [Pos::Noun, Pos::Verb, Pos::Adjective, Pos::Adverb];

    /// Parse a one-character POS tag (`n`, `v`, `a`, `s`, `r`).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'n' => Some(Pos::Noun),
            'v' => Some(Pos::Verb),
            'a' => Some(Pos::Adjective),
            's' => Some(Pos::AdjectiveSatellite),
            'r' => Some(Pos::Adverb),
            _ => None,
        }
    }

    /// Parse a one-character tag given as a token; rejects longer tokens.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let mut chars = tag.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Parse the numeric `ss_type` used inside sense keys (`1`..=`5`).
    pub fn from_ss_type(n: u8) -> Option<Self> {
        match n {
            1 => Some(Pos::Noun),
            2 => Some(Pos::Verb),
            3 => Some(Pos::Adjective),
            4 => Some(Pos::Adverb),
            5 => Some(Pos::AdjectiveSatellite),
            _ => None,
        }
    }

    /// Emit the POS character used in `index.*`/`data.*`.
    pub fn to_char(self) -> char {
        match self {
            Pos::Noun => 'n',
            Pos::Verb => 'v',
            Pos::Adjective => 'a',
            Pos::AdjectiveSatellite => 's',
            Pos::Adverb => 'r',
        }
    }

    /// Numeric `ss_type` as written in sense keys.
    pub fn ss_type(self) -> u8 {
        match self {
            Pos::Noun => 1,
            Pos::Verb => 2,
            Pos::Adjective => 3,
            Pos::Adverb => 4,
            Pos::AdjectiveSatellite => 5,
        }
    }

    /// The bucket this POS is stored under; satellites fold into adjectives.
    pub fn storage(self) -> Self {
        match self {
            Pos::AdjectiveSatellite => Pos::Adjective,
            other => other,
        }
    }

    /// File name suffix for the POS bucket (`index.noun`, `verb.exc`, ...).
    pub fn file_stem(self) -> &'static str {
        match self.storage() {
            Pos::Noun => "noun",
            Pos::Verb => "verb",
            Pos::Adverb => "adv",
            _ => "adj",
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Pos::Noun => "noun",
            Pos::Verb => "verb",
            Pos::Adjective => "adj",
            Pos::Adverb => "adv",
            Pos::AdjectiveSatellite => "adj satellite",
        })
    }
}

/// `(pos, offset)` pair uniquely identifying a synset.
///
/// `pos` is always a storage POS; build ids with [`SynsetId::new`] so that
/// satellite tags are folded into [`Pos::Adjective`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct SynsetId {
    pub pos: Pos,
    pub offset: u32,
}

impl SynsetId {
    pub fn new(pos: Pos, offset: u32) -> Self {
        Self {
            pos: pos.storage(),
            offset,
        }
    }
}

impl fmt::Display for SynsetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08}-{}", self.offset, self.pos.to_char())
    }
}

/// Semantic or lexical relation named by a pointer symbol.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Relationship {
    Antonym,
    Hypernym,
    InstanceHypernym,
    Hyponym,
    InstanceHyponym,
    MemberHolonym,
    SubstanceHolonym,
    PartHolonym,
    MemberMeronym,
    SubstanceMeronym,
    PartMeronym,
    Attribute,
    DerivationallyRelatedForm,
    DomainOfSynset,
    TopicDomain,
    MemberOfTopicDomain,
    RegionDomain,
    MemberOfRegionDomain,
    UsageDomain,
    MemberOfUsageDomain,
    Entailment,
    Cause,
    AlsoSee,
    VerbGroup,
    SimilarTo,
    ParticipleOfVerb,
    Pertainym,
}

impl Relationship {
    /// Map a pointer symbol to its relationship.
    ///
    /// Symbols are shared across parts of speech (`\` is a pertainym for
    /// adjectives and "derived from adjective" for adverbs); the file a
    /// symbol appears in disambiguates it for callers that care.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        use Relationship::*;
        Some(match symbol {
            "!" => Antonym,
            "@" => Hypernym,
            "@i" => InstanceHypernym,
            "~" => Hyponym,
            "~i" => InstanceHyponym,
            "#m" => MemberHolonym,
            "#s" => SubstanceHolonym,
            "#p" => PartHolonym,
            "%m" => MemberMeronym,
            "%s" => SubstanceMeronym,
            "%p" => PartMeronym,
            "=" => Attribute,
            "+" => DerivationallyRelatedForm,
            ";" => DomainOfSynset,
            ";c" => TopicDomain,
            "-c" => MemberOfTopicDomain,
            ";r" => RegionDomain,
            "-r" => MemberOfRegionDomain,
            ";u" => UsageDomain,
            "-u" => MemberOfUsageDomain,
            "*" => Entailment,
            ">" => Cause,
            "^" => AlsoSee,
            "$" => VerbGroup,
            "&" => SimilarTo,
            "<" => ParticipleOfVerb,
            "\\" => Pertainym,
            _ => return None,
        })
    }

    /// Pointer symbol as written in `index.*`/`data.*`.
    pub fn symbol(self) -> &'static str {
        use Relationship::*;
        match self {
            Antonym => "!",
            Hypernym => "@",
            InstanceHypernym => "@i",
            Hyponym => "~",
            InstanceHyponym => "~i",
            MemberHolonym => "#m",
            SubstanceHolonym => "#s",
            PartHolonym => "#p",
            MemberMeronym => "%m",
            SubstanceMeronym => "%s",
            PartMeronym => "%p",
            Attribute => "=",
            DerivationallyRelatedForm => "+",
            DomainOfSynset => ";",
            TopicDomain => ";c",
            MemberOfTopicDomain => "-c",
            RegionDomain => ";r",
            MemberOfRegionDomain => "-r",
            UsageDomain => ";u",
            MemberOfUsageDomain => "-u",
            Entailment => "*",
            Cause => ">",
            AlsoSee => "^",
            VerbGroup => "$",
            SimilarTo => "&",
            ParticipleOfVerb => "<",
            Pertainym => "\\",
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        use Relationship::*;
        match self {
            Antonym => "antonym",
            Hypernym => "hypernym",
            InstanceHypernym => "instance hypernym",
            Hyponym => "hyponym",
            InstanceHyponym => "instance hyponym",
            MemberHolonym => "member holonym",
            SubstanceHolonym => "substance holonym",
            PartHolonym => "part holonym",
            MemberMeronym => "member meronym",
            SubstanceMeronym => "substance meronym",
            PartMeronym => "part meronym",
            Attribute => "attribute",
            DerivationallyRelatedForm => "derivationally related form",
            DomainOfSynset => "domain of synset",
            TopicDomain => "domain of synset (topic)",
            MemberOfTopicDomain => "member of this domain (topic)",
            RegionDomain => "domain of synset (region)",
            MemberOfRegionDomain => "member of this domain (region)",
            UsageDomain => "domain of synset (usage)",
            MemberOfUsageDomain => "member of this domain (usage)",
            Entailment => "entailment",
            Cause => "cause",
            AlsoSee => "also see",
            VerbGroup => "verb group",
            SimilarTo => "similar to",
            ParticipleOfVerb => "participle of verb",
            Pertainym => "pertainym",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const LEX_FILE_NAMES: [&str; 45] = [
    "adj.all",
    "adj.pert",
    "adv.all",
    "noun.Tops",
    "noun.act",
    "noun.animal",
    "noun.artifact",
    "noun.attribute",
    "noun.body",
    "noun.cognition",
    "noun.communication",
    "noun.event",
    "noun.feeling",
    "noun.food",
    "noun.group",
    "noun.location",
    "noun.motive",
    "noun.object",
    "noun.person",
    "noun.phenomenon",
    "noun.plant",
    "noun.possession",
    "noun.process",
    "noun.quantity",
    "noun.relation",
    "noun.shape",
    "noun.state",
    "noun.substance",
    "noun.time",
    "verb.body",
    "verb.change",
    "verb.cognition",
    "verb.communication",
    "verb.competition",
    "verb.consumption",
    "verb.contact",
    "verb.creation",
    "verb.emotion",
    "verb.motion",
    "verb.perception",
    "verb.possession",
    "verb.social",
    "verb.stative",
    "verb.weather",
    "adj.ppl",
];

/// Name of a lexicographer file (`lex_filenum`), e.g. `6` → `noun.artifact`.
pub fn lex_file_name(lex_filenum: u8) -> Option<&'static str> {
    LEX_FILE_NAMES.get(lex_filenum as usize).copied()
}

/// Syntactic position marker attached to some adjectives in `data.adj`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AdjMarker {
    /// `(p)`
    Predicate,
    /// `(a)`
    Prenominal,
    /// `(ip)`
    ImmediatelyPostnominal,
}

impl AdjMarker {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "p" => Some(AdjMarker::Predicate),
            "a" => Some(AdjMarker::Prenominal),
            "ip" => Some(AdjMarker::ImmediatelyPostnominal),
            _ => None,
        }
    }
}

/// Split a trailing adjective marker such as `(ip)` off a stored word.
///
/// Tokens without a recognised marker are returned unchanged.
pub fn split_adj_marker(token: &str) -> (&str, Option<AdjMarker>) {
    if let Some(body) = token.strip_suffix(')')
        && let Some((text, code)) = body.rsplit_once('(')
        && !text.is_empty()
        && let Some(marker) = AdjMarker::from_code(code)
    {
        return (text, Some(marker));
    }
    (token, None)
}

/// Turn a stored lemma (`ice_cream`) back into its surface form (`ice cream`).
pub fn stored_to_lemma(stored: &str) -> String {
    stored.replace('_', " ")
}

/// Case-folded lookup key for a lemma: trimmed, lower case, `_` as space.
pub fn fold_lemma(text: &str) -> String {
    text.trim().to_lowercase().replace('_', " ")
}

/// A synset member and its per-lexicographer-file `lex_id`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Word {
    pub text: String,
    pub lex_id: u8,
    pub marker: Option<AdjMarker>,
}

/// One pointer from a synset (or one of its words) to another synset.
///
/// Word numbers are 1-based; `None` stands for the `00` of the file format
/// and means the edge applies to the whole synset.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RelationshipEdge {
    pub relationship: Relationship,
    pub target: SynsetId,
    pub source_word: Option<u16>,
    pub target_word: Option<u16>,
}

impl RelationshipEdge {
    /// True for synset-to-synset edges, false for word-to-word (lexical) ones.
    pub fn is_semantic(&self) -> bool {
        self.source_word.is_none() && self.target_word.is_none()
    }
}

/// Complete synset record from a `data.*` line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Synset {
    pub id: SynsetId,
    pub lex_filenum: u8,
    /// Raw `ss_type`; may be [`Pos::AdjectiveSatellite`] while `id.pos` is
    /// the storage POS.
    pub pos: Pos,
    pub words: Vec<Word>,
    pub relationships: Vec<RelationshipEdge>,
    pub gloss: String,
}

impl Synset {
    /// Name of the lexicographer file this synset came from.
    pub fn lex_file_name(&self) -> Option<&'static str> {
        lex_file_name(self.lex_filenum)
    }

    /// 1-based word lookup, matching pointer word numbers.
    pub fn word(&self, number: u16) -> Option<&Word> {
        let idx = usize::from(number).checked_sub(1)?;
        self.words.get(idx)
    }

    /// Edges of a single relationship type, in file order.
    pub fn edges(&self, relationship: Relationship) -> impl Iterator<Item = &RelationshipEdge> {
        self.relationships
            .iter()
            .filter(move |edge| edge.relationship == relationship)
    }

    /// Gloss text up to the first `;` outside of a quoted example.
    pub fn definition(&self) -> &str {
        let mut in_quote = false;
        for (idx, ch) in self.gloss.char_indices() {
            match ch {
                '"' => in_quote = !in_quote,
                ';' if !in_quote => return self.gloss[..idx].trim(),
                _ => {}
            }
        }
        self.gloss.trim()
    }

    /// Double-quoted example sentences from the gloss.
    pub fn examples(&self) -> Vec<&str> {
        let mut examples = Vec::new();
        let mut quote_start: Option<usize> = None;
        for (idx, ch) in self.gloss.char_indices() {
            if ch != '"' {
                continue;
            }
            match quote_start.take() {
                Some(start) if idx > start + 1 => examples.push(&self.gloss[start + 1..idx]),
                Some(_) => {}
                None => quote_start = Some(idx),
            }
        }
        examples
    }
}

/// Index record from `index.*`: every sense of one lemma in one POS.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IndexEntry {
    pub lemma: String,
    pub pos: Pos,
    pub synset_cnt: u32,
    /// Distinct relationships the lemma takes part in, in file order.
    pub relationships: Vec<Relationship>,
    pub tagsense_cnt: u32,
    /// One offset per sense; sense number is position + 1.
    pub synset_offsets: Vec<u32>,
}

impl IndexEntry {
    pub fn synset_ids(&self) -> impl Iterator<Item = SynsetId> + '_ {
        self.synset_offsets
            .iter()
            .map(|offset| SynsetId::new(self.pos, *offset))
    }

    /// Offset of the synset for a 1-based sense number.
    pub fn offset_for_sense(&self, sense_number: usize) -> Option<u32> {
        let idx = sense_number.checked_sub(1)?;
        self.synset_offsets.get(idx).copied()
    }

    pub fn has_relationship(&self, relationship: Relationship) -> bool {
        self.relationships.contains(&relationship)
    }
}

/// Head synset reference carried by adjective-satellite sense keys.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HeadWord {
    pub lemma: String,
    pub id: u8,
}

/// Parsed `lemma%ss_type:lex_filenum:lex_id:head_word:head_id`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SenseKey {
    pub lemma: String,
    pub pos: Pos,
    pub lex_filenum: u8,
    pub lex_id: u8,
    pub head: Option<HeadWord>,
}

impl SenseKey {
    /// Parse a sense key. Returns `None` for anything that does not follow
    /// the five-field lex-sense layout.
    pub fn parse(key: &str) -> Option<Self> {
        let (lemma, lex_sense) = key.split_once('%')?;
        if lemma.is_empty() {
            return None;
        }
        let fields: Vec<&str> = lex_sense.split(':').collect();
        let [ss_type, lex_filenum, lex_id, head_word, head_id] = fields.as_slice() else {
            return None;
        };
        let pos = ss_type.parse::<u8>().ok().and_then(Pos::from_ss_type)?;
        let lex_filenum = lex_filenum.parse().ok()?;
        let lex_id = lex_id.parse().ok()?;
        let head = match (head_word.is_empty(), head_id.is_empty()) {
            (true, true) => None,
            (false, false) => Some(HeadWord {
                lemma: stored_to_lemma(head_word),
                id: head_id.parse().ok()?,
            }),
            _ => return None,
        };
        Some(Self {
            lemma: stored_to_lemma(lemma),
            pos,
            lex_filenum,
            lex_id,
            head,
        })
    }
}

impl fmt::Display for SenseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}%{}:{:02}:{:02}:",
            self.lemma.replace(' ', "_"),
            self.pos.ss_type(),
            self.lex_filenum,
            self.lex_id
        )?;
        match &self.head {
            Some(head) => write!(f, "{}:{:02}", head.lemma.replace(' ', "_"), head.id),
            None => f.write_str(":"),
        }
    }
}

/// One line of `index.sense`: a single sense of a lemma.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SenseEntry {
    pub key: SenseKey,
    pub synset_offset: u32,
    /// 1-based sense number within lemma + POS.
    pub sense_number: u32,
    pub tag_count: u32,
    /// Set when the loader resolved the synset eagerly.
    pub synset: Option<Arc<Synset>>,
}

impl SenseEntry {
    pub fn pos(&self) -> Pos {
        self.key.pos
    }

    pub fn lex_filenum(&self) -> u8 {
        self.key.lex_filenum
    }

    pub fn lex_file_name(&self) -> Option<&'static str> {
        lex_file_name(self.key.lex_filenum)
    }

    pub fn synset_id(&self) -> SynsetId {
        SynsetId::new(self.key.pos, self.synset_offset)
    }

    /// Eagerly resolved synset, if any. See `WordNet::sense_synset` in
    /// `wordstore-db` for on-demand resolution.
    pub fn synset(&self) -> Option<&Synset> {
        self.synset.as_deref()
    }
}

/// Decode the four-hex source/target field used in pointer blocks.
///
/// High byte is the source word number, low byte is the target word number.
/// Zero means "whole synset" and decodes to `None`. Returns `None` overall
/// when the field is not exactly four hex digits.
pub fn decode_word_numbers(hex4: &str) -> Option<(Option<u16>, Option<u16>)> {
    if hex4.len() != 4 || !hex4.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let src = u16::from_str_radix(&hex4[..2], 16).ok()?;
    let dst = u16::from_str_radix(&hex4[2..], 16).ok()?;
    let nonzero = |v: u16| if v == 0 { None } else { Some(v) };
    Some((nonzero(src), nonzero(dst)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_source_target() {
        assert_eq!(decode_word_numbers("0000"), Some((None, None)));
        assert_eq!(decode_word_numbers("0100"), Some((Some(1), None)));
        assert_eq!(decode_word_numbers("00ff"), Some((None, Some(255))));
        assert_eq!(decode_word_numbers("0a0b"), Some((Some(10), Some(11))));
        assert_eq!(decode_word_numbers("bad"), None);
        assert_eq!(decode_word_numbers("+1ff"), None);
    }

    #[test]
    fn satellites_fold_into_adjectives() {
        assert_eq!(Pos::from_char('s'), Some(Pos::AdjectiveSatellite));
        assert_eq!(Pos::AdjectiveSatellite.storage(), Pos::Adjective);
        assert_eq!(Pos::AdjectiveSatellite.file_stem(), "adj");
        assert_eq!(
            SynsetId::new(Pos::AdjectiveSatellite, 42),
            SynsetId::new(Pos::Adjective, 42)
        );
        assert_eq!(Pos::from_tag("nn"), None);
    }

    #[test]
    fn pointer_symbols_round_trip_through_table() {
        for symbol in [
            "!", "@", "@i", "~", "~i", "#m", "#s", "#p", "%m", "%s", "%p", "=", "+", ";", ";c",
            "-c", ";r", "-r", ";u", "-u", "*", ">", "^", "$", "&", "<", "\\",
        ] {
            let rel = Relationship::from_symbol(symbol).expect(symbol);
            assert_eq!(rel.symbol(), symbol);
        }
        assert_eq!(Relationship::from_symbol("?"), None);
        assert_eq!(Relationship::from_symbol("-"), None);
    }

    #[test]
    fn lexicographer_file_names() {
        assert_eq!(lex_file_name(0), Some("adj.all"));
        assert_eq!(lex_file_name(6), Some("noun.artifact"));
        assert_eq!(lex_file_name(18), Some("noun.person"));
        assert_eq!(lex_file_name(44), Some("adj.ppl"));
        assert_eq!(lex_file_name(45), None);
    }

    #[test]
    fn parses_sense_keys() {
        let key = SenseKey::parse("computer%1:06:00::").unwrap();
        assert_eq!(key.lemma, "computer");
        assert_eq!(key.pos, Pos::Noun);
        assert_eq!(key.lex_filenum, 6);
        assert_eq!(key.head, None);

        let sat = SenseKey::parse("live%5:00:07:active:05").unwrap();
        assert_eq!(sat.pos, Pos::AdjectiveSatellite);
        assert_eq!(sat.lex_id, 7);
        assert_eq!(
            sat.head,
            Some(HeadWord {
                lemma: "active".into(),
                id: 5
            })
        );
        assert_eq!(sat.to_string(), "live%5:00:07:active:05");

        let multi = SenseKey::parse("ice_cream%1:13:00::").unwrap();
        assert_eq!(multi.lemma, "ice cream");
        assert_eq!(multi.to_string(), "ice_cream%1:13:00::");

        assert!(SenseKey::parse("computer").is_none());
        assert!(SenseKey::parse("computer%1:06:00").is_none());
        assert!(SenseKey::parse("computer%9:06:00::").is_none());
        assert!(SenseKey::parse("live%5:00:07:active:").is_none());
    }

    #[test]
    fn splits_adjective_markers() {
        assert_eq!(
            split_adj_marker("elect(ip)"),
            ("elect", Some(AdjMarker::ImmediatelyPostnominal))
        );
        assert_eq!(split_adj_marker("live(a)"), ("live", Some(AdjMarker::Prenominal)));
        assert_eq!(split_adj_marker("Mr.(x)"), ("Mr.(x)", None));
        assert_eq!(split_adj_marker("plain"), ("plain", None));
    }

    #[test]
    fn gloss_definition_and_examples() {
        let synset = Synset {
            id: SynsetId::new(Pos::Noun, 1),
            lex_filenum: 6,
            pos: Pos::Noun,
            words: vec![Word {
                text: "computer".into(),
                lex_id: 0,
                marker: None,
            }],
            relationships: Vec::new(),
            gloss: r#"a machine for performing calculations; "the computer is down; again"; "a new one""#
                .into(),
        };
        assert_eq!(synset.definition(), "a machine for performing calculations");
        assert_eq!(
            synset.examples(),
            vec!["the computer is down; again", "a new one"]
        );
        assert_eq!(synset.word(1).map(|w| w.text.as_str()), Some("computer"));
        assert!(synset.word(0).is_none());
        assert!(synset.word(2).is_none());
    }

    #[test]
    fn folds_lemma_keys() {
        assert_eq!(fold_lemma(" Ice_Cream "), "ice cream");
        assert_eq!(stored_to_lemma("Aberdeen_Angus"), "Aberdeen Angus");
    }
}
