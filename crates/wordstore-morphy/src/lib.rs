//! WordNet-style morphological processing (morphy).
//!
//! Reduces an inflected surface form to the base form under which the
//! dictionary indexes it. The crate is decoupled from any particular loader:
//! candidates are validated through a caller-provided existence predicate,
//! typically `WordNet::lemma_exists` from `wordstore-db`.
//!
//! # How it works
//! 1. An exact match in the POS exception list (`*.exc`) wins outright.
//! 2. Adverbs have no suffix rules; without an exception they are a miss.
//! 3. Nouns lose a trailing `ful`; otherwise words ending in `ss` or of at
//!    most two characters are already base forms.
//! 4. POS suffix rules are tried shortest suffix first, each replacement in
//!    table order; the first candidate the predicate accepts is the answer.
//!
//! # Example
//! ```no_run
//! use wordstore_morphy::Morphy;
//! use wordstore_types::Pos;
//!
//! # fn main() -> Result<(), wordstore_morphy::ExceptionError> {
//! let morph = Morphy::load("/path/to/wordnet")?;
//! let exists = |_pos, lemma: &str| lemma == "church";
//! let base = morph.morph(Pos::Noun, "churches", exists).unwrap();
//! assert_eq!(base.lemma, "church");
//! # Ok(()) }
//! ```

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use wordstore_types::{Pos, stored_to_lemma};

/// Failure while reading a `*.exc` file.
#[derive(Debug, Error)]
pub enum ExceptionError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}:{}: malformed exception entry {:?}", .path.display(), .line, .text)]
    Malformed {
        path: PathBuf,
        line: usize,
        text: String,
    },
}

/// Where a base form came from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CandidateSource {
    Exception,
    /// The word was judged to be a base form already.
    Unchanged,
    Rule {
        suffix: &'static str,
        replacement: &'static str,
    },
}

/// A base form paired with its POS and provenance.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BaseForm<'a> {
    pub pos: Pos,
    pub lemma: Cow<'a, str>,
    pub source: CandidateSource,
}

/// Irregular forms for one part of speech, keyed by the exact derived form.
#[derive(Clone, Debug, Default)]
pub struct ExceptionTable {
    forms: HashMap<String, Vec<String>>,
}

impl ExceptionTable {
    /// Parse `derived base [base...]` lines. `_` becomes a space on both
    /// sides; keys stay case-sensitive.
    pub fn parse(path: &Path, text: &str) -> Result<Self, ExceptionError> {
        let mut forms = HashMap::new();
        for (lineno, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let mut parts = line.split_ascii_whitespace();
            let derived = parts.next().map(stored_to_lemma);
            let bases: Vec<String> = parts.map(stored_to_lemma).collect();
            match derived {
                Some(derived) if !bases.is_empty() => {
                    forms.insert(derived, bases);
                }
                _ => {
                    return Err(ExceptionError::Malformed {
                        path: path.to_path_buf(),
                        line: lineno + 1,
                        text: raw.to_string(),
                    });
                }
            }
        }
        Ok(Self { forms })
    }

    pub fn from_pairs<'s>(pairs: impl IntoIterator<Item = (&'s str, &'s str)>) -> Self {
        let mut forms: HashMap<String, Vec<String>> = HashMap::new();
        for (derived, base) in pairs {
            forms
                .entry(derived.to_string())
                .or_default()
                .push(base.to_string());
        }
        Self { forms }
    }

    pub fn get(&self, derived: &str) -> Option<&[String]> {
        self.forms.get(derived).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

/// Morphological reducer owning the exception tables of one dictionary.
#[derive(Clone, Debug, Default)]
pub struct Morphy {
    exceptions: HashMap<Pos, ExceptionTable>,
}

impl Morphy {
    /// Load exception lists (`noun.exc`, `verb.exc`, `adj.exc`, `adv.exc`)
    /// from a WordNet dict directory.
    ///
    /// Files are optional; missing ones are treated as empty.
    pub fn load(dict_dir: impl AsRef<Path>) -> Result<Self, ExceptionError> {
        let dir = dict_dir.as_ref();
        let mut exceptions = HashMap::new();
        for pos in Pos::STORAGE {
            let path = dir.join(format!("{}.exc", pos.file_stem()));
            if !path.exists() {
                debug!("no exception list at {}, using empty table", path.display());
                exceptions.insert(pos, ExceptionTable::default());
                continue;
            }
            let text = fs::read_to_string(&path).map_err(|source| ExceptionError::Io {
                path: path.clone(),
                source,
            })?;
            let table = ExceptionTable::parse(&path, &text)?;
            debug!("loaded {} {} exceptions", table.len(), pos);
            exceptions.insert(pos, table);
        }
        Ok(Self { exceptions })
    }

    /// Build from explicit tables; satellite keys are folded into adjectives.
    pub fn from_tables(tables: impl IntoIterator<Item = (Pos, ExceptionTable)>) -> Self {
        Self {
            exceptions: tables
                .into_iter()
                .map(|(pos, table)| (pos.storage(), table))
                .collect(),
        }
    }

    pub fn exception_count(&self, pos: Pos) -> usize {
        self.exceptions
            .get(&pos.storage())
            .map_or(0, ExceptionTable::len)
    }

    /// Best base form for `word`, or `None` when nothing in the dictionary
    /// matches.
    ///
    /// `lemma_exists` is only consulted for rule-generated candidates;
    /// exception hits and unreducible nouns are returned as they are.
    pub fn morph<'a, F>(&'a self, pos: Pos, word: &str, lemma_exists: F) -> Option<BaseForm<'a>>
    where
        F: Fn(Pos, &str) -> bool,
    {
        self.reduce(pos, word, &lemma_exists, true).into_iter().next()
    }

    /// Every base form the algorithm accepts, in the order it tests them.
    /// The first element is what [`Morphy::morph`] returns.
    pub fn morph_all<'a, F>(&'a self, pos: Pos, word: &str, lemma_exists: F) -> Vec<BaseForm<'a>>
    where
        F: Fn(Pos, &str) -> bool,
    {
        self.reduce(pos, word, &lemma_exists, false)
    }

    fn reduce<'a, F>(
        &'a self,
        pos: Pos,
        word: &str,
        lemma_exists: &F,
        first_only: bool,
    ) -> Vec<BaseForm<'a>>
    where
        F: Fn(Pos, &str) -> bool,
    {
        let bucket = pos.storage();

        if let Some(bases) = self.exceptions.get(&bucket).and_then(|t| t.get(word)) {
            let take = if first_only { 1 } else { bases.len() };
            return bases
                .iter()
                .take(take)
                .map(|base| BaseForm {
                    pos,
                    lemma: Cow::Borrowed(base.as_str()),
                    source: CandidateSource::Exception,
                })
                .collect();
        }

        let mut stem = word;
        match bucket {
            Pos::Adverb => return Vec::new(),
            Pos::Noun => {
                if let Some(stripped) = word.strip_suffix("ful") {
                    stem = stripped;
                } else if word.ends_with("ss") || word.chars().count() <= 2 {
                    return vec![BaseForm {
                        pos,
                        lemma: Cow::Owned(word.to_string()),
                        source: CandidateSource::Unchanged,
                    }];
                }
            }
            _ => {}
        }

        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for len in 1..=4 {
            if stem.len() <= len {
                break;
            }
            let split = stem.len() - len;
            if !stem.is_char_boundary(split) {
                continue;
            }
            let (prefix, suffix) = stem.split_at(split);
            let Some(&(suffix, replacements)) = rules_for(bucket)
                .iter()
                .find(|(candidate, _)| *candidate == suffix)
            else {
                continue;
            };
            for &replacement in replacements {
                let candidate = format!("{prefix}{replacement}");
                if !lemma_exists(pos, &candidate) || !seen.insert(candidate.clone()) {
                    continue;
                }
                out.push(BaseForm {
                    pos,
                    lemma: Cow::Owned(candidate),
                    source: CandidateSource::Rule {
                        suffix,
                        replacement,
                    },
                });
                if first_only {
                    return out;
                }
            }
        }
        out
    }
}

type SuffixRules = &'static [(&'static str, &'static [&'static str])];

fn rules_for(pos: Pos) -> SuffixRules {
    match pos.storage() {
        Pos::Noun => &[
            ("s", &[""]),
            ("ses", &["s"]),
            ("xes", &["x"]),
            ("zes", &["z"]),
            ("ches", &["ch"]),
            ("shes", &["sh"]),
            ("men", &["man"]),
            ("ies", &["y"]),
        ],
        Pos::Verb => &[
            ("s", &[""]),
            ("ies", &["y"]),
            ("es", &["e", ""]),
            ("ed", &["e", ""]),
            ("ing", &["e", ""]),
        ],
        Pos::Adjective => &[("er", &["", "e"]), ("est", &["", "e"])],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_exists(targets: &[(&str, Pos)]) -> impl Fn(Pos, &str) -> bool {
        let set: HashSet<(Pos, String)> = targets
            .iter()
            .map(|(lemma, pos)| (pos.storage(), lemma.to_lowercase()))
            .collect();
        move |pos, lemma| set.contains(&(pos.storage(), lemma.to_lowercase()))
    }

    fn with_exceptions(pos: Pos, pairs: &[(&str, &str)]) -> Morphy {
        Morphy::from_tables([(pos, ExceptionTable::from_pairs(pairs.iter().copied()))])
    }

    #[test]
    fn exceptions_win_without_validation() {
        let morph = with_exceptions(Pos::Verb, &[("swam", "swim")]);
        let base = morph.morph(Pos::Verb, "swam", fake_exists(&[])).unwrap();
        assert_eq!(base.lemma, "swim");
        assert_eq!(base.source, CandidateSource::Exception);
    }

    #[test]
    fn exception_keys_are_case_sensitive() {
        let morph = with_exceptions(Pos::Noun, &[("Angus", "Angus")]);
        let base = morph.morph(Pos::Noun, "Angus", fake_exists(&[])).unwrap();
        assert_eq!(base.lemma, "Angus");
        assert!(morph.morph(Pos::Noun, "angus", fake_exists(&[])).is_none());
    }

    #[test]
    fn satellites_use_adjective_exceptions() {
        let morph = with_exceptions(Pos::Adjective, &[("better", "good")]);
        let base = morph
            .morph(Pos::AdjectiveSatellite, "better", fake_exists(&[]))
            .unwrap();
        assert_eq!(base.lemma, "good");
    }

    #[test]
    fn adverbs_have_no_rules() {
        let morph = Morphy::default();
        let exists = fake_exists(&[("quick", Pos::Adverb), ("quickly", Pos::Adverb)]);
        assert!(morph.morph(Pos::Adverb, "quickly", &exists).is_none());
    }

    #[test]
    fn short_and_double_s_nouns_are_unchanged() {
        let morph = Morphy::default();
        for word in ["glass", "ox", "a"] {
            let base = morph.morph(Pos::Noun, word, fake_exists(&[])).unwrap();
            assert_eq!(base.lemma, word);
            assert_eq!(base.source, CandidateSource::Unchanged);
        }
    }

    #[test]
    fn shortest_suffix_is_tried_first() {
        let morph = Morphy::default();
        // "s" -> "churche" is tested before "ches" -> "church".
        let exists = fake_exists(&[("church", Pos::Noun), ("churche", Pos::Noun)]);
        let base = morph.morph(Pos::Noun, "churches", &exists).unwrap();
        assert_eq!(base.lemma, "churche");

        let all = morph.morph_all(Pos::Noun, "churches", &exists);
        let lemmas: Vec<_> = all.iter().map(|b| &*b.lemma).collect();
        assert_eq!(lemmas, vec!["churche", "church"]);
    }

    #[test]
    fn verb_rules_try_replacements_in_order() {
        let morph = Morphy::default();
        let exists = fake_exists(&[("hope", Pos::Verb), ("live", Pos::Verb), ("carry", Pos::Verb)]);
        assert_eq!(morph.morph(Pos::Verb, "hoping", &exists).unwrap().lemma, "hope");
        assert_eq!(morph.morph(Pos::Verb, "lived", &exists).unwrap().lemma, "live");
        let carries = morph.morph(Pos::Verb, "carries", &exists).unwrap();
        assert_eq!(carries.lemma, "carry");
        assert_eq!(
            carries.source,
            CandidateSource::Rule {
                suffix: "ies",
                replacement: "y"
            }
        );
    }

    #[test]
    fn noun_ful_is_stripped_before_rules() {
        let morph = Morphy::default();
        let exists = fake_exists(&[("box", Pos::Noun), ("hand", Pos::Noun)]);
        assert_eq!(morph.morph(Pos::Noun, "boxesful", &exists).unwrap().lemma, "box");
        assert!(morph.morph(Pos::Noun, "handful", &exists).is_none());
    }

    #[test]
    fn misses_do_not_fall_back_to_input() {
        let morph = Morphy::default();
        assert!(morph.morph(Pos::Noun, "ewoks", fake_exists(&[])).is_none());
        assert!(morph.morph(Pos::Adjective, "larger", fake_exists(&[])).is_none());
        let exists = fake_exists(&[("large", Pos::Adjective)]);
        assert_eq!(morph.morph(Pos::Adjective, "larger", &exists).unwrap().lemma, "large");
    }

    #[test]
    fn prefix_must_be_non_empty() {
        let morph = Morphy::default();
        let exists = fake_exists(&[("", Pos::Verb), ("e", Pos::Verb)]);
        assert!(morph.morph(Pos::Verb, "ing", &exists).is_none());
    }

    #[test]
    fn parses_exception_files() {
        let path = Path::new("verb.exc");
        let table = ExceptionTable::parse(path, "swam swim\nwent go\nbade bid bide\n\n").unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("bade").unwrap(), ["bid", "bide"]);

        let multi = ExceptionTable::parse(path, "brothers-in-law brother-in-law\nmen_of_war man_of_war\n")
            .unwrap();
        assert_eq!(multi.get("men of war").unwrap(), ["man of war"]);

        let err = ExceptionTable::parse(path, "swam swim\nlonely\n").unwrap_err();
        assert!(matches!(err, ExceptionError::Malformed { line: 2, .. }));
    }

    #[test]
    fn missing_files_load_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("verb.exc"), "swam swim\n").unwrap();
        let morph = Morphy::load(dir.path()).unwrap();
        assert_eq!(morph.exception_count(Pos::Verb), 1);
        assert_eq!(morph.exception_count(Pos::Noun), 0);
    }
}
