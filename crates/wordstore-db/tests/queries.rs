use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use std::thread;

use wordstore_db::{SenseIndex, WordNet};
use wordstore_morphy::CandidateSource;
use wordstore_types::{Pos, Relationship, SynsetId};

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("wn")
}

fn wordnet() -> &'static WordNet {
    static WN: OnceLock<WordNet> = OnceLock::new();
    WN.get_or_init(|| WordNet::load(fixture_dir()).expect("load fixtures"))
}

fn morph(word: &str, pos: Pos) -> Option<String> {
    wordnet().morph(word, pos).map(|b| b.lemma.into_owned())
}

#[test]
fn lookup_computer_spans_two_lexicographer_files() {
    let wn = wordnet();
    let senses = wn.lookup("computer");
    assert_eq!(senses.len(), 2);
    assert!(senses.iter().all(|s| s.pos() == Pos::Noun));
    let files: Vec<_> = senses.iter().map(|s| s.lex_file_name()).collect();
    assert_eq!(files, vec![Some("noun.artifact"), Some("noun.person")]);
    assert_eq!(senses[0].key.to_string(), "computer%1:06:00::");
    assert_eq!(senses[0].tag_count, 6);
}

#[test]
fn lookup_is_case_insensitive() {
    let wn = wordnet();
    assert_eq!(wn.lookup("Computer"), wn.lookup("computer"));
    assert_eq!(wn.lookup("  COMPUTER "), wn.lookup("computer"));
    assert_eq!(
        wn.lookup_with_pos("Aberdeen_Angus", Pos::Noun),
        wn.lookup_with_pos("aberdeen angus", Pos::Noun)
    );
    assert!(wn.lookup("ewok").is_empty());
    assert!(wn.lookup("").is_empty());
}

#[test]
fn lookup_live_covers_every_part_of_speech() {
    let wn = wordnet();
    let senses = wn.lookup("live");
    assert_eq!(senses.len(), 19);
    let count = |pos| senses.iter().filter(|s| s.pos() == pos).count();
    assert_eq!(count(Pos::Verb), 7);
    assert_eq!(count(Pos::Adjective), 3);
    assert_eq!(count(Pos::Adverb), 1);
    assert_eq!(count(Pos::AdjectiveSatellite), 8);

    let stative = senses
        .iter()
        .filter(|s| s.lex_file_name() == Some("verb.stative"))
        .count();
    assert_eq!(stative, 6);

    let active = senses
        .iter()
        .find(|s| s.key.to_string() == "live%5:00:07:active:05")
        .expect("satellite sense");
    assert_eq!(active.sense_number, 11);
    assert_eq!(active.synset_id(), SynsetId::new(Pos::Adjective, 41_710));
}

#[test]
fn senses_resolve_to_synsets() {
    let wn = wordnet();
    for sense in wn.lookup("live") {
        let synset = wn.sense_synset(sense).expect("live synset loaded");
        assert_eq!(synset.id, sense.synset_id());
        assert!(
            synset
                .words
                .iter()
                .any(|w| w.text == "live" && w.lex_id == sense.key.lex_id),
            "{} not found in {}",
            sense.key,
            synset.id
        );
    }

    let dangling = &wn.lookup("compute")[0];
    assert!(dangling.synset.is_none());
    assert!(wn.sense_synset(dangling).is_none());
}

#[test]
fn unresolved_senses_resolve_through_the_store() {
    let wn = wordnet();
    let bytes = std::fs::read(fixture_dir().join("index.sense")).expect("read index.sense");
    let senses = SenseIndex::parse_unresolved("index.sense", &bytes).expect("parse index.sense");

    let computer = senses.get("computer");
    assert_eq!(computer.len(), 2);
    for sense in computer {
        assert!(sense.synset.is_none());
        let synset = wn.sense_synset(sense).expect("resolved by offset");
        assert_eq!(synset.id, sense.synset_id());
        assert!(synset.words.iter().any(|w| w.text == "computer"));
    }
    assert!(wn.sense_synset(&senses.get("compute")[0]).is_none());
}

#[test]
fn senses_filtered_by_part_of_speech() {
    let wn = wordnet();
    assert_eq!(wn.lookup_senses_with_pos("live", Pos::Verb).count(), 7);
    assert_eq!(wn.lookup_senses_with_pos("live", Pos::Adjective).count(), 11);
    assert_eq!(
        wn.lookup_senses_with_pos("live", Pos::AdjectiveSatellite).count(),
        11
    );
    assert_eq!(wn.lookup_senses_with_pos("computer", Pos::Verb).count(), 0);

    let first = wn
        .lookup_with_pos_and_sense("live", Pos::Verb, 1)
        .expect("first verb sense");
    assert_eq!(first.synset_offset, 2_655_932);
    assert_eq!(first.tag_count, 129);
    assert!(wn.lookup_with_pos_and_sense("live", Pos::Verb, 8).is_none());
    assert!(wn.lookup_with_pos_and_sense("live", Pos::Verb, 0).is_none());
}

#[test]
fn index_entries_follow_sense_order() {
    let wn = wordnet();
    let entry = wn.lookup_with_pos("live", Pos::Verb).expect("live verb");
    for sense in wn.lookup_senses_with_pos("live", Pos::Verb) {
        assert_eq!(
            entry.offset_for_sense(sense.sense_number as usize),
            Some(sense.synset_offset)
        );
    }
    assert_eq!(
        wn.lookup_with_pos("live", Pos::AdjectiveSatellite)
            .map(|e| e.synset_cnt),
        Some(11)
    );
    assert!(wn.lookup_with_pos("live", Pos::Noun).is_none());
}

#[test]
fn hypernym_chain_stops_at_dangling_pointer() {
    let wn = wordnet();
    let computer = wn.get_synset(Pos::Noun, 3_086_983).unwrap();
    let parents: Vec<_> = wn
        .related(computer, Relationship::Hypernym)
        .map(|s| s.words[0].text.as_str())
        .collect();
    assert_eq!(parents, vec!["machine"]);

    let chain: Vec<_> = wn
        .closure(computer.id, Relationship::Hypernym)
        .into_iter()
        .map(|s| s.words[0].text.as_str())
        .collect();
    assert_eq!(chain, vec!["machine", "device"]);

    let angus = wn.get_synset(Pos::Noun, 2_408_581).unwrap();
    assert_eq!(angus.edges(Relationship::Hypernym).count(), 1);
    assert_eq!(wn.related(angus, Relationship::Hypernym).count(), 0);
}

#[test]
fn closure_terminates_on_cycles() {
    let wn = wordnet();
    // live (02620216) and survive (02624202) form a verb group cycle.
    let start = SynsetId::new(Pos::Verb, 2_620_216);
    let group: Vec<_> = wn
        .closure(start, Relationship::VerbGroup)
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(group, vec![SynsetId::new(Pos::Verb, 2_624_202)]);
    assert!(
        wn.closure(SynsetId::new(Pos::Noun, 1), Relationship::Hypernym)
            .is_empty()
    );
}

#[test]
fn lexical_edges_name_their_words() {
    let wn = wordnet();
    let live = wn.get_synset(Pos::Verb, 2_620_216).unwrap();
    let edge = live
        .edges(Relationship::DerivationallyRelatedForm)
        .next()
        .expect("derivation edge");
    assert!(!edge.is_semantic());
    let (from, to) = wn.edge_words(live, edge);
    assert_eq!(from.map(|w| w.text.as_str()), Some("live"));
    assert_eq!(to.map(|w| w.text.as_str()), Some("live"));
    assert_eq!(
        wn.edge_target(edge).map(|s| s.pos),
        Some(Pos::Adjective)
    );

    let hypernym = live.edges(Relationship::Hypernym).next().unwrap();
    assert_eq!(wn.edge_words(live, hypernym), (None, None));

    let well = wn.get_synset(Pos::Adverb, 11_093).unwrap();
    let pertainym = well.edges(Relationship::Pertainym).next().unwrap();
    assert_eq!(
        wn.edge_words(well, pertainym).1.map(|w| w.text.as_str()),
        Some("good")
    );
}

#[test]
fn morph_uses_exception_lists() {
    assert_eq!(morph("swam", Pos::Verb).as_deref(), Some("swim"));
    assert_eq!(morph("octopi", Pos::Noun).as_deref(), Some("octopus"));
    assert_eq!(morph("Angus", Pos::Noun).as_deref(), Some("Angus"));
    assert_eq!(morph("better", Pos::AdjectiveSatellite).as_deref(), Some("good"));
    assert_eq!(morph("best", Pos::Adverb).as_deref(), Some("well"));

    let base = wordnet().morph("swam", Pos::Verb).unwrap();
    assert_eq!(base.source, CandidateSource::Exception);
}

#[test]
fn morph_applies_suffix_rules_against_the_index() {
    assert_eq!(morph("ewoks", Pos::Noun), None);
    assert_eq!(morph("computers", Pos::Noun).as_deref(), Some("computer"));
    assert_eq!(morph("churches", Pos::Noun).as_deref(), Some("church"));
    assert_eq!(morph("boxes", Pos::Noun).as_deref(), Some("box"));
    assert_eq!(morph("firemen", Pos::Noun).as_deref(), Some("fireman"));
    assert_eq!(morph("lives", Pos::Verb).as_deref(), Some("live"));
    assert_eq!(morph("lived", Pos::Verb).as_deref(), Some("live"));
    assert_eq!(morph("living", Pos::Verb).as_deref(), Some("live"));
    assert_eq!(morph("hoping", Pos::Verb).as_deref(), Some("hope"));
    assert_eq!(morph("carries", Pos::Verb).as_deref(), Some("carry"));
    assert_eq!(morph("larger", Pos::Adjective).as_deref(), Some("large"));
    assert_eq!(morph("greatest", Pos::AdjectiveSatellite).as_deref(), Some("great"));
    assert_eq!(morph("quickly", Pos::Adverb), None);
}

#[test]
fn morph_keeps_unreducible_nouns() {
    assert_eq!(morph("glass", Pos::Noun).as_deref(), Some("glass"));
    assert_eq!(morph("ox", Pos::Noun).as_deref(), Some("ox"));
    let base = wordnet().morph("glass", Pos::Noun).unwrap();
    assert_eq!(base.source, CandidateSource::Unchanged);
}

#[test]
fn morph_all_starts_with_morph() {
    let wn = wordnet();
    for (word, pos) in [
        ("living", Pos::Verb),
        ("computers", Pos::Noun),
        ("bade", Pos::Verb),
    ] {
        let all = wn.morph_all(word, pos);
        assert_eq!(all.first(), wn.morph(word, pos).as_ref(), "{word}");
    }
    let bade: Vec<_> = wn
        .morph_all("bade", Pos::Verb)
        .into_iter()
        .map(|b| b.lemma.into_owned())
        .collect();
    assert_eq!(bade, vec!["bid", "bide"]);
}

#[test]
fn store_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WordNet>();

    let wn = Arc::new(WordNet::load(fixture_dir()).expect("load fixtures"));
    let handles: Vec<_> = ["computer", "live", "octopus", "dog"]
        .into_iter()
        .map(|lemma| {
            let wn = Arc::clone(&wn);
            thread::spawn(move || {
                let senses = wn.lookup(lemma).len();
                let synsets = wn
                    .lookup(lemma)
                    .iter()
                    .filter_map(|s| wn.sense_synset(s))
                    .count();
                (senses, synsets)
            })
        })
        .collect();
    let results: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("query thread"))
        .collect();
    assert_eq!(results, vec![(2, 2), (19, 19), (2, 2), (1, 1)]);
}
