use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use wordstore_db::{LoadMode, WordNet};
use wordstore_types::Pos;

fn main() -> Result<()> {
    let dict_dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: cargo run -p wordstore-db --example stats -- <path-to-wordnet-dir>")?;

    let wn = WordNet::load_with_mode(&dict_dir, LoadMode::Mmap)
        .with_context(|| format!("loading WordNet from {}", dict_dir.display()))?;

    let mut word_count = 0usize;
    let mut edge_count = 0usize;
    let mut lexical_edges = 0usize;
    let mut dangling_edges = 0usize;
    let mut gloss_example_count = 0usize;

    for syn in wn.iter_synsets() {
        word_count += syn.words.len();
        edge_count += syn.relationships.len();
        gloss_example_count += syn.examples().len();
        for edge in &syn.relationships {
            if !edge.is_semantic() {
                lexical_edges += 1;
            }
            if wn.edge_target(edge).is_none() {
                dangling_edges += 1;
            }
        }
    }

    println!("Dictionary: {}", dict_dir.display());
    for pos in Pos::STORAGE {
        println!(
            "{:<5} index entries: {}",
            pos.to_string(),
            wn.iter_index(pos).count()
        );
    }
    println!("Index entries : {}", wn.index_count());
    println!("Synsets       : {}", wn.synset_count());
    println!("Words in synsets: {}", word_count);
    println!("Edges         : {} ({} lexical, {} dangling)", edge_count, lexical_edges, dangling_edges);
    println!("Gloss examples: {}", gloss_example_count);
    println!(
        "Sense entries : {} for {} lemmas",
        wn.sense_count(),
        wn.sense_lemma_count()
    );

    // Spot-check a couple of lemmas to confirm lookup.
    for (pos, lemma) in [(Pos::Noun, "dog"), (Pos::Verb, "run")] {
        println!(
            "Lemma '{}' ({}) exists? {}",
            lemma,
            pos,
            wn.lemma_exists(pos, lemma)
        );
    }

    Ok(())
}
