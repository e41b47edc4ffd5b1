use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use wordstore_db::{LoadMode, WordNet};
use wordstore_types::Pos;

const USAGE: &str = "usage: cargo run -p wordstore-db --example lookup -- <dict-dir> [--demo | <word>]";

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let dict_dir = args.next().map(PathBuf::from).context(USAGE)?;
    let next = args.next();
    if args.next().is_some() {
        bail!("too many arguments");
    }

    let words: Vec<String> = match next.as_deref() {
        Some("--demo") => vec![
            "running".into(),
            "better".into(),
            "children".into(),
            "dogs".into(),
            "happiest".into(),
        ],
        Some(word) => vec![word.to_string()],
        None => bail!(USAGE),
    };

    let wn = WordNet::load_with_mode(&dict_dir, LoadMode::Mmap)
        .with_context(|| format!("loading WordNet from {}", dict_dir.display()))?;

    println!("Dictionary: {}", dict_dir.display());

    for word in words {
        println!("\nSurface: {}", word);
        for pos in Pos::STORAGE {
            let candidates = wn.morph_all(&word, pos);
            if candidates.is_empty() {
                continue;
            }
            println!("  {}:", pos);
            for cand in candidates {
                let senses = wn.lookup_senses_with_pos(&cand.lemma, pos).count();
                println!("    {:<10} [{:?}] {} senses", cand.lemma, cand.source, senses);
            }
        }
    }

    Ok(())
}
