pub mod config;
pub mod render;

use std::fmt::Display;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use wordstore_db::WordNet;
use wordstore_types::Pos;

#[derive(Debug, Parser)]
#[command(name = "wordstore")]
#[command(about = "Look up lemmas, synsets and base forms in a WordNet dictionary.")]
#[command(version)]
pub struct Cli {
    /// WordNet `dict` directory; searched for when omitted.
    #[arg(long, global = true, env = "WORDNET_DIR")]
    pub dict: Option<PathBuf>,

    /// How dictionary files are read: `mmap` or `owned`.
    #[arg(long, global = true, env = "WORDNET_LOAD_MODE")]
    pub mode: Option<String>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show every sense of a lemma (inflected forms are reduced first)
    Lookup {
        lemma: String,

        /// Restrict to one part of speech (n, v, a, s, r)
        #[arg(long, value_parser = parse_pos)]
        pos: Option<Pos>,
    },

    /// Show one synset and its relationships
    Synset {
        #[arg(value_parser = parse_pos)]
        pos: Pos,

        /// Byte offset from the data file
        offset: u32,
    },

    /// Reduce a word to its base forms
    Morph {
        word: String,

        #[arg(long, value_parser = parse_pos)]
        pos: Option<Pos>,
    },

    /// Summarize the loaded dictionary
    Stats,
}

/// Accepts single-letter tags as well as the spelled-out names.
pub fn parse_pos(raw: &str) -> Result<Pos, String> {
    let pos = match raw.trim().to_ascii_lowercase().as_str() {
        "n" | "noun" => Pos::Noun,
        "v" | "verb" => Pos::Verb,
        "a" | "adj" | "adjective" => Pos::Adjective,
        "s" | "sat" | "satellite" => Pos::AdjectiveSatellite,
        "r" | "adv" | "adverb" => Pos::Adverb,
        _ => return Err(format!("unknown part of speech {raw:?}")),
    };
    Ok(pos)
}

/// Run one subcommand against a loaded store.
pub fn execute(cli: &Cli, wn: &WordNet, dict_dir: &Path, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Command::Lookup { lemma, pos } => emit(out, cli.json, &render::lookup_view(wn, lemma, *pos)),
        Command::Synset { pos, offset } => {
            let synset = wn
                .get_synset(*pos, *offset)
                .with_context(|| format!("no {pos} synset at offset {offset:08}"))?;
            emit(out, cli.json, &render::synset_view(wn, synset))
        }
        Command::Morph { word, pos } => emit(out, cli.json, &render::morph_view(wn, word, *pos)),
        Command::Stats => emit(out, cli.json, &render::stats_view(wn, dict_dir)),
    }
}

fn emit<T: Serialize + Display>(out: &mut impl Write, json: bool, view: &T) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, view).context("serializing output")?;
        writeln!(out)?;
    } else {
        write!(out, "{view}")?;
    }
    Ok(())
}
