use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;
use wordstore_db::LoadMode;

/// Install prefixes probed for a `WordNet-3.x/dict` directory.
const INSTALL_ROOTS: [&str; 8] = [
    "/usr",
    "/usr/share",
    "/usr/local",
    "/usr/local/share",
    "/opt",
    "/opt/share",
    "/opt/local",
    "/opt/local/share",
];
const RELEASES: [&str; 2] = ["WordNet-3.0", "WordNet-3.1"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "no WordNet dictionary found; pass --dict or set WORDNET_DIR ({} locations searched)",
        .searched.len()
    )]
    NoDictionary { searched: Vec<PathBuf> },
    #[error("invalid load mode {0:?}; expected `mmap` or `owned`")]
    InvalidMode(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dict_dir: PathBuf,
    pub mode: LoadMode,
}

impl Config {
    /// Resolve settings from flags first, then the environment, then
    /// defaults. `env` is consulted for `WNHOME` and `WNSEARCHDIR`; the
    /// `WORDNET_DIR`/`WORDNET_LOAD_MODE` variables arrive through the flags.
    pub fn resolve(
        dict: Option<PathBuf>,
        mode: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mode = match mode {
            Some(raw) => {
                parse_load_mode(raw).ok_or_else(|| ConfigError::InvalidMode(raw.to_string()))?
            }
            None => LoadMode::default(),
        };
        let dict_dir = match dict {
            Some(dir) => dir,
            None => discover_dict_dir(env)?,
        };
        Ok(Self { dict_dir, mode })
    }
}

pub fn parse_load_mode(raw: &str) -> Option<LoadMode> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "mmap" => Some(LoadMode::Mmap),
        "owned" => Some(LoadMode::Owned),
        _ => None,
    }
}

/// Directories probed for a dictionary, in order.
pub fn candidate_dirs(env: impl Fn(&str) -> Option<String>) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(home) = env("WNHOME").filter(|v| !v.is_empty()) {
        dirs.push(PathBuf::from(home).join("dict"));
    }
    if let Some(search) = env("WNSEARCHDIR").filter(|v| !v.is_empty()) {
        dirs.push(PathBuf::from(search));
    }
    for root in INSTALL_ROOTS {
        for release in RELEASES {
            dirs.push(PathBuf::from(root).join(release).join("dict"));
        }
    }
    dirs
}

pub fn discover_dict_dir(env: impl Fn(&str) -> Option<String>) -> Result<PathBuf, ConfigError> {
    let searched = candidate_dirs(env);
    for dir in &searched {
        if dir.is_dir() {
            debug!("found wordnet dictionary at {}", dir.display());
            return Ok(dir.clone());
        }
        debug!("no wordnet dictionary at {}", dir.display());
    }
    Err(ConfigError::NoDictionary { searched })
}
