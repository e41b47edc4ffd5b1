use std::path::PathBuf;

use thiserror::Error;
use wordstore_morphy::ExceptionError;

/// Failure while loading a dictionary. A load either completes or returns
/// one of these; no partially built store is ever handed out.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("missing required WordNet file: {}", .path.display())]
    MissingFile { path: PathBuf },

    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record that does not follow the file grammar.
    #[error("{file}:{line}: {reason} in {text:?}")]
    Malformed {
        file: String,
        line: usize,
        text: String,
        reason: String,
    },
}

impl From<ExceptionError> for LoadError {
    fn from(err: ExceptionError) -> Self {
        match err {
            ExceptionError::Io { path, source } => LoadError::Io { path, source },
            ExceptionError::Malformed { path, line, text } => LoadError::Malformed {
                file: path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string()),
                line,
                text,
                reason: "expected a derived form followed by at least one base form".into(),
            },
        }
    }
}

pub type Result<T, E = LoadError> = std::result::Result<T, E>;
