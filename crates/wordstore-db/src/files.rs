//! Raw file access and line splitting shared by the record parsers.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use memmap2::Mmap;

use crate::error::{LoadError, Result};

/// Strategy for reading dictionary files.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum LoadMode {
    /// Memory-map each file while it is parsed.
    #[default]
    Mmap,
    /// Read each file into an owned buffer (portable fallback).
    Owned,
}

pub(crate) enum Buffer {
    Mmap(Mmap),
    Owned(Vec<u8>),
}

impl Buffer {
    pub(crate) fn as_slice(&self) -> &[u8] {
        match self {
            Buffer::Mmap(m) => m.as_ref(),
            Buffer::Owned(v) => v.as_slice(),
        }
    }
}

pub(crate) fn load_file(path: &Path, mode: LoadMode) -> Result<Buffer> {
    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::open(path).map_err(io_err)?;
    let len = file.metadata().map_err(io_err)?.len();
    match mode {
        // Zero-length maps are rejected by some platforms.
        LoadMode::Mmap if len > 0 => {
            // SAFETY: the map is read-only and dropped as soon as parsing ends.
            unsafe { Mmap::map(&file) }
                .map(Buffer::Mmap)
                .map_err(io_err)
        }
        _ => {
            let mut buf = Vec::with_capacity(len as usize);
            file.read_to_end(&mut buf).map_err(io_err)?;
            Ok(Buffer::Owned(buf))
        }
    }
}

/// One data-bearing line of a dictionary file.
pub(crate) struct Record<'a> {
    pub file: &'a str,
    /// 1-based.
    pub line: usize,
    pub text: &'a str,
}

impl Record<'_> {
    pub(crate) fn malformed(&self, reason: impl Into<String>) -> LoadError {
        LoadError::Malformed {
            file: self.file.to_string(),
            line: self.line,
            text: self.text.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn number<T: FromStr>(&self, token: &str, field: &str) -> Result<T> {
        token
            .parse()
            .map_err(|_| self.malformed(format!("invalid {field} {token:?}")))
    }

    pub(crate) fn hex(&self, token: &str, field: &str) -> Result<u32> {
        u32::from_str_radix(token, 16)
            .ok()
            .filter(|_| !token.starts_with('+'))
            .ok_or_else(|| self.malformed(format!("invalid hex {field} {token:?}")))
    }
}

/// Iterate the records of a file, skipping blank lines and the license
/// header (lines starting with two spaces).
pub(crate) fn records<'a>(
    file: &'a str,
    bytes: &'a [u8],
) -> impl Iterator<Item = Result<Record<'a>>> + 'a {
    bytes
        .split(|b| *b == b'\n')
        .enumerate()
        .filter_map(move |(lineno, raw_line)| {
            let line = strip_cr(raw_line);
            if line.starts_with(b"  ") || line.iter().all(u8::is_ascii_whitespace) {
                return None;
            }
            Some(match std::str::from_utf8(line) {
                Ok(text) => Ok(Record {
                    file,
                    line: lineno + 1,
                    text,
                }),
                Err(_) => Err(LoadError::Malformed {
                    file: file.to_string(),
                    line: lineno + 1,
                    text: String::from_utf8_lossy(line).into_owned(),
                    reason: "line is not valid UTF-8".into(),
                }),
            })
        })
}

fn strip_cr(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}
