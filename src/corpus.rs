//! Reading reference corpora and candidate texts from disk.
//!
//! Files are decoded as UTF-8, with invalid sequences replaced rather than
//! rejected, and split into lines on `\n`, `\r\n` or a lone `\r`. A trailing
//! terminator does not produce an empty last line.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::CheckerError;

/// A document as read from disk: display name and raw lines.
pub type CorpusEntry = (String, Vec<String>);

fn io_error(path: &Path, source: io::Error) -> CheckerError {
    CheckerError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn split_lines(bytes: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(bytes);
    let mut lines = Vec::new();
    let mut rest: &str = &text;
    while !rest.is_empty() {
        let Some(end) = rest.find(['\r', '\n']) else {
            lines.push(rest.to_owned());
            break;
        };
        lines.push(rest[..end].to_owned());
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
    }
    lines
}

/// Reads one file into lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>, CheckerError> {
    let bytes = fs::read(path).map_err(|err| io_error(path, err))?;
    Ok(split_lines(&bytes))
}

/// Reads all of stdin into lines.
pub fn read_stdin_lines() -> Result<Vec<String>, CheckerError> {
    let mut bytes = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut bytes)
        .map_err(|err| io_error(Path::new("-"), err))?;
    Ok(split_lines(&bytes))
}

/// Loads every regular file directly inside `dir`, sorted by file name.
///
/// Subdirectories are skipped. The file name, not the full path, becomes the
/// document name. Sorting fixes ingestion order, and with it which document
/// wins shared text.
pub fn load_corpus_dir(dir: &Path) -> Result<Vec<CorpusEntry>, CheckerError> {
    let mut files: Vec<(String, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir).map_err(|err| io_error(dir, err))? {
        let entry = entry.map_err(|err| io_error(dir, err))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|err| io_error(&path, err))?;
        if !file_type.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        files.push((name, path));
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));

    files
        .into_iter()
        .map(|(name, path)| read_lines(&path).map(|lines| (name, lines)))
        .collect()
}
