use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{InputKind, IsrcError, Result};
use crate::isrc::ISRC_LEN;

/// Where candidates come from. Chosen by the caller, never inferred from the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// One candidate per line.
    File(PathBuf),
    /// One candidate per immediate entry name.
    Directory(PathBuf),
    /// Raw candidates held in memory.
    Lines(Vec<String>),
}

impl InputSource {
    /// Fails with [`IsrcError::InvalidInputPath`] unless the path exists with the right type.
    ///
    /// # Errors
    /// See above.
    pub fn check(&self) -> Result<()> {
        match self {
            Self::File(path) if !path.is_file() => Err(IsrcError::InvalidInputPath {
                path: path.clone(),
                kind: InputKind::File,
            }),
            Self::Directory(path) if !path.is_dir() => Err(IsrcError::InvalidInputPath {
                path: path.clone(),
                kind: InputKind::Directory,
            }),
            _ => Ok(()),
        }
    }

    /// Every candidate in input order.
    ///
    /// # Errors
    /// Returns [`IsrcError::InvalidInputPath`] for a missing path and
    /// [`IsrcError::FileRead`] if the file or directory cannot be read.
    pub fn candidates(&self) -> Result<Vec<String>> {
        self.check()?;
        match self {
            Self::File(path) => read_lines(path),
            Self::Directory(path) => list_entries(path),
            Self::Lines(lines) => Ok(lines
                .iter()
                .map(|line| candidate(strip_terminator(line)))
                .collect()),
        }
    }

    /// One-line description of the input for the console.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => format!("Input file: {}", display_path(path)),
            Self::Directory(path) => format!("Directory to analyse: {}", display_path(path)),
            Self::Lines(lines) => format!("Input lines: {}", lines.len()),
        }
    }
}

/// The first [`ISRC_LEN`] characters; shorter input is taken whole.
#[must_use]
pub fn candidate(raw: &str) -> String {
    raw.chars().take(ISRC_LEN).collect()
}

fn strip_terminator(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |rest| rest.strip_suffix('\r').unwrap_or(rest))
}

/// Lines of a file. Non-UTF-8 bytes are replaced and so never validate.
fn read_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).map_err(|source| IsrcError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes);
    Ok(content
        .split_inclusive('\n')
        .map(|line| candidate(strip_terminator(line)))
        .collect())
}

/// Names of the immediate entries of a directory, sorted by name.
fn list_entries(path: &Path) -> Result<Vec<String>> {
    WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| {
            let entry = entry.map_err(|e| IsrcError::FileRead {
                path: e.path().map_or_else(|| path.to_path_buf(), Path::to_path_buf),
                source: e.into(),
            })?;
            Ok(candidate(&entry.file_name().to_string_lossy()))
        })
        .collect()
}

/// Absolute form of a path when it can be resolved.
fn display_path(path: &Path) -> String {
    dunce::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
