//! Corpus scanning: read candidates, classify them, write the two partitions.

mod source;

pub use source::{InputSource, candidate};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;

use crate::error::{IsrcError, Result};
use crate::isrc;
use crate::output::{Logger, ScanProgress};

pub const DEFAULT_INPUT_FILE: &str = "isrc.txt";
pub const DEFAULT_VALID_OUTPUT: &str = "ISRC_valid.txt";
pub const DEFAULT_INVALID_OUTPUT: &str = "ISRC_invalid.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Valid,
    Invalid,
}

impl Classification {
    #[must_use]
    pub fn of(candidate: &str) -> Self {
        if isrc::is_valid(candidate) {
            Self::Valid
        } else {
            Self::Invalid
        }
    }
}

/// Counts and destinations of one scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub valid_output: PathBuf,
    /// Set only when at least one invalid candidate was written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_output: Option<PathBuf>,
    pub invalid_output_overwritten: bool,
}

impl ScanReport {
    #[must_use]
    pub const fn has_invalid(&self) -> bool {
        self.invalid > 0
    }
}

/// The valid and invalid accumulators, each a newline-terminated list in input order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Partition {
    pub valid: String,
    pub invalid: String,
    pub valid_count: usize,
    pub invalid_count: usize,
}

impl Partition {
    fn push(&mut self, candidate: &str, class: Classification) {
        let (buffer, count) = match class {
            Classification::Valid => (&mut self.valid, &mut self.valid_count),
            Classification::Invalid => (&mut self.invalid, &mut self.invalid_count),
        };
        buffer.push_str(candidate);
        buffer.push('\n');
        *count += 1;
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.valid_count + self.invalid_count
    }
}

pub struct CorpusScanner<'a> {
    logger: &'a dyn Logger,
    jobs: usize,
    progress: Option<ScanProgress>,
}

impl<'a> CorpusScanner<'a> {
    #[must_use]
    pub fn new(logger: &'a dyn Logger) -> Self {
        Self {
            logger,
            jobs: 1,
            progress: None,
        }
    }

    /// Classify on `jobs` worker threads; 1 (the default) stays on the caller's thread.
    #[must_use]
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    #[must_use]
    pub fn with_progress(mut self, progress: ScanProgress) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Classify every candidate, preserving input order.
    #[must_use]
    pub fn classify(&self, candidates: &[String]) -> Vec<Classification> {
        let classify_one = |c: &String| {
            let class = Classification::of(c);
            if let Some(progress) = &self.progress {
                progress.inc();
            }
            class
        };

        if self.jobs <= 1 {
            return candidates.iter().map(classify_one).collect();
        }

        match rayon::ThreadPoolBuilder::new().num_threads(self.jobs).build() {
            Ok(pool) => pool.install(|| candidates.par_iter().map(classify_one).collect()),
            Err(_) => candidates.par_iter().map(classify_one).collect(),
        }
    }

    /// Split candidates into the valid and invalid accumulators.
    #[must_use]
    pub fn partition(&self, candidates: &[String]) -> Partition {
        let classes = self.classify(candidates);
        let mut partition = Partition::default();
        for (candidate, class) in candidates.iter().zip(classes) {
            partition.push(candidate, class);
        }
        partition
    }

    /// Scan `source` and write the partitions.
    ///
    /// The valid file is always written; the invalid file only when there is
    /// at least one invalid candidate. Nothing is written if the input is
    /// missing or unreadable. Both partitions are staged before either
    /// destination is replaced, so a failed write leaves previous outputs intact.
    ///
    /// # Errors
    /// Returns [`IsrcError::InvalidInputPath`] for a missing input,
    /// [`IsrcError::FileRead`] or [`IsrcError::FileWrite`] on I/O failure.
    pub fn scan(
        &self,
        source: &InputSource,
        valid_path: &Path,
        invalid_path: &Path,
    ) -> Result<ScanReport> {
        let candidates = source.candidates()?;
        self.logger.info(&source.describe());

        let invalid_existed = invalid_path.exists();
        if invalid_existed {
            self.logger.warning(&format!(
                "Already existing output file will be overwritten: {}",
                invalid_path.display()
            ));
        }

        if let Some(progress) = &self.progress {
            progress.set_length(u64::try_from(candidates.len()).unwrap_or(u64::MAX));
        }
        let partition = self.partition(&candidates);
        if let Some(progress) = &self.progress {
            progress.finish();
        }

        let staged_valid = stage_output(valid_path, &partition.valid)?;
        let staged_invalid = if partition.invalid_count > 0 {
            match stage_output(invalid_path, &partition.invalid) {
                Ok(staged) => Some(staged),
                Err(e) => {
                    discard(&staged_valid);
                    return Err(e);
                }
            }
        } else {
            None
        };

        if let Err(e) = commit_output(&staged_valid, valid_path) {
            if let Some(staged) = &staged_invalid {
                discard(staged);
            }
            return Err(e);
        }
        if let Some(staged) = &staged_invalid {
            commit_output(staged, invalid_path)?;
        }

        let invalid_output = if staged_invalid.is_some() {
            self.logger
                .warning(&format!("{} invalid ISRCs", partition.invalid_count));
            self.logger.info(&format!(
                "Invalid ISRCs can be seen in: {}",
                invalid_path.display()
            ));
            Some(invalid_path.to_path_buf())
        } else {
            self.logger.success("All ISRCs are valid");
            None
        };

        Ok(ScanReport {
            total: partition.total(),
            valid: partition.valid_count,
            invalid: partition.invalid_count,
            valid_output: valid_path.to_path_buf(),
            invalid_output_overwritten: invalid_existed && invalid_output.is_some(),
            invalid_output,
        })
    }
}

/// Sibling file holding `path`'s new content until it is committed.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".partial");
    path.with_file_name(name)
}

fn stage_output(path: &Path, content: &str) -> Result<PathBuf> {
    let write_error = |source| IsrcError::FileWrite {
        path: path.to_path_buf(),
        source,
    };
    if path.is_dir() {
        return Err(write_error(io::Error::from(io::ErrorKind::IsADirectory)));
    }

    let staged = staging_path(path);
    fs::write(&staged, content).map_err(|e| {
        discard(&staged);
        write_error(e)
    })?;
    Ok(staged)
}

fn commit_output(staged: &Path, path: &Path) -> Result<()> {
    fs::rename(staged, path).map_err(|source| {
        discard(staged);
        IsrcError::FileWrite {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn discard(staged: &Path) {
    let _ = fs::remove_file(staged);
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
