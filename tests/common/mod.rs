#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the isrc-check binary.
#[macro_export]
macro_rules! isrc_check {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("isrc-check"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Creates an input file with one code per line.
    pub fn create_input(&self, relative_path: &str, codes: &[&str]) {
        let mut content = codes.join("\n");
        content.push('\n');
        self.create_file(relative_path, &content);
    }

    /// Creates a directory whose entry names are the given codes.
    pub fn create_corpus_dir(&self, relative_path: &str, names: &[&str]) {
        self.create_dir(relative_path);
        for name in names {
            self.create_file(&format!("{relative_path}/{name}"), "");
        }
    }

    /// Creates a local `.isrc-check.toml`.
    pub fn create_config(&self, content: &str) {
        self.create_file(".isrc-check.toml", content);
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    /// Reads a file from the temp directory.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.join(relative_path)).expect("Failed to read file")
    }

    pub fn exists(&self, relative_path: &str) -> bool {
        self.join(relative_path).exists()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// The three-line corpus: two valid codes, one invalid.
pub const MIXED_CODES: &[&str] = &["USRC17607839", "FRXYZ1234567", "12ABCDEFGHIJ"];

/// Codes spanning a rollback year (1999) and a recent year (2016).
pub const YEAR_CODES: &[&str] = &["USRC19907839", "GBUM71605078", "FRXYZ1634567"];
