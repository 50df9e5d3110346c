use std::path::{Path, PathBuf};

use crate::error::{IsrcError, Result};

use super::Config;
use super::filesystem::{FileSystem, RealFileSystem};
use super::validation::validate_config;

pub const LOCAL_CONFIG_NAME: &str = ".isrc-check.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Parse and validate TOML text.
///
/// # Errors
/// Returns [`IsrcError::TomlParse`] or [`IsrcError::Config`].
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    validate_config(&config)?;
    Ok(config)
}

/// A loaded configuration and the file it came from, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    pub config: Config,
    /// `None` when no file was found and defaults apply.
    pub source: Option<PathBuf>,
}

pub trait ConfigLoader {
    /// Path of the file `load` would read, if any.
    fn discover(&self) -> Option<PathBuf>;

    /// Load from the first config file found, or defaults.
    ///
    /// # Errors
    /// Returns an error if a found file cannot be read, parsed or validated.
    fn load(&self) -> Result<LoadResult>;

    /// Load a specific file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.isrc-check.toml` in the current directory
/// 2. `config.toml` in the user config directory
/// 3. `Config::default()`
#[derive(Debug, Default)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(USER_CONFIG_NAME))
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn discover(&self) -> Option<PathBuf> {
        [self.local_config_path(), self.user_config_path()]
            .into_iter()
            .flatten()
            .find(|path| self.fs.exists(path))
    }

    fn load(&self) -> Result<LoadResult> {
        match self.discover() {
            Some(path) => self.load_from_path(&path),
            None => Ok(LoadResult {
                config: Config::default(),
                source: None,
            }),
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| IsrcError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(LoadResult {
            config: parse_config(&content)?,
            source: Some(path.to_path_buf()),
        })
    }
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
