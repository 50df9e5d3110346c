use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// What kind of input the user pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    File,
    Directory,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "input file"),
            Self::Directory => write!(f, "directory name"),
        }
    }
}

#[derive(Error, Debug)]
pub enum IsrcError {
    #[error("Invalid {kind}: {}", path.display())]
    InvalidInputPath { path: PathBuf, kind: InputKind },

    #[error("Malformed ISRC: {0:?}")]
    MalformedIsrc(String),

    #[error("Failed to read file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl IsrcError {
    /// Short category name shown as the prefix of console error lines.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidInputPath { .. } => "Input",
            Self::MalformedIsrc(_) => "ISRC",
            Self::FileRead { .. } => "FileRead",
            Self::FileWrite { .. } => "FileWrite",
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// The headline message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::InvalidInputPath { path, kind } => format!("Invalid {kind}: {}", path.display()),
            Self::MalformedIsrc(code) => format!("{code:?} is not a valid ISRC"),
            Self::FileRead { path, .. } | Self::FileWrite { path, .. } => {
                path.display().to_string()
            }
            Self::Config(msg) => msg.clone(),
            Self::TomlParse(e) => e.message().to_string(),
            Self::JsonSerialize(e) => e.to_string(),
        }
    }

    /// Underlying cause, when there is one worth showing.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } | Self::FileWrite { source, .. } => {
                Some(source.to_string())
            }
            Self::TomlParse(e) => e.span().map(|span| format!("at bytes {}..{}", span.start, span.end)),
            _ => None,
        }
    }

    /// Actionable hint for the user.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidInputPath {
                kind: InputKind::File,
                ..
            } => Some("Pass an existing file with -i/--input_file, or a directory with -d/--dir_input"),
            Self::InvalidInputPath {
                kind: InputKind::Directory,
                ..
            } => Some("Check that the directory exists and is not a regular file"),
            Self::FileRead { source, .. } | Self::FileWrite { source, .. } => {
                match source.kind() {
                    std::io::ErrorKind::NotFound => Some("Check that the file path exists"),
                    std::io::ErrorKind::PermissionDenied => Some("Check file permissions"),
                    _ => None,
                }
            }
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Check the config file format, or run `isrc-check init` for a template")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, IsrcError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
