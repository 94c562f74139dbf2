//! Error types and result aliases.

use std::path::PathBuf;

use thiserror::Error;

use crate::resolver::ConflictKind;

/// Exit status reserved for a declined confirmation.
pub const CANCELLED_EXIT_CODE: u8 = 102;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("IO error on {path}: {source}")]
    FileIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error in {path} (lines {first_line}-{last_line}): {message}")]
    Parse {
        path: PathBuf,
        first_line: usize,
        last_line: usize,
        message: String,
    },

    #[error("YAML parse error in {path}: {error}")]
    Yaml {
        path: PathBuf,
        error: serde_yaml::Error,
    },

    #[error("Expected a mapping of keys to values in {path}")]
    NotAMapping { path: PathBuf },

    #[error("Invalid value for key \"{key}\" in {path}: {message}")]
    InvalidValue {
        path: PathBuf,
        key: String,
        message: String,
    },

    #[error("Duplicate key \"{key}\" in {path}. Each key must appear in exactly one section.")]
    DuplicateKey { path: PathBuf, key: String },

    #[error("Base language file not found: {0}")]
    BaseNotFound(PathBuf),

    #[error("Language directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Unknown locale in edit input: {locale}. Available locales: {available}")]
    UnknownLocale { locale: String, available: String },

    #[error("Config error in {path}: {error}")]
    Config {
        path: PathBuf,
        error: toml::de::Error,
    },

    #[error("Cancelled: {kind} confirmation declined")]
    Cancelled { kind: ConflictKind },

    #[error("Input closed while waiting for {kind} confirmation. Use --no-confirm for non-interactive runs.")]
    InputClosed { kind: ConflictKind },
}

impl Error {
    pub(crate) fn file_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::FileIo {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` when the run stopped because the user answered "no".
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled { .. })
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        if self.is_cancelled() {
            CANCELLED_EXIT_CODE
        } else {
            1
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
