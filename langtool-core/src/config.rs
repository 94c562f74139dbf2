//! Run configuration and the optional `langtool.toml` directory config.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

pub const DEFAULT_BASE_LOCALE: &str = "en-US";
pub const DEFAULT_EXTENSION: &str = "yaml";
pub const CONFIG_FILE_NAME: &str = "langtool.toml";

/// Where edits are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditSource {
    File(PathBuf),
    Stdin,
}

impl EditSource {
    /// Interprets a command-line argument, where `-` means standard input.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            EditSource::Stdin
        } else {
            EditSource::File(PathBuf::from(arg))
        }
    }
}

/// Settings read from `langtool.toml` in the language directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectoryConfig {
    pub base_locale: Option<String>,
    pub extension: Option<String>,
}

impl DirectoryConfig {
    /// Loads `langtool.toml` from `directory`, or the defaults if it is absent.
    pub fn load(directory: &Path) -> Result<Self> {
        let path = directory.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|e| Error::file_io(&path, e))?;
        toml::from_str(&content).map_err(|error| Error::Config { path, error })
    }
}

/// Configuration for one synchronization run.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub directory: PathBuf,
    pub input: Option<EditSource>,
    pub no_confirm: bool,
    pub base_locale: String,
    pub extension: String,
    pub dry_run: bool,
}

impl SyncConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            input: None,
            no_confirm: false,
            base_locale: DEFAULT_BASE_LOCALE.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            dry_run: false,
        }
    }

    /// Builds a configuration, applying `langtool.toml` if the directory has one.
    pub fn from_directory(directory: impl Into<PathBuf>) -> Result<Self> {
        let config = Self::new(directory);
        let file_config = DirectoryConfig::load(&config.directory)?;
        Ok(config.with_directory_config(file_config))
    }

    pub fn with_directory_config(mut self, file_config: DirectoryConfig) -> Self {
        if let Some(base_locale) = file_config.base_locale {
            self.base_locale = base_locale;
        }
        match file_config.extension {
            Some(extension) => self.with_extension(extension),
            None => self,
        }
    }

    pub fn with_input(mut self, input: Option<EditSource>) -> Self {
        self.input = input;
        self
    }

    pub fn with_no_confirm(mut self, no_confirm: bool) -> Self {
        self.no_confirm = no_confirm;
        self
    }

    pub fn with_base_locale(mut self, base_locale: impl Into<String>) -> Self {
        self.base_locale = base_locale.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
