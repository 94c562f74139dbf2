//! Discovery and loading of the language files in a directory.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;
use walkdir::WalkDir;

use crate::config::SyncConfig;
use crate::error::{Error, Result};
use crate::model::{Entries, LangFile};
use crate::parser;
use crate::yaml::load_entries;

/// A target locale file as read from disk.
#[derive(Debug, Clone)]
pub struct LocaleFile {
    pub locale: String,
    pub path: PathBuf,
    pub text: String,
    pub entries: Entries,
}

/// A directory with one `<locale>.<extension>` file per locale.
///
/// The base locale's file must exist; every other file with the extension
/// is a target locale.
#[derive(Debug, Clone)]
pub struct LanguageDirectory {
    path: PathBuf,
    base_locale: String,
    extension: String,
    locales: Vec<String>,
}

impl LanguageDirectory {
    pub fn open(config: &SyncConfig) -> Result<Self> {
        Self::open_with(&config.directory, &config.base_locale, &config.extension)
    }

    pub fn open_with(
        path: impl AsRef<Path>,
        base_locale: &str,
        extension: &str,
    ) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.is_dir() {
            return Err(Error::DirectoryNotFound(path));
        }

        let mut dir = Self {
            path,
            base_locale: base_locale.to_string(),
            extension: extension.to_string(),
            locales: Vec::new(),
        };
        let base_path = dir.file_path(base_locale);
        if !base_path.is_file() {
            return Err(Error::BaseNotFound(base_path));
        }
        dir.locales = dir.discover_locales()?;
        debug!(
            directory = %dir.path.display(),
            locales = dir.locales.len(),
            "discovered target locales"
        );
        Ok(dir)
    }

    fn discover_locales(&self) -> Result<Vec<String>> {
        let suffix = format!(".{}", self.extension);
        let entries = WalkDir::new(&self.path)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| {
                let path = e.path().unwrap_or(self.path.as_path()).to_path_buf();
                Error::file_io(path, e.into())
            })?;
        let mut locales: Vec<String> = entries
            .iter()
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| {
                let name = e.file_name().to_str()?;
                let locale = name.strip_suffix(&suffix)?;
                (!locale.is_empty() && locale != self.base_locale).then(|| locale.to_string())
            })
            .collect();
        locales.sort();
        Ok(locales)
    }

    pub fn base_locale(&self) -> &str {
        &self.base_locale
    }

    /// Target locales, sorted by name.
    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    pub fn contains_locale(&self, locale: &str) -> bool {
        self.locales.iter().any(|l| l == locale)
    }

    pub fn file_path(&self, locale: &str) -> PathBuf {
        self.path.join(format!("{}.{}", locale, self.extension))
    }

    pub fn base_path(&self) -> PathBuf {
        self.file_path(&self.base_locale)
    }

    /// Reads the base file, returning its raw text and parsed blocks.
    pub fn read_base(&self) -> Result<(String, LangFile)> {
        let path = self.base_path();
        let text = std::fs::read_to_string(&path).map_err(|e| Error::file_io(&path, e))?;
        let file = parser::parse_with_origin(&text, &path)?;
        Ok((text, file))
    }

    /// Reads every target locale in parallel, as flat key-value mappings.
    pub fn read_targets(&self) -> Result<Vec<LocaleFile>> {
        self.locales
            .par_iter()
            .map(|locale| self.read_target(locale))
            .collect()
    }

    pub fn read_target(&self, locale: &str) -> Result<LocaleFile> {
        let path = self.file_path(locale);
        let text = std::fs::read_to_string(&path).map_err(|e| Error::file_io(&path, e))?;
        let entries = load_entries(&text, &path)?;
        debug!(locale, keys = entries.len(), "read target locale");
        Ok(LocaleFile {
            locale: locale.to_string(),
            path,
            text,
            entries,
        })
    }
}
