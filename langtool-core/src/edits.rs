//! Loading of edit input: `{locale: {key: value}}`.

use std::io::Read;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_yaml::Value;
use tracing::{debug, warn};

use crate::config::EditSource;
use crate::error::{Error, Result};
use crate::model::Entries;
use crate::yaml::{entries_from_mapping, key_to_string};

const STDIN_ORIGIN: &str = "<stdin>";

/// Edits to apply, per target locale, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSet {
    edits: IndexMap<String, Entries>,
}

impl EditSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads edits from a file or standard input.
    pub fn load(source: &EditSource) -> Result<Self> {
        match source {
            EditSource::File(path) => {
                let text = std::fs::read_to_string(path).map_err(|e| Error::file_io(path, e))?;
                Self::parse(&text, path)
            }
            EditSource::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .lock()
                    .read_to_string(&mut text)
                    .map_err(|e| Error::file_io(STDIN_ORIGIN, e))?;
                Self::parse(&text, Path::new(STDIN_ORIGIN))
            }
        }
    }

    /// Parses edit input. An empty document is an empty edit set.
    pub fn parse(text: &str, origin: &Path) -> Result<Self> {
        let document: Value = serde_yaml::from_str(text).map_err(|error| Error::Yaml {
            path: origin.to_path_buf(),
            error,
        })?;
        let mapping = match document {
            Value::Null => return Ok(Self::new()),
            Value::Mapping(mapping) => mapping,
            _ => {
                return Err(Error::NotAMapping {
                    path: origin.to_path_buf(),
                })
            }
        };

        let mut edits = IndexMap::with_capacity(mapping.len());
        for (locale, entries) in mapping {
            let locale = key_to_string(&locale).ok_or_else(|| Error::NotAMapping {
                path: origin.to_path_buf(),
            })?;
            let entries = match entries {
                Value::Null => Entries::new(),
                Value::Mapping(entries) => {
                    entries_from_mapping(entries, &locale_origin(origin, &locale))?
                }
                _ => {
                    return Err(Error::InvalidValue {
                        path: origin.to_path_buf(),
                        key: locale,
                        message: "expected a mapping of keys to values".to_string(),
                    })
                }
            };
            edits.insert(locale, entries);
        }
        debug!(locales = edits.len(), "loaded edit input");
        Ok(Self { edits })
    }

    pub fn insert(&mut self, locale: impl Into<String>, entries: Entries) {
        self.edits.insert(locale.into(), entries);
    }

    /// Drops edits for the base locale, which are never applied.
    pub fn without_locale(mut self, base_locale: &str) -> Self {
        if let Some(ignored) = self.edits.shift_remove(base_locale) {
            warn!(
                locale = base_locale,
                keys = ignored.len(),
                "ignoring edits to the base locale"
            );
        }
        self
    }

    pub fn for_locale(&self, locale: &str) -> Option<&Entries> {
        self.edits.get(locale)
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.edits.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Total number of edited keys across locales.
    pub fn len(&self) -> usize {
        self.edits.values().map(|e| e.len()).sum()
    }
}

fn locale_origin(origin: &Path, locale: &str) -> PathBuf {
    PathBuf::from(format!("{} ({})", origin.display(), locale))
}
