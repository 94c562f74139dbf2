//! Conversion of loaded YAML documents into flat string entries.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};
use crate::model::Entries;

/// Loads a whole document as a flat key-value mapping.
///
/// An empty document (or one holding only comments) is an empty mapping.
pub(crate) fn load_entries(text: &str, path: &Path) -> Result<Entries> {
    let document: Value = serde_yaml::from_str(text).map_err(|error| Error::Yaml {
        path: path.to_path_buf(),
        error,
    })?;
    match document {
        Value::Null => Ok(Entries::new()),
        Value::Mapping(mapping) => entries_from_mapping(mapping, path),
        _ => Err(Error::NotAMapping {
            path: path.to_path_buf(),
        }),
    }
}

pub(crate) fn entries_from_mapping(mapping: Mapping, path: &Path) -> Result<Entries> {
    let mut entries = Entries::with_capacity(mapping.len());
    for (key, value) in mapping {
        let key = key_to_string(&key).ok_or_else(|| Error::InvalidValue {
            path: path.to_path_buf(),
            key: format!("{:?}", key),
            message: "keys must be strings".to_string(),
        })?;
        let value = value_to_string(&value).ok_or_else(|| Error::InvalidValue {
            path: path.to_path_buf(),
            key: key.clone(),
            message: "values must be strings, numbers or booleans".to_string(),
        })?;
        entries.insert(key, value);
    }
    Ok(entries)
}

pub(crate) fn key_to_string(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// `null` reads as the empty string, which falls back to the base value on render.
pub(crate) fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_entries_empty_document() {
        let entries = load_entries("", Path::new("fr-FR.yaml")).unwrap();
        assert!(entries.is_empty());

        let entries = load_entries("# only a comment\n", Path::new("fr-FR.yaml")).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_load_entries_scalars() {
        let entries =
            load_entries("count: 3\nenabled: true\nempty:\nname: \"x\"\n", Path::new("a.yaml"))
                .unwrap();
        assert_eq!(entries["count"], "3");
        assert_eq!(entries["enabled"], "true");
        assert_eq!(entries["empty"], "");
        assert_eq!(entries["name"], "x");
    }

    #[test]
    fn test_load_entries_rejects_nested() {
        let err = load_entries("menu:\n  open: \"Open\"\n", Path::new("a.yaml")).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { ref key, .. } if key == "menu"));
    }

    #[test]
    fn test_load_entries_rejects_sequence_document() {
        let err = load_entries("- a\n- b\n", Path::new("a.yaml")).unwrap_err();
        assert!(matches!(err, Error::NotAMapping { .. }));
    }
}
