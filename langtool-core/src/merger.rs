//! Merging incoming edits into a target locale against the base locale.

use tracing::debug;

use crate::error::Result;
use crate::model::Entries;
use crate::resolver::{ConflictKind, ConflictResolver, Prompt};

/// A merge step that needs the user's approval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conflict {
    /// The target value differs from both the incoming edit and the base.
    StaleEdit {
        locale: String,
        key: String,
        old: String,
        new: String,
    },
    /// The target has a key the base does not.
    Orphan {
        locale: String,
        key: String,
        value: String,
    },
}

impl Conflict {
    pub fn kind(&self) -> ConflictKind {
        match self {
            Conflict::StaleEdit { .. } => ConflictKind::Edit,
            Conflict::Orphan { .. } => ConflictKind::Delete,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Conflict::StaleEdit { key, .. } | Conflict::Orphan { key, .. } => key,
        }
    }

    /// Lines shown to the user before asking.
    pub fn context(&self) -> Vec<String> {
        match self {
            Conflict::StaleEdit {
                locale,
                key,
                old,
                new,
            } => vec![
                format!("Replace existing key: \"{}\" in \"{}\"?", key, locale),
                format!("- Old value: \"{}\"", old),
                format!("- New value: \"{}\"", new),
            ],
            Conflict::Orphan { locale, key, .. } => {
                vec![format!("Delete key: \"{}\" in \"{}\"?", key, locale)]
            }
        }
    }
}

/// The result of merging one target locale.
///
/// `entries` reflects every edit and deletion as if all `conflicts` were
/// approved. Keys the base has but the target lacks stay absent; rendering
/// fills them from the base.
#[derive(Debug, Clone, Default)]
pub struct LocaleMerge {
    pub locale: String,
    pub entries: Entries,
    /// In the order they must be confirmed: stale edits, then orphans.
    pub conflicts: Vec<Conflict>,
    pub applied_edits: Vec<String>,
    pub deleted_keys: Vec<String>,
}

impl LocaleMerge {
    pub fn needs_confirmation(&self) -> bool {
        !self.conflicts.is_empty()
    }

    /// Confirms every conflict in order, stopping at the first refusal.
    pub fn confirm_with<P: Prompt>(&self, resolver: &mut ConflictResolver<P>) -> Result<()> {
        for conflict in &self.conflicts {
            resolver.confirm(conflict.kind(), &conflict.context())?;
        }
        Ok(())
    }
}

/// Computes merged entries for target locales from the base entries.
pub struct TranslationMerger<'a> {
    base: &'a Entries,
}

impl<'a> TranslationMerger<'a> {
    pub fn new(base: &'a Entries) -> Self {
        Self { base }
    }

    /// Applies `edits` to `existing`, then removes keys missing from the base.
    pub fn merge(&self, locale: &str, existing: Entries, edits: Option<&Entries>) -> LocaleMerge {
        let mut merge = LocaleMerge {
            locale: locale.to_string(),
            entries: existing,
            ..Default::default()
        };

        for (key, new_value) in edits.into_iter().flatten() {
            if let Some(old) = merge.entries.get(key) {
                if self.is_stale_edit(key, old, new_value) {
                    debug!(locale, key = %key, "stale edit");
                    merge.conflicts.push(Conflict::StaleEdit {
                        locale: locale.to_string(),
                        key: key.clone(),
                        old: old.clone(),
                        new: new_value.clone(),
                    });
                }
            }
            merge.entries.insert(key.clone(), new_value.clone());
            merge.applied_edits.push(key.clone());
        }

        let orphans: Vec<(String, String)> = merge
            .entries
            .iter()
            .filter(|(key, _)| !self.base.contains_key(*key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        for (key, value) in orphans {
            debug!(locale, key = %key, "orphaned key");
            merge.entries.shift_remove(&key);
            merge.deleted_keys.push(key.clone());
            merge.conflicts.push(Conflict::Orphan {
                locale: locale.to_string(),
                key,
                value,
            });
        }

        merge
    }

    /// An edit is stale when the current value is neither the edit itself
    /// nor a copy of the base value.
    pub fn is_stale_edit(&self, key: &str, current: &str, new_value: &str) -> bool {
        current != new_value && self.base.get(key).map(String::as_str) != Some(current)
    }
}
