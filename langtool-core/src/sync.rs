//! The synchronization pipeline.
//!
//! Reads the base file and every target locale, merges the optional edit
//! input, confirms ambiguous steps, then renders every locale from the base
//! structure. Nothing is written until all locales are merged and confirmed,
//! so a cancelled or failed run leaves every file untouched.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::config::{EditSource, SyncConfig};
use crate::directory::LanguageDirectory;
use crate::edits::EditSet;
use crate::error::{Error, Result};
use crate::merger::{LocaleMerge, TranslationMerger};
use crate::model::{Entries, LangFile};
use crate::resolver::{ConflictResolver, Prompt};
use crate::writer;

/// What happened to one locale file during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleReport {
    pub locale: String,
    pub path: PathBuf,
    pub applied_edits: Vec<String>,
    pub deleted_keys: Vec<String>,
    /// Keys that took the base value because the locale had none.
    pub filled_keys: Vec<String>,
    /// Whether the rendered content differs from the file on disk.
    pub changed: bool,
}

/// Outcome of a synchronization run.
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    pub base: LocaleReport,
    pub locales: Vec<LocaleReport>,
    pub dry_run: bool,
}

impl SyncReport {
    /// Base and target reports, base first.
    pub fn all(&self) -> impl Iterator<Item = &LocaleReport> {
        std::iter::once(&self.base).chain(self.locales.iter())
    }

    pub fn changed_files(&self) -> Vec<&PathBuf> {
        self.all().filter(|r| r.changed).map(|r| &r.path).collect()
    }

    pub fn locale(&self, locale: &str) -> Option<&LocaleReport> {
        self.all().find(|r| r.locale == locale)
    }
}

struct PendingWrite {
    path: PathBuf,
    content: String,
}

/// Runs the pipeline for one language directory.
pub struct Synchronizer {
    config: SyncConfig,
}

impl Synchronizer {
    pub fn new(config: SyncConfig) -> Self {
        Self { config }
    }

    /// Runs with edits loaded from the configured input, if any.
    pub fn run<P: Prompt>(&self, prompt: P) -> Result<SyncReport> {
        if self.config.input == Some(EditSource::Stdin) && !self.config.no_confirm {
            warn!("edits are read from stdin; any confirmation will fail on closed input");
        }
        let edits = self
            .config
            .input
            .as_ref()
            .map(EditSet::load)
            .transpose()?;
        self.run_with_edits(edits, prompt)
    }

    /// Runs with an already loaded edit set.
    pub fn run_with_edits<P: Prompt>(
        &self,
        edits: Option<EditSet>,
        prompt: P,
    ) -> Result<SyncReport> {
        let dir = LanguageDirectory::open(&self.config)?;
        let (base_text, base) = dir.read_base()?;
        let base_entries = base.entries();
        let targets = dir.read_targets()?;

        let edits = edits.map(|e| e.without_locale(dir.base_locale()));
        if let Some(ref edits) = edits {
            Self::check_edit_locales(&dir, edits)?;
        }

        let merger = TranslationMerger::new(&base_entries);
        let mut resolver = ConflictResolver::new(prompt).with_no_confirm(self.config.no_confirm);
        let mut merges: Vec<(LocaleMerge, PathBuf, String)> = Vec::with_capacity(targets.len());
        for target in targets {
            let locale_edits = edits.as_ref().and_then(|e| e.for_locale(&target.locale));
            let merge = merger.merge(&target.locale, target.entries, locale_edits);
            merge.confirm_with(&mut resolver)?;
            merges.push((merge, target.path, target.text));
        }

        let mut writes = Vec::new();
        let base_report = Self::plan_base(&dir, &base_text, &base, &mut writes);
        let locales = merges
            .into_iter()
            .map(|(merge, path, text)| {
                Self::plan_target(&base, &base_entries, merge, path, &text, &mut writes)
            })
            .collect();

        if self.config.dry_run {
            info!(files = writes.len(), "dry run, skipping writes");
        } else {
            for write in &writes {
                debug!(path = %write.path.display(), "writing language file");
                std::fs::write(&write.path, &write.content)
                    .map_err(|e| Error::file_io(&write.path, e))?;
            }
            info!(files = writes.len(), "saved language files");
        }

        Ok(SyncReport {
            base: base_report,
            locales,
            dry_run: self.config.dry_run,
        })
    }

    fn check_edit_locales(dir: &LanguageDirectory, edits: &EditSet) -> Result<()> {
        if let Some(unknown) = edits.locales().find(|l| !dir.contains_locale(l)) {
            return Err(Error::UnknownLocale {
                locale: unknown.to_string(),
                available: dir.locales().join(", "),
            });
        }
        Ok(())
    }

    fn plan_base(
        dir: &LanguageDirectory,
        text: &str,
        base: &LangFile,
        writes: &mut Vec<PendingWrite>,
    ) -> LocaleReport {
        let content = writer::serialize(base);
        let changed = content != text;
        let path = dir.base_path();
        if changed {
            writes.push(PendingWrite {
                path: path.clone(),
                content,
            });
        }
        LocaleReport {
            locale: dir.base_locale().to_string(),
            path,
            changed,
            ..Default::default()
        }
    }

    fn plan_target(
        base: &LangFile,
        base_entries: &Entries,
        merge: LocaleMerge,
        path: PathBuf,
        text: &str,
        writes: &mut Vec<PendingWrite>,
    ) -> LocaleReport {
        let filled_keys: Vec<String> = base_entries
            .keys()
            .filter(|key| merge.entries.get(*key).map_or(true, |v| v.is_empty()))
            .cloned()
            .collect();
        let content = writer::serialize(&writer::render(base, &merge.entries));
        let changed = content != text;
        debug!(
            locale = %merge.locale,
            filled = filled_keys.len(),
            changed,
            "rendered locale"
        );
        if changed {
            writes.push(PendingWrite {
                path: path.clone(),
                content,
            });
        }
        LocaleReport {
            locale: merge.locale,
            path,
            applied_edits: merge.applied_edits,
            deleted_keys: merge.deleted_keys,
            filled_keys,
            changed,
        }
    }
}
