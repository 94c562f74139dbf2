//! Core library for keeping YAML language files in sync with a base locale.

pub mod config;
pub mod directory;
pub mod edits;
pub mod error;
pub mod merger;
pub mod model;
pub mod parser;
pub mod resolver;
pub mod sync;
pub mod writer;
mod yaml;

pub use config::{DirectoryConfig, EditSource, SyncConfig};
pub use directory::{LanguageDirectory, LocaleFile};
pub use edits::EditSet;
pub use error::{Error, Result, CANCELLED_EXIT_CODE};
pub use merger::{Conflict, LocaleMerge, TranslationMerger};
pub use model::{Block, Entries, LangFile};
pub use parser::{parse, parse_file};
pub use resolver::{Answer, ConflictKind, ConflictResolver, Prompt};
pub use sync::{LocaleReport, SyncReport, Synchronizer};
pub use writer::{render, serialize};
