//! Language file parsing into comment-delimited blocks.
//!
//! A line whose trimmed form is empty or starts with `#` is a non-entry line.
//! Every other line belongs to the entry section currently being collected.
//! The first non-entry line after a section closes that section, so each
//! block is a run of non-entry lines followed by a run of entry lines.

use std::collections::HashSet;
use std::path::Path;

use serde_yaml::Value;

use crate::error::{Error, Result};
use crate::model::{Block, LangFile};
use crate::yaml::entries_from_mapping;

const IN_MEMORY: &str = "<memory>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    AccumulatingNonEntries,
    AccumulatingEntries,
}

#[inline]
fn is_non_entry(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

struct Scan<'a> {
    origin: &'a Path,
    state: ParseState,
    blocks: Vec<Block>,
    seen: HashSet<String>,
    before: Vec<String>,
    entry_lines: Vec<&'a str>,
    entries_start: usize,
}

impl<'a> Scan<'a> {
    fn new(origin: &'a Path) -> Self {
        Self {
            origin,
            state: ParseState::AccumulatingNonEntries,
            blocks: Vec::new(),
            seen: HashSet::new(),
            before: Vec::new(),
            entry_lines: Vec::new(),
            entries_start: 0,
        }
    }

    fn step(mut self, line_no: usize, line: &'a str) -> Result<Self> {
        if is_non_entry(line) {
            if self.state == ParseState::AccumulatingEntries {
                self.flush()?;
            }
            self.before.push(line.to_string());
            self.state = ParseState::AccumulatingNonEntries;
        } else {
            if self.state == ParseState::AccumulatingNonEntries {
                self.entries_start = line_no;
            }
            self.entry_lines.push(line);
            self.state = ParseState::AccumulatingEntries;
        }
        Ok(self)
    }

    fn flush(&mut self) -> Result<()> {
        let first_line = self.entries_start;
        let last_line = first_line + self.entry_lines.len().saturating_sub(1);
        let section = self.entry_lines.join("\n");

        let parse_error = |message: String| Error::Parse {
            path: self.origin.to_path_buf(),
            first_line,
            last_line,
            message,
        };
        let mapping = match serde_yaml::from_str::<Value>(&section) {
            Ok(Value::Mapping(mapping)) => mapping,
            Ok(_) => return Err(parse_error("expected `key: value` entries".to_string())),
            Err(e) => return Err(parse_error(e.to_string())),
        };
        let entries = entries_from_mapping(mapping, self.origin)?;

        for key in entries.keys() {
            if !self.seen.insert(key.clone()) {
                return Err(Error::DuplicateKey {
                    path: self.origin.to_path_buf(),
                    key: key.clone(),
                });
            }
        }

        self.blocks
            .push(Block::new(std::mem::take(&mut self.before), entries));
        self.entry_lines.clear();
        Ok(())
    }

    fn finish(mut self) -> Result<LangFile> {
        if self.state == ParseState::AccumulatingEntries {
            self.flush()?;
        }
        // Trailing blank/comment lines are kept as an entry-less block.
        if !self.before.is_empty() {
            self.blocks.push(Block::new(self.before, Default::default()));
        }
        Ok(LangFile::new(self.blocks))
    }
}

/// Parses language file content that did not come from a file on disk.
pub fn parse(text: &str) -> Result<LangFile> {
    parse_with_origin(text, Path::new(IN_MEMORY))
}

/// Parses language file content, naming `origin` in any error.
pub fn parse_with_origin(text: &str, origin: &Path) -> Result<LangFile> {
    text.split('\n')
        .enumerate()
        .try_fold(Scan::new(origin), |scan, (index, line)| {
            scan.step(index + 1, line)
        })?
        .finish()
}

/// Reads and parses a language file.
pub fn parse_file(path: &Path) -> Result<LangFile> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::file_io(path, e))?;
    parse_with_origin(&text, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_entry_classification() {
        assert!(is_non_entry(""));
        assert!(is_non_entry("   "));
        assert!(is_non_entry("# comment"));
        assert!(is_non_entry("   # indented comment"));
        assert!(!is_non_entry("key: \"value\""));
        assert!(!is_non_entry("  continued"));
    }

    #[test]
    fn test_parse_error_reports_line_range() {
        let err = parse("# header\na: \"1\"\nb: [unclosed\n\nc: \"3\"").unwrap_err();
        match err {
            Error::Parse {
                first_line,
                last_line,
                ..
            } => {
                assert_eq!(first_line, 2);
                assert_eq!(last_line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rejects_plain_text_section() {
        let err = parse("just some words\n").unwrap_err();
        assert!(matches!(err, Error::Parse { first_line: 1, last_line: 1, .. }));
    }
}
