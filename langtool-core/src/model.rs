//! Language file data model.

use indexmap::IndexMap;

/// Key-value entries in file order.
pub type Entries = IndexMap<String, String>;

/// A section of a language file.
///
/// `before` holds the blank and comment lines that precede the entries,
/// verbatim. A block with no entries only occurs at the end of a file and
/// carries its trailing blank/comment lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub before: Vec<String>,
    pub entries: Entries,
}

impl Block {
    pub fn new(before: Vec<String>, entries: Entries) -> Self {
        Self { before, entries }
    }
}

/// A parsed language file: an ordered sequence of blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LangFile {
    pub blocks: Vec<Block>,
}

impl LangFile {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// All entries across blocks, in file order.
    pub fn entries(&self) -> Entries {
        self.blocks
            .iter()
            .flat_map(|block| {
                block
                    .entries
                    .iter()
                    .map(|(key, value)| (key.clone(), value.clone()))
            })
            .collect()
    }

    /// All keys across blocks, in file order. Duplicates are kept.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.blocks
            .iter()
            .flat_map(|block| block.entries.keys().map(String::as_str))
    }

    #[inline]
    pub fn key_count(&self) -> usize {
        self.blocks.iter().map(|b| b.entries.len()).sum()
    }
}
