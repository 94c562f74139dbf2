//! Rendering language files from the base structure and serializing them.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{Block, Entries, LangFile};

static PLAIN_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_.\-]*$").expect("plain key pattern is valid"));

/// Keys that a YAML loader would not read back as the same string.
const RESERVED_KEYS: &[&str] = &["null", "true", "false", "y", "n", "yes", "no", "on", "off"];

/// Builds a language file with the base's blocks and comments.
///
/// Each key takes its value from `entries` when present and non-empty, and
/// otherwise falls back to the base block's value. Keys keep the base order
/// here; sorting happens in [`serialize`].
pub fn render(base: &LangFile, entries: &Entries) -> LangFile {
    let blocks = base
        .blocks
        .iter()
        .map(|block| {
            let rendered = block
                .entries
                .iter()
                .map(|(key, base_value)| {
                    let value = match entries.get(key) {
                        Some(value) if !value.is_empty() => value,
                        _ => base_value,
                    };
                    (key.clone(), value.clone())
                })
                .collect();
            Block::new(block.before.clone(), rendered)
        })
        .collect();
    LangFile::new(blocks)
}

/// Serializes a language file to text.
///
/// `before` lines are emitted verbatim, followed by the block's entries in
/// ordinal key order. Lines are joined with `\n`; a trailing newline is
/// represented by a trailing empty line.
pub fn serialize(file: &LangFile) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(file.key_count() + file.blocks.len());
    for block in &file.blocks {
        lines.extend(block.before.iter().cloned());
        let mut sorted: Vec<(&String, &String)> = block.entries.iter().collect();
        sorted.sort_by(|(a, _), (b, _)| a.cmp(b));
        for (key, value) in sorted {
            lines.push(format!("{}: {}", format_key(key), quote(value)));
        }
    }
    lines.join("\n")
}

fn format_key(key: &str) -> String {
    let reserved = RESERVED_KEYS.contains(&key.to_ascii_lowercase().as_str());
    if PLAIN_KEY.is_match(key) && !reserved {
        key.to_string()
    } else {
        quote(key)
    }
}

/// Quotes a string as a YAML double-quoted scalar.
///
/// JSON escaping covers quotes, backslashes and C0 controls. A YAML reader
/// additionally rejects DEL and the C1 controls, and folds NEL and the
/// Unicode line and paragraph separators, so those are escaped as well.
fn quote(value: &str) -> String {
    let json = serde_json::Value::from(value).to_string();
    let mut quoted = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '\u{7f}'..='\u{9f}' => quoted.push_str(&format!("\\x{:02X}", u32::from(c))),
            '\u{2028}' | '\u{2029}' | '\u{feff}' | '\u{fffe}' | '\u{ffff}' => {
                quoted.push_str(&format!("\\u{:04X}", u32::from(c)))
            }
            c => quoted.push(c),
        }
    }
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_key() {
        assert_eq!(format_key("menu.open"), "menu.open");
        assert_eq!(format_key("snake_case-key"), "snake_case-key");
        assert_eq!(format_key("with space"), "\"with space\"");
        assert_eq!(format_key("a:b"), "\"a:b\"");
        assert_eq!(format_key("123"), "\"123\"");
        assert_eq!(format_key("null"), "\"null\"");
        assert_eq!(format_key("True"), "\"True\"");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quote("line\nbreak"), "\"line\\nbreak\"");
        assert_eq!(quote("back\\slash"), "\"back\\\\slash\"");
    }

    #[test]
    fn test_quote_escapes_characters_yaml_rejects() {
        assert_eq!(quote("a\u{7f}b"), "\"a\\x7Fb\"");
        assert_eq!(quote("a\u{85}b"), "\"a\\x85b\"");
        assert_eq!(quote("a\u{90}b"), "\"a\\x90b\"");
        assert_eq!(quote("a\u{2028}b"), "\"a\\u2028b\"");
        assert_eq!(quote("a\u{ffff}b"), "\"a\\uFFFFb\"");
        assert_eq!(quote("a\u{0}b"), "\"a\\u0000b\"");
        assert_eq!(quote("é\u{a0}日本"), "\"é\u{a0}日本\"");
    }
}
