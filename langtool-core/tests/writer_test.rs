use langtool_core::model::{Block, Entries, LangFile};
use langtool_core::parser::parse;
use langtool_core::writer::{render, serialize};

fn entries(pairs: &[(&str, &str)]) -> Entries {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_serialize_sorts_within_block() {
    let file = LangFile::new(vec![Block::new(vec![], entries(&[("b", "2"), ("a", "1")]))]);
    assert_eq!(serialize(&file), "a: \"1\"\nb: \"2\"");
}

#[test]
fn test_serialize_uses_ordinal_order() {
    let file = LangFile::new(vec![Block::new(
        vec![],
        entries(&[("a", "1"), ("_x", "2"), ("B", "3")]),
    )]);
    assert_eq!(serialize(&file), "B: \"3\"\n_x: \"2\"\na: \"1\"");
}

#[test]
fn test_serialize_keeps_blocks_separate() {
    let base = parse("# Menu\nz: \"Z\"\ny: \"Y\"\n\n# Dialog\nb: \"B\"\na: \"A\"\n").unwrap();
    assert_eq!(
        serialize(&base),
        "# Menu\ny: \"Y\"\nz: \"Z\"\n\n# Dialog\na: \"A\"\nb: \"B\"\n"
    );
}

#[test]
fn test_render_fills_missing_and_empty_values_from_base() {
    let base = parse("# Greetings\ngreeting: \"Hello\"\nfarewell: \"Bye\"\n\nthanks: \"Thanks\"\n")
        .unwrap();
    let target = entries(&[("greeting", "Bonjour"), ("farewell", "")]);

    let rendered = render(&base, &target);

    assert_eq!(rendered.blocks.len(), base.blocks.len());
    assert_eq!(rendered.blocks[0].before, vec!["# Greetings"]);
    assert_eq!(rendered.blocks[0].entries["greeting"], "Bonjour");
    assert_eq!(rendered.blocks[0].entries["farewell"], "Bye");
    assert_eq!(rendered.blocks[1].entries["thanks"], "Thanks");
    assert_eq!(
        serialize(&rendered),
        "# Greetings\nfarewell: \"Bye\"\ngreeting: \"Bonjour\"\n\nthanks: \"Thanks\"\n"
    );
}

#[test]
fn test_render_keeps_base_key_order_until_serialize() {
    let base = parse("b: \"2\"\na: \"1\"").unwrap();
    let rendered = render(&base, &Entries::new());
    assert_eq!(
        rendered.blocks[0].entries.keys().collect::<Vec<_>>(),
        vec!["b", "a"]
    );
}

#[test]
fn test_render_ignores_keys_outside_base() {
    let base = parse("a: \"1\"").unwrap();
    let rendered = render(&base, &entries(&[("a", "uno"), ("extra", "x")]));
    assert_eq!(serialize(&rendered), "a: \"uno\"");
}

#[test]
fn test_base_renders_itself_identically() {
    let base = parse("# c\na: \"1\"\nb: \"2\"\n").unwrap();
    let rendered = render(&base, &base.entries());
    assert_eq!(rendered, base);
}

#[test]
fn test_special_characters_round_trip() {
    let value = "He said \"hi\"\n\ttab, back\\slash, ünïcødé, # not a comment: really";
    let file = LangFile::new(vec![Block::new(vec![], entries(&[("msg", value)]))]);

    let text = serialize(&file);
    let reparsed = parse(&text).unwrap();

    assert_eq!(reparsed.entries()["msg"], value);
    assert_eq!(serialize(&reparsed), text);
}

#[test]
fn test_unusual_keys_round_trip() {
    let file = LangFile::new(vec![Block::new(
        vec![],
        entries(&[("with space", "1"), ("a:b", "2"), ("123", "3"), ("null", "4")]),
    )]);

    let text = serialize(&file);
    let reparsed = parse(&text).unwrap();

    let keys: Vec<&str> = reparsed.keys().collect();
    assert_eq!(keys, vec!["123", "a:b", "null", "with space"]);
    assert_eq!(serialize(&reparsed), text);
}

#[test]
fn test_control_and_separator_characters_round_trip() {
    let values = [
        "Bon\u{7f}jour",
        "a\u{85}b",
        "a\u{90}b",
        "a\u{9f}b",
        "line\u{2028}para\u{2029}end",
        "bom\u{feff}x\u{fffe}\u{ffff}",
        "nul\u{0}bell\u{7}esc\u{1b}",
        "nbsp\u{a0}日本語 🎉",
    ];
    for value in values {
        let file = LangFile::new(vec![Block::new(vec![], entries(&[("msg", value)]))]);

        let text = serialize(&file);
        let reparsed = parse(&text).unwrap();

        assert_eq!(reparsed.entries()["msg"], value, "value {:?}", value);
        assert_eq!(serialize(&reparsed), text);
    }
}

#[test]
fn test_keys_with_control_characters_round_trip() {
    let file = LangFile::new(vec![Block::new(
        vec![],
        entries(&[("del\u{7f}key", "1"), ("nel\u{85}key", "2"), ("sep\u{2028}key", "3"), ("clé", "4")]),
    )]);

    let text = serialize(&file);
    let reparsed = parse(&text).unwrap();

    let mut keys: Vec<&str> = reparsed.keys().collect();
    keys.sort();
    let mut expected = vec!["del\u{7f}key", "nel\u{85}key", "sep\u{2028}key", "clé"];
    expected.sort();
    assert_eq!(keys, expected);
    assert_eq!(serialize(&reparsed), text);
}
