//! Integration tests for the keyir codec.
//!
//! These exercise the public API end to end: built-in alphabet, raw integer
//! helpers, and alphabets built from TOML configuration.

use keyir::{Alphabet, AlphabetConfig, Codec, CodecError, KeyCode, TieBreak};

/// Installs a test subscriber once so `RUST_LOG=keyir=trace` shows codec logs.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Codes whose glyph decodes back to the same code.
fn round_trippable() -> Vec<(KeyCode, String)> {
    let alphabet = Alphabet::builtin();
    alphabet
        .iter()
        .filter(|(_, glyph)| !glyph.is_empty())
        .filter(|(code, glyph)| {
            glyph
                .chars()
                .next()
                .and_then(|ch| alphabet.reverse(ch))
                .is_some_and(|c| c == *code)
        })
        .map(|(code, glyph)| (code, glyph.to_string()))
        .collect()
}

#[test]
fn test_basic_shift_and_modifier_examples() {
    init_tracing();
    assert_eq!(keyir::encode(&[KeyCode::SHIFT, KeyCode::KEY_A]).unwrap(), "A");
    assert_eq!(keyir::encode(&[KeyCode::KEY_A]).unwrap(), "a");
    assert_eq!(keyir::encode(&[KeyCode::CONTROL, KeyCode::KEY_A]).unwrap(), "a");
    assert_eq!(keyir::decode("a").unwrap(), vec![KeyCode::KEY_A]);
    assert_eq!(keyir::decode("A").unwrap(), vec![KeyCode::SHIFT, KeyCode::KEY_A]);
}

#[test]
fn test_hello_world_has_shift_before_each_capital() {
    init_tracing();
    let codes = keyir::decode("Hello World").unwrap();
    let shifted: Vec<KeyCode> = codes
        .windows(2)
        .filter(|w| w[0] == KeyCode::SHIFT)
        .map(|w| w[1])
        .collect();
    assert_eq!(shifted, vec![KeyCode::KEY_H, KeyCode::KEY_W]);
    assert_eq!(keyir::encode(&codes).unwrap(), "Hello World");
}

#[test]
fn test_errors_return_no_partial_output() {
    init_tracing();
    let err = keyir::encode(&[KeyCode::KEY_A, KeyCode(9999)]).unwrap_err();
    assert!(matches!(err, CodecError::UnresolvableCode { position: 1, .. }));

    let err = keyir::decode("ok 👍").unwrap_err();
    assert!(matches!(err, CodecError::UnmappedCharacter { ch: '👍', position: 3 }));
}

#[test]
fn test_decode_accepts_case_fold_equivalents() {
    init_tracing();
    // Long s is lower-case, Kelvin sign is upper-case.
    assert_eq!(keyir::decode("\u{17F}").unwrap(), vec![KeyCode::KEY_S]);
    assert_eq!(
        keyir::decode("\u{212A}").unwrap(),
        vec![KeyCode::SHIFT, KeyCode::KEY_K]
    );
}

#[test]
fn test_every_round_trippable_code_survives() {
    init_tracing();
    let entries = round_trippable();
    assert!(entries.len() >= 40, "expected most of the alphabet, got {}", entries.len());

    let codes: Vec<KeyCode> = entries.iter().map(|(c, _)| *c).collect();
    let text = keyir::encode(&codes).unwrap();
    assert_eq!(keyir::decode(&text).unwrap(), codes);
}

#[test]
fn test_shifted_letters_round_trip() {
    init_tracing();
    let mut codes = Vec::new();
    for (code, glyph) in round_trippable() {
        if glyph.chars().all(|c| c.is_ascii_alphabetic()) {
            codes.push(KeyCode::SHIFT);
        }
        codes.push(code);
    }
    let text = keyir::encode(&codes).unwrap();
    assert!(text.chars().all(|c| !c.is_ascii_lowercase()));
    assert_eq!(keyir::decode(&text).unwrap(), codes);
}

#[test]
fn test_keypad_codes_decode_to_some_code_with_same_glyph() {
    init_tracing();
    let alphabet = Alphabet::builtin();
    for collision in alphabet.collisions() {
        let text = keyir::encode(&collision.codes).unwrap();
        let decoded = keyir::decode(&text).unwrap();
        assert_eq!(decoded.len(), collision.codes.len());
        for code in decoded {
            assert!(collision.codes.contains(&code), "{code} not in {:?}", collision.codes);
        }
    }
}

#[test]
fn test_dropped_modifiers_do_not_round_trip() {
    init_tracing();
    let codes = [KeyCode::COMMAND, KeyCode::KEY_C];
    let text = keyir::encode(&codes).unwrap();
    assert_eq!(text, "c");
    assert_eq!(keyir::decode(&text).unwrap(), vec![KeyCode::KEY_C]);
}

#[test]
fn test_raw_helpers_match_typed_api() {
    init_tracing();
    let raw = keyir::decode_raw("Go").unwrap();
    assert_eq!(raw, vec![0x38, 0x05, 0x1F]);
    assert_eq!(keyir::encode_raw(&raw).unwrap(), "Go");
    assert!(keyir::encode_raw(&[-1]).is_err());
}

#[test]
fn test_configured_alphabet_end_to_end() {
    init_tracing();
    let config = AlphabetConfig::from_toml_str(
        r#"
        tie_break = "first_declared"

        [[glyphs]]
        code = 0x24
        glyph = "\n"

        [[glyphs]]
        code = 0x7A
        glyph = ""
        "#,
    )
    .unwrap();
    let alphabet = Alphabet::from_config(&config).unwrap();
    assert_eq!(alphabet.tie_break(), TieBreak::FirstDeclared);

    let codec = Codec::new(&alphabet);
    assert_eq!(
        codec
            .encode(&[KeyCode::SHIFT, KeyCode::KEY_H, KeyCode::KEY_I, KeyCode::ENTER, KeyCode::F1])
            .unwrap(),
        "Hi\n"
    );
    assert_eq!(
        codec.decode("Hi\n").unwrap(),
        vec![KeyCode::SHIFT, KeyCode::KEY_H, KeyCode::KEY_I, KeyCode::ENTER]
    );

    // The built-in alphabet is untouched.
    assert!(keyir::encode(&[KeyCode::ENTER]).is_err());
}
