use std::collections::HashMap;
use std::sync::Arc;

use super::*;
use crate::Command;
use crate::voice::error::DictionaryError;

fn matcher() -> TranscriptMatcher {
    TranscriptMatcher::default()
}

#[test]
fn test_single_word_phrase_matches_once() {
    let m = matcher().match_text("turn right").unwrap();
    assert_eq!(m.command, Command::Right);
    assert_eq!(m.repeat_count, 1);

    let m = matcher().match_text("  BRAKE  ").unwrap();
    assert_eq!(m.command, Command::Brake);
    assert_eq!(m.repeat_count, 1);
}

#[test]
fn test_repeated_phrase_is_counted() {
    let m = matcher().match_text("left left left").unwrap();
    assert_eq!(m.command, Command::Left);
    assert_eq!(m.repeat_count, 3);

    let m = matcher().match_text("speed up speed up").unwrap();
    assert_eq!(m.command, Command::Accelerate);
    assert_eq!(m.repeat_count, 2);
}

#[test]
fn test_single_word_respects_word_boundaries() {
    assert!(matcher().match_text("mango").is_none());
    assert!(matcher().match_text("leftover").is_none());
    assert!(matcher().match_text("brighter").is_none());
}

#[test]
fn test_multi_word_phrase_is_literal_substring() {
    // "u turn" has no boundary requirement of its own
    let m = matcher().match_text("flu turn").unwrap();
    assert_eq!(m.command, Command::Turnback);
    assert_eq!(m.repeat_count, 1);
}

#[test]
fn test_earlier_command_wins() {
    // "go" belongs to accelerate, but left is declared first
    let m = matcher().match_text("go left").unwrap();
    assert_eq!(m.command, Command::Left);

    // accelerate is declared before brake
    let m = matcher().match_text("stop go").unwrap();
    assert_eq!(m.command, Command::Accelerate);

    let m = matcher().match_text("left and brake").unwrap();
    assert_eq!(m.command, Command::Left);
    assert_eq!(m.repeat_count, 1);
}

#[test]
fn test_no_match() {
    assert!(matcher().match_text("").is_none());
    assert!(matcher().match_text("   ").is_none());
    assert!(matcher().match_text("hello there").is_none());
}

#[test]
fn test_default_dictionary_order() {
    let dictionary = PhraseDictionary::default();
    assert_eq!(dictionary.all_commands(), Command::ALL.to_vec());
    assert_eq!(dictionary.phrases_for(Command::Left)[0], "left");
    assert!(dictionary.phrases_for(Command::Turnback).contains(&"u turn"));
}

#[test]
fn test_dictionary_rejects_command_without_phrases() {
    let empty: Vec<&str> = Vec::new();
    let err = PhraseDictionary::new([
        (Command::Left, vec!["left"]),
        (Command::Right, vec!["right"]),
        (Command::Accelerate, vec!["go"]),
        (Command::Brake, empty),
        (Command::Turnback, vec!["reverse"]),
    ])
    .unwrap_err();
    assert_eq!(err, DictionaryError::NoPhrases(Command::Brake));

    let err = PhraseDictionary::new([(Command::Left, vec!["left"])]).unwrap_err();
    assert_eq!(err, DictionaryError::NoPhrases(Command::Right));
}

#[test]
fn test_dictionary_rejects_blank_phrase() {
    let err = PhraseDictionary::new([(Command::Left, vec!["left", "  "])]).unwrap_err();
    assert!(matches!(
        err,
        DictionaryError::InvalidPhrase {
            command: Command::Left,
            ..
        }
    ));
}

#[test]
fn test_custom_order_changes_priority() {
    let dictionary = PhraseDictionary::new([
        (Command::Brake, vec!["stop"]),
        (Command::Accelerate, vec!["Go", "go"]),
        (Command::Left, vec!["left"]),
        (Command::Right, vec!["right"]),
        (Command::Turnback, vec!["reverse"]),
    ])
    .unwrap();
    assert_eq!(dictionary.phrases_for(Command::Accelerate), vec!["go"]);

    let matcher = TranscriptMatcher::new(Arc::new(dictionary));
    let m = matcher.match_text("stop go").unwrap();
    assert_eq!(m.command, Command::Brake);
}

#[test]
fn test_overrides_replace_builtin_phrases() {
    let mut overrides = HashMap::new();
    overrides.insert(Command::Left, vec!["port".to_string()]);
    let dictionary = PhraseDictionary::with_overrides(&overrides).unwrap();

    let matcher = TranscriptMatcher::new(Arc::new(dictionary));
    assert_eq!(matcher.match_text("port").unwrap().command, Command::Left);
    assert!(matcher.match_text("left").is_none());
    assert_eq!(matcher.match_text("right").unwrap().command, Command::Right);
}
