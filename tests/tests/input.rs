// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use pretty_assertions::assert_eq;
use tests::{interpret_error, interpret_with_input};

#[test]
fn numbers_are_parsed_and_text_is_kept() {
    let program = "Listen to the first\nListen to the second\nSay the first plus 1\nSay the second plus 1\n";
    assert_eq!(interpret_with_input(program, "41\nforty\n"), vec!["42", "forty1"]);
}

#[test]
fn listen_without_target_discards_a_line() {
    let program = "Listen\nListen to X\nSay X\n";
    assert_eq!(interpret_with_input(program, "skip me\nkeep me\r\n"), vec!["keep me"]);
}

#[test]
fn echo_until_empty_line() {
    let program = concat!(
        "Listen to the line\n",
        "While the line ain't \"\"\n",
        "Say the line\n",
        "Listen to the line\n",
        "\n",
    );

    assert_eq!(interpret_with_input(program, "one\ntwo\n\nignored\n"), vec!["one", "two"]);
}

#[test]
fn exhausted_input_is_an_error() {
    let (_, error) = interpret_error("Listen to X\n");
    assert_eq!(error.name(), "InputExhausted");
}
