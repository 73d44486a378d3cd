// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::interpret_error;

#[rstest]
#[case("Say \"unfinished\n", "LexError", "UnterminatedString")]
#[case("Say 1 (never closed\n", "LexError", "UnterminatedComment")]
#[case("Put 5 in X\n", "SyntaxError", "ExpectedToken")]
#[case("Put 5 into\n", "SyntaxError", "ExpectedToken")]
#[case("Give back 5\n", "SyntaxError", "ReturnOutsideFunction")]
#[case("Break it down\n", "SyntaxError", "LoopControlOutsideLoop")]
#[case("Say it\n", "RuntimeError", "UnresolvedPronoun")]
#[case("Say X\n", "RuntimeError", "UnknownVariable")]
#[case("Put \"ab\" into X\nPut 1 into Y\nSay X minus Y\n", "RuntimeError", "TypeMismatch")]
#[case("Say 5 over 0\n", "RuntimeError", "DivisionByZero")]
#[case("Put 1 into X\nSay X taking 2\n", "RuntimeError", "UndefinedFunction")]
fn error_kinds(#[case] input: &str, #[case] category: &str, #[case] name: &str) {
    let (_, error) = interpret_error(input);
    assert_eq!((error.category(), error.name()), (category, name), "{error}");
}

#[test]
fn syntax_errors_prevent_any_output() {
    let (output, error) = interpret_error("Say 1\nSay 2\nPut 3 in X\n");
    assert_eq!(output, Vec::<String>::new());
    assert_eq!(error.range().start().line(), 2);
}

#[test]
fn runtime_errors_keep_earlier_output() {
    let (output, error) = interpret_error("Say 1\nSay 2\nSay 3 over 0\nSay 4\n");
    assert_eq!(output, vec!["1", "2"]);
    assert_eq!(error.range().start().line(), 2);
}
