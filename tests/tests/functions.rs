// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::{interpret_and_return_stdout, interpret_error};

#[rstest]
#[case(
    "Midnight takes Your heart and Your soul\nGive back your heart plus your soul\n\nSay Midnight taking 3, 4\n",
    &["7"],
)]
#[case(
    "Double takes the number\nGive back the number times 2\n\nPut Double taking 4 into X\nSay Double taking X\n",
    &["16"],
)]
#[case(
    "Shouter takes the line\nSay the line\n\nShouter taking \"rock\"\nShouter taking \"roll\"\n",
    &["rock", "roll"],
)]
#[case(
    "Noise takes the x\nPut the x into the y\n\nSay Noise taking 1\n",
    &["mysterious"],
)]
fn calls(#[case] input: &str, #[case] expected: &[&str]) {
    assert_eq!(interpret_and_return_stdout(input), expected);
}

#[test]
fn recursion() {
    let program = concat!(
        "Countdown takes the number\n",
        "If the number is 0\n",
        "Give back 0\n",
        "\n",
        "Say the number\n",
        "Give back Countdown taking the number minus 1\n",
        "\n",
        "Countdown taking 3\n",
    );

    assert_eq!(interpret_and_return_stdout(program), vec!["3", "2", "1"]);
}

#[test]
fn locals_stay_inside_the_call() {
    let program = concat!(
        "Put 1 into the value\n",
        "Change takes the amount\n",
        "Put the amount into the value\n",
        "Give back the value\n",
        "\n",
        "Say Change taking 2\n",
        "Say the value\n",
    );

    assert_eq!(interpret_and_return_stdout(program), vec!["2", "1"]);
}

#[test]
fn functions_read_where_they_were_defined() {
    let program = concat!(
        "Put 1 into the value\n",
        "Show takes the x\n",
        "Give back the value\n",
        "\n",
        "Wrapper takes the value\n",
        "Give back Show taking 0\n",
        "\n",
        "Say Wrapper taking 99\n",
    );

    assert_eq!(interpret_and_return_stdout(program), vec!["1"]);
}

#[test]
fn deep_recursion_stops_at_the_call_depth_limit() {
    let program = concat!(
        "Say 1\n",
        "Forever takes the x\n",
        "Give back Forever taking the x\n",
        "\n",
        "Say Forever taking 1\n",
    );

    // Rockstar calls nest several Rust frames deep, more than the test thread's stack holds.
    let (output, error) = std::thread::Builder::new()
        .stack_size(256 * 1024 * 1024)
        .spawn(move || interpret_error(program))
        .unwrap()
        .join()
        .unwrap();

    assert_eq!(output, vec!["1"]);
    assert_eq!((error.category(), error.name()), ("RuntimeError", "CallDepthExceeded"));
    assert_eq!(error.range().start().line(), 2);
}

#[test]
fn arity_mismatch() {
    let (output, error) = interpret_error("Pair takes the x and the y\nGive back the x\n\nSay 1\nSay Pair taking 1\n");
    assert_eq!(output, vec!["1"]);
    assert_eq!(error.category(), "RuntimeError");
    assert_eq!(error.name(), "ArityMismatch");
}
