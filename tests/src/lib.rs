// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use rockstar::{run, RockstarError};

pub fn interpret_and_return_stdout(input: &str) -> Vec<String> {
    interpret_with_input(input, "")
}

/// Runs `input` with `stdin` as the lines `Listen` reads, asserting that it
/// finishes without errors.
pub fn interpret_with_input(input: &str, stdin: &str) -> Vec<String> {
    let outcome = run(input, stdin.as_bytes());

    if let Some(error) = &outcome.error {
        panic!("Program failed with {}::{}: {error}\nOutput so far: {:#?}", error.category(), error.name(), outcome.output);
    }

    outcome.output
}

/// Runs `input`, expecting it to fail, and returns the error next to what was
/// printed before it.
pub fn interpret_error(input: &str) -> (Vec<String>, RockstarError) {
    let outcome = run(input, "".as_bytes());

    match outcome.error {
        Some(error) => (outcome.output, error),
        None => panic!("Program succeeded with output {:#?}", outcome.output),
    }
}
