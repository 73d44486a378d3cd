// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::interpret_and_return_stdout;

#[rstest]
#[case("Tommy was a lovestruck ladykiller\nSay Tommy\n", "100")]
#[case("My dreams were ice cold\nSay my dreams\n", "34")]
#[case("Desire is a lovestruck ladykiller\nSay Desire\n", "100")]
#[case("The fire was burning\nSay the fire\n", "7")]
#[case("The zero is tired's\nSay the zero\n", "6")]
#[case("The ten is aaaaaaaaaa\nSay the ten\n", "0")]
#[case("Tommy was a #1 hit\nSay Tommy\n", "13")]
#[case("My love is 100% real\nSay my love\n", "4")]
#[case("Tommy was a \"rock star\nSay Tommy\n", "144")]
#[case("Tommy was a guy who says hi (x) there\nSay Tommy\n", "133425")]
#[case("Tommy was (the) one\nSay Tommy\n", "3")]
fn poetic_numbers(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(interpret_and_return_stdout(input), vec![expected]);
}

#[rstest]
#[case("The answer is right\nSay the answer\n", "true")]
#[case("The answer is wrong\nSay the answer\n", "false")]
#[case("The answer is nobody\nSay the answer\n", "null")]
#[case("The answer is mysterious\nSay the answer\n", "mysterious")]
fn poetic_types(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(interpret_and_return_stdout(input), vec![expected]);
}

#[test]
fn says_keeps_the_text() {
    let output = interpret_and_return_stdout("My song says Hello, world! (not this)\nSay my song\n");
    assert_eq!(output, vec!["Hello, world!"]);
}
