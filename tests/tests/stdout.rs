// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::interpret_and_return_stdout;

#[rstest]
#[case(
    "Say \"Hello San Francisco\"\n",
    &["Hello San Francisco"],
)]
#[case(
    "Shout 1\nWhisper 2\nScream 3\nSay 4\n",
    &["1", "2", "3", "4"],
)]
#[case(
    "Put 5 into My Heart\nSay my heart\nSay MY HEART\nSay the heart\n",
    &["5", "5", "5"],
)]
#[case(
    "Put 5 into X\nSay it\n",
    &["5"],
)]
#[case(
    "Put \"ab\" into X\nPut 1 into Y\nSay X plus Y\n",
    &["ab1"],
)]
#[case(
    "Say 2 plus 3 times 4\nSay 10 minus 4 over 2\nSay 1 over 4\n",
    &["14", "8", "0.25"],
)]
#[case(
    "Say 1 with 2\nSay 5 without 7\nSay 3 of 3\nSay 9 by 3\n",
    &["3", "-2", "9", "3"],
)]
#[case(
    "Say true\nSay lies\nSay nothing\nSay mysterious\nSay 0 minus 0\n",
    &["true", "false", "null", "mysterious", "0"],
)]
#[case(
    "Put 0 into X\nWhile X is less than 3\nBuild X up\n\nSay X\n",
    &["3"],
)]
#[case(
    "Put 3 into the counter\nUntil the counter is 0\nSay the counter\nKnock the counter down\n\nSay \"done\"\n",
    &["3", "2", "1", "done"],
)]
#[case(
    "Put 1 into X\nBuild X up, up, up\nSay X\n",
    &["4"],
)]
#[case(
    "Say 3 is 3\nSay 3 ain't 3\nSay \"b\" is higher than \"a\"\nSay 2 is as big as 3\n",
    &["true", "false", "true", "false"],
)]
fn interpret_and_return_stdout_tests(#[case] input: &str, #[case] expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|x| x.to_string()).collect();
    assert_eq!(interpret_and_return_stdout(input), expected);
}

#[rstest]
#[case("Put 5 into X\nIf X is 5\nSay \"five\"\nElse\nSay \"other\"\n\nSay \"after\"\n", &["five", "after"])]
#[case("Put 6 into X\nIf X is 5\nSay \"five\"\nElse\nSay \"other\"\n\nSay \"after\"\n", &["other", "after"])]
#[case("Put 6 into X\nIf X is 5\nSay \"five\"\n\nSay \"after\"\n", &["after"])]
fn conditionals(#[case] input: &str, #[case] expected: &[&str]) {
    assert_eq!(interpret_and_return_stdout(input), expected);
}

#[test]
fn blank_line_closes_one_level() {
    let program = concat!(
        "Put 0 into X\n",
        "While X is less than 2\n",
        "Build X up\n",
        "If X is 1\n",
        "Say \"one\"\n",
        "\n",
        "Say \"loop\"\n",
        "\n",
        "Say \"end\"\n",
    );

    assert_eq!(interpret_and_return_stdout(program), vec!["one", "loop", "loop", "end"]);
}

#[test]
fn comments_are_ignored() {
    let program = concat!(
        "(this whole line is a comment)\n",
        "Put 1 into X (the first value)\n",
        "Say X\n",
    );

    assert_eq!(interpret_and_return_stdout(program), vec!["1"]);
}

#[test]
fn runs_are_deterministic() {
    let program = "Put 0 into X\nWhile X is less than 5\nBuild X up\nSay X times X\n\n";
    assert_eq!(interpret_and_return_stdout(program), interpret_and_return_stdout(program));
}
