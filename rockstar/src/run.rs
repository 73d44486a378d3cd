// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::io::BufRead;

use crate::{BufferConsole, Interpreter, Lexer, Parser, Program, RockstarError, SourceCode};

/// What a program printed, and why it stopped early if it did.
#[derive(Debug)]
pub struct RunOutcome {
    pub output: Vec<String>,
    pub error: Option<RockstarError>,
}

impl RunOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Lexes and parses a program without executing it.
pub fn parse(source_code: &SourceCode) -> Result<Program, RockstarError> {
    let tokens = Lexer::new(source_code).tokenize()?;
    let program = Parser::new(source_code, &tokens).parse_program()?;
    Ok(program)
}

/// Runs `source` as a program with a fresh global environment, reading `Listen`
/// input from `input`. Output written before a runtime error is kept.
pub fn run(source: &str, input: impl BufRead) -> RunOutcome {
    let source_code = SourceCode::new("<input>", source);

    let program = match parse(&source_code) {
        Ok(program) => program,
        Err(error) => {
            return RunOutcome {
                output: Vec::new(),
                error: Some(error),
            };
        }
    };

    let mut interpreter = Interpreter::new(BufferConsole::new(input));
    let result = interpreter.execute_program(&program);

    RunOutcome {
        output: interpreter.into_console().into_output(),
        error: result.err().map(RockstarError::from),
    }
}
