// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use strum::AsRefStr;
use thiserror::Error;

use crate::{CanonicalName, FileRange, LexerError, ParseError, ValueError};

#[derive(Debug, Error, AsRefStr)]
pub enum RuntimeError {
    #[error("Pronoun used before any variable was named")]
    UnresolvedPronoun { range: FileRange },

    #[error("Unknown variable `{name}`")]
    UnknownVariable { name: CanonicalName, range: FileRange },

    #[error("{message}")]
    TypeMismatch { message: String, range: FileRange },

    #[error("Division by zero")]
    DivisionByZero { range: FileRange },

    #[error("Function `{name}` takes {expected} argument(s), but {actual} were given")]
    ArityMismatch {
        name: CanonicalName,
        expected: usize,
        actual: usize,
        range: FileRange,
    },

    #[error("Calling `{name}` would nest more than {limit} calls")]
    CallDepthExceeded {
        name: CanonicalName,
        limit: usize,
        range: FileRange,
    },

    #[error("`{name}` is not a function")]
    UndefinedFunction { name: CanonicalName, range: FileRange },

    #[error("No more input to listen to")]
    InputExhausted { range: FileRange },

    #[error("Console failure: {source}")]
    Console {
        #[source]
        source: std::io::Error,
        range: FileRange,
    },
}

impl RuntimeError {
    pub(crate) fn from_value_error(error: ValueError, range: FileRange) -> Self {
        match error {
            ValueError::DivisionByZero => Self::DivisionByZero { range },
            error => Self::TypeMismatch { message: error.to_string(), range },
        }
    }

    #[must_use]
    pub fn range(&self) -> FileRange {
        match self {
            Self::UnresolvedPronoun { range } => *range,
            Self::UnknownVariable { range, .. } => *range,
            Self::TypeMismatch { range, .. } => *range,
            Self::DivisionByZero { range } => *range,
            Self::ArityMismatch { range, .. } => *range,
            Self::CallDepthExceeded { range, .. } => *range,
            Self::UndefinedFunction { range, .. } => *range,
            Self::InputExhausted { range } => *range,
            Self::Console { range, .. } => *range,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}

/// Anything that stops a program, from lexing to execution.
#[derive(Debug, Error)]
pub enum RockstarError {
    #[error("{0}")]
    Lex(#[from] LexerError),

    #[error("{0}")]
    Syntax(#[from] ParseError),

    #[error("{0}")]
    Runtime(#[from] RuntimeError),
}

impl RockstarError {
    #[must_use]
    pub fn range(&self) -> FileRange {
        match self {
            Self::Lex(error) => error.location.as_zero_range(),
            Self::Syntax(error) => error.range(),
            Self::Runtime(error) => error.range(),
        }
    }

    /// The kind of error, e.g. `UnterminatedString` or `DivisionByZero`.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Lex(error) => error.kind.name(),
            Self::Syntax(error) => error.name(),
            Self::Runtime(error) => error.name(),
        }
    }

    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Lex(..) => "LexError",
            Self::Syntax(..) => "SyntaxError",
            Self::Runtime(..) => "RuntimeError",
        }
    }
}
