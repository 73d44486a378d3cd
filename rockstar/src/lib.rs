// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod ast;
mod config;
mod console;
mod environment;
mod error;
mod interpreter;
mod lexer;
mod parser;
mod poetic;
mod run;
mod util;
mod value;

pub use self::{
    ast::*,
    config::{ConfigRoot, ConfigSectionLog, ConfigSectionRun},
    console::{BufferConsole, Console, StdConsole},
    environment::{Binding, CanonicalName, Environment, EnvironmentRef, Function},
    error::{RockstarError, RuntimeError},
    interpreter::{DEFAULT_CALL_DEPTH_LIMIT, Interpreter, RuntimeResult},
    lexer::{Article, Keyword, Lexer, LexerError, LexerErrorKind, Punctuator, Token, TokenKind, parse_number_literal},
    parser::{ParseError, ParseResult, Parser},
    poetic::poetic_number,
    run::{parse, run, RunOutcome},
    util::{FileLocation, FileRange, Ranged, SourceCode},
    value::{Value, ValueError, ValueType},
};
